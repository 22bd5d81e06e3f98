use serde::{Deserialize, Serialize};
use std::fs;

/// Persisted user settings, stored next to the game as JSON.
///
/// Kept separate from config.toml: config describes the game, settings
/// remember the user's knobs between sessions. Loaded once at startup and
/// saved explicitly whenever a knob changes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects on/off
    pub sfx_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            master_volume: 0.8,
            sfx_enabled: true,
        }
    }
}

impl Settings {
    /// Load settings from file, or use defaults if file doesn't exist
    /// or fails to parse
    pub fn load_from_file(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Warning: Failed to parse {}: {}", path, e);
                    Settings::default()
                }
            },
            Err(_) => Settings::default(),
        }
    }

    /// Save to file
    pub fn save_to_file(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        fs::write(path, json)
            .map_err(|e| format!("Failed to write settings file: {}", e))?;

        Ok(())
    }

    /// Set master volume, clamped to [0, 1]
    pub fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = volume.clamp(0.0, 1.0);
    }

    /// Volume to hand to the audio layer (zero when sfx are off)
    pub fn effective_volume(&self) -> f32 {
        if self.sfx_enabled {
            self.master_volume
        } else {
            0.0
        }
    }
}
