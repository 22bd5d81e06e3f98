use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Gameplay actions worth replaying a session from
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Action {
    /// Brick placed at world position (x, y)
    PlaceBrick { x: f32, y: f32 },
    /// Brick(s) removed from the cell containing (x, y)
    RemoveBrick { x: f32, y: f32 },
    /// A brick loop closed; enclosed_count trapped cells started burning
    FurnaceIgnited { enclosed_count: usize },
    /// The loop broke and the fire went out
    FurnaceExtinguished,
    /// Enemy died at position (x, y)
    EnemySlain { x: f32, y: f32 },
    /// Master volume changed
    SetVolume { volume: f32 },
    /// Game state written to disk
    SaveGame,
    /// Game state restored from disk
    LoadGame,
}

/// Logged action with timestamp
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggedAction {
    /// Milliseconds since start
    pub timestamp_ms: u64,
    /// The action
    pub action: Action,
}

/// Action logger
pub struct ActionLog {
    start_time: Instant,
    actions: Vec<LoggedAction>,
}

impl ActionLog {
    pub fn new() -> Self {
        ActionLog {
            start_time: Instant::now(),
            actions: Vec::new(),
        }
    }

    /// Log an action with current timestamp
    pub fn log(&mut self, action: Action) {
        let elapsed = self.start_time.elapsed();
        let timestamp_ms = elapsed.as_millis() as u64;

        self.actions.push(LoggedAction {
            timestamp_ms,
            action,
        });
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn actions(&self) -> &[LoggedAction] {
        &self.actions
    }

    /// Write the log to a JSON file
    pub fn save_to_file(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(&self.actions)
            .map_err(|e| format!("Failed to serialize action log: {}", e))?;

        std::fs::write(path, json)
            .map_err(|e| format!("Failed to write action log: {}", e))?;

        Ok(())
    }
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new()
    }
}
