use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub field: FieldConfig,
    #[serde(default)]
    pub furnace: FurnaceConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub enemies: EnemiesConfig,
    #[serde(default)]
    pub visual: VisualConfig,
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct FieldConfig {
    #[serde(default = "default_field_width")]
    pub width: f32,
    #[serde(default = "default_field_height")]
    pub height: f32,
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
}

#[derive(Debug, Deserialize)]
pub struct FurnaceConfig {
    #[serde(default = "default_tick_interval")]
    pub tick_interval: f32,
    #[serde(default = "default_damage_per_tick")]
    pub damage_per_tick: i32,
    /// Damage radius around each trapped cell center; defaults to one cell
    #[serde(default = "default_proximity")]
    pub proximity: f32,
}

#[derive(Debug, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_player_speed")]
    pub speed: f32,
    #[serde(default = "default_player_size_ratio")]
    pub size_ratio: f32,
}

#[derive(Debug, Deserialize)]
pub struct EnemiesConfig {
    #[serde(default = "default_enemy_count")]
    pub count: usize,
    #[serde(default = "default_enemy_speed")]
    pub speed: f32,
    #[serde(default = "default_enemy_size_ratio")]
    pub size_ratio: f32,
    #[serde(default = "default_enemy_hp")]
    pub hp: i32,
}

#[derive(Debug, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default = "default_bg_r")]
    pub background_r: u8,
    #[serde(default = "default_bg_g")]
    pub background_g: u8,
    #[serde(default = "default_bg_b")]
    pub background_b: u8,
    #[serde(default = "default_show_grid_lines")]
    pub show_grid_lines: bool,
}

#[derive(Debug, Deserialize)]
pub struct AudioConfig {
    #[serde(default = "default_ignite_sound_path")]
    pub ignite_sound_path: String,
}

#[derive(Debug, Deserialize)]
pub struct FilesConfig {
    #[serde(default = "default_settings_path")]
    pub settings_path: String,
    #[serde(default = "default_save_path")]
    pub save_path: String,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_enable_action_log")]
    pub enable_action_log: bool,
    #[serde(default = "default_action_log_path")]
    pub action_log_path: String,
}

// Default values
fn default_field_width() -> f32 { 800.0 }
fn default_field_height() -> f32 { 600.0 }
fn default_cell_size() -> f32 { 32.0 }
fn default_tick_interval() -> f32 { 0.5 }
fn default_damage_per_tick() -> i32 { 5 }
fn default_proximity() -> f32 { 32.0 }
fn default_player_speed() -> f32 { 160.0 }
fn default_player_size_ratio() -> f32 { 0.6 }
fn default_enemy_count() -> usize { 4 }
fn default_enemy_speed() -> f32 { 60.0 }
fn default_enemy_size_ratio() -> f32 { 0.5 }
fn default_enemy_hp() -> i32 { 30 }
fn default_window_title() -> String { "Firetrap".to_string() }
fn default_bg_r() -> u8 { 24 }
fn default_bg_g() -> u8 { 24 }
fn default_bg_b() -> u8 { 28 }
fn default_show_grid_lines() -> bool { true }
fn default_ignite_sound_path() -> String { "assets/ignite.wav".to_string() }
fn default_settings_path() -> String { "settings.json".to_string() }
fn default_save_path() -> String { "save.json".to_string() }
fn default_enable_action_log() -> bool { false }
fn default_action_log_path() -> String { "action_log.json".to_string() }

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: default_field_width(),
            height: default_field_height(),
            cell_size: default_cell_size(),
        }
    }
}

impl Default for FurnaceConfig {
    fn default() -> Self {
        Self {
            tick_interval: default_tick_interval(),
            damage_per_tick: default_damage_per_tick(),
            proximity: default_proximity(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: default_player_speed(),
            size_ratio: default_player_size_ratio(),
        }
    }
}

impl Default for EnemiesConfig {
    fn default() -> Self {
        Self {
            count: default_enemy_count(),
            speed: default_enemy_speed(),
            size_ratio: default_enemy_size_ratio(),
            hp: default_enemy_hp(),
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            background_r: default_bg_r(),
            background_g: default_bg_g(),
            background_b: default_bg_b(),
            show_grid_lines: default_show_grid_lines(),
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            ignite_sound_path: default_ignite_sound_path(),
        }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            settings_path: default_settings_path(),
            save_path: default_save_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_action_log: default_enable_action_log(),
            action_log_path: default_action_log_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            furnace: FurnaceConfig::default(),
            player: PlayerConfig::default(),
            enemies: EnemiesConfig::default(),
            visual: VisualConfig::default(),
            audio: AudioConfig::default(),
            files: FilesConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        println!("Loaded configuration from config.toml");
                        config
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config.toml: {}", e);
                        eprintln!("Using default configuration");
                        Config::default()
                    }
                }
            }
            Err(_) => {
                println!("No config.toml found, using default configuration");
                Config::default()
            }
        }
    }
}
