use crate::Enemy;
use serde::{Deserialize, Serialize};
use std::fs;

/// Save state containing placed bricks and live enemies
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveState {
    /// Brick positions in placement order (world-space centers)
    pub bricks: Vec<BrickSaveData>,
    /// Enemy positions and remaining hit points
    pub enemies: Vec<EnemySaveData>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BrickSaveData {
    pub x: f32,
    pub y: f32,
}

/// Minimal enemy data for saving/loading (no movement state)
#[derive(Debug, Serialize, Deserialize)]
pub struct EnemySaveData {
    pub fpos_x: f32,
    pub fpos_y: f32,
    pub size: f32,
    pub speed: f32,
    pub hp: i32,
}

impl SaveState {
    /// Create a save state from the current bricks and enemies
    pub fn from_game(bricks: &[(f32, f32)], enemies: &[Enemy]) -> Self {
        let bricks_data = bricks
            .iter()
            .map(|&(x, y)| BrickSaveData { x, y })
            .collect();

        let enemies_data = enemies
            .iter()
            .map(|enemy| EnemySaveData {
                fpos_x: enemy.actor.fpos_x,
                fpos_y: enemy.actor.fpos_y,
                size: enemy.actor.size,
                speed: enemy.actor.speed,
                hp: enemy.hp,
            })
            .collect();

        SaveState {
            bricks: bricks_data,
            enemies: enemies_data,
        }
    }

    /// Save to file
    pub fn save_to_file(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize save state: {}", e))?;

        fs::write(path, json)
            .map_err(|e| format!("Failed to write save file: {}", e))?;

        Ok(())
    }

    /// Load from file
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let json = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read save file: {}", e))?;

        let save_state: SaveState = serde_json::from_str(&json)
            .map_err(|e| format!("Failed to parse save file: {}", e))?;

        Ok(save_state)
    }

    /// Restore the brick list in its original placement order
    pub fn restore_bricks(&self) -> Vec<(f32, f32)> {
        self.bricks.iter().map(|b| (b.x, b.y)).collect()
    }

    /// Restore enemies from save state
    pub fn restore_enemies(&self) -> Vec<Enemy> {
        self.enemies
            .iter()
            .map(|data| Enemy::new(data.fpos_x, data.fpos_y, data.size, data.speed, data.hp))
            .collect()
    }
}
