use arboard::Clipboard;
use firetrap::action_log::{Action, ActionLog};
use firetrap::config::Config;
use firetrap::save_state::SaveState;
use firetrap::settings::Settings;
use firetrap::{Actor, EnclosureDetector, Enemy, FurnaceEngine, FurnaceEvent};
use macroquad::audio::{load_sound, play_sound, PlaySoundParams, Sound};
use macroquad::prelude::*;
use std::collections::HashSet;

/// Game state for one session
struct GameState {
    config: Config,
    engine: FurnaceEngine,
    player: Actor,
    enemies: Vec<Enemy>,
    settings: Settings,
    action_log: ActionLog,
    ignite_sound: Option<Sound>,
}

impl GameState {
    fn new(config: Config) -> Self {
        let detector = EnclosureDetector::with_cell_size(
            config.field.width,
            config.field.height,
            config.field.cell_size,
        );
        let engine = FurnaceEngine::new(
            detector,
            config.furnace.tick_interval,
            config.furnace.damage_per_tick,
            config.furnace.proximity,
        );

        let player = Actor::new(
            config.field.width / 2.0,
            config.field.height / 2.0,
            config.field.cell_size * config.player.size_ratio,
            config.player.speed,
        );

        let settings = Settings::load_from_file(&config.files.settings_path);

        let mut state = GameState {
            config,
            engine,
            player,
            enemies: Vec::new(),
            settings,
            action_log: ActionLog::new(),
            ignite_sound: None,
        };
        for _ in 0..state.config.enemies.count {
            state.spawn_enemy();
        }
        state
    }

    fn spawn_enemy(&mut self) {
        let x = rand::gen_range(0.0, self.config.field.width);
        let y = rand::gen_range(0.0, self.config.field.height);
        self.enemies.push(Enemy::new(
            x,
            y,
            self.config.field.cell_size * self.config.enemies.size_ratio,
            self.config.enemies.speed,
            self.config.enemies.hp,
        ));
    }

    fn handle_furnace_event(&mut self, event: Option<FurnaceEvent>) {
        match event {
            Some(FurnaceEvent::Ignited) => {
                self.action_log.log(Action::FurnaceIgnited {
                    enclosed_count: self.engine.enclosed_cells().len(),
                });
                if let Some(sound) = &self.ignite_sound {
                    play_sound(
                        sound,
                        PlaySoundParams {
                            looped: false,
                            volume: self.settings.effective_volume(),
                        },
                    );
                }
            }
            Some(FurnaceEvent::Extinguished) => {
                self.action_log.log(Action::FurnaceExtinguished);
            }
            None => {}
        }
    }

    fn handle_click(&mut self, mouse_x: f32, mouse_y: f32) {
        let grid = self.engine.detector().grid();
        let (cell_x, cell_y) = grid.world_to_cell(mouse_x, mouse_y);
        if !grid.in_bounds(cell_x, cell_y) {
            return;
        }
        let (wx, wy) = grid.cell_center(cell_x, cell_y);

        if is_mouse_button_pressed(MouseButton::Left) {
            // No stacking, and never brick the player in place
            if self.engine.cell_has_brick(wx, wy) {
                return;
            }
            if self.player.current_cell(grid) == (cell_x, cell_y) {
                return;
            }
            self.action_log.log(Action::PlaceBrick { x: wx, y: wy });
            let event = self.engine.place_brick(wx, wy);
            self.handle_furnace_event(event);
        } else if is_mouse_button_pressed(MouseButton::Right) {
            if !self.engine.cell_has_brick(wx, wy) {
                return;
            }
            self.action_log.log(Action::RemoveBrick { x: wx, y: wy });
            let event = self.engine.remove_brick(wx, wy);
            self.handle_furnace_event(event);
        }
    }

    fn move_player(&mut self, delta_time: f32) {
        let mut dx: f32 = 0.0;
        let mut dy: f32 = 0.0;
        if is_key_down(KeyCode::W) {
            dy -= 1.0;
        }
        if is_key_down(KeyCode::S) {
            dy += 1.0;
        }
        if is_key_down(KeyCode::A) {
            dx -= 1.0;
        }
        if is_key_down(KeyCode::D) {
            dx += 1.0;
        }
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        let length = (dx * dx + dy * dy).sqrt();
        let step = self.player.speed * delta_time;
        let half = self.player.size / 2.0;
        self.player.fpos_x = (self.player.fpos_x + dx / length * step)
            .clamp(half, self.config.field.width - half);
        self.player.fpos_y = (self.player.fpos_y + dy / length * step)
            .clamp(half, self.config.field.height - half);
    }

    fn update(&mut self, delta_time: f32) {
        self.move_player(delta_time);

        // Wander: idle enemies pick a fresh random destination
        for enemy in &mut self.enemies {
            if enemy.update(delta_time) {
                let dest_x = rand::gen_range(0.0, self.config.field.width);
                let dest_y = rand::gen_range(0.0, self.config.field.height);
                enemy.actor.set_destination(dest_x, dest_y);
            }
        }

        self.engine.update(delta_time, &mut self.enemies);

        // Cull the burned, keep the population up
        let mut slain = Vec::new();
        self.enemies.retain(|enemy| {
            if enemy.is_dead() {
                slain.push((enemy.actor.fpos_x, enemy.actor.fpos_y));
                false
            } else {
                true
            }
        });
        for (x, y) in slain {
            self.action_log.log(Action::EnemySlain { x, y });
        }
        while self.enemies.len() < self.config.enemies.count {
            self.spawn_enemy();
        }
    }

    fn adjust_volume(&mut self, delta: f32) {
        self.settings
            .set_master_volume(self.settings.master_volume + delta);
        self.action_log.log(Action::SetVolume {
            volume: self.settings.master_volume,
        });
        if let Err(e) = self.settings.save_to_file(&self.config.files.settings_path) {
            eprintln!("{}", e);
        }
    }

    fn save_game(&mut self) {
        let state = SaveState::from_game(self.engine.bricks(), &self.enemies);
        match state.save_to_file(&self.config.files.save_path) {
            Ok(()) => {
                println!("Game saved to {}", self.config.files.save_path);
                self.action_log.log(Action::SaveGame);
            }
            Err(e) => eprintln!("{}", e),
        }
    }

    fn load_game(&mut self) {
        match SaveState::load_from_file(&self.config.files.save_path) {
            Ok(state) => {
                self.enemies = state.restore_enemies();
                let event = self.engine.set_bricks(state.restore_bricks());
                self.handle_furnace_event(event);
                println!("Game loaded from {}", self.config.files.save_path);
                self.action_log.log(Action::LoadGame);
            }
            Err(e) => eprintln!("{}", e),
        }
    }

    /// ASCII snapshot of the field: ■ brick, x enclosed, s player,
    /// e enemy, □ free
    fn field_to_string(&self) -> String {
        let grid = self.engine.detector().grid();

        let enclosed: HashSet<(i32, i32)> = self
            .engine
            .enclosed_cells()
            .iter()
            .map(|&(wx, wy)| grid.world_to_cell(wx, wy))
            .collect();
        let bricked: HashSet<(i32, i32)> = self
            .engine
            .bricks()
            .iter()
            .map(|&(wx, wy)| grid.world_to_cell(wx, wy))
            .collect();
        let enemy_cells: HashSet<(i32, i32)> = self
            .enemies
            .iter()
            .map(|enemy| enemy.actor.current_cell(grid))
            .collect();
        let player_cell = self.player.current_cell(grid);

        let mut result = String::new();
        for y in 0..grid.rows {
            for x in 0..grid.cols {
                let symbol = if (x, y) == player_cell {
                    's'
                } else if bricked.contains(&(x, y)) {
                    '■'
                } else if enemy_cells.contains(&(x, y)) {
                    'e'
                } else if enclosed.contains(&(x, y)) {
                    'x'
                } else {
                    '□'
                };
                result.push(symbol);
            }
            result.push('\n');
        }
        result
    }

    fn copy_to_clipboard(&self) {
        let field_string = self.field_to_string();
        match Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(&field_string) {
                    println!("Failed to copy to clipboard: {}", e);
                } else {
                    println!("Field snapshot copied to clipboard!");
                    // Keep clipboard alive for a moment so clipboard managers
                    // can capture it
                    std::thread::sleep(std::time::Duration::from_millis(100));
                }
            }
            Err(e) => {
                println!("Failed to access clipboard: {}", e);
            }
        }
    }

    fn draw(&self) {
        clear_background(Color::from_rgba(
            self.config.visual.background_r,
            self.config.visual.background_g,
            self.config.visual.background_b,
            255,
        ));

        let grid = self.engine.detector().grid();
        let cell = grid.cell_size;

        // Trapped floor burns orange
        for &(wx, wy) in self.engine.enclosed_cells() {
            draw_rectangle(
                wx - cell / 2.0,
                wy - cell / 2.0,
                cell,
                cell,
                Color::from_rgba(200, 90, 20, 120),
            );
        }

        if self.config.visual.show_grid_lines {
            for x in 0..=grid.cols {
                let px = x as f32 * cell;
                draw_line(px, 0.0, px, grid.rows as f32 * cell, 1.0, DARKGRAY);
            }
            for y in 0..=grid.rows {
                let py = y as f32 * cell;
                draw_line(0.0, py, grid.cols as f32 * cell, py, 1.0, DARKGRAY);
            }
        }

        // Bricks; the ones walling the fire in glow
        let glowing: HashSet<(i32, i32)> = self
            .engine
            .boundary_bricks()
            .iter()
            .map(|&(wx, wy)| grid.world_to_cell(wx, wy))
            .collect();
        for &(wx, wy) in self.engine.bricks() {
            let (cx, cy) = grid.world_to_cell(wx, wy);
            let color = if glowing.contains(&(cx, cy)) {
                Color::from_rgba(255, 170, 60, 255)
            } else {
                Color::from_rgba(150, 80, 70, 255)
            };
            draw_rectangle(
                cx as f32 * cell + 1.0,
                cy as f32 * cell + 1.0,
                cell - 2.0,
                cell - 2.0,
                color,
            );
        }

        for enemy in &self.enemies {
            let (left, top, right, bottom) = enemy.actor.get_bounds();
            draw_rectangle(left, top, right - left, bottom - top, GREEN);
        }

        let (left, top, right, bottom) = self.player.get_bounds();
        draw_rectangle(left, top, right - left, bottom - top, SKYBLUE);

        let status = if self.engine.is_burning() {
            format!("FURNACE LIT ({} cells)", self.engine.enclosed_cells().len())
        } else {
            "furnace cold".to_string()
        };
        let info = format!(
            "{}\nBricks: {}  Enemies: {}  Volume: {:.0}%\nLMB place, RMB remove, WASD move\nC copy field, F5 save, F9 load, -/= volume, M mute, Esc quit",
            status,
            self.engine.bricks().len(),
            self.enemies.len(),
            self.settings.master_volume * 100.0
        );
        draw_text(&info, 10.0, 20.0, 20.0, WHITE);
    }
}

fn window_conf() -> Conf {
    let config = Config::load();
    Conf {
        window_title: config.visual.window_title.clone(),
        window_width: config.field.width as i32,
        window_height: config.field.height as i32,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = Config::load();
    let mut state = GameState::new(config);

    state.ignite_sound = match load_sound(&state.config.audio.ignite_sound_path).await {
        Ok(sound) => Some(sound),
        Err(_) => {
            println!(
                "No ignite sound at {}, running silent",
                state.config.audio.ignite_sound_path
            );
            None
        }
    };

    loop {
        let delta_time = get_frame_time();

        if is_mouse_button_pressed(MouseButton::Left) || is_mouse_button_pressed(MouseButton::Right)
        {
            let (mouse_x, mouse_y) = mouse_position();
            state.handle_click(mouse_x, mouse_y);
        }

        if is_key_pressed(KeyCode::C) {
            state.copy_to_clipboard();
        }
        if is_key_pressed(KeyCode::F5) {
            state.save_game();
        }
        if is_key_pressed(KeyCode::F9) {
            state.load_game();
        }
        if is_key_pressed(KeyCode::Minus) {
            state.adjust_volume(-0.1);
        }
        if is_key_pressed(KeyCode::Equal) {
            state.adjust_volume(0.1);
        }
        if is_key_pressed(KeyCode::M) {
            state.settings.sfx_enabled = !state.settings.sfx_enabled;
            if let Err(e) = state.settings.save_to_file(&state.config.files.settings_path) {
                eprintln!("{}", e);
            }
        }
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        state.update(delta_time);
        state.draw();

        next_frame().await
    }

    if state.config.logging.enable_action_log && !state.action_log.is_empty() {
        match state
            .action_log
            .save_to_file(&state.config.logging.action_log_path)
        {
            Ok(()) => println!(
                "Action log written to {}",
                state.config.logging.action_log_path
            ),
            Err(e) => eprintln!("{}", e),
        }
    }
}
