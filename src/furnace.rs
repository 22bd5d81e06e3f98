use crate::{EnclosureDetector, EnclosureResult, Enemy};

/// Enclosure state transition caused by a brick edit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FurnaceEvent {
    /// Bricks closed a loop; the trapped area starts burning
    Ignited,
    /// The loop broke; the fire goes out
    Extinguished,
}

/// Rule engine owning the live brick list.
///
/// Runs the enclosure detector once per brick edit (never per frame) and
/// turns the enclosure transition into furnace state: while a loop is
/// closed, enemies near any trapped cell take damage on a fixed tick.
pub struct FurnaceEngine {
    detector: EnclosureDetector,
    bricks: Vec<(f32, f32)>,
    result: EnclosureResult,
    tick_interval: f32,
    damage_per_tick: i32,
    /// Max distance from an enclosed cell center at which damage applies
    proximity: f32,
    tick_timer: f32,
}

impl FurnaceEngine {
    pub fn new(
        detector: EnclosureDetector,
        tick_interval: f32,
        damage_per_tick: i32,
        proximity: f32,
    ) -> Self {
        let result = detector.detect(&[]);
        FurnaceEngine {
            detector,
            bricks: Vec::new(),
            result,
            tick_interval,
            damage_per_tick,
            proximity,
            tick_timer: 0.0,
        }
    }

    pub fn detector(&self) -> &EnclosureDetector {
        &self.detector
    }

    pub fn bricks(&self) -> &[(f32, f32)] {
        &self.bricks
    }

    pub fn is_burning(&self) -> bool {
        self.result.has_enclosure
    }

    /// Centers of the trapped cells (empty while no loop is closed)
    pub fn enclosed_cells(&self) -> &[(f32, f32)] {
        &self.result.enclosed_cells
    }

    /// Bricks the rendering layer should draw glowing
    pub fn boundary_bricks(&self) -> &[(f32, f32)] {
        &self.result.boundary_bricks
    }

    /// True if some brick occupies the cell containing the given point
    pub fn cell_has_brick(&self, wx: f32, wy: f32) -> bool {
        let grid = self.detector.grid();
        let cell = grid.world_to_cell(wx, wy);
        self.bricks
            .iter()
            .any(|&(bx, by)| grid.world_to_cell(bx, by) == cell)
    }

    /// Place a brick and re-run detection
    pub fn place_brick(&mut self, wx: f32, wy: f32) -> Option<FurnaceEvent> {
        self.bricks.push((wx, wy));
        self.refresh()
    }

    /// Remove every brick in the cell containing the given point.
    /// Returns None without re-detecting when the cell was empty.
    pub fn remove_brick(&mut self, wx: f32, wy: f32) -> Option<FurnaceEvent> {
        let grid = self.detector.grid();
        let cell = grid.world_to_cell(wx, wy);
        let before = self.bricks.len();
        self.bricks
            .retain(|&(bx, by)| grid.world_to_cell(bx, by) != cell);
        if self.bricks.len() == before {
            return None;
        }
        self.refresh()
    }

    /// Replace the whole brick list (save-state restore)
    pub fn set_bricks(&mut self, bricks: Vec<(f32, f32)>) -> Option<FurnaceEvent> {
        self.bricks = bricks;
        self.refresh()
    }

    fn refresh(&mut self) -> Option<FurnaceEvent> {
        let was_burning = self.result.has_enclosure;
        self.result = self.detector.detect(&self.bricks);
        match (was_burning, self.result.has_enclosure) {
            (false, true) => {
                self.tick_timer = 0.0;
                Some(FurnaceEvent::Ignited)
            }
            (true, false) => Some(FurnaceEvent::Extinguished),
            _ => None,
        }
    }

    /// True if the point is close enough to a trapped cell to burn
    pub fn in_furnace(&self, wx: f32, wy: f32) -> bool {
        let limit = self.proximity * self.proximity;
        self.result.enclosed_cells.iter().any(|&(cx, cy)| {
            let dx = wx - cx;
            let dy = wy - cy;
            dx * dx + dy * dy <= limit
        })
    }

    /// Advance the damage tick while burning. Returns the number of damage
    /// hits applied this frame (an enemy hit on two elapsed ticks counts
    /// twice).
    pub fn update(&mut self, delta_time: f32, enemies: &mut [Enemy]) -> u32 {
        if !self.result.has_enclosure {
            return 0;
        }

        self.tick_timer += delta_time;
        let mut hits = 0;
        while self.tick_timer >= self.tick_interval {
            self.tick_timer -= self.tick_interval;
            for enemy in enemies.iter_mut() {
                if enemy.is_dead() {
                    continue;
                }
                if self.in_furnace(enemy.actor.fpos_x, enemy.actor.fpos_y) {
                    enemy.apply_damage(self.damage_per_tick);
                    hits += 1;
                }
            }
        }
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond_engine() -> FurnaceEngine {
        // 5x5 grid; a diamond around (2,2) closes the loop
        let detector = EnclosureDetector::with_cell_size(160.0, 160.0, 32.0);
        FurnaceEngine::new(detector, 0.5, 3, 32.0)
    }

    fn close_diamond(engine: &mut FurnaceEngine) -> Option<FurnaceEvent> {
        let centers: Vec<(f32, f32)> = [(2, 1), (2, 3), (1, 2)]
            .iter()
            .map(|&(x, y)| engine.detector().grid().cell_center(x, y))
            .collect();
        for &(x, y) in &centers {
            assert_eq!(engine.place_brick(x, y), None);
        }
        let (lx, ly) = engine.detector().grid().cell_center(3, 2);
        engine.place_brick(lx, ly)
    }

    #[test]
    fn test_ignite_on_closing_brick_only() {
        let mut engine = diamond_engine();
        assert!(!engine.is_burning());
        assert_eq!(close_diamond(&mut engine), Some(FurnaceEvent::Ignited));
        assert!(engine.is_burning());
        assert_eq!(engine.enclosed_cells().len(), 1);
        assert_eq!(engine.boundary_bricks().len(), 4);
    }

    #[test]
    fn test_extinguish_on_removal() {
        let mut engine = diamond_engine();
        close_diamond(&mut engine);
        let (bx, by) = engine.detector().grid().cell_center(2, 1);
        assert_eq!(engine.remove_brick(bx, by), Some(FurnaceEvent::Extinguished));
        assert!(!engine.is_burning());
        assert!(engine.enclosed_cells().is_empty());
    }

    #[test]
    fn test_remove_from_empty_cell_is_noop() {
        let mut engine = diamond_engine();
        close_diamond(&mut engine);
        assert_eq!(engine.remove_brick(0.0, 0.0), None);
        assert!(engine.is_burning());
    }

    #[test]
    fn test_damage_ticks() {
        let mut engine = diamond_engine();
        close_diamond(&mut engine);

        let (tx, ty) = engine.detector().grid().cell_center(2, 2);
        let mut enemies = vec![
            Enemy::new(tx, ty, 20.0, 60.0, 10),
            Enemy::new(8.0, 8.0, 20.0, 60.0, 10), // far outside the trap
        ];

        // Below one interval: nothing happens yet
        assert_eq!(engine.update(0.4, &mut enemies), 0);
        assert_eq!(enemies[0].hp, 10);

        // Crossing the interval fires one tick on the trapped enemy only
        assert_eq!(engine.update(0.2, &mut enemies), 1);
        assert_eq!(enemies[0].hp, 7);
        assert_eq!(enemies[1].hp, 10);

        // A long frame catches up on multiple ticks
        assert_eq!(engine.update(1.0, &mut enemies), 2);
        assert_eq!(enemies[0].hp, 1);
    }

    #[test]
    fn test_no_damage_without_enclosure() {
        let mut engine = diamond_engine();
        let mut enemies = vec![Enemy::new(80.0, 80.0, 20.0, 60.0, 10)];
        assert_eq!(engine.update(10.0, &mut enemies), 0);
        assert_eq!(enemies[0].hp, 10);
    }

    #[test]
    fn test_proximity_threshold() {
        let mut engine = diamond_engine();
        close_diamond(&mut engine);
        let (tx, ty) = engine.detector().grid().cell_center(2, 2);
        // Just inside and just outside the 32.0 radius
        assert!(engine.in_furnace(tx + 31.0, ty));
        assert!(!engine.in_furnace(tx + 33.0, ty));
    }

    #[test]
    fn test_set_bricks_restores_state() {
        let mut engine = diamond_engine();
        let grid = engine.detector().grid().clone();
        let ring: Vec<(f32, f32)> = [(2, 1), (2, 3), (1, 2), (3, 2)]
            .iter()
            .map(|&(x, y)| grid.cell_center(x, y))
            .collect();
        assert_eq!(engine.set_bricks(ring), Some(FurnaceEvent::Ignited));
        assert_eq!(engine.set_bricks(Vec::new()), Some(FurnaceEvent::Extinguished));
    }
}
