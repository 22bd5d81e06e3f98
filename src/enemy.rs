use crate::Actor;

/// Enemy wandering the field. Movement reuses the shared actor; the game
/// loop hands idle enemies a fresh wander destination so the lib stays
/// deterministic for tests.
#[derive(Clone, Debug)]
pub struct Enemy {
    pub actor: Actor,
    pub hp: i32,
}

impl Enemy {
    pub fn new(fpos_x: f32, fpos_y: f32, size: f32, speed: f32, hp: i32) -> Self {
        Enemy {
            actor: Actor::new(fpos_x, fpos_y, size, speed),
            hp,
        }
    }

    /// Reduce hit points, saturating at zero
    pub fn apply_damage(&mut self, amount: i32) {
        self.hp = (self.hp - amount).max(0);
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    /// Advance movement; returns true when idle (arrived or no destination)
    pub fn update(&mut self, delta_time: f32) -> bool {
        self.actor.update(delta_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_saturates_at_zero() {
        let mut enemy = Enemy::new(50.0, 50.0, 20.0, 60.0, 10);
        enemy.apply_damage(4);
        assert_eq!(enemy.hp, 6);
        assert!(!enemy.is_dead());

        enemy.apply_damage(100);
        assert_eq!(enemy.hp, 0);
        assert!(enemy.is_dead());
    }

    #[test]
    fn test_enemy_walks_to_destination() {
        let mut enemy = Enemy::new(0.0, 0.0, 20.0, 50.0, 10);
        enemy.actor.set_destination(0.0, 25.0);
        assert!(!enemy.update(0.1));
        assert!(enemy.update(1.0));
        assert_eq!(enemy.actor.fpos_y, 25.0);
    }
}
