use crate::Grid;

/// Actor represents a dynamic element on the field with precise
/// floating-point positioning
#[derive(Clone, Debug)]
pub struct Actor {
    /// Size of the actor's square area (must be ≤ cell size)
    pub size: f32,

    /// Floating-point position (center of actor's square)
    pub fpos_x: f32,
    pub fpos_y: f32,

    /// Speed in world units per second
    pub speed: f32,

    /// Destination in floating-point coordinates (None if no destination set)
    pub dest_x: Option<f32>,
    pub dest_y: Option<f32>,
}

impl Actor {
    /// Create a new actor at the given floating-point position
    pub fn new(fpos_x: f32, fpos_y: f32, size: f32, speed: f32) -> Self {
        Actor {
            size,
            fpos_x,
            fpos_y,
            speed,
            dest_x: None,
            dest_y: None,
        }
    }

    /// The grid cell containing the actor's center, clamped to the grid
    pub fn current_cell(&self, grid: &Grid) -> (i32, i32) {
        let (cx, cy) = grid.world_to_cell(self.fpos_x, self.fpos_y);
        (cx.max(0).min(grid.cols - 1), cy.max(0).min(grid.rows - 1))
    }

    /// Set the destination for the actor
    pub fn set_destination(&mut self, dest_x: f32, dest_y: f32) {
        self.dest_x = Some(dest_x);
        self.dest_y = Some(dest_y);
    }

    /// Clear the destination
    pub fn clear_destination(&mut self) {
        self.dest_x = None;
        self.dest_y = None;
    }

    /// True if the actor has nowhere to go
    pub fn is_idle(&self) -> bool {
        self.dest_x.is_none()
    }

    /// Move the actor towards its destination (call once per frame)
    /// Returns true if the actor reached its destination
    pub fn update(&mut self, delta_time: f32) -> bool {
        if let (Some(dest_x), Some(dest_y)) = (self.dest_x, self.dest_y) {
            let dx = dest_x - self.fpos_x;
            let dy = dest_y - self.fpos_y;
            let distance = (dx * dx + dy * dy).sqrt();

            // Snap to destination when the remaining distance fits in
            // this frame's movement
            let movement_this_frame = self.speed * delta_time;
            if distance <= movement_this_frame {
                self.fpos_x = dest_x;
                self.fpos_y = dest_y;
                self.clear_destination();
                return true;
            }

            let dir_x = dx / distance;
            let dir_y = dy / distance;

            self.fpos_x += dir_x * movement_this_frame;
            self.fpos_y += dir_y * movement_this_frame;

            false
        } else {
            // No destination set
            true
        }
    }

    /// Get the corners of the actor's square in world coordinates
    pub fn get_bounds(&self) -> (f32, f32, f32, f32) {
        let half_size = self.size / 2.0;
        let left = self.fpos_x - half_size;
        let top = self.fpos_y - half_size;
        let right = self.fpos_x + half_size;
        let bottom = self.fpos_y + half_size;

        (left, top, right, bottom)
    }
}
