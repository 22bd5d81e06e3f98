use crate::Grid;
use std::collections::VecDeque;

/// Default cell edge length in world units
pub const DEFAULT_CELL_SIZE: f32 = 32.0;

/// Neighbor probe order: up, down, left, right
const NEIGHBORS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Result of one enclosure query.
#[derive(Debug, Clone, PartialEq)]
pub struct EnclosureResult {
    /// True iff at least one floor cell is sealed off from the rim
    pub has_enclosure: bool,
    /// World-space centers of enclosed cells, in row-major cell order
    pub enclosed_cells: Vec<(f32, f32)>,
    /// Original positions of bricks 4-adjacent to an enclosed cell,
    /// in input order, at most one entry per occupied cell
    pub boundary_bricks: Vec<(f32, f32)>,
}

impl EnclosureResult {
    fn empty() -> Self {
        EnclosureResult {
            has_enclosure: false,
            enclosed_cells: Vec::new(),
            boundary_bricks: Vec::new(),
        }
    }
}

/// Detects closed brick loops that trap open floor.
///
/// Holds only the fixed grid; every `detect` call rebuilds its working sets
/// from the brick list it is given, so the detector carries no state between
/// queries and a call can always be safely repeated.
pub struct EnclosureDetector {
    grid: Grid,
}

impl EnclosureDetector {
    /// Create a detector for a field, using the default cell size
    pub fn new(field_width: f32, field_height: f32) -> Self {
        Self::with_cell_size(field_width, field_height, DEFAULT_CELL_SIZE)
    }

    /// Create a detector with an explicit cell size
    pub fn with_cell_size(field_width: f32, field_height: f32, cell_size: f32) -> Self {
        EnclosureDetector {
            grid: Grid::from_field(field_width, field_height, cell_size),
        }
    }

    /// The fixed grid this detector classifies against
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Classify the floor against the given brick positions.
    ///
    /// Bricks mapping outside the grid are ignored. Every unoccupied cell
    /// ends up either reachable from the rim (4-directional, no crossing
    /// occupied cells) or enclosed; the returned boundary lists the bricks
    /// that wall an enclosed cell in.
    pub fn detect(&self, bricks: &[(f32, f32)]) -> EnclosureResult {
        let grid = &self.grid;
        let total = grid.cell_count();
        if total == 0 {
            return EnclosureResult::empty();
        }

        // Occupancy from the surviving in-bounds bricks
        let mut occupied = vec![false; total];
        for &(bx, by) in bricks {
            let (cx, cy) = grid.world_to_cell(bx, by);
            if grid.in_bounds(cx, cy) {
                occupied[grid.get_id(cx, cy) as usize] = true;
            }
        }

        // Flood from every free rim cell. Cells are marked visited on
        // enqueue so each enters the queue at most once.
        let mut visited = vec![false; total];
        let mut queue: VecDeque<i32> = VecDeque::new();
        for y in 0..grid.rows {
            for x in 0..grid.cols {
                if !grid.on_rim(x, y) {
                    continue;
                }
                let id = grid.get_id(x, y);
                if !occupied[id as usize] && !visited[id as usize] {
                    visited[id as usize] = true;
                    queue.push_back(id);
                }
            }
        }

        while let Some(id) = queue.pop_front() {
            let (x, y) = grid.get_coords(id);
            for &(dx, dy) in &NEIGHBORS {
                let (nx, ny) = (x + dx, y + dy);
                if !grid.in_bounds(nx, ny) {
                    continue;
                }
                let nid = grid.get_id(nx, ny);
                if !visited[nid as usize] && !occupied[nid as usize] {
                    visited[nid as usize] = true;
                    queue.push_back(nid);
                }
            }
        }

        // Anything neither occupied nor reached is trapped
        let mut enclosed_cells = Vec::new();
        for y in 0..grid.rows {
            for x in 0..grid.cols {
                let id = grid.get_id(x, y) as usize;
                if !occupied[id] && !visited[id] {
                    enclosed_cells.push(grid.cell_center(x, y));
                }
            }
        }

        let mut boundary_bricks = Vec::new();
        if !enclosed_cells.is_empty() {
            // One boundary entry per occupied cell, first brick in input
            // order wins
            let mut claimed = vec![false; total];
            for &(bx, by) in bricks {
                let (cx, cy) = grid.world_to_cell(bx, by);
                if !grid.in_bounds(cx, cy) {
                    continue;
                }
                let id = grid.get_id(cx, cy) as usize;
                if claimed[id] {
                    continue;
                }
                for &(dx, dy) in &NEIGHBORS {
                    let (nx, ny) = (cx + dx, cy + dy);
                    if !grid.in_bounds(nx, ny) {
                        continue;
                    }
                    let nid = grid.get_id(nx, ny) as usize;
                    if !occupied[nid] && !visited[nid] {
                        claimed[id] = true;
                        boundary_bricks.push((bx, by));
                        break;
                    }
                }
            }
        }

        EnclosureResult {
            has_enclosure: !enclosed_cells.is_empty(),
            enclosed_cells,
            boundary_bricks,
        }
    }
}
