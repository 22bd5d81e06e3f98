/// Fixed logical grid overlaying the play field.
///
/// Cells are addressed as (x, y) with x < cols and y < rows, or as flat
/// cell IDs laid out row-major (id = x + y * cols). Dimensions are derived
/// once from the field size and never change; a new field size requires a
/// new grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    pub cols: i32,
    pub rows: i32,
    /// Edge length of one cell in world units
    pub cell_size: f32,
}

impl Grid {
    /// Create a grid covering a field of the given world dimensions.
    /// The last column/row may overhang the field edge (ceiling division).
    pub fn from_field(field_width: f32, field_height: f32, cell_size: f32) -> Self {
        Grid {
            cols: (field_width / cell_size).ceil() as i32,
            rows: (field_height / cell_size).ceil() as i32,
            cell_size,
        }
    }

    /// Check if (x, y) is a valid cell coordinate
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.cols && y >= 0 && y < self.rows
    }

    /// Check if (x, y) lies on the grid's outer rim
    pub fn on_rim(&self, x: i32, y: i32) -> bool {
        x == 0 || x == self.cols - 1 || y == 0 || y == self.rows - 1
    }

    /// Convert (x, y) coordinates to cell ID
    pub fn get_id(&self, x: i32, y: i32) -> i32 {
        x + y * self.cols
    }

    /// Convert cell ID to (x, y) coordinates
    pub fn get_coords(&self, id: i32) -> (i32, i32) {
        (id % self.cols, id / self.cols)
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        (self.cols * self.rows) as usize
    }

    /// Map a world-space point to the cell containing it (floor division).
    /// The result may be out of bounds; callers filter with `in_bounds`.
    pub fn world_to_cell(&self, wx: f32, wy: f32) -> (i32, i32) {
        (
            (wx / self.cell_size).floor() as i32,
            (wy / self.cell_size).floor() as i32,
        )
    }

    /// World-space center point of a cell
    pub fn cell_center(&self, x: i32, y: i32) -> (f32, f32) {
        (
            x as f32 * self.cell_size + self.cell_size / 2.0,
            y as f32 * self.cell_size + self.cell_size / 2.0,
        )
    }
}
