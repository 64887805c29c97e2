//! Shared board geometry.
//!
//! Pointer hit-testing and rendering must agree on the cell edge length, or
//! the visible grid and the selection drift apart. Both sides read the
//! constants defined here and nowhere else.

/// Number of cells along one side of the board.
pub const GRID_CELLS: u8 = 9;

/// Edge length of a single cell, in surface units.
pub const CELL_SIZE: f32 = 50.0;

/// Edge length of the full board (9 cells of 50 units).
pub const BOARD_SIZE: f32 = CELL_SIZE * GRID_CELLS as f32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_is_nine_cells_wide() {
        assert!((BOARD_SIZE - 450.0).abs() < f32::EPSILON);
        assert!((CELL_SIZE * 9.0 - BOARD_SIZE).abs() < f32::EPSILON);
    }
}
