//! Pointer-driven cell selection.

use crate::{Position, layout};

/// The cell a pointer click landed on, without bounds clamping.
///
/// Clicks outside the 9×9 extent still produce a `Selection`; it is stored
/// like any other but addresses no cell ([`Selection::position`] returns
/// `None`), so downstream consumers treat it as inert rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    row: i32,
    col: i32,
}

impl Selection {
    /// Creates a selection from raw row/column indices.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Maps raw pointer coordinates to the cell under them by integer-dividing
    /// by the cell edge length.
    #[must_use]
    pub fn from_pointer(x: f32, y: f32) -> Self {
        #[expect(clippy::cast_possible_truncation)]
        let row = (y / layout::CELL_SIZE).floor() as i32;
        #[expect(clippy::cast_possible_truncation)]
        let col = (x / layout::CELL_SIZE).floor() as i32;
        Self { row, col }
    }

    /// Raw row index; may lie outside 0-8.
    #[must_use]
    pub const fn row(self) -> i32 {
        self.row
    }

    /// Raw column index; may lie outside 0-8.
    #[must_use]
    pub const fn col(self) -> i32 {
        self.col
    }

    /// The addressed cell, if the selection lies inside the grid.
    #[must_use]
    pub fn position(self) -> Option<Position> {
        let row = u8::try_from(self.row).ok().filter(|row| *row < 9)?;
        let col = u8::try_from(self.col).ok().filter(|col| *col < 9)?;
        Some(Position::new(col, row))
    }
}
