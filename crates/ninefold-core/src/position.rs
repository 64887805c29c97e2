//! In-range cell positions.

/// A cell position on the 9×9 board, with `x` and `y` in 0-8.
///
/// `y` counts rows top to bottom and `x` counts columns left to right, so
/// `Position::new(x, y)` addresses row `y`, column `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is 9 or greater.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Column index (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Row index (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Index of the containing 3×3 box (0-8, left to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Row-major index into an 81-element array.
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Whether two positions share a row, a column, or a 3×3 box.
    ///
    /// A position shares a unit with itself.
    #[must_use]
    pub const fn shares_unit(self, other: Self) -> bool {
        self.x == other.x || self.y == other.y || self.box_index() == other.box_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_the_board_row_major() {
        assert_eq!(Position::ALL.len(), 81);
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[8], Position::new(8, 0));
        assert_eq!(Position::ALL[9], Position::new(0, 1));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
    }

    #[test]
    fn box_index_follows_block_layout() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(4, 1).box_index(), 1);
        assert_eq!(Position::new(8, 2).box_index(), 2);
        assert_eq!(Position::new(2, 4).box_index(), 3);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn shares_unit_matches_rows_columns_and_boxes() {
        let center = Position::new(4, 4);
        assert!(center.shares_unit(center));
        assert!(center.shares_unit(Position::new(0, 4))); // same row
        assert!(center.shares_unit(Position::new(4, 8))); // same column
        assert!(center.shares_unit(Position::new(3, 5))); // same box
        assert!(!center.shares_unit(Position::new(0, 0)));
        assert!(!center.shares_unit(Position::new(8, 0)));
    }

    #[test]
    fn unit_of_a_cell_spans_21_positions() {
        let selected = Position::new(4, 4);
        let count = Position::ALL
            .iter()
            .filter(|pos| pos.shares_unit(selected))
            .count();
        // 9 (row) + 8 (rest of column) + 4 (box cells outside both)
        assert_eq!(count, 21);
    }
}
