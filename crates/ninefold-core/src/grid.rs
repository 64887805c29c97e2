//! The 81-cell board container and its wire format.

use std::{fmt, str::FromStr};

use crate::{Digit, Position};

/// Errors produced when parsing the 81-character board string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The string does not contain exactly 81 characters.
    #[display("expected 81 board characters, got {len}")]
    BadLength {
        /// Number of characters found.
        len: usize,
    },
    /// A character other than `0`-`9` appeared in the string.
    #[display("invalid board character {ch:?} at offset {offset}")]
    BadCharacter {
        /// Offset of the offending character.
        offset: usize,
        /// The offending character.
        ch: char,
    },
}

/// A 9×9 grid of optional digits, `None` meaning an empty cell.
///
/// Two instances of this type exist per puzzle: the working board the player
/// fills in, and the immutable solution board fetched from the puzzle
/// service. The wire format is a row-major string of 81 digit characters
/// with `0` standing for an empty cell:
///
/// ```
/// use ninefold_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = "3".repeat(81).parse().unwrap();
/// assert_eq!(grid.get(Position::new(8, 8)), Some(Digit::D3));
/// assert_eq!(grid.to_string().len(), 81);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the cell at `pos`.
    pub const fn set(&mut self, pos: Position, value: Option<Digit>) {
        self.cells[pos.index()] = value;
    }

    /// Whether every cell holds a digit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 81];
        let mut count = 0;
        for (offset, ch) in s.chars().enumerate() {
            let Some(value) = ch.to_digit(10) else {
                return Err(ParseGridError::BadCharacter { offset, ch });
            };
            if offset < 81 {
                #[expect(clippy::cast_possible_truncation)]
                let digit = Digit::try_from_value(value as u8);
                cells[offset] = digit;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::BadLength { len: count });
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, "0")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC_PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn parses_row_major_with_zero_as_empty() {
        let grid: DigitGrid = CLASSIC_PUZZLE.parse().unwrap();

        let first_row: Vec<u8> = (0..9)
            .map(|x| grid.get(Position::new(x, 0)).map_or(0, Digit::value))
            .collect();
        assert_eq!(first_row, [5, 3, 0, 0, 7, 0, 0, 0, 0]);

        assert_eq!(grid.get(Position::new(0, 1)), Some(Digit::D6));
        assert_eq!(grid.get(Position::new(8, 8)), Some(Digit::D9));
        assert!(!grid.is_full());
    }

    #[test]
    fn display_round_trips_the_wire_format() {
        let grid: DigitGrid = CLASSIC_PUZZLE.parse().unwrap();
        assert_eq!(grid.to_string(), CLASSIC_PUZZLE);
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            "123".parse::<DigitGrid>(),
            Err(ParseGridError::BadLength { len: 3 })
        );
        let too_long = "0".repeat(82);
        assert_eq!(
            too_long.parse::<DigitGrid>(),
            Err(ParseGridError::BadLength { len: 82 })
        );
    }

    #[test]
    fn rejects_non_digit_characters() {
        let mut bad = "0".repeat(81);
        bad.replace_range(40..41, "x");
        assert_eq!(
            bad.parse::<DigitGrid>(),
            Err(ParseGridError::BadCharacter { offset: 40, ch: 'x' })
        );
    }

    #[test]
    fn set_and_get_are_consistent() {
        let mut grid = DigitGrid::new();
        let pos = Position::new(3, 7);
        assert_eq!(grid.get(pos), None);
        grid.set(pos, Some(Digit::D4));
        assert_eq!(grid.get(pos), Some(Digit::D4));
        grid.set(pos, None);
        assert_eq!(grid.get(pos), None);
    }

    #[test]
    fn full_grid_reports_full() {
        let grid: DigitGrid = "9".repeat(81).parse().unwrap();
        assert!(grid.is_full());
    }
}
