//! Color palette for board rendering.

use crate::Color;

/// Colors used by the render engine.
///
/// Kept independent from any UI toolkit theme so board semantics (the two
/// highlight tints, the stronger selected tint) can be tuned on their own.
/// The defaults reproduce the classic look: black grid and digits on white,
/// a neutral tint for same-value cells, and a blue tint for the selected
/// cell's row, column, and box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardPalette {
    /// Board background, used by the clear pass.
    pub background: Color,
    /// Grid line stroke color.
    pub grid_line: Color,
    /// Digit text color.
    pub digit: Color,
    /// Low-opacity tint for other cells holding the selected cell's value.
    pub same_value_tint: Color,
    /// Low-opacity tint for the selected cell's row, column, and box.
    pub unit_tint: Color,
    /// Stronger tint for the selected cell itself.
    pub selected_tint: Color,
}

impl Default for BoardPalette {
    fn default() -> Self {
        Self {
            background: Color::rgb(255, 255, 255),
            grid_line: Color::rgb(0, 0, 0),
            digit: Color::rgb(0, 0, 0),
            same_value_tint: Color::rgba(100, 91, 97, 77),
            unit_tint: Color::rgba(0, 128, 255, 38),
            selected_tint: Color::rgba(0, 128, 255, 77),
        }
    }
}
