use ninefold_core::Digit;

pub mod board_view;
pub mod input;
pub mod sidebar;

/// UI-originated requests, drained and applied by the app after drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A click landed at board-local surface coordinates.
    SelectCell {
        /// Horizontal offset from the board's left edge.
        x: f32,
        /// Vertical offset from the board's top edge.
        y: f32,
    },
    /// A digit key was pressed.
    PressDigit(Digit),
    /// Copy the solution into the working board.
    SolveBoard,
    /// Discard the current puzzle and fetch a fresh one.
    NewBoard,
}
