use ninefold_core::{Digit, DigitGrid, Selection};

/// Result of a placement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PlaceOutcome {
    /// The digit matched the solution and was written to the working board.
    Placed,
    /// The digit was wrong (or the solution has not arrived yet); the error
    /// counter was incremented and the board left untouched.
    Rejected,
    /// Nothing was addressable: no selection, an out-of-range selection, or
    /// an already-filled cell. No state changed.
    Ignored,
}

/// Owns the mutable state of one puzzle instance.
///
/// The controller holds the working board, the solution board (absent until
/// the fetch completes), the current selection, and the error counter. All
/// mutation is gated behind validation: a cell is only ever written when the
/// keyed digit equals the solution value, so every filled cell of the working
/// board agrees with the solution at all times.
///
/// The error counter is monotonically non-decreasing; starting a new puzzle
/// means constructing a new controller.
#[derive(Debug, Clone)]
pub struct BoardController {
    working: DigitGrid,
    solution: Option<DigitGrid>,
    selection: Option<Selection>,
    error_count: u32,
}

impl BoardController {
    /// Creates a controller for a fresh puzzle whose solution is still being
    /// fetched.
    #[must_use]
    pub const fn new(working: DigitGrid) -> Self {
        Self {
            working,
            solution: None,
            selection: None,
            error_count: 0,
        }
    }

    /// Creates a controller with the solution already available.
    #[must_use]
    pub const fn with_solution(working: DigitGrid, solution: DigitGrid) -> Self {
        Self {
            working,
            solution: Some(solution),
            selection: None,
            error_count: 0,
        }
    }

    /// Installs the solution board once the fetch resolves.
    pub fn set_solution(&mut self, solution: DigitGrid) {
        self.solution = Some(solution);
    }

    /// Whether the solution board has arrived.
    #[must_use]
    pub const fn has_solution(&self) -> bool {
        self.solution.is_some()
    }

    /// The working board.
    #[must_use]
    pub const fn board(&self) -> &DigitGrid {
        &self.working
    }

    /// The current selection, if any cell has been clicked yet.
    #[must_use]
    pub const fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Number of rejected placements so far.
    #[must_use]
    pub const fn error_count(&self) -> u32 {
        self.error_count
    }

    /// Replaces the selection with the cell under the pointer coordinates.
    ///
    /// Coordinates are board-local surface units; no clamping is applied, so
    /// clicks outside the grid store an inert out-of-range selection.
    pub fn select_cell(&mut self, x: f32, y: f32) {
        self.selection = Some(Selection::from_pointer(x, y));
    }

    /// Attempts to place `digit` into the selected cell.
    ///
    /// The attempt is a silent no-op when no cell is addressable (nothing
    /// selected, selection out of range, or the cell already filled). With an
    /// addressable empty cell, the digit is written only when it matches the
    /// solution; a mismatch, or a placement attempted before the solution has
    /// arrived, increments the error counter and leaves the board untouched.
    pub fn attempt_place(&mut self, digit: Digit) -> PlaceOutcome {
        let Some(pos) = self.selection.and_then(Selection::position) else {
            return PlaceOutcome::Ignored;
        };
        if self.working.get(pos).is_some() {
            return PlaceOutcome::Ignored;
        }
        if self.solution.as_ref().map(|solution| solution.get(pos)) == Some(Some(digit)) {
            self.working.set(pos, Some(digit));
            PlaceOutcome::Placed
        } else {
            self.error_count += 1;
            PlaceOutcome::Rejected
        }
    }

    /// Copies the solution into the working board.
    ///
    /// Returns `false` (and does nothing) while the solution is absent.
    pub fn reveal_solution(&mut self) -> bool {
        match &self.solution {
            Some(solution) => {
                self.working = solution.clone();
                true
            }
            None => false,
        }
    }
}
