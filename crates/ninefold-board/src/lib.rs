//! Board state controller for ninefold.
//!
//! [`BoardController`] owns the mutable state of one puzzle: the working
//! board, the current selection, and the error counter. It validates every
//! placement against the solution board before mutating anything, so the
//! working board can never disagree with the solution.

mod controller;

pub use controller::{BoardController, PlaceOutcome};
