//! Core domain types for the ninefold board.
//!
//! This crate holds everything the board controller, the render engine, and
//! the puzzle-service client share: [`Digit`], [`Position`], [`Selection`],
//! the 81-cell [`DigitGrid`] with its wire format, and the board geometry in
//! [`layout`]. It deliberately has no UI or I/O dependencies so the types can
//! be exercised in plain unit tests.

pub mod layout;

mod digit;
mod grid;
mod position;
mod selection;

pub use digit::Digit;
pub use grid::{DigitGrid, ParseGridError};
pub use position::Position;
pub use selection::Selection;
