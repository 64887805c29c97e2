//! Render engine for the ninefold board.
//!
//! [`RenderEngine::render`] is a pure function of `(board, selection)`: it
//! emits an ordered [`DrawCommand`] list for a fixed 450×450 surface and
//! never touches the state it reads. The ordering is part of the contract,
//! since later commands overpaint earlier ones (that is how the highlight
//! layers end up tinting the digits below them), so the list can be
//! unit-tested without any real rendering surface and replayed verbatim by
//! the UI.

mod command;
mod engine;
mod palette;

pub use command::{Color, DrawCommand, Point, Rect};
pub use engine::RenderEngine;
pub use palette::BoardPalette;
