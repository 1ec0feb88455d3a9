//! The falling-block game core.
//!
//! - [`Grid`] - 10×20 cells, each empty or tagged with the [`ShapeKind`] that filled it
//! - [`Piece`] - an occupancy [`ShapeMatrix`] anchored on the grid
//! - [`BlockStack`] - the simulation: moves, rotation, locking, line clears, game over
//! - [`BlockStats`] - score and line clear statistics
//! - [`BlockSession`] - frame-loop wrapper with gravity timing, pause and commands
//!
//! # Validity
//!
//! A piece position is valid when every occupied cell is between the side
//! walls, above the floor, and either above the grid or on an empty cell.
//! Every accepted move and rotation keeps the active piece valid.

pub use self::{engine::*, grid::*, piece::*, session::*, shape::*, stats::*};

mod engine;
mod grid;
mod piece;
mod session;
mod shape;
mod stats;
