//! The snake game core.
//!
//! - [`Position`], [`Direction`] - cells of the playable area and the four headings
//! - [`SegmentChain`] - the simulation: body, pending turn, growth, food, score and speed
//! - [`SnakeSession`] - frame-loop wrapper with speed-dependent step timing, pause and commands
//!
//! The playable area is [`PLAYABLE_WIDTH`] × [`PLAYABLE_HEIGHT`] cells with
//! `(0, 0)` at the top-left. Leaving it is fatal; there is no wrap-around.

pub use self::{engine::*, geometry::*, session::*};

mod engine;
mod geometry;
mod session;
