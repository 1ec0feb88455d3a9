//! Simulation cores of the oxcade arcade games.
//!
//! - [`block_stack`] - the falling-block game: grid, pieces, rotation, locking and line clears
//! - [`segment_chain`] - the snake game: body, direction, growth, food and collisions
//!
//! Both cores are plain values driven by a frame loop through a session
//! ([`BlockSession`], [`SnakeSession`]). A session accumulates elapsed time in a
//! [`StepClock`] and runs one discrete step whenever the step interval is reached.
//! Random choices come from an injected [`rand::Rng`]; [`GameSeed`] gives a
//! reproducible one.

pub use self::{block_stack::*, seed::*, segment_chain::*, session::*, step_clock::*};

pub mod block_stack;
pub mod segment_chain;
mod seed;
mod session;
mod step_clock;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("piece colliding with the grid or walls")]
pub struct PieceCollisionError;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("cannot turn back into the body")]
pub struct ReverseTurnError;
