use std::time::Duration;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::{GameSeed, PieceCollisionError};

use super::{grid::Grid, piece::Piece, stats::BlockStats};

/// Time between two gravity steps.
pub const FALL_INTERVAL: Duration = Duration::from_millis(500);

/// Lifecycle state of a [`BlockStack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum BlockState {
    /// A piece is falling.
    Falling,
    /// A freshly spawned piece collided; only [`BlockStack::reset`] leaves this state.
    GameOver,
}

/// Result of [`BlockStack::lock_and_advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockOutcome {
    pub lines_cleared: usize,
    pub is_game_over: bool,
}

/// The falling-block simulation core.
///
/// Owns the grid, the active piece, the score and the random source used to
/// pick shapes. Rejected moves and rotations return [`PieceCollisionError`]
/// and leave the state untouched; they are normal game flow, not faults.
///
/// # Game Flow
///
/// 1. The player moves or rotates the active piece ([`Self::try_move`], [`Self::try_rotate`])
/// 2. Gravity ([`Self::step`]) moves it down, or locks it once it rests
/// 3. Locking writes the piece into the grid, clears full rows and spawns the next piece
/// 4. If the new piece does not fit at its spawn position the game is over
///
/// # Example
///
/// ```
/// use oxcade_engine::{BlockStack, GameSeed};
///
/// let mut stack = BlockStack::with_rng(GameSeed::from_bytes([1; 16]).rng());
///
/// stack.try_move_left().ok();
/// stack.try_rotate().ok();
/// stack.hard_drop();
///
/// // The piece now rests on the floor; the next gravity step locks it.
/// let outcome = stack.step().unwrap();
/// assert_eq!(outcome.lines_cleared, 0);
/// assert!(!outcome.is_game_over);
/// ```
#[derive(Debug, Clone)]
pub struct BlockStack<R = Pcg32> {
    grid: Grid,
    active_piece: Piece,
    stats: BlockStats,
    state: BlockState,
    rng: R,
}

impl Default for BlockStack {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockStack {
    /// Creates a game with an empty grid and a randomly seeded source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(GameSeed::random().rng())
    }
}

impl<R> BlockStack<R>
where
    R: Rng,
{
    /// Creates a game with an empty grid drawing shapes from `rng`.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self::with_grid(Grid::EMPTY, rng)
    }

    /// Creates a game on a pre-filled grid.
    ///
    /// The game starts over if the first piece does not fit.
    #[must_use]
    pub fn with_grid(grid: Grid, mut rng: R) -> Self {
        let active_piece = Piece::spawn(rng.random());
        let state = if grid.is_placeable(&active_piece) {
            BlockState::Falling
        } else {
            BlockState::GameOver
        };
        Self {
            grid,
            active_piece,
            stats: BlockStats::new(),
            state,
            rng,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn active_piece(&self) -> &Piece {
        &self.active_piece
    }

    #[must_use]
    pub fn stats(&self) -> &BlockStats {
        &self.stats
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.stats.score()
    }

    #[must_use]
    pub fn state(&self) -> BlockState {
        self.state
    }

    /// Picks the next shape uniformly and returns it at its spawn position.
    ///
    /// Validity is not checked here; the caller decides what a collision means.
    pub fn spawn_piece(&mut self) -> Piece {
        Piece::spawn(self.rng.random())
    }

    /// Replaces the active piece if it fits.
    pub fn set_active_piece(&mut self, piece: Piece) -> Result<(), PieceCollisionError> {
        if !self.grid.is_placeable(&piece) {
            return Err(PieceCollisionError);
        }
        self.active_piece = piece;
        Ok(())
    }

    /// Moves the active piece by `(dx, dy)` if every cell of the result fits.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> Result<(), PieceCollisionError> {
        self.set_active_piece(self.active_piece.shifted(dx, dy))
    }

    pub fn try_move_left(&mut self) -> Result<(), PieceCollisionError> {
        self.try_move(-1, 0)
    }

    pub fn try_move_right(&mut self) -> Result<(), PieceCollisionError> {
        self.try_move(1, 0)
    }

    pub fn try_soft_drop(&mut self) -> Result<(), PieceCollisionError> {
        self.try_move(0, 1)
    }

    /// Turns the active piece clockwise in place.
    ///
    /// There are no wall kicks: the rotated shape either fits at the current
    /// anchor or the rotation is rejected and the old shape stays.
    pub fn try_rotate(&mut self) -> Result<(), PieceCollisionError> {
        self.set_active_piece(self.active_piece.rotated())
    }

    /// Moves the active piece straight down as far as it fits.
    ///
    /// Returns the number of rows travelled. The piece is not locked.
    pub fn hard_drop(&mut self) -> usize {
        let mut rows = 0;
        while self.try_soft_drop().is_ok() {
            rows += 1;
        }
        rows
    }

    /// Locks the active piece, clears full rows and spawns the next piece.
    ///
    /// When the new piece collides at its spawn position the game is over; the
    /// grid is left as it is and the colliding piece is kept for inspection.
    pub fn lock_and_advance(&mut self) -> LockOutcome {
        let locked = self.active_piece;
        self.grid.fill_piece(&locked);
        let lines_cleared = self.grid.clear_lines();
        self.stats.record_lock(lines_cleared);
        tracing::debug!(
            kind = ?locked.kind(),
            x = locked.x(),
            y = locked.y(),
            lines_cleared,
            score = self.stats.score(),
            "piece locked"
        );

        self.active_piece = self.spawn_piece();
        let is_game_over = !self.grid.is_placeable(&self.active_piece);
        if is_game_over {
            self.state = BlockState::GameOver;
            tracing::info!(
                score = self.stats.score(),
                locked_pieces = self.stats.locked_pieces(),
                "spawned piece collides, game over"
            );
        }
        LockOutcome {
            lines_cleared,
            is_game_over,
        }
    }

    /// Runs one gravity step.
    ///
    /// Moves the active piece down one row, or locks it when it cannot move.
    /// Returns the lock outcome when a lock happened. Does nothing once the
    /// game is over.
    pub fn step(&mut self) -> Option<LockOutcome> {
        if self.state.is_game_over() {
            return None;
        }
        if self.try_soft_drop().is_ok() {
            return None;
        }
        Some(self.lock_and_advance())
    }

    /// Empties the grid, zeroes the score and spawns a fresh piece.
    pub fn reset(&mut self) {
        self.grid = Grid::EMPTY;
        self.stats = BlockStats::new();
        self.active_piece = self.spawn_piece();
        self.state = BlockState::Falling;
        tracing::debug!("block stack reset");
    }
}
