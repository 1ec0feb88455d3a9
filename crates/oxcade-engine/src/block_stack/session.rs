use std::time::Duration;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::{GameSeed, SessionState, StepClock};

use super::engine::{BlockStack, FALL_INTERVAL, LockOutcome};

/// Commands the input layer sends to a [`BlockSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockCommand {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
    TogglePause,
    Reset,
}

/// A falling-block game driven by a frame loop.
///
/// Each frame calls [`Self::tick`] with the elapsed time. Gravity runs once
/// every [`FALL_INTERVAL`] of accumulated playing time. Piece commands are
/// ignored unless the session is playing.
#[derive(Debug, Clone)]
pub struct BlockSession<R = Pcg32> {
    stack: BlockStack<R>,
    clock: StepClock,
    session_state: SessionState,
    play_time: Duration,
}

impl Default for BlockSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockSession {
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(GameSeed::random())
    }

    #[must_use]
    pub fn with_seed(seed: GameSeed) -> Self {
        Self::with_rng(seed.rng())
    }
}

impl<R> BlockSession<R>
where
    R: Rng,
{
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self::from_stack(BlockStack::with_rng(rng))
    }

    /// Wraps an existing game.
    #[must_use]
    pub fn from_stack(stack: BlockStack<R>) -> Self {
        let session_state = if stack.state().is_game_over() {
            SessionState::GameOver
        } else {
            SessionState::Playing
        };
        Self {
            stack,
            clock: StepClock::new(),
            session_state,
            play_time: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn stack(&self) -> &BlockStack<R> {
        &self.stack
    }

    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.session_state
    }

    /// Returns the accumulated playing time (pauses excluded).
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.play_time
    }

    /// Advances the session by one frame.
    ///
    /// Returns the lock outcome if gravity locked a piece during this frame.
    pub fn tick(&mut self, elapsed: Duration) -> Option<LockOutcome> {
        if !self.session_state.is_playing() {
            return None;
        }
        self.play_time += elapsed;
        if !self.clock.advance(elapsed, FALL_INTERVAL) {
            return None;
        }
        let outcome = self.stack.step();
        if self.stack.state().is_game_over() {
            self.session_state = SessionState::GameOver;
        }
        outcome
    }

    pub fn apply(&mut self, command: BlockCommand) {
        match command {
            BlockCommand::TogglePause => self.toggle_pause(),
            BlockCommand::Reset => self.reset(),
            _ if !self.session_state.is_playing() => {}
            BlockCommand::MoveLeft => _ = self.stack.try_move_left(),
            BlockCommand::MoveRight => _ = self.stack.try_move_right(),
            BlockCommand::SoftDrop => _ = self.stack.try_soft_drop(),
            BlockCommand::Rotate => _ = self.stack.try_rotate(),
            BlockCommand::HardDrop => _ = self.stack.hard_drop(),
        }
    }

    pub fn toggle_pause(&mut self) {
        self.session_state = self.session_state.toggled_pause();
    }

    /// Starts a new game on an empty grid.
    pub fn reset(&mut self) {
        self.stack.reset();
        self.clock.reset();
        self.session_state = SessionState::Playing;
        self.play_time = Duration::ZERO;
    }
}
