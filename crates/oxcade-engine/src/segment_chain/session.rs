use std::time::Duration;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::{GameSeed, SessionState, StepClock};

use super::{
    engine::{SegmentChain, StepOutcome},
    geometry::Direction,
};

/// Commands the input layer sends to a [`SnakeSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeCommand {
    Turn(Direction),
    TogglePause,
    Reset,
}

/// A snake game driven by a frame loop.
///
/// The step interval follows the chain's current speed. Turns are still
/// buffered while paused, so the first step after resuming applies them.
#[derive(Debug, Clone)]
pub struct SnakeSession<R = Pcg32> {
    chain: SegmentChain<R>,
    clock: StepClock,
    session_state: SessionState,
    play_time: Duration,
}

impl Default for SnakeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeSession {
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(GameSeed::random())
    }

    #[must_use]
    pub fn with_seed(seed: GameSeed) -> Self {
        Self::with_rng(seed.rng())
    }
}

impl<R> SnakeSession<R>
where
    R: Rng,
{
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self::from_chain(SegmentChain::with_rng(rng))
    }

    #[must_use]
    pub fn from_chain(chain: SegmentChain<R>) -> Self {
        let session_state = if chain.state().is_dead() {
            SessionState::GameOver
        } else {
            SessionState::Playing
        };
        Self {
            chain,
            clock: StepClock::new(),
            session_state,
            play_time: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn chain(&self) -> &SegmentChain<R> {
        &self.chain
    }

    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.session_state
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.play_time
    }

    /// Advances the session by one frame.
    ///
    /// Returns the step outcome if a step ran during this frame.
    pub fn tick(&mut self, elapsed: Duration) -> Option<StepOutcome> {
        if !self.session_state.is_playing() {
            return None;
        }
        self.play_time += elapsed;
        if !self.clock.advance(elapsed, self.chain.step_interval()) {
            return None;
        }
        let outcome = self.chain.step();
        if outcome.is_died() {
            self.session_state = SessionState::GameOver;
        }
        Some(outcome)
    }

    pub fn apply(&mut self, command: SnakeCommand) {
        match command {
            SnakeCommand::Turn(direction) => {
                if !self.session_state.is_game_over() {
                    _ = self.chain.set_direction(direction);
                }
            }
            SnakeCommand::TogglePause => self.toggle_pause(),
            SnakeCommand::Reset => self.reset(),
        }
    }

    pub fn toggle_pause(&mut self) {
        self.session_state = self.session_state.toggled_pause();
    }

    /// Starts a new run, keeping the high score.
    pub fn reset(&mut self) {
        self.chain.reset();
        self.clock.reset();
        self.session_state = SessionState::Playing;
        self.play_time = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use crate::{INITIAL_SPEED, Position, START_POSITION};

    use super::*;

    fn session() -> SnakeSession {
        SnakeSession::with_seed(GameSeed::from_bytes([6; 16]))
    }

    fn first_step() -> Duration {
        Duration::from_secs_f64(1.0 / INITIAL_SPEED)
    }

    #[test]
    fn test_step_waits_for_interval() {
        let mut session = session();
        assert_eq!(session.tick(first_step() / 2), None);
        assert_eq!(session.chain().head(), START_POSITION);
        assert!(session.tick(first_step()).is_some());
        assert_eq!(
            session.chain().head(),
            Position::new(START_POSITION.x + 1, START_POSITION.y)
        );
    }

    #[test]
    fn test_turns_are_buffered_while_paused() {
        let mut session = session();
        session.apply(SnakeCommand::TogglePause);
        session.apply(SnakeCommand::Turn(Direction::Up));
        assert_eq!(session.tick(Duration::from_secs(1)), None);
        assert_eq!(session.chain().head(), START_POSITION);
        assert_eq!(session.chain().pending_direction(), Some(Direction::Up));

        session.apply(SnakeCommand::TogglePause);
        session.tick(first_step());
        assert_eq!(
            session.chain().head(),
            Position::new(START_POSITION.x, START_POSITION.y - 1)
        );
    }

    #[test]
    fn test_death_ends_session_and_reset_keeps_high_score() {
        let mut session = session();
        session.apply(SnakeCommand::Turn(Direction::Up));
        let mut outcome = None;
        for _ in 0..100 {
            outcome = session.tick(first_step());
            if session.session_state().is_game_over() {
                break;
            }
        }
        assert!(outcome.is_some_and(|outcome| outcome.is_died()));
        assert!(session.session_state().is_game_over());

        session.apply(SnakeCommand::TogglePause);
        assert!(session.session_state().is_game_over());
        assert_eq!(session.tick(first_step()), None);

        let high_score = session.chain().high_score();
        session.apply(SnakeCommand::Reset);
        assert!(session.session_state().is_playing());
        assert_eq!(session.chain().head(), START_POSITION);
        assert_eq!(session.chain().score(), 0);
        assert_eq!(session.chain().high_score(), high_score);
        assert_eq!(session.duration(), Duration::ZERO);
    }

    #[test]
    fn test_reset_is_allowed_mid_game() {
        let mut session = session();
        session.tick(first_step());
        session.apply(SnakeCommand::Reset);
        assert_eq!(session.chain().head(), START_POSITION);
        assert!(session.session_state().is_playing());
    }
}
