use std::{collections::VecDeque, time::Duration};

use rand::Rng;
use rand_pcg::Pcg32;

use crate::{GameSeed, ReverseTurnError};

use super::geometry::{Direction, Position};

/// Number of playable columns.
pub const PLAYABLE_WIDTH: i32 = 38;
/// Number of playable rows.
pub const PLAYABLE_HEIGHT: i32 = 28;

/// Cell the head starts on after a reset.
pub const START_POSITION: Position = Position::new(PLAYABLE_WIDTH / 2, PLAYABLE_HEIGHT / 2);
/// Heading after a reset.
pub const START_DIRECTION: Direction = Direction::Right;

/// Points awarded per food eaten.
pub const FOOD_POINTS: usize = 10;

/// Steps per second after a reset.
pub const INITIAL_SPEED: f64 = 6.0;
/// Speed gained per food eaten while below [`SPEED_LIMIT`].
pub const SPEED_INCREMENT: f64 = 0.15;
/// Speed above which eating no longer accelerates the snake.
pub const SPEED_LIMIT: f64 = 12.0;

const MAX_FOOD_REROLLS: usize = 4096;

/// Why a [`SegmentChain`] died.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum DeathCause {
    #[display("hit the wall")]
    Wall,
    #[display("ran into itself")]
    SelfCollision,
}

/// Lifecycle state of a [`SegmentChain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ChainState {
    Running,
    /// Only [`SegmentChain::reset`] leaves this state.
    Dead(DeathCause),
}

/// Result of [`SegmentChain::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum StepOutcome {
    Moved,
    /// The head reached the food.
    Ate,
    Died(DeathCause),
}

impl StepOutcome {
    #[must_use]
    pub fn is_alive(self) -> bool {
        !self.is_died()
    }
}

/// The snake simulation core.
///
/// The body is stored head first. Growth is lazy: [`Self::grow`] raises the
/// target length and the tail stops being dropped until the body reaches it.
///
/// Turns are buffered: [`Self::set_direction`] records a pending direction
/// that the next [`Self::step`] applies. A turn to the exact reverse of the
/// current direction is rejected while the body has more than one cell.
///
/// # Example
///
/// ```
/// use oxcade_engine::{Direction, GameSeed, SegmentChain, START_POSITION};
///
/// let mut chain = SegmentChain::with_rng(GameSeed::from_bytes([5; 16]).rng());
/// chain.set_direction(Direction::Down).unwrap();
/// chain.grow(1);
///
/// assert!(chain.step().is_alive());
/// assert_eq!(chain.head().y, START_POSITION.y + 1);
/// assert_eq!(chain.len(), 2);
///
/// // Two cells long: turning straight back is refused.
/// assert!(chain.set_direction(Direction::Up).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SegmentChain<R = Pcg32> {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Option<Direction>,
    target_length: usize,
    food: Option<Position>,
    score: usize,
    high_score: usize,
    speed: f64,
    state: ChainState,
    rng: R,
}

impl Default for SegmentChain {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentChain {
    /// Creates a game with a randomly seeded source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(GameSeed::random().rng())
    }
}

impl<R> SegmentChain<R>
where
    R: Rng,
{
    /// Creates a game placing food with `rng`.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        let mut chain = Self {
            body: VecDeque::new(),
            direction: START_DIRECTION,
            pending_direction: None,
            target_length: 1,
            food: None,
            score: 0,
            high_score: 0,
            speed: INITIAL_SPEED,
            state: ChainState::Running,
            rng,
        };
        chain.start_run();
        chain
    }

    /// Returns the body cells, head first.
    #[must_use]
    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    #[must_use]
    pub fn head(&self) -> Position {
        self.body.front().copied().unwrap_or(START_POSITION)
    }

    /// Returns the number of body cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the turn the next step will apply, if any.
    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    #[must_use]
    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Returns the food cell, or `None` when no free cell is left.
    #[must_use]
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Returns the best score seen by this value, across resets.
    #[must_use]
    pub fn high_score(&self) -> usize {
        self.high_score
    }

    /// Returns the current speed in steps per second.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Returns the time between two steps at the current speed.
    #[must_use]
    pub fn step_interval(&self) -> Duration {
        Duration::from_secs_f64(self.speed.recip())
    }

    #[must_use]
    pub fn state(&self) -> ChainState {
        self.state
    }

    /// Buffers a turn for the next step.
    ///
    /// The reverse check compares against the current direction, not a turn
    /// already pending. An accepted turn overwrites any pending one.
    pub fn set_direction(&mut self, direction: Direction) -> Result<(), ReverseTurnError> {
        if self.body.len() > 1 && direction == self.direction.opposite() {
            return Err(ReverseTurnError);
        }
        self.pending_direction = Some(direction);
        Ok(())
    }

    /// Raises the target length; the body catches up over the next steps.
    pub fn grow(&mut self, amount: usize) {
        self.target_length += amount;
    }

    /// Runs one movement step.
    ///
    /// The current tail cell never counts as an obstacle, even while growth
    /// is pending. A dead chain is not moved and keeps reporting its cause of
    /// death.
    pub fn step(&mut self) -> StepOutcome {
        if let ChainState::Dead(cause) = self.state {
            return StepOutcome::Died(cause);
        }
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let new_head = self.head().stepped(self.direction);
        if !is_inside(new_head) {
            return self.die(DeathCause::Wall);
        }
        let obstacles = self.body.len().saturating_sub(1);
        if self.body.iter().take(obstacles).any(|&cell| cell == new_head) {
            return self.die(DeathCause::SelfCollision);
        }

        self.body.push_front(new_head);
        self.body.truncate(self.target_length);

        if self.food != Some(new_head) {
            return StepOutcome::Moved;
        }
        self.eat();
        StepOutcome::Ate
    }

    /// Raises the high score to at least `score`.
    ///
    /// Lets a front end carry the best score over from an earlier chain.
    pub fn raise_high_score(&mut self, score: usize) {
        self.high_score = self.high_score.max(score);
    }

    /// Starts a new run; the high score is kept.
    pub fn reset(&mut self) {
        self.high_score = self.high_score.max(self.score);
        self.start_run();
        tracing::debug!(high_score = self.high_score, "segment chain reset");
    }

    fn start_run(&mut self) {
        self.body.clear();
        self.body.push_back(START_POSITION);
        self.direction = START_DIRECTION;
        self.pending_direction = None;
        self.target_length = 1;
        self.score = 0;
        self.speed = INITIAL_SPEED;
        self.state = ChainState::Running;
        self.place_food();
    }

    fn die(&mut self, cause: DeathCause) -> StepOutcome {
        self.state = ChainState::Dead(cause);
        self.high_score = self.high_score.max(self.score);
        tracing::info!(
            %cause,
            score = self.score,
            length = self.body.len(),
            high_score = self.high_score,
            "snake died"
        );
        StepOutcome::Died(cause)
    }

    fn eat(&mut self) {
        self.grow(1);
        self.score += FOOD_POINTS;
        if self.speed < SPEED_LIMIT {
            self.speed += SPEED_INCREMENT;
        }
        self.place_food();
        tracing::debug!(
            score = self.score,
            speed = self.speed,
            target_length = self.target_length,
            "food eaten"
        );
    }

    /// Moves the food to a cell not covered by the body.
    ///
    /// Random cells are tried first; once the reroll budget runs out the
    /// first free cell in row-major order is taken.
    fn place_food(&mut self) {
        for _ in 0..MAX_FOOD_REROLLS {
            let candidate = Position::new(
                self.rng.random_range(0..PLAYABLE_WIDTH),
                self.rng.random_range(0..PLAYABLE_HEIGHT),
            );
            if !self.body.contains(&candidate) {
                self.food = Some(candidate);
                return;
            }
        }
        let body = &self.body;
        self.food = (0..PLAYABLE_HEIGHT)
            .flat_map(|y| (0..PLAYABLE_WIDTH).map(move |x| Position::new(x, y)))
            .find(|cell| !body.contains(cell));
    }
}

fn is_inside(pos: Position) -> bool {
    (0..PLAYABLE_WIDTH).contains(&pos.x) && (0..PLAYABLE_HEIGHT).contains(&pos.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_with(cells: &[(i32, i32)], direction: Direction) -> SegmentChain {
        let mut chain = SegmentChain::with_rng(GameSeed::from_bytes([9; 16]).rng());
        chain.body = cells.iter().map(|&(x, y)| Position::new(x, y)).collect();
        chain.target_length = chain.body.len();
        chain.direction = direction;
        chain.food = None;
        chain
    }

    fn cells(chain: &SegmentChain) -> Vec<(i32, i32)> {
        chain.body().iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn test_starts_in_the_middle_heading_right() {
        let chain = SegmentChain::with_rng(GameSeed::from_bytes([1; 16]).rng());
        assert_eq!(cells(&chain), [(19, 14)]);
        assert_eq!(chain.direction(), Direction::Right);
        assert!((chain.speed() - INITIAL_SPEED).abs() < f64::EPSILON);
        assert!(chain.state().is_running());
        let food = chain.food().unwrap();
        assert!(is_inside(food));
        assert_ne!(food, chain.head());
    }

    #[test]
    fn test_step_moves_head_and_drops_tail() {
        let mut chain = chain_with(&[(5, 5), (4, 5), (3, 5)], Direction::Right);
        assert_eq!(chain.step(), StepOutcome::Moved);
        assert_eq!(cells(&chain), [(6, 5), (5, 5), (4, 5)]);
    }

    #[test]
    fn test_growth_is_applied_over_following_steps() {
        let mut chain = chain_with(&[(10, 10)], Direction::Right);
        chain.grow(1);
        assert_eq!(chain.len(), 1);

        chain.step();
        assert_eq!(chain.len(), 2);
        chain.step();
        assert_eq!(chain.len(), 2);
        chain.step();
        assert_eq!(chain.len(), 2);
        assert_eq!(cells(&chain), [(13, 10), (12, 10)]);
    }

    #[test]
    fn test_self_collision_leaves_body_unchanged() {
        // Heading up, the head turns right into the fourth segment.
        let mut chain = chain_with(&[(5, 5), (5, 6), (6, 6), (6, 5), (6, 4)], Direction::Up);
        let before = cells(&chain);
        chain.set_direction(Direction::Right).unwrap();

        assert_eq!(
            chain.step(),
            StepOutcome::Died(DeathCause::SelfCollision)
        );
        assert_eq!(cells(&chain), before);
        assert_eq!(chain.state(), ChainState::Dead(DeathCause::SelfCollision));
    }

    #[test]
    fn test_head_may_follow_vacating_tail() {
        let mut chain = chain_with(&[(5, 5), (6, 5), (6, 6), (5, 6)], Direction::Left);
        chain.set_direction(Direction::Down).unwrap();

        assert_eq!(chain.step(), StepOutcome::Moved);
        assert_eq!(cells(&chain), [(5, 6), (5, 5), (6, 5), (6, 6)]);
    }

    #[test]
    fn test_head_may_enter_tail_while_growing() {
        let mut chain = chain_with(&[(5, 5), (6, 5), (6, 6), (5, 6)], Direction::Left);
        chain.grow(1);
        chain.set_direction(Direction::Down).unwrap();

        assert_eq!(chain.step(), StepOutcome::Moved);
        assert!(chain.state().is_running());
        assert_eq!(cells(&chain), [(5, 6), (5, 5), (6, 5), (6, 6), (5, 6)]);
    }

    #[test]
    fn test_leaving_any_edge_is_fatal() {
        let cases = [
            ((0, 10), Direction::Left),
            ((PLAYABLE_WIDTH - 1, 10), Direction::Right),
            ((10, 0), Direction::Up),
            ((10, PLAYABLE_HEIGHT - 1), Direction::Down),
        ];
        for (cell, direction) in cases {
            let mut chain = chain_with(&[cell], direction);
            assert_eq!(chain.step(), StepOutcome::Died(DeathCause::Wall));
            assert_eq!(cells(&chain), [cell]);
        }
    }

    #[test]
    fn test_reverse_rejected_when_longer_than_one() {
        let mut chain = chain_with(&[(10, 10), (9, 10), (8, 10)], Direction::Right);
        assert!(chain.set_direction(Direction::Left).is_err());
        assert_eq!(chain.pending_direction(), None);
        assert_eq!(chain.step(), StepOutcome::Moved);
        assert_eq!(chain.head(), Position::new(11, 10));
    }

    #[test]
    fn test_reverse_accepted_when_single_cell() {
        let mut chain = chain_with(&[(10, 10)], Direction::Right);
        chain.set_direction(Direction::Left).unwrap();
        assert_eq!(chain.step(), StepOutcome::Moved);
        assert_eq!(chain.head(), Position::new(9, 10));
        assert_eq!(chain.direction(), Direction::Left);
    }

    #[test]
    fn test_reverse_rejected_at_length_two() {
        let mut chain = chain_with(&[(10, 10), (9, 10)], Direction::Right);
        assert!(chain.set_direction(Direction::Left).is_err());

        // The check is against the current direction, not the pending turn.
        chain.set_direction(Direction::Up).unwrap();
        assert!(chain.set_direction(Direction::Left).is_err());
        assert_eq!(chain.pending_direction(), Some(Direction::Up));

        assert_eq!(chain.step(), StepOutcome::Moved);
        assert_eq!(cells(&chain), [(10, 9), (10, 10)]);
    }

    #[test]
    fn test_later_turn_overwrites_pending() {
        let mut chain = chain_with(&[(10, 10), (9, 10)], Direction::Right);
        chain.set_direction(Direction::Up).unwrap();
        chain.set_direction(Direction::Down).unwrap();
        chain.step();
        assert_eq!(chain.head(), Position::new(10, 11));
    }

    #[test]
    fn test_eating_scores_grows_and_speeds_up() {
        let mut chain = chain_with(&[(10, 10)], Direction::Right);
        chain.food = Some(Position::new(11, 10));

        assert_eq!(chain.step(), StepOutcome::Ate);
        assert_eq!(chain.score(), FOOD_POINTS);
        assert_eq!(chain.target_length(), 2);
        assert!((chain.speed() - (INITIAL_SPEED + SPEED_INCREMENT)).abs() < 1e-9);
        assert!(chain.step_interval() < Duration::from_secs_f64(1.0 / INITIAL_SPEED));

        let food = chain.food().unwrap();
        assert!(!chain.body().contains(&food));

        chain.food = None;
        chain.step();
        assert_eq!(cells(&chain), [(12, 10), (11, 10)]);
    }

    #[test]
    fn test_speed_stops_growing_at_limit() {
        let mut chain = chain_with(&[(10, 10)], Direction::Right);
        chain.speed = SPEED_LIMIT - 0.1;

        chain.food = Some(Position::new(11, 10));
        assert_eq!(chain.step(), StepOutcome::Ate);
        let capped = chain.speed();
        assert!(capped > SPEED_LIMIT);

        chain.food = Some(Position::new(12, 10));
        assert_eq!(chain.step(), StepOutcome::Ate);
        assert!((chain.speed() - capped).abs() < f64::EPSILON);
        assert_eq!(chain.score(), 2 * FOOD_POINTS);
    }

    #[test]
    fn test_food_falls_back_to_first_free_cell() {
        let all = (0..PLAYABLE_HEIGHT)
            .flat_map(|y| (0..PLAYABLE_WIDTH).map(move |x| (x, y)))
            .collect::<Vec<_>>();
        let last = *all.last().unwrap();
        let mut chain = chain_with(&all[..all.len() - 1], Direction::Right);

        chain.place_food();
        assert_eq!(chain.food(), Some(Position::new(last.0, last.1)));

        chain.body.push_back(Position::new(last.0, last.1));
        chain.place_food();
        assert_eq!(chain.food(), None);
    }

    #[test]
    fn test_dead_chain_does_not_move() {
        let mut chain = chain_with(&[(0, 0)], Direction::Up);
        chain.step();
        chain.set_direction(Direction::Down).unwrap();
        assert_eq!(chain.step(), StepOutcome::Died(DeathCause::Wall));
        assert_eq!(cells(&chain), [(0, 0)]);
    }

    #[test]
    fn test_high_score_survives_reset() {
        let mut chain = chain_with(&[(10, 10)], Direction::Right);
        chain.food = Some(Position::new(11, 10));
        chain.step();
        chain.food = Some(Position::new(12, 10));
        chain.step();
        chain.food = None;
        chain.set_direction(Direction::Up).unwrap();
        for _ in 0..20 {
            chain.step();
        }
        assert!(chain.state().is_dead());
        assert_eq!(chain.high_score(), 2 * FOOD_POINTS);

        chain.reset();
        assert_eq!(chain.score(), 0);
        assert_eq!(chain.high_score(), 2 * FOOD_POINTS);
        assert_eq!(cells(&chain), [(19, 14)]);
        assert!((chain.speed() - INITIAL_SPEED).abs() < f64::EPSILON);

        // A lower run does not lower it; reset alone also records the run.
        chain.food = Some(Position::new(20, 14));
        chain.step();
        chain.reset();
        assert_eq!(chain.high_score(), 2 * FOOD_POINTS);
    }

    #[test]
    fn test_reset_records_high_score_without_death() {
        let mut chain = chain_with(&[(10, 10)], Direction::Right);
        chain.food = Some(Position::new(11, 10));
        chain.step();
        chain.reset();
        assert_eq!(chain.high_score(), FOOD_POINTS);
    }

    #[test]
    fn test_raise_high_score_never_lowers() {
        let mut chain = chain_with(&[(10, 10)], Direction::Right);
        chain.raise_high_score(50);
        chain.raise_high_score(30);
        assert_eq!(chain.high_score(), 50);
        chain.reset();
        assert_eq!(chain.high_score(), 50);
    }

    #[test]
    fn test_same_seed_same_food() {
        let a = SegmentChain::with_rng(GameSeed::from_bytes([4; 16]).rng());
        let b = SegmentChain::with_rng(GameSeed::from_bytes([4; 16]).rng());
        assert_eq!(a.food(), b.food());
    }
}
