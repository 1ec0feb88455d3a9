use std::time::Duration;

/// Elapsed-time accumulator gating discrete simulation steps.
///
/// Each frame adds its elapsed time. When the total reaches the step
/// interval exactly one step is due and the accumulator restarts from zero;
/// any excess over the interval is discarded.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use oxcade_engine::StepClock;
///
/// let interval = Duration::from_millis(500);
/// let mut clock = StepClock::new();
///
/// assert!(!clock.advance(Duration::from_millis(300), interval));
/// assert!(clock.advance(Duration::from_millis(300), interval));
/// assert_eq!(clock.accumulated(), Duration::ZERO);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepClock {
    accumulated: Duration,
}

impl StepClock {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            accumulated: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn accumulated(&self) -> Duration {
        self.accumulated
    }

    /// Adds `elapsed` and returns whether a step is due.
    pub fn advance(&mut self, elapsed: Duration, interval: Duration) -> bool {
        self.accumulated = self.accumulated.saturating_add(elapsed);
        if self.accumulated < interval {
            return false;
        }
        self.accumulated = Duration::ZERO;
        true
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}
