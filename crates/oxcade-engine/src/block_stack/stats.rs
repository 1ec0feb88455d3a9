/// Points awarded per cleared row.
pub const POINTS_PER_LINE: usize = 100;

/// Statistics of a falling-block game.
///
/// - **Score**: `100 × lines` per lock, no combo or multi-line bonus
/// - **Locked pieces**: total number of pieces written into the grid
/// - **Line clear distribution**: count of locks by rows cleared (0 to 4)
///
/// # Example
///
/// ```
/// use oxcade_engine::BlockStats;
///
/// let mut stats = BlockStats::new();
/// stats.record_lock(2);
/// stats.record_lock(0);
///
/// assert_eq!(stats.score(), 200);
/// assert_eq!(stats.locked_pieces(), 2);
/// assert_eq!(stats.line_cleared_counter()[2], 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStats {
    score: usize,
    locked_pieces: usize,
    cleared_lines: usize,
    line_cleared_counter: [usize; 5],
}

impl Default for BlockStats {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            locked_pieces: 0,
            cleared_lines: 0,
            line_cleared_counter: [0; 5],
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub const fn locked_pieces(&self) -> usize {
        self.locked_pieces
    }

    /// Returns the total number of rows cleared.
    #[must_use]
    pub const fn cleared_lines(&self) -> usize {
        self.cleared_lines
    }

    /// Returns a histogram of locks by rows cleared.
    ///
    /// Index `n` counts the locks that cleared exactly `n` rows.
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; 5] {
        &self.line_cleared_counter
    }

    /// Records one lock that cleared `cleared_lines` rows.
    pub const fn record_lock(&mut self, cleared_lines: usize) {
        self.locked_pieces += 1;
        self.cleared_lines += cleared_lines;
        if cleared_lines < self.line_cleared_counter.len() {
            self.line_cleared_counter[cleared_lines] += 1;
        }
        self.score += POINTS_PER_LINE * cleared_lines;
    }
}
