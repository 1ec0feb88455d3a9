use std::time::Duration;

use crossterm::event::Event as CrosstermEvent;

/// Events processed by TUI applications.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant, derive_more::From)]
pub(super) enum TuiEvent {
    /// Frame tick carrying the wall-clock time since the previous tick.
    #[from(ignore)]
    Tick(Duration),
    /// Screen render timing.
    Render,
    /// Terminal events such as key input, mouse, and resize.
    Crossterm(CrosstermEvent),
}
