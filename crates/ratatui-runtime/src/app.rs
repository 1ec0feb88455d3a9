use std::time::Duration;

use crossterm::event::Event;
use ratatui::Frame;

use crate::Runtime;

/// Trait for TUI applications.
///
/// Applications executed by [`Runtime::run`] must implement this trait.
pub trait App {
    /// Called once at the start of [`Runtime::run`], before the first event.
    fn init(&mut self, runtime: &mut Runtime);

    /// Returns whether the event loop should stop.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, mouse, resize, etc.).
    fn handle_event(&mut self, runtime: &mut Runtime, event: Event);

    /// Draws the application (called on each render event).
    fn draw(&self, frame: &mut Frame);

    /// Advances the application by `elapsed` (called on each tick event).
    fn update(&mut self, runtime: &mut Runtime, elapsed: Duration);
}
