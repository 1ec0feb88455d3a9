use std::{fmt, time::Duration};

use crossterm::event::Event;
use ratatui::Frame;

use crate::{App, Runtime};

/// Individual screen in the application.
///
/// # Lifecycle
///
/// 1. **[`on_active`]** - the screen reaches the top of the stack
/// 2. **Active** - the screen handles events, updates and draws
/// 3. **[`on_inactive`]** - a child is pushed on top, or the screen is leaving
/// 4. **[`on_close`]** - the screen is removed from the stack (Pop/Exit only)
///
/// ```text
/// on_active() ←──────────┐
///   ↓                     │ child screen pops
/// (Active)                │
///   ↓                     │
/// on_inactive() ──────────┘
///   ↓
/// on_close()  ← Pop/Exit only
/// ```
///
/// Screens configure the [`Runtime`] (tick rate, render mode) in
/// [`on_active`], so returning from a child restores their settings.
///
/// ```rust
/// use std::time::Duration;
///
/// use crossterm::event::Event;
/// use ratatui::Frame;
/// use ratatui_runtime::{RenderMode, Runtime, Screen, ScreenTransition};
///
/// #[derive(Debug, Default)]
/// struct Stopwatch {
///     total: Duration,
/// }
///
/// impl Screen for Stopwatch {
///     fn on_active(&mut self, runtime: &mut Runtime) {
///         runtime.set_tick_rate(Some(60.0));
///         runtime.set_render_mode(RenderMode::throttled_from_rate(60.0));
///     }
///
///     fn handle_event(&mut self, _runtime: &mut Runtime, _event: &Event) -> ScreenTransition {
///         ScreenTransition::Pop
///     }
///
///     fn update(&mut self, _runtime: &mut Runtime, elapsed: Duration) {
///         self.total += elapsed;
///     }
///
///     fn draw(&self, _frame: &mut Frame) {}
/// }
/// ```
///
/// [`on_active`]: Self::on_active
/// [`on_inactive`]: Self::on_inactive
/// [`on_close`]: Self::on_close
pub trait Screen: fmt::Debug {
    /// Called when this screen becomes the top of the stack.
    ///
    /// This happens on startup for the initial screen, when the screen is
    /// pushed, and when a child screen above it pops.
    fn on_active(&mut self, runtime: &mut Runtime);

    /// Called when this screen stops being the top of the stack.
    ///
    /// For Pop and Exit, [`on_close`] follows immediately.
    ///
    /// [`on_close`]: Self::on_close
    fn on_inactive(&mut self, _runtime: &mut Runtime) {}

    /// Called when this screen is removed from the stack for good.
    fn on_close(&mut self, _runtime: &mut Runtime) {}

    /// Handles a terminal event and returns the transition to apply.
    fn handle_event(&mut self, runtime: &mut Runtime, event: &Event) -> ScreenTransition;

    /// Advances the screen by `elapsed` (called on each tick).
    fn update(&mut self, runtime: &mut Runtime, elapsed: Duration);

    fn draw(&self, frame: &mut Frame);
}

/// Screen transition result from event handling.
#[derive(Debug)]
pub enum ScreenTransition {
    /// Stay in the current screen.
    Stay,

    /// Push a new screen on top of the current one.
    ///
    /// The current screen goes to background (`on_inactive`) and is
    /// reactivated (`on_active`) when the new screen pops.
    Push(Box<dyn Screen>),

    /// Pop the current screen and return to the previous one.
    ///
    /// Popping the last screen exits the application.
    Pop,

    /// Close every screen and exit the application.
    Exit,
}

/// Screen stack manager that implements [`App`].
#[derive(Debug)]
pub struct ScreenStack<'a> {
    screens: Vec<Box<dyn Screen + 'a>>,
    should_exit: bool,
}

impl<'a> ScreenStack<'a> {
    /// Creates a new screen stack with an initial screen.
    #[must_use]
    pub fn new(initial: Box<dyn Screen + 'a>) -> Self {
        Self {
            screens: vec![initial],
            should_exit: false,
        }
    }

    fn apply_transition(&mut self, runtime: &mut Runtime, transition: ScreenTransition) {
        match transition {
            ScreenTransition::Stay => {}

            ScreenTransition::Push(mut new_screen) => {
                if let Some(current) = self.screens.last_mut() {
                    current.on_inactive(runtime);
                }
                new_screen.on_active(runtime);
                self.screens.push(new_screen);
            }

            ScreenTransition::Pop => {
                if let Some(mut old_screen) = self.screens.pop() {
                    old_screen.on_inactive(runtime);
                    old_screen.on_close(runtime);
                }
                if let Some(prev_screen) = self.screens.last_mut() {
                    prev_screen.on_active(runtime);
                }
            }

            ScreenTransition::Exit => {
                while let Some(mut screen) = self.screens.pop() {
                    screen.on_inactive(runtime);
                    screen.on_close(runtime);
                }
                self.should_exit = true;
            }
        }
    }
}

impl App for ScreenStack<'_> {
    fn init(&mut self, runtime: &mut Runtime) {
        if let Some(screen) = self.screens.last_mut() {
            screen.on_active(runtime);
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit || self.screens.is_empty()
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: Event) {
        if let Some(current) = self.screens.last_mut() {
            let transition = current.handle_event(runtime, &event);
            self.apply_transition(runtime, transition);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        if let Some(current) = self.screens.last() {
            current.draw(frame);
        }
    }

    fn update(&mut self, runtime: &mut Runtime, elapsed: Duration) {
        if let Some(current) = self.screens.last_mut() {
            current.update(runtime, elapsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    /// Shared record of lifecycle calls
    #[derive(Debug, Clone, Default)]
    struct LifecycleLog {
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl LifecycleLog {
        fn log(&self, msg: impl Into<String>) {
            self.calls.borrow_mut().push(msg.into());
        }

        fn take(&self) -> Vec<String> {
            self.calls.borrow_mut().drain(..).collect()
        }
    }

    #[derive(Debug)]
    struct TestScreen {
        name: &'static str,
        log: LifecycleLog,
        transitions: Vec<ScreenTransition>,
    }

    impl TestScreen {
        fn boxed(name: &'static str, log: &LifecycleLog) -> Box<Self> {
            Box::new(Self {
                name,
                log: log.clone(),
                transitions: vec![],
            })
        }

        /// Returns `transition` from the next `handle_event` call.
        fn then(mut self: Box<Self>, transition: ScreenTransition) -> Box<Self> {
            self.transitions.insert(0, transition);
            self
        }
    }

    impl Screen for TestScreen {
        fn on_active(&mut self, _runtime: &mut Runtime) {
            self.log.log(format!("{}: on_active", self.name));
        }

        fn on_inactive(&mut self, _runtime: &mut Runtime) {
            self.log.log(format!("{}: on_inactive", self.name));
        }

        fn on_close(&mut self, _runtime: &mut Runtime) {
            self.log.log(format!("{}: on_close", self.name));
        }

        fn handle_event(&mut self, _runtime: &mut Runtime, _event: &Event) -> ScreenTransition {
            self.log.log(format!("{}: handle_event", self.name));
            self.transitions.pop().unwrap_or(ScreenTransition::Stay)
        }

        fn update(&mut self, _runtime: &mut Runtime, elapsed: Duration) {
            self.log
                .log(format!("{}: update {}ms", self.name, elapsed.as_millis()));
        }

        fn draw(&self, _frame: &mut Frame) {}
    }

    /// Screen relying on the default lifecycle hooks.
    #[derive(Debug)]
    struct QuietScreen;

    impl Screen for QuietScreen {
        fn on_active(&mut self, _runtime: &mut Runtime) {}

        fn handle_event(&mut self, _runtime: &mut Runtime, _event: &Event) -> ScreenTransition {
            ScreenTransition::Pop
        }

        fn update(&mut self, _runtime: &mut Runtime, _elapsed: Duration) {}

        fn draw(&self, _frame: &mut Frame) {}
    }

    fn key_event() -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE))
    }

    #[test]
    fn test_init_activates_initial_screen() {
        let log = LifecycleLog::default();
        let mut stack = ScreenStack::new(TestScreen::boxed("menu", &log));
        let mut runtime = Runtime::new();

        stack.init(&mut runtime);

        assert_eq!(log.take(), ["menu: on_active"]);
    }

    #[test]
    fn test_push_then_pop_returns_to_parent() {
        let log = LifecycleLog::default();
        let game = TestScreen::boxed("game", &log).then(ScreenTransition::Pop);
        let menu = TestScreen::boxed("menu", &log).then(ScreenTransition::Push(game));
        let mut stack = ScreenStack::new(menu);
        let mut runtime = Runtime::new();
        stack.init(&mut runtime);
        log.take();

        stack.handle_event(&mut runtime, key_event());
        assert_eq!(
            log.take(),
            [
                "menu: handle_event",
                "menu: on_inactive",
                "game: on_active",
            ]
        );

        stack.handle_event(&mut runtime, key_event());
        assert_eq!(
            log.take(),
            [
                "game: handle_event",
                "game: on_inactive",
                "game: on_close",
                "menu: on_active",
            ]
        );
        assert!(!stack.should_exit());
    }

    #[test]
    fn test_update_reaches_only_top_screen() {
        let log = LifecycleLog::default();
        let mut stack = ScreenStack::new(TestScreen::boxed("menu", &log));
        let mut runtime = Runtime::new();
        stack.init(&mut runtime);
        stack.apply_transition(
            &mut runtime,
            ScreenTransition::Push(TestScreen::boxed("game", &log)),
        );
        log.take();

        stack.update(&mut runtime, Duration::from_millis(16));
        stack.update(&mut runtime, Duration::from_millis(17));

        assert_eq!(log.take(), ["game: update 16ms", "game: update 17ms"]);
    }

    #[test]
    fn test_exit_closes_every_screen_top_first() {
        let log = LifecycleLog::default();
        let mut stack = ScreenStack::new(TestScreen::boxed("menu", &log));
        let mut runtime = Runtime::new();
        stack.init(&mut runtime);
        stack.apply_transition(
            &mut runtime,
            ScreenTransition::Push(TestScreen::boxed("game", &log)),
        );
        log.take();

        stack.apply_transition(&mut runtime, ScreenTransition::Exit);

        assert_eq!(
            log.take(),
            [
                "game: on_inactive",
                "game: on_close",
                "menu: on_inactive",
                "menu: on_close",
            ]
        );
        assert!(stack.should_exit());
    }

    #[test]
    fn test_popping_last_screen_exits() {
        let log = LifecycleLog::default();
        let menu = TestScreen::boxed("menu", &log).then(ScreenTransition::Pop);
        let mut stack = ScreenStack::new(menu);
        let mut runtime = Runtime::new();
        stack.init(&mut runtime);
        assert!(!stack.should_exit());

        stack.handle_event(&mut runtime, key_event());

        assert!(stack.should_exit());
    }

    #[test]
    fn test_stay_keeps_screen_active() {
        let log = LifecycleLog::default();
        let mut stack = ScreenStack::new(TestScreen::boxed("menu", &log));
        let mut runtime = Runtime::new();
        stack.init(&mut runtime);
        log.take();

        stack.handle_event(&mut runtime, key_event());

        assert_eq!(log.take(), ["menu: handle_event"]);
        assert!(!stack.should_exit());
    }

    #[test]
    fn test_default_hooks_allow_pop() {
        let log = LifecycleLog::default();
        let mut stack = ScreenStack::new(TestScreen::boxed("menu", &log));
        let mut runtime = Runtime::new();
        stack.init(&mut runtime);
        stack.apply_transition(&mut runtime, ScreenTransition::Push(Box::new(QuietScreen)));
        log.take();

        stack.handle_event(&mut runtime, key_event());

        assert_eq!(log.take(), ["menu: on_active"]);
    }
}
