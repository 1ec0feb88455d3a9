use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use oxcade_engine::{Direction, GameSeed, SegmentChain, SessionState, SnakeCommand, SnakeSession};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    text::Line,
    widgets::Block,
};
use ratatui_runtime::{RenderMode, Runtime, Screen, ScreenTransition};

use crate::{
    screens::{GameOptions, HighScores},
    view::widgets::{
        FieldDisplay, KeyBinding, KeyBindingDisplay, StateOverlay, StatsDisplay, StatsRow,
        format_duration, style,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Game(SnakeCommand),
    Quit,
}

const KEY_MAP: &[(KeyCode, Action)] = &[
    (KeyCode::Up, Action::Game(SnakeCommand::Turn(Direction::Up))),
    (
        KeyCode::Down,
        Action::Game(SnakeCommand::Turn(Direction::Down)),
    ),
    (
        KeyCode::Left,
        Action::Game(SnakeCommand::Turn(Direction::Left)),
    ),
    (
        KeyCode::Right,
        Action::Game(SnakeCommand::Turn(Direction::Right)),
    ),
    (KeyCode::Char(' '), Action::Game(SnakeCommand::TogglePause)),
    (KeyCode::Char('r'), Action::Game(SnakeCommand::Reset)),
    (KeyCode::Char('q'), Action::Quit),
    (KeyCode::Esc, Action::Quit),
];

impl Action {
    fn from_key_event(event: &KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        KEY_MAP
            .iter()
            .find(|(code, _)| *code == event.code)
            .map(|(_, action)| *action)
    }

    fn bindings(state: SessionState) -> &'static [KeyBinding] {
        match state {
            SessionState::Playing => {
                const {
                    &[
                        KeyBinding::new(&["←", "↑", "↓", "→"], "Turn"),
                        KeyBinding::new(&["Space"], "Pause"),
                        KeyBinding::new(&["r"], "Restart"),
                        KeyBinding::new(&["q", "Esc"], "Quit"),
                    ]
                }
            }
            SessionState::Paused => {
                const {
                    &[
                        KeyBinding::new(&["Space"], "Resume"),
                        KeyBinding::new(&["r"], "Restart"),
                        KeyBinding::new(&["q", "Esc"], "Quit"),
                    ]
                }
            }
            SessionState::GameOver => {
                const {
                    &[
                        KeyBinding::new(&["r"], "Restart"),
                        KeyBinding::new(&["q", "Esc"], "Quit"),
                    ]
                }
            }
        }
    }
}

const STATS_ROWS: &[StatsRow<SnakeSession>] = &[
    StatsRow::FullLabel("SCORE:"),
    StatsRow::FullValue(&|session| session.chain().score().to_string()),
    StatsRow::FullLabel("HIGH SCORE:"),
    StatsRow::FullValue(&|session| session.chain().high_score().to_string()),
    StatsRow::FullLabel("TIME:"),
    StatsRow::FullValue(&|session| format_duration(session.duration())),
    StatsRow::Empty,
    StatsRow::LabelValue("LENGTH:", &|session| session.chain().len().to_string()),
    StatsRow::LabelValue("SPEED:", &|session| {
        format!("{:.2}", session.chain().speed())
    }),
];

/// Plays the snake game.
#[derive(Debug)]
pub struct SnakeScreen {
    session: SnakeSession,
    fps: f64,
    high_scores: HighScores,
}

impl SnakeScreen {
    pub fn new(options: &GameOptions, high_scores: HighScores) -> Self {
        let seed = options.seed.unwrap_or_else(GameSeed::random);
        tracing::info!(%seed, "starting snake game");
        let mut chain = SegmentChain::with_rng(seed.rng());
        chain.raise_high_score(high_scores.snake());
        Self {
            session: SnakeSession::from_chain(chain),
            fps: options.fps,
            high_scores,
        }
    }
}

impl Screen for SnakeScreen {
    fn on_active(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_rate(Some(self.fps));
        runtime.set_render_mode(RenderMode::throttled_from_rate(self.fps));
    }

    fn on_close(&mut self, _runtime: &mut Runtime) {
        let chain = self.session.chain();
        self.high_scores
            .record_snake(chain.high_score().max(chain.score()));
        tracing::info!(
            score = chain.score(),
            high_score = self.high_scores.snake(),
            "leaving snake game"
        );
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) -> ScreenTransition {
        if let Some(event) = event.as_key_event()
            && let Some(action) = Action::from_key_event(&event)
        {
            match action {
                Action::Game(command) => self.session.apply(command),
                Action::Quit => return ScreenTransition::Pop,
            }
        }
        ScreenTransition::Stay
    }

    fn update(&mut self, _runtime: &mut Runtime, elapsed: Duration) {
        if let Some(outcome) = self.session.tick(elapsed)
            && outcome.is_died()
        {
            self.high_scores
                .record_snake(self.session.chain().high_score());
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let state = self.session.session_state();
        let border_style = match state {
            SessionState::Playing => style::DEFAULT,
            SessionState::Paused => style::PAUSED,
            SessionState::GameOver => style::GAME_OVER,
        };
        let panel = |title: &'static str| {
            Block::bordered()
                .title(Line::from(title).centered())
                .border_style(border_style)
                .style(style::DEFAULT)
        };

        let field = FieldDisplay::new(self.session.chain()).block(panel("SNAKE"));
        let stats = StatsDisplay::new(&self.session, STATS_ROWS).block(panel("STATS"));
        let help = KeyBindingDisplay::new(Action::bindings(state));

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(field.height()), Constraint::Length(1)])
                .flex(Flex::Center)
                .areas(frame.area());
        let [field_area, stats_area] = Layout::horizontal([
            Constraint::Length(field.width()),
            Constraint::Length(stats.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(main_area);
        let [stats_area] = Layout::vertical([Constraint::Length(stats.height())]).areas(stats_area);

        frame.render_widget(field, field_area);
        frame.render_widget(stats, stats_area);
        frame.render_widget(help, help_area);
        frame.render_widget(
            StateOverlay::new(state).hint("press r to restart"),
            field_area,
        );
    }
}
