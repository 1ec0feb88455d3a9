use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use oxcade_engine::{BlockCommand, BlockSession, GameSeed, SessionState};
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
        GridDisplay, KeyBinding, KeyBindingDisplay, StateOverlay, StatsDisplay, StatsRow,
        format_duration, style,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Game(BlockCommand),
    Quit,
}

const KEY_MAP: &[(KeyCode, Action)] = &[
    (KeyCode::Left, Action::Game(BlockCommand::MoveLeft)),
    (KeyCode::Right, Action::Game(BlockCommand::MoveRight)),
    (KeyCode::Down, Action::Game(BlockCommand::SoftDrop)),
    (KeyCode::Up, Action::Game(BlockCommand::Rotate)),
    (KeyCode::Char(' '), Action::Game(BlockCommand::HardDrop)),
    (KeyCode::Char('p'), Action::Game(BlockCommand::TogglePause)),
    (KeyCode::Char('r'), Action::Game(BlockCommand::Reset)),
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
                        KeyBinding::new(&["←", "→"], "Move"),
                        KeyBinding::new(&["↓"], "Soft Drop"),
                        KeyBinding::new(&["↑"], "Rotate"),
                        KeyBinding::new(&["Space"], "Hard Drop"),
                        KeyBinding::new(&["p"], "Pause"),
                        KeyBinding::new(&["q", "Esc"], "Quit"),
                    ]
                }
            }
            SessionState::Paused => {
                const {
                    &[
                        KeyBinding::new(&["p"], "Resume"),
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

const STATS_ROWS: &[StatsRow<BlockSession>] = &[
    StatsRow::FullLabel("SCORE:"),
    StatsRow::FullValue(&|session| session.stack().score().to_string()),
    StatsRow::FullLabel("TIME:"),
    StatsRow::FullValue(&|session| format_duration(session.duration())),
    StatsRow::Empty,
    StatsRow::LabelValue("LINES:", &|session| {
        session.stack().stats().cleared_lines().to_string()
    }),
    StatsRow::LabelValue("PIECES:", &|session| {
        session.stack().stats().locked_pieces().to_string()
    }),
    StatsRow::Empty,
    StatsRow::LabelValue("SINGLES:", &|session| {
        session.stack().stats().line_cleared_counter()[1].to_string()
    }),
    StatsRow::LabelValue("DOUBLES:", &|session| {
        session.stack().stats().line_cleared_counter()[2].to_string()
    }),
    StatsRow::LabelValue("TRIPLES:", &|session| {
        session.stack().stats().line_cleared_counter()[3].to_string()
    }),
    StatsRow::LabelValue("QUADS:", &|session| {
        session.stack().stats().line_cleared_counter()[4].to_string()
    }),
];

/// Plays the falling-block game.
#[derive(Debug)]
pub struct BlocksScreen {
    session: BlockSession,
    fps: f64,
    high_scores: HighScores,
}

impl BlocksScreen {
    pub fn new(options: &GameOptions, high_scores: HighScores) -> Self {
        let seed = options.seed.unwrap_or_else(GameSeed::random);
        tracing::info!(%seed, "starting blocks game");
        Self {
            session: BlockSession::with_seed(seed),
            fps: options.fps,
            high_scores,
        }
    }

    fn apply(&mut self, command: BlockCommand) {
        // Restarting is only offered once the game is over
        if command == BlockCommand::Reset && !self.session.session_state().is_game_over() {
            return;
        }
        self.session.apply(command);
    }
}

impl Screen for BlocksScreen {
    fn on_active(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_rate(Some(self.fps));
        runtime.set_render_mode(RenderMode::throttled_from_rate(self.fps));
    }

    fn on_close(&mut self, _runtime: &mut Runtime) {
        let score = self.session.stack().score();
        self.high_scores.record_blocks(score);
        tracing::info!(score, "leaving blocks game");
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) -> ScreenTransition {
        if let Some(event) = event.as_key_event()
            && let Some(action) = Action::from_key_event(&event)
        {
            match action {
                Action::Game(command) => self.apply(command),
                Action::Quit => return ScreenTransition::Pop,
            }
        }
        ScreenTransition::Stay
    }

    fn update(&mut self, _runtime: &mut Runtime, elapsed: Duration) {
        if let Some(outcome) = self.session.tick(elapsed)
            && outcome.is_game_over
        {
            self.high_scores.record_blocks(self.session.stack().score());
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

        let stack = self.session.stack();
        let grid = GridDisplay::new(stack.grid()).block(panel("BLOCKS"));
        let grid = if state.is_game_over() {
            grid
        } else {
            grid.active_piece(*stack.active_piece())
        };
        let stats = StatsDisplay::new(&self.session, STATS_ROWS).block(panel("STATS"));
        let help = KeyBindingDisplay::new(Action::bindings(state));

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(grid.height()), Constraint::Length(1)])
                .flex(Flex::Center)
                .areas(frame.area());
        let [grid_area, stats_area] = Layout::horizontal([
            Constraint::Length(grid.width()),
            Constraint::Length(stats.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(main_area);
        let [stats_area] = Layout::vertical([Constraint::Length(stats.height())]).areas(stats_area);

        frame.render_widget(grid, grid_area);
        frame.render_widget(stats, stats_area);
        frame.render_widget(help, help_area);

        let overlay = StateOverlay::new(state);
        let overlay = if state.is_game_over() {
            overlay.hint("press r to restart")
        } else {
            overlay
        };
        frame.render_widget(overlay, grid_area);
    }
}
