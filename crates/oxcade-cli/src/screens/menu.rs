use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    text::Line,
    widgets::Block,
};
use ratatui_runtime::{RenderMode, Runtime, Screen, ScreenTransition};

use crate::{
    screens::{BlocksScreen, GameOptions, HighScores, SnakeScreen},
    view::widgets::{KeyBinding, KeyBindingDisplay, MenuDisplay, MenuEntry, style},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Game {
    Blocks,
    Snake,
}

impl Game {
    const ALL: [Self; 2] = [Self::Blocks, Self::Snake];

    fn label(self) -> &'static str {
        match self {
            Game::Blocks => "Blocks",
            Game::Snake => "Snake",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Prev,
    Next,
    Start,
    Quit,
}

impl Action {
    fn from_key_event(event: &KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        match event.code {
            KeyCode::Char('k') | KeyCode::Up => Some(Self::Prev),
            KeyCode::Char('j') | KeyCode::Down => Some(Self::Next),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Self::Start),
            KeyCode::Char('q') | KeyCode::Esc => Some(Self::Quit),
            _ => None,
        }
    }

    fn bindings() -> &'static [KeyBinding] {
        const {
            &[
                KeyBinding::new(&["↑", "↓"], "Select"),
                KeyBinding::new(&["Enter"], "Play"),
                KeyBinding::new(&["q", "Esc"], "Quit"),
            ]
        }
    }
}

/// Game selection, shown when no game is named on the command line.
#[derive(Debug)]
pub struct MenuScreen {
    options: GameOptions,
    high_scores: HighScores,
    selected: usize,
}

impl MenuScreen {
    pub fn new(options: GameOptions, high_scores: HighScores) -> Self {
        Self {
            options,
            high_scores,
            selected: 0,
        }
    }

    fn start(&self) -> Box<dyn Screen> {
        let high_scores = self.high_scores.clone();
        match Game::ALL[self.selected] {
            Game::Blocks => Box::new(BlocksScreen::new(&self.options, high_scores)),
            Game::Snake => Box::new(SnakeScreen::new(&self.options, high_scores)),
        }
    }

    fn entries(&self) -> Vec<MenuEntry<'static>> {
        Game::ALL
            .into_iter()
            .map(|game| {
                let best = match game {
                    Game::Blocks => self.high_scores.blocks(),
                    Game::Snake => self.high_scores.snake(),
                };
                MenuEntry {
                    label: game.label(),
                    detail: format!("BEST {best}"),
                }
            })
            .collect()
    }
}

impl Screen for MenuScreen {
    fn on_active(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_rate(None);
        runtime.set_render_mode(RenderMode::OnDirty);
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) -> ScreenTransition {
        let Some(action) = event
            .as_key_event()
            .and_then(|event| Action::from_key_event(&event))
        else {
            return ScreenTransition::Stay;
        };
        match action {
            Action::Prev => {
                self.selected = (self.selected + Game::ALL.len() - 1) % Game::ALL.len();
            }
            Action::Next => self.selected = (self.selected + 1) % Game::ALL.len(),
            Action::Start => {
                tracing::debug!(game = ?Game::ALL[self.selected], "game selected");
                return ScreenTransition::Push(self.start());
            }
            Action::Quit => return ScreenTransition::Exit,
        }
        ScreenTransition::Stay
    }

    fn update(&mut self, _runtime: &mut Runtime, _elapsed: Duration) {}

    fn draw(&self, frame: &mut Frame) {
        let entries = self.entries();
        let menu = MenuDisplay::new(&entries, self.selected).block(
            Block::bordered()
                .title(Line::from("OXCADE").centered())
                .style(style::DEFAULT),
        );
        let help = KeyBindingDisplay::new(Action::bindings());

        let [menu_area, help_area] =
            Layout::vertical([Constraint::Length(menu.height()), Constraint::Length(1)])
                .flex(Flex::Center)
                .spacing(1)
                .areas(frame.area());
        let [menu_area] = Layout::horizontal([Constraint::Length(menu.width())])
            .flex(Flex::Center)
            .areas(menu_area);

        frame.render_widget(menu, menu_area);
        frame.render_widget(help, help_area);
    }
}
