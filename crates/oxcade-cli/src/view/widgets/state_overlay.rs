use oxcade_engine::SessionState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Widget},
};

use super::style;

/// Banner drawn over the playing field while paused or after game over.
///
/// Renders nothing while playing.
#[derive(Debug)]
pub struct StateOverlay<'a> {
    state: SessionState,
    hint: Option<&'a str>,
}

impl<'a> StateOverlay<'a> {
    pub fn new(state: SessionState) -> Self {
        Self { state, hint: None }
    }

    /// Adds a second line under the banner text.
    pub fn hint(self, hint: &'a str) -> Self {
        Self {
            hint: Some(hint),
            ..self
        }
    }

    fn banner(&self) -> Option<(&'static str, Style)> {
        match self.state {
            SessionState::Playing => None,
            SessionState::Paused => Some(("PAUSED", style::PAUSED)),
            SessionState::GameOver => Some(("GAME OVER!!", style::GAME_OVER)),
        }
    }
}

impl Widget for StateOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some((text, style)) = self.banner() else {
            return;
        };
        let mut lines = vec![Line::from(text)];
        lines.extend(self.hint.map(Line::from));
        let text_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);

        let block = Block::new().style(style);
        let area = area.centered(
            Constraint::Length(area.width),
            Constraint::Length(text_height + 2),
        );
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);
        Text::from(lines).style(style).centered().render(
            inner.centered_vertically(Constraint::Length(text_height)),
            buf,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(overlay: StateOverlay<'_>) -> Buffer {
        let area = Rect::new(0, 0, 20, 9);
        let mut buf = Buffer::empty(area);
        overlay.render(area, &mut buf);
        buf
    }

    #[test]
    fn test_playing_draws_nothing() {
        let buf = render(StateOverlay::new(SessionState::Playing));
        assert_eq!(buf, Buffer::empty(Rect::new(0, 0, 20, 9)));
    }

    #[test]
    fn test_game_over_banner_is_centered() {
        let buf = render(StateOverlay::new(SessionState::GameOver).hint("r: restart"));
        let row = |y: u16| (0..20u16).map(|x| buf[(x, y)].symbol()).collect::<String>();
        assert_eq!(row(3).trim(), "GAME OVER!!");
        assert_eq!(row(4).trim(), "r: restart");
        assert_eq!(buf[(0, 3)].style().bg, style::GAME_OVER.bg);
    }
}
