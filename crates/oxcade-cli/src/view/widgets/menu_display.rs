use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use super::style;

/// One selectable line of a [`MenuDisplay`].
#[derive(Debug, Clone)]
pub struct MenuEntry<'a> {
    pub label: &'a str,
    pub detail: String,
}

/// Vertical list of entries with one highlighted.
#[derive(Debug)]
pub struct MenuDisplay<'a> {
    entries: &'a [MenuEntry<'a>],
    selected: usize,
    block: Option<BlockWidget<'a>>,
}

impl<'a> MenuDisplay<'a> {
    pub fn new(entries: &'a [MenuEntry<'a>], selected: usize) -> Self {
        Self {
            entries,
            selected,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        32 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(self.entries.len()).unwrap_or(u16::MAX)
            + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for MenuDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let rows = Layout::vertical(self.entries.iter().map(|_| Constraint::Length(1))).split(area);
        for (i, (entry, area)) in self.entries.iter().zip(rows.iter()).enumerate() {
            let style = if i == self.selected {
                style::SELECTED
            } else {
                style::DEFAULT
            };
            let marker = if i == self.selected { "> " } else { "  " };
            let [label_area, detail_area] = area.layout(&Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Fill(1),
            ]));
            Line::from(vec![Span::raw(marker), Span::raw(entry.label)])
                .style(style)
                .render(label_area, buf);
            Line::from(entry.detail.as_str())
                .style(style)
                .right_aligned()
                .render(detail_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_entry_is_highlighted() {
        let entries = [
            MenuEntry {
                label: "Blocks",
                detail: "BEST 0".to_owned(),
            },
            MenuEntry {
                label: "Snake",
                detail: "BEST 30".to_owned(),
            },
        ];
        let display = MenuDisplay::new(&entries, 1);
        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);

        display.render(area, &mut buf);

        let row = |y: u16| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        };
        assert!(row(0).starts_with("  Blocks"));
        assert!(row(1).starts_with("> Snake"));
        assert!(row(1).ends_with("BEST 30"));
        assert_eq!(buf[(0, 1)].style().bg, style::SELECTED.bg);
        assert_eq!(buf[(0, 0)].style().bg, style::DEFAULT.bg);
    }
}
