use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use super::style;

/// A row of a [`StatsDisplay`], reading its value from the game state `S`.
pub enum StatsRow<S: 'static> {
    Empty,
    FullLabel(&'static str),
    FullValue(&'static dyn Fn(&S) -> String),
    LabelValue(&'static str, &'static dyn Fn(&S) -> String),
}

// Derives would require `S: Clone`
impl<S: 'static> Clone for StatsRow<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for StatsRow<S> {}

/// Side panel of labelled values.
pub struct StatsDisplay<'a, S: 'static> {
    state: &'a S,
    rows: &'static [StatsRow<S>],
    block: Option<BlockWidget<'a>>,
}

impl<'a, S: 'static> StatsDisplay<'a, S> {
    pub fn new(state: &'a S, rows: &'static [StatsRow<S>]) -> Self {
        Self {
            state,
            rows,
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
        20 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(self.rows.len()).unwrap_or(u16::MAX)
            + super::block_vertical_margin(self.block.as_ref())
    }
}

impl<S: 'static> Widget for StatsDisplay<'_, S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;

        let rows_areas =
            Layout::vertical((0..self.rows.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(self.rows.iter().copied(), rows_areas.iter().copied()) {
            match row {
                StatsRow::Empty => {}
                StatsRow::FullLabel(label) => {
                    Line::styled(label, style).left_aligned().render(area, buf);
                }
                StatsRow::FullValue(value) => {
                    Line::styled(value(self.state), style)
                        .right_aligned()
                        .render(area, buf);
                }
                StatsRow::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(self.state), style)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
