use oxcade_engine::{Cell, ShapeKind};
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use super::style;

/// One game cell drawn two columns wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    pub const EMPTY: Self = Self::new(style::EMPTY, "");
    pub const EMPTY_DOT: Self = Self::new(style::EMPTY_DOT, ".");
    pub const SNAKE_HEAD: Self = Self::new(style::SNAKE_HEAD, "");
    pub const SNAKE_BODY: Self = Self::new(style::SNAKE_BODY, "");
    pub const FOOD: Self = Self::new(style::FOOD, "()");

    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub const fn width() -> u16 {
        2
    }

    pub const fn height() -> u16 {
        1
    }

    pub const fn from_cell(cell: Cell, show_dots: bool) -> Self {
        match cell {
            Cell::Empty if show_dots => Self::EMPTY_DOT,
            Cell::Empty => Self::EMPTY,
            Cell::Filled(kind) => Self::new(shape_style(kind), ""),
        }
    }
}

/// Color of a shape kind.
pub const fn shape_style(kind: ShapeKind) -> Style {
    match kind {
        ShapeKind::I => style::I_BLOCK,
        ShapeKind::O => style::O_BLOCK,
        ShapeKind::T => style::T_BLOCK,
        ShapeKind::L => style::L_BLOCK,
        ShapeKind::J => style::J_BLOCK,
        ShapeKind::S => style::S_BLOCK,
        ShapeKind::Z => style::Z_BLOCK,
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Paragraph fills the whole area, not just the cells under the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
