use std::iter;

use oxcade_engine::{GRID_HEIGHT, GRID_WIDTH, Grid, Piece};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use super::CellDisplay;

/// The falling-block grid with the active piece drawn on top.
#[derive(Debug)]
pub struct GridDisplay<'a> {
    grid: &'a Grid,
    active_piece: Option<Piece>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> GridDisplay<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            active_piece: None,
            block: None,
        }
    }

    pub fn active_piece(self, piece: Piece) -> Self {
        Self {
            active_piece: Some(piece),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn width(&self) -> u16 {
        GRID_WIDTH as u16 * CellDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        GRID_HEIGHT as u16 * CellDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for GridDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &GridDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let mut grid = self.grid.clone();
        if let Some(piece) = &self.active_piece {
            grid.fill_piece(piece);
        }

        let col_constraints = (0..GRID_WIDTH).map(|_| Constraint::Length(CellDisplay::width()));
        let row_constraints = (0..GRID_HEIGHT).map(|_| Constraint::Length(CellDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_cells = area
            .layout::<GRID_HEIGHT>(&vertical)
            .into_iter()
            .map(|row| row.layout::<GRID_WIDTH>(&horizontal));

        for (grid_row, row) in iter::zip(grid_cells, grid.rows()) {
            for (grid_cell, cell) in iter::zip(grid_row, row) {
                CellDisplay::from_cell(*cell, true).render(grid_cell, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use oxcade_engine::ShapeKind;

    use super::*;
    use crate::view::widgets::color;

    #[test]
    fn test_active_piece_is_drawn_without_touching_grid() {
        let grid = Grid::EMPTY;
        let display = GridDisplay::new(&grid).active_piece(Piece::spawn(ShapeKind::O));
        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);

        display.render(area, &mut buf);

        // O spawns at column 4, two terminal columns per cell
        assert_eq!(buf[(8, 0)].style().bg, Some(color::YELLOW));
        assert_eq!(buf[(0, 0)].symbol(), ".");
        assert_eq!(grid, Grid::EMPTY);
    }
}
