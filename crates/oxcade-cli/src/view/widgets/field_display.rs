use oxcade_engine::{PLAYABLE_HEIGHT, PLAYABLE_WIDTH, Position, SegmentChain};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use super::CellDisplay;

/// The snake's playable area with body and food.
#[derive(Debug)]
pub struct FieldDisplay<'a> {
    chain: &'a SegmentChain,
    block: Option<BlockWidget<'a>>,
}

impl<'a> FieldDisplay<'a> {
    pub fn new(chain: &'a SegmentChain) -> Self {
        Self { chain, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn width(&self) -> u16 {
        PLAYABLE_WIDTH as u16 * CellDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn height(&self) -> u16 {
        PLAYABLE_HEIGHT as u16 * CellDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }
}

/// Returns the terminal area of a field cell, if it is visible in `area`.
fn cell_area(area: Rect, pos: Position) -> Option<Rect> {
    let x = u16::try_from(pos.x)
        .ok()?
        .checked_mul(CellDisplay::width())?;
    let y = u16::try_from(pos.y)
        .ok()?
        .checked_mul(CellDisplay::height())?;
    let cell = Rect::new(
        area.x.checked_add(x)?,
        area.y.checked_add(y)?,
        CellDisplay::width(),
        CellDisplay::height(),
    );
    area.contains(cell.as_position())
        .then(|| cell.intersection(area))
}

impl Widget for FieldDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &FieldDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        for y in 0..PLAYABLE_HEIGHT {
            for x in 0..PLAYABLE_WIDTH {
                if let Some(cell) = cell_area(area, Position::new(x, y)) {
                    CellDisplay::EMPTY.render(cell, buf);
                }
            }
        }
        if let Some(food) = self.chain.food()
            && let Some(cell) = cell_area(area, food)
        {
            CellDisplay::FOOD.render(cell, buf);
        }
        for (i, pos) in self.chain.body().iter().enumerate() {
            let display = if i == 0 {
                CellDisplay::SNAKE_HEAD
            } else {
                CellDisplay::SNAKE_BODY
            };
            if let Some(cell) = cell_area(area, *pos) {
                display.render(cell, buf);
            }
        }
    }
}
