use std::time::Duration;

use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    cell_display::*, field_display::*, grid_display::*, key_binding_display::*, menu_display::*,
    state_overlay::*, stats_display::*,
};

mod cell_display;
mod field_display;
mod grid_display;
mod key_binding_display;
mod menu_display;
mod state_overlay;
mod stats_display;

pub mod color {
    use ratatui::style::Color;

    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const DARK_GREEN: Color = Color::Rgb(0, 160, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
    pub const ORANGE: Color = Color::Rgb(255, 127, 0);
    pub const MAGENTA: Color = Color::Rgb(255, 0, 255);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Style};

    use super::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY: Style = bg_only(color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::GRAY, color::BLACK);

    pub const I_BLOCK: Style = bg_only(color::CYAN);
    pub const O_BLOCK: Style = bg_only(color::YELLOW);
    pub const S_BLOCK: Style = bg_only(color::GREEN);
    pub const Z_BLOCK: Style = bg_only(color::RED);
    pub const J_BLOCK: Style = bg_only(color::BLUE);
    pub const L_BLOCK: Style = bg_only(color::ORANGE);
    pub const T_BLOCK: Style = bg_only(color::MAGENTA);

    pub const SNAKE_HEAD: Style = bg_only(color::GREEN);
    pub const SNAKE_BODY: Style = bg_only(color::DARK_GREEN);
    pub const FOOD: Style = fg_bg(color::RED, color::BLACK);

    pub const PAUSED: Style = fg_bg(color::BLACK, color::YELLOW);
    pub const GAME_OVER: Style = fg_bg(color::WHITE, color::RED);
    pub const SELECTED: Style = fg_bg(color::BLACK, color::CYAN);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}

/// Formats a play time as `m:ss.cc`.
pub fn format_duration(dur: Duration) -> String {
    format!(
        "{}:{:0>2}.{:0>2}",
        dur.as_secs() / 60,
        dur.as_secs() % 60,
        dur.subsec_millis() / 10
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::ZERO), "0:00.00");
        assert_eq!(format_duration(Duration::from_millis(75_430)), "1:15.43");
    }

    #[test]
    fn test_bordered_block_margins() {
        let block = BlockWidget::bordered();
        assert_eq!(block_horizontal_margin(Some(&block)), 2);
        assert_eq!(block_vertical_margin(Some(&block)), 2);
        assert_eq!(block_horizontal_margin(None), 0);
    }
}
