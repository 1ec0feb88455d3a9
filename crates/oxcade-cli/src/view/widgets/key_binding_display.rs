use ratatui::{
    prelude::{Buffer, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

/// Keys triggering one action, with a short description.
#[derive(Debug, Clone, Copy)]
pub struct KeyBinding {
    pub keys: &'static [&'static str],
    pub description: &'static str,
}

impl KeyBinding {
    pub const fn new(keys: &'static [&'static str], description: &'static str) -> Self {
        Self { keys, description }
    }
}

/// Single-line help listing key bindings.
#[derive(Debug)]
pub struct KeyBindingDisplay<'a> {
    bindings: &'a [KeyBinding],
    block: Option<BlockWidget<'a>>,
}

impl<'a> KeyBindingDisplay<'a> {
    pub fn new(bindings: &'a [KeyBinding]) -> Self {
        Self {
            bindings,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    fn line(&self) -> Line<'a> {
        let mut spans = vec![];
        for (i, binding) in self.bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", SEPARATOR_STYLE));
            }
            for (i, key) in binding.keys.iter().copied().enumerate() {
                if i > 0 {
                    spans.push(Span::styled("/", SEPARATOR_STYLE));
                }
                spans.push(Span::styled(key, KEY_STYLE));
            }
            spans.push(Span::from(" "));
            spans.push(Span::styled(binding.description, DESCRIPTION_STYLE));
        }
        Line::from(spans).centered()
    }
}

const KEY_STYLE: Style = Style::new().fg(Color::Cyan);
const DESCRIPTION_STYLE: Style = Style::new().fg(Color::White);
const SEPARATOR_STYLE: Style = Style::new().fg(Color::DarkGray);

impl Widget for KeyBindingDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);
        self.line().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_lists_keys_and_descriptions() {
        let bindings = [
            KeyBinding::new(&["←", "→"], "Move"),
            KeyBinding::new(&["q"], "Quit"),
        ];
        let line = KeyBindingDisplay::new(&bindings).line();
        assert_eq!(line.to_string(), "←/→ Move | q Quit");
    }
}
