use crate::ui::spacing::Spacing;
use crate::ui::theme::{ACCENT, BUTTON_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// Bordered, filled button. It draws a label and nothing else; clicks are
/// routed by whoever placed it.
pub struct PrimaryButton<'a> {
    text: &'a str,
}

impl<'a> PrimaryButton<'a> {
    pub const HEIGHT: u16 = 3;

    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Label plus horizontal padding plus borders.
    pub fn width(&self) -> u16 {
        let label = u16::try_from(self.text.chars().count()).unwrap_or(u16::MAX);
        label.saturating_add(2 * Spacing::SM + 2)
    }
}

impl Widget for PrimaryButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(BUTTON_TEXT)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .style(style);
        Paragraph::new(self.text)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_includes_padding_and_borders() {
        assert_eq!(PrimaryButton::new("Increment").width(), 9 + 4 + 2);
    }
}
