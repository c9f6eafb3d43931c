//! The counter screen.

use crate::ui::counter::CounterState;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::primary_button::PrimaryButton;
use crate::ui::spacing::Spacing;
use crate::ui::theme::{HEADER_TEXT, PARITY_EVEN, PARITY_ODD};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

pub const BUTTON_LABEL: &str = "Increment";

/// Where each piece of the screen lands inside the body area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub count: Rect,
    pub parity: Rect,
    pub button: Rect,
}

/// Stateless view of one [`CounterState`] snapshot.
///
/// It borrows the snapshot for a single frame and owns nothing; the
/// increment intent is wired up by the caller using [`ScreenLayout::button`].
pub struct CounterScreen<'a> {
    state: &'a CounterState,
}

impl<'a> CounterScreen<'a> {
    pub fn new(state: &'a CounterState) -> Self {
        Self { state }
    }

    pub fn layout(&self, area: Rect) -> ScreenLayout {
        let button = PrimaryButton::new(BUTTON_LABEL);
        let height = 1 + Spacing::XS + 1 + Spacing::LG + PrimaryButton::HEIGHT;
        let content = centered_rect_by_size(area, area.width, height);

        let row = |offset: u16, height: u16| {
            Rect {
                x: content.x,
                y: content.y.saturating_add(offset),
                width: content.width,
                height,
            }
            .intersection(content)
        };

        let button_row = row(1 + Spacing::XS + 1 + Spacing::LG, PrimaryButton::HEIGHT);
        let button_width = button.width().min(button_row.width);
        let button_rect = Rect {
            x: button_row.x + (button_row.width - button_width) / 2,
            width: button_width,
            ..button_row
        };

        ScreenLayout {
            count: row(0, 1),
            parity: row(1 + Spacing::XS, 1),
            button: button_rect,
        }
    }

    fn count_line(&self) -> Line<'static> {
        Line::from(Span::styled(
            format!("Count: {}", self.state.count()),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn parity_line(&self) -> Line<'static> {
        let (label, color) = if self.state.is_even() {
            ("Even", PARITY_EVEN)
        } else {
            ("Odd", PARITY_ODD)
        };
        Line::from(Span::styled(label, Style::default().fg(color)))
    }
}

impl Widget for CounterScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.layout(area);

        if !layout.count.is_empty() {
            Paragraph::new(self.count_line())
                .alignment(Alignment::Center)
                .render(layout.count, buf);
        }
        if !layout.parity.is_empty() {
            Paragraph::new(self.parity_line())
                .alignment(Alignment::Center)
                .render(layout.parity, buf);
        }
        if !layout.button.is_empty() {
            PrimaryButton::new(BUTTON_LABEL).render(layout.button, buf);
        }
    }
}
