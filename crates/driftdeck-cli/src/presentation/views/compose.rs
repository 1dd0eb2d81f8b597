use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::presentation::view_models::{ComposeField, ComposeViewModel};

/// Centered commit overlay: message and ticket inputs plus key hints
pub struct ComposeView<'a> {
    model: &'a ComposeViewModel,
}

impl<'a> ComposeView<'a> {
    pub fn new(model: &'a ComposeViewModel) -> Self {
        Self { model }
    }

    /// Centered area for the overlay within `area`
    pub fn overlay_area(area: Rect) -> Rect {
        let width = area.width.saturating_sub(8).clamp(30, 64).min(area.width);
        let height = 7;
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width, height.min(area.height))
    }
}

impl<'a> Widget for ComposeView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let overlay = Self::overlay_area(area);
        Clear.render(overlay, buf);

        let block = Block::default()
            .title(format!(" Commit {} records ", self.model.item_count))
            .borders(Borders::ALL);
        let inner = block.inner(overlay);
        block.render(overlay, buf);

        let focused = Style::default().add_modifier(Modifier::BOLD);
        let blurred = Style::default();
        let (message_style, ticket_style) = match self.model.field {
            ComposeField::Message => (focused, blurred),
            ComposeField::Ticket => (blurred, focused),
        };

        let cursor = |field: ComposeField| {
            if self.model.field == field {
                "_"
            } else {
                ""
            }
        };

        let lines = vec![
            Line::from(Span::styled(
                format!(
                    "Message: {}{}",
                    self.model.message,
                    cursor(ComposeField::Message)
                ),
                message_style,
            )),
            Line::from(Span::styled(
                format!(
                    "Ticket:  {}{}",
                    self.model.ticket,
                    cursor(ComposeField::Ticket)
                ),
                ticket_style,
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Enter submit   Tab switch field   Esc cancel",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
