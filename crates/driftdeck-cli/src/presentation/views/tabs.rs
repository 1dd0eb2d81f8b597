use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use driftdeck_engine::Tab;

use crate::presentation::view_models::TabsViewModel;

/// Tab strip: "All" and "Selected" with the selection badge
pub struct TabsView<'a> {
    model: &'a TabsViewModel,
}

impl<'a> TabsView<'a> {
    pub fn new(model: &'a TabsViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for TabsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let active = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        let inactive = Style::default().add_modifier(Modifier::DIM);

        let (all_style, selected_style) = match self.model.tab {
            Tab::All => (active, inactive),
            Tab::Selected => (inactive, active),
        };

        let line = Line::from(vec![
            Span::styled(format!(" All ({}) ", self.model.all_count), all_style),
            Span::raw(" "),
            Span::styled(
                format!(" Selected ({}) ", self.model.selected_count),
                selected_style,
            ),
            Span::raw("   "),
            Span::styled(
                format!("source: {}", self.model.source),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]);

        Paragraph::new(line).render(area, buf);
    }
}
