use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::StatusViewModel;

/// Two lines: filter readouts on top, key hints and the busy indicator
/// below.
pub struct StatusBarView<'a> {
    model: &'a StatusViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dim = Style::default().add_modifier(Modifier::DIM);

        let mut filter_spans = vec![
            Span::raw(format!("/ name: {}", self.model.filter_name)),
            Span::raw(format!("  b author: {}", self.model.filter_modified_by)),
            Span::raw(format!(
                "  g category: {}",
                self.model.filter_category.as_deref().unwrap_or("(all)")
            )),
        ];
        if let Some(hint) = &self.model.editing_hint {
            filter_spans.push(Span::styled(
                format!("  [{}]", hint),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }

        let mut hint_spans = vec![Span::styled(
            "space select  a page  t tab  1-4 sort  c commit  r refresh  q quit",
            dim,
        )];
        if let Some(busy) = &self.model.busy {
            hint_spans.push(Span::raw("  "));
            hint_spans.push(Span::styled(
                busy.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }

        let lines = vec![Line::from(filter_spans), Line::from(hint_spans)];
        Paragraph::new(lines).render(area, buf);
    }
}
