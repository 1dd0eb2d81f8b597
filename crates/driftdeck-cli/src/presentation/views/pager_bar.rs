use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::PagerViewModel;

/// Single-line pager: position, size, and prev/next affordances
pub struct PagerBarView<'a> {
    model: &'a PagerViewModel,
}

impl<'a> PagerBarView<'a> {
    pub fn new(model: &'a PagerViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for PagerBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dim = Style::default().add_modifier(Modifier::DIM);
        let plain = Style::default();

        let prev_style = if self.model.has_prev { plain } else { dim };
        let next_style = if self.model.has_next { plain } else { dim };

        let line = Line::from(vec![
            Span::styled("h prev", prev_style),
            Span::raw(format!(
                "  page {}/{}  ",
                self.model.effective_page, self.model.total_pages
            )),
            Span::styled("l next", next_style),
            Span::raw(format!(
                "  |  {}/page (z)  |  {} items",
                self.model.page_size, self.model.item_count
            )),
        ]);

        Paragraph::new(line).render(area, buf);
    }
}
