use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::{BannerKind, BannerViewModel};

fn banner_color(kind: BannerKind) -> Color {
    match kind {
        BannerKind::Error => Color::Red,
        BannerKind::Success => Color::Green,
    }
}

/// One-line banner. Errors persist until dismissed; success banners are
/// expired by the app tick.
pub struct BannerView<'a> {
    model: &'a BannerViewModel,
}

impl<'a> BannerView<'a> {
    pub fn new(model: &'a BannerViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for BannerView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let prefix = match self.model.kind {
            BannerKind::Error => "error: ",
            BannerKind::Success => "ok: ",
        };
        let paragraph = Paragraph::new(Span::styled(
            format!("{}{}", prefix, self.model.text),
            Style::default().fg(banner_color(self.model.kind)),
        ));
        paragraph.render(area, buf);
    }
}
