use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::presentation::view_models::{GridHeaderViewModel, RowViewModel};

/// The record table: header with tri-state checkbox, one row per cached
/// row view model, cursor highlight via `TableState`.
pub struct GridView<'a> {
    header: &'a GridHeaderViewModel,
    rows: &'a [RowViewModel],
}

impl<'a> GridView<'a> {
    pub fn new(header: &'a GridHeaderViewModel, rows: &'a [RowViewModel]) -> Self {
        Self { header, rows }
    }
}

impl<'a> StatefulWidget for GridView<'a> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut TableState) {
        let block = Block::default().borders(Borders::ALL);

        if self.rows.is_empty() {
            let empty = Paragraph::new("No records match the current view.").block(block);
            empty.render(area, buf);
            return;
        }

        let mut header_cells = vec![Cell::from(self.header.checkbox_cell())];
        header_cells.extend(
            self.header
                .columns
                .iter()
                .map(|column| Cell::from(column.as_str())),
        );
        let header = Row::new(header_cells).style(Style::default().add_modifier(Modifier::BOLD));

        let rows = self.rows.iter().map(|row| {
            let style = if row.selected {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            Row::new([
                Cell::from(row.checkbox()),
                Cell::from(row.name.as_str()),
                Cell::from(row.category.as_str()),
                Cell::from(row.modified_by.as_str()),
                Cell::from(row.created_by.as_str()),
                Cell::from(row.modified_at.as_str()),
            ])
            .style(style)
        });

        let widths = [
            Constraint::Length(3),
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(18),
            Constraint::Length(18),
            Constraint::Length(17),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        StatefulWidget::render(table, area, buf, state);
    }
}
