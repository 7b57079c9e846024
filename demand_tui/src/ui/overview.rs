//! Overview panel: column list and raw-table preview.

use demand_insight::DashboardReport;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

/// Draw the column list and the head preview of the raw table.
pub fn draw_overview_panel(frame: &mut Frame, area: Rect, report: &DashboardReport) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(area);

    draw_column_list(frame, chunks[0], report);
    draw_preview_table(frame, chunks[1], report);
}

fn draw_column_list(frame: &mut Frame, area: Rect, report: &DashboardReport) {
    let columns = Paragraph::new(report.columns.join(", "))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Available columns in the DataFrame "),
        );

    frame.render_widget(columns, area);
}

fn draw_preview_table(frame: &mut Frame, area: Rect, report: &DashboardReport) {
    let header = Row::new(
        report
            .columns
            .iter()
            .map(|name| Cell::from(name.as_str()))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = report
        .preview
        .iter()
        .map(|cells| {
            Row::new(
                cells
                    .iter()
                    .map(|cell| Cell::from(cell.as_str()))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let widths = vec![Constraint::Fill(1); report.columns.len().max(1)];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Raw Table (head) "),
    );

    frame.render_widget(table, area);
}
