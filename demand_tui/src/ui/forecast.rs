//! Forecast panel: actual vs predicted demand line chart.

use demand_insight::DashboardReport;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::widgets::create_demand_chart;

/// Draw the demand chart, or an empty-axes placeholder when the
/// selected stock code has no rows.
pub fn draw_forecast_panel(frame: &mut Frame, area: Rect, app: &App, report: &DashboardReport) {
    if report.forecast.is_empty() {
        draw_no_data(frame, area, &report.stock_code);
        return;
    }

    let chart = create_demand_chart(
        &app.chart_data.actual,
        &app.chart_data.predicted,
        report.forecast.actual.dates(),
        &report.stock_code,
    );
    frame.render_widget(chart, area);
}

fn draw_no_data(frame: &mut Frame, area: Rect, stock_code: &str) {
    let placeholder = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Actual vs Predicted Demand for {} ", stock_code))
        .style(Style::default().fg(Color::DarkGray));

    let inner = placeholder.inner(area);
    frame.render_widget(placeholder, area);

    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Percentage(45),
        ])
        .split(inner);
    let msg = Paragraph::new("No demand rows for this stock code")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(msg, centered[1]);
}
