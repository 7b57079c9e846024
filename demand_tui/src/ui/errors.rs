//! Error-distribution panel: train and test histograms side by side.

use demand_insight::DashboardReport;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::widgets::create_error_chart;

/// Draw the two error-distribution panels: training error (green) and
/// testing error (red), each with its density overlay.
pub fn draw_errors_panel(frame: &mut Frame, area: Rect, app: &App, report: &DashboardReport) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    if report.forecast.is_empty() {
        draw_no_data(frame, chunks[0], "Training Error Distribution");
        draw_no_data(frame, chunks[1], "Testing Error Distribution");
        return;
    }

    let train = create_error_chart(
        &app.chart_data.train_bars,
        &app.chart_data.train_density,
        "Training Error Distribution",
        Color::Green,
    );
    frame.render_widget(train, chunks[0]);

    let test = create_error_chart(
        &app.chart_data.test_bars,
        &app.chart_data.test_density,
        "Testing Error Distribution",
        Color::Red,
    );
    frame.render_widget(test, chunks[1]);
}

fn draw_no_data(frame: &mut Frame, area: Rect, title: &str) {
    let placeholder = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .style(Style::default().fg(Color::DarkGray));

    let inner = placeholder.inner(area);
    frame.render_widget(placeholder, area);

    let msg = Paragraph::new("No errors to bin")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(msg, inner);
}
