//! Main layout for the dashboard TUI.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
};

use super::errors::draw_errors_panel;
use super::forecast::draw_forecast_panel;
use super::overview::draw_overview_panel;
use super::sidebar::draw_sidebar;
use crate::app::{App, Panel};

/// Draw the main UI layout.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Panel bar
            Constraint::Min(10),   // Content
            Constraint::Length(2), // Footer
        ])
        .split(size);

    draw_panel_bar(frame, chunks[0], app);

    // A failed data-quality gate halts everything: the error message is
    // the whole page, no sidebar, no charts.
    match &app.report {
        Err(err) => draw_gate_error(frame, chunks[1], &err.to_string()),
        Ok(report) => {
            let content = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(26), Constraint::Min(30)])
                .split(chunks[1]);

            draw_sidebar(frame, content[0], app);

            match app.panel {
                Panel::Overview => draw_overview_panel(frame, content[1], report),
                Panel::Forecast => draw_forecast_panel(frame, content[1], app, report),
                Panel::Errors => draw_errors_panel(frame, content[1], app, report),
            }
        }
    }

    draw_footer(frame, chunks[2], app);
}

fn draw_panel_bar(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Panel::all()
        .iter()
        .enumerate()
        .map(|(i, panel)| {
            let style = if *panel == app.panel {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(format!(" {} {} ", i + 1, panel.name())).style(style)
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Demand Forecasting Dashboard "),
        )
        .select(app.panel.index())
        .divider("|");

    frame.render_widget(tabs, area);
}

fn draw_gate_error(frame: &mut Frame, area: Rect, message: &str) {
    let error = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Error "));

    frame.render_widget(error, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let selection = app.selected_code().unwrap_or("-");
    let hints = format!(
        "Stock Code: {selection}    [Up/Down] select  [Tab]/[1-3] panel  [q] quit"
    );

    let footer = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}
