//! Sidebar: the stock-code selection control.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::App;

/// Draw the "Input Options" sidebar with the stock-code list.
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(area);

    let label = Paragraph::new("Select a Stock Code:").block(
        Block::default()
            .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
            .title(" Input Options "),
    );
    frame.render_widget(label, chunks[0]);

    let items: Vec<ListItem> = app
        .choices
        .iter()
        .map(|code| ListItem::new(code.as_str()))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !app.choices.is_empty() {
        state.select(Some(app.selected));
    }

    frame.render_stateful_widget(list, chunks[1], &mut state);
}
