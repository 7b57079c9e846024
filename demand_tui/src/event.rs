//! Event handling for the TUI.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::app::{App, Panel};

/// Handle keyboard events.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,

        // Selection control; each move re-runs the pipeline
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),

        // Panel navigation
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_panel(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.previous_panel(),
        KeyCode::Char('1') => app.panel = Panel::Overview,
        KeyCode::Char('2') => app.panel = Panel::Forecast,
        KeyCode::Char('3') => app.panel = Panel::Errors,

        _ => {}
    }
}

/// Poll for events with a timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}
