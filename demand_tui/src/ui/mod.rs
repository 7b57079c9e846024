//! UI module for the TUI.

mod errors;
mod forecast;
mod layout;
mod overview;
mod sidebar;

pub use layout::draw_ui;
