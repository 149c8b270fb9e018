// Components module - reusable UI building blocks
//
// Shell components are rendered on every screen:
// - Title bar: menu title and screen tabs
// - Status bar: key hints and the latest log line
//
// Content components are shared by the screens that list dishes:
// - Menu list: one row per dish
// - Summary: count and per-course averages
// - Flash: the "Menu updated" overlay

pub mod flash;
pub mod menu_list;
pub mod status_bar;
pub mod summary;
pub mod title_bar;

pub use flash::Flash;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}
