// Home screen: summary over the full list

use crate::tui::app::App;
use crate::tui::components::{menu_list, summary};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(3)])
        .split(area);

    summary::render(f, chunks[0], app);

    let entries = app.visible_entries();
    menu_list::render(
        f,
        chunks[1],
        app,
        &entries,
        app.screen.heading(),
        menu_list::EMPTY_MENU,
    );
}
