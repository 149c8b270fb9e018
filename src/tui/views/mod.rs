// Views module - screen-level rendering logic
//
// Each view fills the content slot between the title and status bars:
// - Home: summary and the full menu
// - Add: the add-dish form
// - Filter: course selector and the filtered menu
//
// This module builds the shell layout and dispatches on the active screen.

mod add;
mod filter;
mod home;
mod modal;

use super::app::{App, Screen};
use crate::tui::components;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    // Structure: [title] [content] [status]
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(f.area());

    components::render_title(f, chunks[0], app);

    match app.screen {
        Screen::Home => home::render(f, chunks[1], app),
        Screen::Add => add::render(f, chunks[1], app),
        Screen::Filter => filter::render(f, chunks[1], app),
    }

    components::render_status(f, chunks[2], app);

    // Modal overlay (on top of everything)
    if let Some(ref modal_state) = app.modal {
        modal::render(f, modal_state, app);
    }

    // Flash on top of modal too; it never takes input
    if let Some(ref flash) = app.flash {
        flash.render(f, f.area(), &app.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use crate::menu::{Course, MenuStore, NewEntry, ValidationError};
    use crate::tui::modal::Modal;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(app: &App) -> String {
        render_sized(app, 80, 30)
    }

    fn render_sized(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        App::new(&Config::default(), LogBuffer::new(), MenuStore::new())
    }

    #[test]
    fn test_home_empty_state() {
        let screen = render_to_string(&app());
        assert!(screen.contains("Christoffel's Menu"));
        assert!(screen.contains("No menu items yet. Go to Add to create some."));
        assert!(screen.contains("Total items: 0"));
        assert!(screen.contains("Starters: R0.00"));
        assert!(screen.contains("Mains: R0.00"));
        assert!(screen.contains("Desserts: R0.00"));
    }

    #[test]
    fn test_home_lists_entries() {
        let mut app = app();
        app.store
            .add(NewEntry::new("Ribeye", "Grilled", Course::Main, "189.99"))
            .unwrap();
        app.store
            .add(NewEntry::new("Malva", "", Course::Dessert, "55"))
            .unwrap();

        let screen = render_to_string(&app);
        assert!(screen.contains("Ribeye"));
        assert!(screen.contains("R 189.99"));
        assert!(screen.contains("Grilled"));
        assert!(screen.contains("No description"));
        assert!(screen.contains("Total items: 2"));
        assert!(screen.contains("Mains: R189.99"));
        assert!(!screen.contains("No menu items yet"));
    }

    #[test]
    fn test_add_form_shows_fields() {
        let mut app = app();
        app.set_screen(Screen::Add);
        app.form.name = "Lemon Tart".to_string();

        let screen = render_to_string(&app);
        assert!(screen.contains("Add Menu Item"));
        assert!(screen.contains("Dish Name"));
        assert!(screen.contains("Lemon Tart"));
        assert!(screen.contains("Course"));
        assert!(screen.contains("Starter"));
        assert!(screen.contains("Price"));
        assert!(screen.contains("Save Dish"));
    }

    #[test]
    fn test_filter_screen_shows_matches() {
        let mut app = app();
        app.store
            .add(NewEntry::new("Soup", "", Course::Starter, "20"))
            .unwrap();
        app.store
            .add(NewEntry::new("Steak", "", Course::Main, "120"))
            .unwrap();
        app.set_screen(Screen::Filter);
        app.next_filter();

        let screen = render_to_string(&app);
        assert!(screen.contains("Filter by Course"));
        assert!(screen.contains("1 item"));
        assert!(screen.contains("Soup"));
        assert!(!screen.contains("Steak"));
    }

    #[test]
    fn test_alert_modal_names_problem() {
        let mut app = app();
        app.set_screen(Screen::Add);
        app.modal = Some(Modal::Alert(ValidationError::MissingName));

        let screen = render_to_string(&app);
        assert!(screen.contains("Please enter a dish name."));
    }

    #[test]
    fn test_remove_confirmation_text() {
        let mut app = app();
        app.store
            .add(NewEntry::new("Soup", "", Course::Starter, "20"))
            .unwrap();
        app.request_remove_selected();

        let screen = render_to_string(&app);
        assert!(screen.contains("Are you sure you want to remove this item?"));
    }

    #[test]
    fn test_flash_overlay() {
        let mut app = app();
        app.store
            .add(NewEntry::new("Soup", "", Course::Starter, "20"))
            .unwrap();
        app.pump_store_events();

        let screen = render_to_string(&app);
        assert!(screen.contains("Menu updated"));
    }

    #[test]
    fn test_flash_on_tiny_terminal_does_not_panic() {
        let mut app = app();
        app.store
            .add(NewEntry::new("Soup", "", Course::Starter, "20"))
            .unwrap();
        app.pump_store_events();
        assert!(app.flash.is_some());

        for height in 1..=3 {
            render_sized(&app, 40, height);
        }
    }

    #[test]
    fn test_status_bar_shows_latest_log() {
        let app = app();
        app.log_buffer.add(crate::logging::LogEntry {
            timestamp: chrono::Utc::now(),
            level: crate::logging::LogLevel::Info,
            message: "Seeded demo".to_string(),
        });

        let screen = render_to_string(&app);
        assert!(screen.contains("Seeded demo"));
    }
}
