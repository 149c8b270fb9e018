// TUI application state
//
// Owns the menu store plus everything the screens need that the store does
// not: active screen, form fields, course filter, list selection, the open
// modal and the flash. Command handlers here are plain methods so they can be
// driven directly in tests without a terminal.

use super::components::Flash;
use super::form::AddForm;
use super::modal::{Modal, ModalAction};
use super::theme::Theme;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::menu::{CourseFilter, MenuEntry, MenuStore, StoreEvent, ValidationError};
use std::time::Duration;
use tokio::sync::broadcast::{self, error::TryRecvError};

/// Text of the change acknowledgment
pub const FLASH_MESSAGE: &str = "Menu updated";

/// The screens of the app; exactly one is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Add,
    Filter,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Home, Screen::Add, Screen::Filter];

    /// Tab label
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Add => "Add",
            Screen::Filter => "Filter",
        }
    }

    /// Heading shown under the title bar
    pub fn heading(&self) -> &'static str {
        match self {
            Screen::Home => "Menu",
            Screen::Add => "Add Menu Item",
            Screen::Filter => "Filter by Course",
        }
    }
}

/// Main application state for the TUI
pub struct App {
    /// The menu itself
    pub store: MenuStore,
    store_events: broadcast::Receiver<StoreEvent>,

    pub screen: Screen,
    pub form: AddForm,
    pub filter: CourseFilter,

    /// Index into the list shown on the current screen
    pub selected: usize,

    pub modal: Option<Modal>,
    pub flash: Option<Flash>,
    pub should_quit: bool,

    pub theme: Theme,
    pub title: String,
    pub currency_symbol: String,
    flash_duration: Duration,

    /// Captured log lines for the log strip
    pub log_buffer: LogBuffer,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer, store: MenuStore) -> Self {
        let store_events = store.subscribe();
        Self {
            store,
            store_events,
            screen: Screen::default(),
            form: AddForm::default(),
            filter: CourseFilter::default(),
            selected: 0,
            modal: None,
            flash: None,
            should_quit: false,
            theme: Theme::by_name(&config.theme),
            title: config.title.clone(),
            currency_symbol: config.currency_symbol.clone(),
            flash_duration: Duration::from_millis(config.flash_ms),
            log_buffer,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────

    pub fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            tracing::trace!("Screen {} -> {}", self.screen.name(), screen.name());
            self.screen = screen;
            self.selected = 0;
        }
    }

    /// Entries listed on the current screen (Home shows everything)
    pub fn visible_entries(&self) -> Vec<&MenuEntry> {
        match self.screen {
            Screen::Filter => self.store.filtered_list(self.filter),
            Screen::Home | Screen::Add => self.store.filtered_list(CourseFilter::All),
        }
    }

    pub fn selected_entry(&self) -> Option<&MenuEntry> {
        self.visible_entries().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.visible_entries().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the selection inside the visible list after it shrinks
    fn clamp_selection(&mut self) {
        let len = self.visible_entries().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn next_filter(&mut self) {
        self.filter = self.filter.next();
        self.selected = 0;
    }

    pub fn prev_filter(&mut self) {
        self.filter = self.filter.prev();
        self.selected = 0;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────

    /// Submit the add form.
    ///
    /// Success resets the form and returns to Home. Failure opens an alert,
    /// moves focus to the offending field and keeps everything typed.
    pub fn submit_form(&mut self) -> Result<MenuEntry, ValidationError> {
        match self.store.add(self.form.to_candidate()) {
            Ok(entry) => {
                tracing::info!("Saved dish '{}'", entry.name);
                self.form.reset();
                self.set_screen(Screen::Home);
                Ok(entry)
            }
            Err(e) => {
                self.form.focus_field(e.field());
                self.modal = Some(Modal::Alert(e));
                Err(e)
            }
        }
    }

    /// Ask for confirmation before removing the selected entry
    pub fn request_remove_selected(&mut self) {
        if let Some(entry) = self.selected_entry() {
            self.modal = Some(Modal::ConfirmRemove {
                id: entry.id,
                name: entry.name.clone(),
            });
        }
    }

    /// Ask for confirmation before clearing the form
    pub fn request_clear_form(&mut self) {
        self.modal = Some(Modal::ConfirmClear);
    }

    pub fn open_help(&mut self) {
        self.modal = Some(Modal::Help);
    }

    /// Route a modal decision. Confirming runs the modal's action.
    pub fn resolve_modal(&mut self, action: ModalAction) {
        match action {
            ModalAction::None => {}
            ModalAction::Close => self.modal = None,
            ModalAction::Confirm => {
                match self.modal.take() {
                    Some(Modal::ConfirmRemove { id, name }) => {
                        if self.store.remove(id) {
                            tracing::info!("Removed dish '{}'", name);
                        }
                        self.clamp_selection();
                    }
                    Some(Modal::ConfirmClear) => self.form.reset(),
                    Some(Modal::Help) | Some(Modal::Alert(_)) | None => {}
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Store notifications and timers
    // ─────────────────────────────────────────────────────────────────────

    /// Drain pending store notifications; a change on a non-empty menu
    /// starts a fresh flash, replacing any flash still on screen.
    pub fn pump_store_events(&mut self) {
        loop {
            match self.store_events.try_recv() {
                Ok(event) => {
                    if event.total() > 0 {
                        self.flash = Some(Flash::new(FLASH_MESSAGE, self.flash_duration));
                    }
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::debug!("Skipped {} store notifications", skipped);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
    }

    /// Called on every redraw tick
    pub fn tick(&mut self) {
        if self.flash.as_ref().is_some_and(Flash::is_expired) {
            self.flash = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{Course, NewEntry};
    use crate::tui::form::FormField;

    fn app() -> App {
        App::new(&Config::default(), LogBuffer::new(), MenuStore::new())
    }

    fn fill_form(app: &mut App, name: &str, course: Course, price: &str) {
        app.form.name = name.to_string();
        app.form.course = course;
        app.form.price_text = price.to_string();
    }

    fn seeded() -> App {
        let mut app = app();
        for (name, course, price) in [
            ("Steak", Course::Main, "100"),
            ("Soup", Course::Starter, "20"),
            ("Salmon", Course::Main, "50"),
        ] {
            app.store.add(NewEntry::new(name, "", course, price)).unwrap();
        }
        app
    }

    #[test]
    fn test_submit_success_resets_and_goes_home() {
        let mut app = app();
        app.set_screen(Screen::Add);
        fill_form(&mut app, "Soup", Course::Dessert, "12.5");

        let entry = app.submit_form().unwrap();

        assert_eq!(entry.price, 12.5);
        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.form, AddForm::default());
        assert_eq!(app.store.len(), 1);
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_submit_failure_keeps_fields() {
        let mut app = app();
        app.set_screen(Screen::Add);
        fill_form(&mut app, "Soup", Course::Main, "abc");
        app.form.description = "Hot".to_string();
        app.form.focus = FormField::Name;

        assert_eq!(app.submit_form(), Err(ValidationError::InvalidPrice));

        assert_eq!(app.screen, Screen::Add);
        assert_eq!(app.form.name, "Soup");
        assert_eq!(app.form.description, "Hot");
        assert_eq!(app.form.price_text, "abc");
        assert_eq!(app.form.focus, FormField::Price);
        assert_eq!(app.modal, Some(Modal::Alert(ValidationError::InvalidPrice)));
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_submit_without_name() {
        let mut app = app();
        fill_form(&mut app, "  ", Course::Main, "10");
        assert_eq!(app.submit_form(), Err(ValidationError::MissingName));
        assert_eq!(app.form.focus, FormField::Name);
    }

    #[test]
    fn test_remove_requires_confirmation() {
        let mut app = seeded();
        app.select_next();
        app.request_remove_selected();

        assert!(matches!(
            app.modal,
            Some(Modal::ConfirmRemove { ref name, .. }) if name == "Soup"
        ));
        assert_eq!(app.store.len(), 3);

        app.resolve_modal(ModalAction::Close);
        assert!(app.modal.is_none());
        assert_eq!(app.store.len(), 3);

        app.request_remove_selected();
        app.resolve_modal(ModalAction::Confirm);
        assert!(app.modal.is_none());
        let names: Vec<_> = app.store.list().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Steak", "Salmon"]);
    }

    #[test]
    fn test_selection_clamped_after_removing_last_row() {
        let mut app = seeded();
        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 2);

        app.request_remove_selected();
        app.resolve_modal(ModalAction::Confirm);
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_remove_on_empty_list_opens_nothing() {
        let mut app = app();
        app.request_remove_selected();
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_filter_screen_lists_filtered_entries() {
        let mut app = seeded();
        app.set_screen(Screen::Filter);
        assert_eq!(app.visible_entries().len(), 3);

        app.next_filter(); // Starter
        app.next_filter(); // Main
        let names: Vec<_> = app.visible_entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Steak", "Salmon"]);

        app.next_filter(); // Dessert
        assert!(app.visible_entries().is_empty());
        assert!(app.selected_entry().is_none());
    }

    #[test]
    fn test_clear_form_confirmation() {
        let mut app = app();
        fill_form(&mut app, "Soup", Course::Main, "10");

        app.request_clear_form();
        app.resolve_modal(ModalAction::Close);
        assert_eq!(app.form.name, "Soup");

        app.request_clear_form();
        app.resolve_modal(ModalAction::Confirm);
        assert_eq!(app.form, AddForm::default());
    }

    #[test]
    fn test_store_change_starts_flash() {
        let mut app = app();
        app.pump_store_events();
        assert!(app.flash.is_none());

        fill_form(&mut app, "Soup", Course::Starter, "10");
        app.submit_form().unwrap();
        app.pump_store_events();

        let flash = app.flash.as_ref().expect("flash after add");
        assert_eq!(flash.message, FLASH_MESSAGE);
    }

    #[test]
    fn test_failed_submit_no_flash() {
        let mut app = app();
        fill_form(&mut app, "", Course::Starter, "10");
        let _ = app.submit_form();
        app.pump_store_events();
        assert!(app.flash.is_none());
    }

    #[test]
    fn test_removing_last_entry_no_flash() {
        let mut app = app();
        fill_form(&mut app, "Soup", Course::Starter, "10");
        app.submit_form().unwrap();
        app.pump_store_events();
        app.flash = None;

        app.request_remove_selected();
        app.resolve_modal(ModalAction::Confirm);
        app.pump_store_events();
        assert!(app.store.is_empty());
        assert!(app.flash.is_none());
    }

    #[test]
    fn test_tick_clears_expired_flash() {
        let config = Config {
            flash_ms: 0,
            ..Config::default()
        };
        let mut app = App::new(&config, LogBuffer::new(), MenuStore::new());
        fill_form(&mut app, "Soup", Course::Starter, "10");
        app.submit_form().unwrap();
        app.pump_store_events();
        assert!(app.flash.is_some());

        app.tick();
        assert!(app.flash.is_none());
    }
}
