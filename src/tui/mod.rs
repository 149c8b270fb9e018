// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Rendering the UI
// - Turning store notifications into the "Menu updated" flash

pub mod app;
pub mod components;
pub mod form;
pub mod modal;
pub mod theme;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::menu::MenuStore;
use anyhow::{Context, Result};
use app::{App, Screen};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use form::FormField;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Redraw cadence; bounds how late an expired flash disappears
const TICK_RATE: Duration = Duration::from_millis(100);

/// Run the TUI
///
/// Sets up the terminal, runs the event loop until the user quits, and
/// restores the terminal even when the loop fails.
pub async fn run_tui(config: &Config, log_buffer: LogBuffer, store: MenuStore) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config, log_buffer, store);

    let result = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on keyboard input and the redraw tick with tokio::select!. Store
/// notifications are drained after every wake-up, so a change made by a key
/// press shows its flash on the very next frame.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(TICK_RATE);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick();
            }
        }

        app.pump_store_events();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Global → Screen-specific
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Only presses act; releases and repeats from enhanced terminals are ignored
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    if handle_modal_input(app, &key_event) {
        return;
    }

    if handle_global_keys(app, &key_event) {
        return;
    }

    match app.screen {
        Screen::Home => handle_home_keys(app, &key_event),
        Screen::Add => handle_add_keys(app, &key_event),
        Screen::Filter => handle_filter_keys(app, &key_event),
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref modal) = app.modal else {
        return false;
    };

    let action = modal.handle_input(key_event.code);
    app.resolve_modal(action);

    true
}

/// Handle global keys - returns true if handled
/// Global keys work the same on every screen, including while typing
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        app.should_quit = true;
        return true;
    }

    match key_event.code {
        KeyCode::F(1) => app.set_screen(Screen::Home),
        KeyCode::F(2) => app.set_screen(Screen::Add),
        KeyCode::F(3) => app.set_screen(Screen::Filter),
        _ => return false,
    }
    true
}

/// Keys shared by the two list screens
fn handle_list_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_remove_selected(),
        KeyCode::Char('?') => app.open_help(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        _ => return false,
    }
    true
}

fn handle_home_keys(app: &mut App, key_event: &KeyEvent) {
    if handle_list_keys(app, key_event) {
        return;
    }
    match key_event.code {
        KeyCode::Char('a') => app.set_screen(Screen::Add),
        KeyCode::Char('f') => app.set_screen(Screen::Filter),
        _ => {}
    }
}

fn handle_filter_keys(app: &mut App, key_event: &KeyEvent) {
    if handle_list_keys(app, key_event) {
        return;
    }
    match key_event.code {
        KeyCode::Right | KeyCode::Tab => app.next_filter(),
        KeyCode::Left | KeyCode::BackTab => app.prev_filter(),
        KeyCode::Esc => app.set_screen(Screen::Home),
        _ => {}
    }
}

/// The add form captures printable keys as text
fn handle_add_keys(app: &mut App, key_event: &KeyEvent) {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Char('l') if ctrl => app.request_clear_form(),
        KeyCode::Esc => app.set_screen(Screen::Home),
        KeyCode::Enter => {
            // Outcome is reported through the alert modal or the flash
            let _ = app.submit_form();
        }
        KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.form.focus_prev(),
        KeyCode::Right if app.form.focus == FormField::Course => app.form.next_course(),
        KeyCode::Left if app.form.focus == FormField::Course => app.form.prev_course(),
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Char(c) if !ctrl => app.form.insert_char(c),
        _ => {}
    }
}
