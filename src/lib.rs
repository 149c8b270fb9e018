// menucard - a restaurant menu recorder for the terminal
//
// A chef records dishes (name, description, course, price) for the session
// and watches the per-course averages update as the menu grows.
//
// Architecture:
// - Menu core: validated in-memory store with change notifications
// - Format: currency and placeholder text applied at render time
// - TUI (ratatui): Home, Add and Filter screens over the store
// - Config: defaults < ~/.config/menucard/config.toml < MENUCARD_* env vars
// - Logging: tracing into an in-memory buffer, optionally a rolling file

pub mod cli;
pub mod config;
pub mod demo;
pub mod format;
pub mod logging;
pub mod menu;
pub mod tui;
