// Theme system for the TUI
//
// Two built-in palettes, selected by name from config. Each theme defines
// colors for every UI element the menu screens draw.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// Resolve a config name; unknown names fall back to dark
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            _ => ThemeKind::Dark,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "dark",
            ThemeKind::Light => "light",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_type: BorderType,
    pub highlight: Color,

    // Title and status
    pub title: Color,
    pub status_bar: Color,

    // Selection
    pub selection: Color,
    pub selection_fg: Color,

    // Menu content
    pub price: Color,
    pub course: Color,
    pub danger: Color,
    pub flash: Color,

    // Form
    pub input_focused: Color,
    pub input: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Look up a theme by config name
    pub fn by_name(name: &str) -> Self {
        ThemeKind::from_name(name).theme()
    }

    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::Reset,
            foreground: Color::White,
            muted: Color::Gray,
            border: Color::DarkGray,
            border_type: BorderType::Rounded,
            highlight: Color::Cyan,

            title: Color::Cyan,
            status_bar: Color::Green,

            selection: Color::DarkGray,
            selection_fg: Color::Yellow,

            price: Color::LightGreen,
            course: Color::LightMagenta,
            danger: Color::Red,
            flash: Color::Rgb(46, 125, 50),

            input_focused: Color::Yellow,
            input: Color::White,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::White,
            foreground: Color::Black,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_type: BorderType::Plain,
            highlight: Color::Blue,

            title: Color::Blue,
            status_bar: Color::DarkGray,

            selection: Color::LightBlue,
            selection_fg: Color::Black,

            price: Color::Green,
            course: Color::Magenta,
            danger: Color::Red,
            flash: Color::Rgb(200, 230, 201),

            input_focused: Color::Blue,
            input: Color::Black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_lookup() {
        assert_eq!(ThemeKind::from_name("Light"), ThemeKind::Light);
        assert_eq!(ThemeKind::from_name("dark"), ThemeKind::Dark);
        assert_eq!(ThemeKind::from_name("dracula"), ThemeKind::Dark);
        assert_eq!(Theme::by_name("light").name, "light");
    }
}
