// Status bar component
//
// Renders key hints for the active screen, with the most recent log line
// underneath.

use crate::format::truncate_display;
use crate::logging::LogLevel;
use crate::tui::app::{App, Screen};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Key hints for a screen
pub fn hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => " ↑↓ select │ d remove │ a add │ f filter │ ? help │ q quit",
        Screen::Add => " Tab next │ ←→ course │ Enter save │ Ctrl-L clear │ Esc back",
        Screen::Filter => " ←→ course │ ↑↓ select │ d remove │ Esc back │ q quit",
    }
}

/// Render the status bar: hints, then the log strip
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    f.render_widget(
        Paragraph::new(hints(app.screen)).style(Style::default().fg(app.theme.status_bar)),
        chunks[0],
    );

    if let Some(entry) = app.log_buffer.latest() {
        let color = match entry.level {
            LogLevel::Error => app.theme.danger,
            LogLevel::Warn => app.theme.input_focused,
            _ => app.theme.muted,
        };
        let text = format!(
            " {} {} {}",
            entry.timestamp.format("%H:%M:%S"),
            entry.level.as_str(),
            entry.message
        );
        let text = truncate_display(&text, chunks[1].width.saturating_sub(1) as usize);
        f.render_widget(
            Paragraph::new(Line::from(text)).style(Style::default().fg(color)),
            chunks[1],
        );
    }
}
