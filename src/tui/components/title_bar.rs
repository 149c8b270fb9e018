// Title bar component
//
// Renders the menu title and the screen tabs with the active one highlighted.

use crate::tui::app::{App, Screen};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
///
/// Shows the configured title on the left and `F1 Home  F2 Add  F3 Filter`
/// on the right of the border.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let mut tabs: Vec<Span> = Vec::new();
    for (i, screen) in Screen::ALL.iter().enumerate() {
        let label = format!(" F{} {} ", i + 1, screen.name());
        let style = if *screen == app.screen {
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        tabs.push(Span::styled(label, style));
    }

    let title = Paragraph::new(format!(" {}", app.title))
        .style(
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.title))
                .title_top(Line::from(tabs).right_aligned()),
        );

    f.render_widget(title, area);
}
