// Modal overlay rendering
//
// Modals are rendered on top of the main content:
// - Help modal: keyboard shortcuts and current config
// - Alert modal: why a submit was rejected
// - Confirm modals: remove an item, clear the form

use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Alert(err) => render_message(
            f,
            app,
            modal.title(),
            &err.to_string(),
            " Enter/Esc: OK ",
            app.theme.danger,
        ),
        Modal::ConfirmRemove { name, .. } => render_message(
            f,
            app,
            modal.title(),
            &format!("Are you sure you want to remove this item?\n\n{}", name),
            " y: remove  n/Esc: cancel ",
            app.theme.danger,
        ),
        Modal::ConfirmClear => render_message(
            f,
            app,
            modal.title(),
            "Clear all fields?",
            " y: clear  n/Esc: cancel ",
            app.theme.highlight,
        ),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Small dialog with a message and a key hint on the bottom border
fn render_message(
    f: &mut Frame,
    app: &App,
    title: &str,
    message: &str,
    hint: &str,
    accent: ratatui::style::Color,
) {
    let width = 48;
    let height = message.lines().count() as u16 + 4;
    let area = centered_rect(width, height, f.area());

    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(format!("\n{}", message))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .style(
            Style::default()
                .fg(app.theme.foreground)
                .bg(app.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent))
                .border_type(app.theme.border_type)
                .title(title)
                .title_bottom(Line::from(hint.to_string()).centered()),
        );

    f.render_widget(paragraph, area);
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.input_focused);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Screens", header_style)),
        kb("F1", "Home"),
        kb("F2, a", "Add a dish"),
        kb("F3, f", "Filter by course"),
        Line::raw(""),
        Line::from(Span::styled("  Home / Filter", header_style)),
        kb("↑/↓, j/k", "Select item"),
        kb("d, Del", "Remove selected item"),
        kb("←/→", "Change course (Filter)"),
        Line::raw(""),
        Line::from(Span::styled("  Add", header_style)),
        kb("Tab", "Next field"),
        kb("Shift+Tab", "Previous field"),
        kb("←/→", "Change course"),
        kb("Enter", "Save dish"),
        kb("Ctrl+L", "Clear form"),
        kb("Esc", "Back to Home"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("?", "Toggle this help"),
        kb("q, Ctrl+C", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.name, key_style),
            Span::styled("  |  Currency: ", desc_style),
            Span::styled(app.currency_symbol.as_str(), key_style),
        ]),
    ]);

    let width = 44;
    let height = 28;
    let area = centered_rect(width, height, f.area());

    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(30, 30, area), Rect::new(0, 0, 20, 10));
    }
}
