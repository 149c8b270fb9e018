// Menu list component
//
// Two-line rows: name and price, then description and course. Used by both
// the Home and Filter screens with whatever entries they pass in.

use crate::format::{description_or_placeholder, format_price, truncate_display};
use crate::menu::MenuEntry;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Shown by Home when the store has no entries
pub const EMPTY_MENU: &str = "No menu items yet. Go to Add to create some.";

/// Render `entries` with the app's selection highlighted.
///
/// `empty_text` replaces the list when there is nothing to show.
pub fn render(
    f: &mut Frame,
    area: Rect,
    app: &App,
    entries: &[&MenuEntry],
    title: &str,
    empty_text: &str,
) {
    let theme = &app.theme;
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border));

    if entries.is_empty() {
        let empty = Paragraph::new(empty_text)
            .style(Style::default().fg(theme.muted))
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    // Borders plus the highlight symbol
    let width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| ListItem::new(row(entry, width, app)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(theme.selection)
                .fg(theme.selection_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn row(entry: &MenuEntry, width: usize, app: &App) -> Text<'static> {
    let theme = &app.theme;
    let price = format_price(entry.price, &app.currency_symbol);
    let course = entry.course.as_str();

    let name_width = width.saturating_sub(price.width() + 1);
    let name = truncate_display(&entry.name, name_width);
    let gap = width.saturating_sub(name.width() + price.width()).max(1);

    let desc_width = width.saturating_sub(course.width() + 1);
    let description = truncate_display(description_or_placeholder(&entry.description), desc_width);
    let desc_gap = width
        .saturating_sub(description.width() + course.width())
        .max(1);

    let desc_style = if entry.description.is_empty() {
        Style::default()
            .fg(theme.muted)
            .add_modifier(Modifier::ITALIC)
    } else {
        Style::default().fg(theme.muted)
    };

    Text::from(vec![
        Line::from(vec![
            Span::styled(name, Style::default().fg(theme.foreground)),
            Span::raw(" ".repeat(gap)),
            Span::styled(price, Style::default().fg(theme.price)),
        ]),
        Line::from(vec![
            Span::styled(description, desc_style),
            Span::raw(" ".repeat(desc_gap)),
            Span::styled(course, Style::default().fg(theme.course)),
        ]),
    ])
}
