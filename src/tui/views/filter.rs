// Filter screen
//
// Course selector with the match count, then the filtered list. Removal
// works here exactly as on Home.

use crate::menu::CourseFilter;
use crate::tui::app::App;
use crate::tui::components::menu_list;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let entries = app.visible_entries();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let mut spans = vec![Span::styled(" ◀ ", Style::default().fg(theme.muted))];
    for option in CourseFilter::OPTIONS {
        let style = if option == app.filter {
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        spans.push(Span::styled(format!(" {} ", option.label()), style));
    }
    spans.push(Span::styled(" ▶", Style::default().fg(theme.muted)));

    let count = match entries.len() {
        1 => "1 item".to_string(),
        n => format!("{} items", n),
    };

    let selector = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(format!(" {} ", app.screen.heading()))
            .title_top(Line::from(format!(" {} ", count)).right_aligned())
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(selector, chunks[0]);

    let empty = match app.filter {
        CourseFilter::All => menu_list::EMPTY_MENU.to_string(),
        CourseFilter::Only(course) => format!("No {} on the menu.", course.plural().to_lowercase()),
    };
    menu_list::render(f, chunks[1], app, &entries, app.filter.label(), &empty);
}
