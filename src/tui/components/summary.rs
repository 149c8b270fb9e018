// Summary component
//
// Item count and average price per course, recomputed from the store on
// every frame.

use crate::format::format_average;
use crate::menu::{Aggregates, Course};
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Summary lines: total first, then one average per course
pub fn lines(aggregates: &Aggregates, symbol: &str) -> Vec<String> {
    let mut out = vec![format!("Total items: {}", aggregates.total_count)];
    for course in Course::ALL {
        out.push(format!(
            "{}: {}",
            course.plural(),
            format_average(aggregates.course(course).average, symbol)
        ));
    }
    out
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let aggregates = app.store.aggregates();

    let text: Vec<Line> = lines(&aggregates, &app.currency_symbol)
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                Line::from(Span::styled(
                    line,
                    Style::default()
                        .fg(theme.foreground)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(line, Style::default().fg(theme.price)))
            }
        })
        .collect();

    let panel = Paragraph::new(text).block(
        Block::default()
            .title(" Summary ")
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(panel, area);
}
