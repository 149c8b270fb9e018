// Add screen
//
// One bordered box per form field in tab order, then the save button. The
// focused box is highlighted and gets the terminal cursor.

use crate::menu::Course;
use crate::tui::app::App;
use crate::tui::form::FormField;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let outer = Block::default()
        .title(format!(" {} ", app.screen.heading()))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let mut constraints = vec![Constraint::Length(3); FormField::ALL.len()];
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in FormField::ALL.iter().enumerate() {
        render_field(f, chunks[i], app, *field);
    }

    let button = Paragraph::new(Line::from(Span::styled(
        " [ Save Dish ]  Enter ",
        Style::default()
            .fg(app.theme.highlight)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(button, chunks[FormField::ALL.len()]);
}

fn render_field(f: &mut Frame, area: Rect, app: &App, field: FormField) {
    let theme = &app.theme;
    let focused = app.form.focus == field;

    let border = if focused {
        theme.input_focused
    } else {
        theme.border
    };
    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);

    let line = match field {
        FormField::Course => course_picker(app.form.course, focused, app),
        _ => {
            let value = app.form.value(field);
            if value.is_empty() {
                Line::from(Span::styled(
                    field.placeholder(),
                    Style::default()
                        .fg(theme.muted)
                        .add_modifier(Modifier::ITALIC),
                ))
            } else {
                Line::from(Span::styled(
                    value.to_string(),
                    Style::default().fg(theme.input),
                ))
            }
        }
    };

    f.render_widget(Paragraph::new(line).block(block), area);

    if focused && field != FormField::Course && inner.width > 0 {
        let typed = app.form.value(field).width() as u16;
        let x = inner.x + typed.min(inner.width - 1);
        f.set_cursor_position(Position::new(x, inner.y));
    }
}

/// `◀ Starter  Main  Dessert ▶` with the chosen course highlighted
fn course_picker(selected: Course, focused: bool, app: &App) -> Line<'static> {
    let theme = &app.theme;
    let arrow = Style::default().fg(if focused { theme.input_focused } else { theme.muted });

    let mut spans = vec![Span::styled("◀ ", arrow)];
    for course in Course::ALL {
        let style = if course == selected {
            Style::default()
                .fg(theme.course)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.muted)
        };
        spans.push(Span::styled(format!(" {} ", course.as_str()), style));
    }
    spans.push(Span::styled(" ▶", arrow));
    Line::from(spans)
}
