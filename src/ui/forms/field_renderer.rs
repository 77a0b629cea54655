//! Field rendering utilities for forms

use crate::state::{Form, FormField};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows used by one field: bordered input plus its error line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a single-line input with its error text underneath.
///
/// Secret fields are masked unless `reveal_secrets` is set.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    reveal_secrets: bool,
) {
    let [input_area, error_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

    let border_style = if field.has_error() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value(reveal_secrets);
    let value_span = if display_value.is_empty() && !is_active {
        Span::styled(
            format!("Enter your {}", field.label.to_lowercase()),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw(display_value)
    };
    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        value_span,
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));
    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(content.block(block), input_area);

    if let Some(error) = &field.error {
        let error_line = Paragraph::new(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(error_line, error_area);
    }
}

/// Draw every input of a form, one below the other, starting at `area.y`
pub fn draw_fields(frame: &mut Frame, area: Rect, form: &dyn Form) {
    let reveal = !form.secure_text_entry();
    let mut y = area.y;
    for index in 0..form.field_count() {
        let Some(field) = form.get_field(index) else {
            continue;
        };
        if y + FIELD_HEIGHT > area.y + area.height {
            break;
        }
        let field_area = Rect::new(area.x, y, area.width, FIELD_HEIGHT);
        draw_field(frame, field_area, field, form.active_field() == index, reveal);
        y += FIELD_HEIGHT;
    }
}
