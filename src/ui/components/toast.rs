//! Toast overlay

use crate::state::{Severity, Toast};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Cyan,
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
    }
}

/// Draw the toast in the top-right corner of `area`
pub fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    let width = (toast.text.chars().count() as u16 + 4).min(area.width);
    let height = 3.min(area.height);
    let toast_area = Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height,
    };

    let color = severity_color(toast.severity);
    let widget = Paragraph::new(toast.text.as_str())
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(Clear, toast_area);
    frame.render_widget(widget, toast_area);
}
