//! Button component for TUI

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered button.
///
/// A disabled button is drawn dimmed, even when selected.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let border_style = match (is_selected, is_enabled) {
        (true, true) => Style::default().fg(Color::Cyan),
        (true, false) => Style::default().fg(Color::Gray),
        _ => Style::default().fg(Color::DarkGray),
    };

    let text_style = if !is_enabled {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {label} "))
        .style(text_style)
        .centered();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render a row of buttons side by side.
///
/// `enabled` is indexed like `labels`.
pub fn render_button_row(
    frame: &mut Frame,
    area: Rect,
    labels: &[&str],
    enabled: &[bool],
    selected: Option<usize>,
) {
    let constraints = labels
        .iter()
        .map(|label| Constraint::Length(label.chars().count() as u16 + 4));
    let cells = Layout::horizontal(constraints)
        .flex(Flex::SpaceAround)
        .split(area);

    for (idx, (label, cell)) in labels.iter().zip(cells.iter()).enumerate() {
        let is_enabled = enabled.get(idx).copied().unwrap_or(true);
        render_button(frame, *cell, label, selected == Some(idx), is_enabled);
    }
}
