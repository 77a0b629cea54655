//! Layout components (header, content card, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the centered content card
const CARD_WIDTH: u16 = 56;

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Horizontally center a card of fixed width inside `area`
pub fn centered_card(area: Rect) -> Rect {
    let [card] = Layout::horizontal([Constraint::Length(CARD_WIDTH.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    card
}

pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            " onboard ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            app.state.current_view.title(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(session) = &app.state.session {
        spans.push(Span::styled(
            format!("  signed in as {}", session.display_name()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the key hints for the current view.
///
/// The submit hint is only listed while the form's gate is open.
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints: Vec<(&str, &str)> = match app.state.current_view {
        View::Welcome if app.google.loading => vec![("Esc", "cancel sign-in"), ("q", "quit")],
        View::Welcome => vec![("↑/↓", "select"), ("Enter", "open"), ("q", "quit")],
        view if view.is_form_view() => {
            let mut hints = vec![("Tab", "next"), ("←/→", "buttons")];
            if app.state.form.as_form().is_some_and(|form| form.submit_enabled()) {
                hints.push((crate::platform::SUBMIT_SHORTCUT, "submit"));
            }
            hints.push((crate::platform::REVEAL_SHORTCUT, "show/hide"));
            hints.push(("Esc", "back"));
            hints
        }
        View::Dashboard => vec![("o", "sign out"), ("q", "quit")],
        View::SetBiometric | View::Legal => vec![("Enter", "continue"), ("Esc", "back")],
        _ => vec![("Esc", "back")],
    };

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(
            format!(" {key}"),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::raw(format!(": {label} ")));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}
