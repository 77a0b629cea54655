//! Welcome screen with the three entry points

use super::components::{render_button, BUTTON_HEIGHT};
use super::layout::centered_card;
use crate::app::App;
use crate::state::WelcomeAction;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let button_rows = WelcomeAction::ALL.len() as u16 * BUTTON_HEIGHT;
    let [_, title_area, _, buttons_area, status_area, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(button_rows),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(centered_card(area));

    let title = Paragraph::new(vec![
        Line::styled(
            "Welcome",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Sign in or create an account to continue",
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .centered();
    frame.render_widget(title, title_area);

    let rows = Layout::vertical(
        WelcomeAction::ALL.map(|_| Constraint::Length(BUTTON_HEIGHT)),
    )
    .split(buttons_area);
    let selected = app.state.selected_welcome_action();
    for (action, row) in WelcomeAction::ALL.into_iter().zip(rows.iter()) {
        let enabled = !(action == WelcomeAction::SignInWithGoogle && app.google.loading);
        render_button(frame, *row, action.label(), action == selected, enabled);
    }

    let status = if app.google.loading {
        Some(Line::styled("Signing in…", Style::default().fg(Color::Yellow)))
    } else {
        app.google
            .error
            .as_deref()
            .map(|error| Line::styled(error, Style::default().fg(Color::Red)))
    };
    if let Some(line) = status {
        frame.render_widget(Paragraph::new(line).centered(), status_area);
    }
}
