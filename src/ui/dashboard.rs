//! Signed-in landing screen

use super::layout::centered_card;
use crate::app::App;
use crate::state::SessionProvider;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let [_, card, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(11),
        Constraint::Min(0),
    ])
    .areas(centered_card(area));

    let label = Style::default().fg(Color::DarkGray);
    let lines = match &app.state.session {
        Some(session) => {
            let provider = match session.provider {
                SessionProvider::Email => "Email",
                SessionProvider::Google => "Google",
            };
            vec![
                Line::styled(
                    "Welcome to the Dashboard!",
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Line::styled(format!("Signed in as {}", session.display_name()), label),
                Line::from(""),
                Line::from(vec![Span::styled("Email:    ", label), Span::raw(&session.email)]),
                Line::from(vec![Span::styled("Provider: ", label), Span::raw(provider)]),
                Line::from(vec![
                    Span::styled("Account:  ", label),
                    Span::raw(app.google.user_info.as_ref().map_or("-", |u| u.id.as_str())),
                ]),
                Line::from(vec![
                    Span::styled("Session:  ", label),
                    Span::raw(session.id.to_string()),
                ]),
                Line::from(vec![
                    Span::styled("Since:    ", label),
                    Span::raw(session.started_at.format("%Y-%m-%d %H:%M UTC").to_string()),
                ]),
            ]
        }
        None => vec![Line::styled("No active session", label)],
    };

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Dashboard ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(widget, card);
}
