//! Placeholder for screens that live outside this app

use super::layout::centered_card;
use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.state.current_view;
    let [_, card, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(6),
        Constraint::Min(0),
    ])
    .areas(centered_card(area));

    let mut lines = vec![Line::from(format!("{} is not part of this app.", view.title()))];
    if let Some(email) = &app.state.view_params.email {
        lines.push(Line::styled(
            format!("Account: {email}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if matches!(view, View::SetBiometric | View::Legal) {
        lines.push(Line::styled(
            "Press Enter to continue.",
            Style::default().fg(Color::Cyan),
        ));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(format!(" {} ", view.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(widget, card);
}
