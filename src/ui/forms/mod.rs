//! Form rendering module
//!
//! - `field_renderer`: input boxes with error lines
//! - `sign_in_form`: email/password sign-in
//! - `sign_up_form`: account creation

mod field_renderer;
mod sign_in_form;
mod sign_up_form;

pub use sign_in_form::draw_sign_in;
pub use sign_up_form::draw_sign_up;

use super::components::{render_button_row, BUTTON_HEIGHT};
use super::layout::centered_card;
use crate::state::Form;
use field_renderer::{draw_fields, FIELD_HEIGHT};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw a bordered card holding the form's inputs and its button row.
///
/// `enabled` marks which of `labels` can be activated right now.
fn draw_form_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    form: &dyn Form,
    labels: &[&str],
    enabled: &[bool],
) {
    let inputs = (form.field_count() - 1) as u16;
    let card_height = inputs * FIELD_HEIGHT + BUTTON_HEIGHT + 2;
    let [_, card_area, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(card_height),
        Constraint::Min(0),
    ])
    .areas(centered_card(area));

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let [fields_area, buttons_area] = Layout::vertical([
        Constraint::Length(inputs * FIELD_HEIGHT),
        Constraint::Length(BUTTON_HEIGHT),
    ])
    .areas(inner);

    draw_fields(frame, fields_area, form);

    let selected = form
        .is_buttons_row_active()
        .then(|| form.selected_button());
    render_button_row(frame, buttons_area, labels, enabled, selected);
}
