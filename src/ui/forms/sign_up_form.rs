//! Sign-up form rendering

use super::draw_form_card;
use crate::state::{Form, SignUpAction, SignUpForm};
use ratatui::{layout::Rect, Frame};

pub fn draw_sign_up(frame: &mut Frame, area: Rect, form: &SignUpForm) {
    let submit_enabled = form.submit_enabled();
    let labels = SignUpAction::ALL.map(SignUpAction::label);
    let enabled = SignUpAction::ALL.map(|action| action != SignUpAction::SignUp || submit_enabled);

    draw_form_card(frame, area, "Create Account", form, &labels, &enabled);
}
