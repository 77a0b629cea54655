//! Sign-in form rendering

use super::draw_form_card;
use crate::state::{Form, SignInAction, SignInForm};
use ratatui::{layout::Rect, Frame};

/// Draw the sign-in card. Login is dimmed until both fields pass.
pub fn draw_sign_in(frame: &mut Frame, area: Rect, form: &SignInForm) {
    let submit_enabled = form.submit_enabled();
    let labels = SignInAction::ALL.map(SignInAction::label);
    let enabled = SignInAction::ALL.map(|action| action != SignInAction::Login || submit_enabled);

    draw_form_card(frame, area, "Sign In", form, &labels, &enabled);
}
