//! UI module for rendering the TUI

mod components;
mod dashboard;
mod forms;
mod layout;
mod stub;
mod welcome;

use crate::app::App;
use crate::state::{FormState, View};
use components::{render_error_dialog, render_toast};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match (&app.state.current_view, &app.state.form) {
        (View::Welcome, _) => welcome::draw(frame, main_area, app),
        (View::SignIn, FormState::SignIn(form)) => forms::draw_sign_in(frame, main_area, form),
        (View::SignUp, FormState::SignUp(form)) => forms::draw_sign_up(frame, main_area, form),
        (View::Dashboard, _) => dashboard::draw(frame, main_area, app),
        (view, _) if view.is_external_stub() => stub::draw(frame, main_area, app),
        _ => {}
    }

    layout::draw_status_bar(frame, status_area, app);

    if let Some(toast) = app.state.toast.as_ref().filter(|t| !t.is_expired()) {
        render_toast(frame, main_area, toast);
    }

    // Error dialog sits above everything else
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    }
}
