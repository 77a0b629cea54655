//! Application state definitions

use super::forms::{FormState, SignInForm, SignUpForm};
use super::notification::{Severity, Toast};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Welcome,
    SignIn,
    SignUp,
    ResetPassword,
    Dashboard,
    SetBiometric,
    Legal,
}

impl View {
    pub const ALL: [View; 7] = [
        View::Welcome,
        View::SignIn,
        View::SignUp,
        View::ResetPassword,
        View::Dashboard,
        View::SetBiometric,
        View::Legal,
    ];

    /// Route name used by navigation calls
    pub fn route_name(self) -> &'static str {
        match self {
            View::Welcome => "Home",
            View::SignIn => "Signin",
            View::SignUp => "Signup",
            View::ResetPassword => "ResetPassword",
            View::Dashboard => "Dashboard",
            View::SetBiometric => "SetBiometric",
            View::Legal => "Legal",
        }
    }

    pub fn from_route_name(name: &str) -> Option<View> {
        Self::ALL.into_iter().find(|v| v.route_name() == name)
    }

    /// Views that hold a form session
    pub fn is_form_view(self) -> bool {
        matches!(self, View::SignIn | View::SignUp)
    }

    /// Routes owned by screens outside this app
    pub fn is_external_stub(self) -> bool {
        matches!(
            self,
            View::ResetPassword | View::SetBiometric | View::Legal
        )
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Welcome => "Welcome",
            View::SignIn => "Sign In",
            View::SignUp => "Sign Up",
            View::ResetPassword => "Reset Password",
            View::Dashboard => "Dashboard",
            View::SetBiometric => "Biometric Setup",
            View::Legal => "Terms & Privacy",
        }
    }
}

/// View parameters for navigation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    /// Account the destination screen is about
    pub email: Option<String>,
}

/// How the current session was established
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionProvider {
    Email,
    Google,
}

/// In-memory signed-in session. Never persisted.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub provider: SessionProvider,
    pub email: String,
    pub display_name: Option<String>,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn new(
        provider: SessionProvider,
        email: impl Into<String>,
        display_name: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            provider,
            email: email.into(),
            display_name,
            started_at: Utc::now(),
        }
    }

    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

/// Buttons on the welcome screen, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeAction {
    SignInWithEmail,
    SignInWithGoogle,
    SignUp,
}

impl WelcomeAction {
    pub const ALL: [WelcomeAction; 3] = [
        Self::SignInWithEmail,
        Self::SignInWithGoogle,
        Self::SignUp,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::SignInWithEmail => "Sign In with Email",
            Self::SignInWithGoogle => "Sign In with Google",
            Self::SignUp => "Sign Up",
        }
    }

    /// Route the action opens, or `None` for the federated sign-in
    pub fn route(self) -> Option<&'static str> {
        match self {
            Self::SignInWithEmail => Some(View::SignIn.route_name()),
            Self::SignInWithGoogle => None,
            Self::SignUp => Some(View::SignUp.route_name()),
        }
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_params: ViewParams,
    pub view_history: Vec<(View, ViewParams)>,

    // Form session for the current view
    pub form: FormState,

    // Welcome screen
    pub welcome_selected: usize,

    // Session
    pub session: Option<Session>,

    // Notifications
    pub toast: Option<Toast>,
    pub error_queue: VecDeque<String>,
}

impl AppState {
    /// Start a fresh form session matching `view`, or drop the current one
    pub fn reset_form_for(&mut self, view: View) {
        self.form = match view {
            View::SignIn => FormState::SignIn(SignInForm::new()),
            View::SignUp => FormState::SignUp(SignUpForm::new()),
            _ => FormState::None,
        };
    }

    pub fn selected_welcome_action(&self) -> WelcomeAction {
        WelcomeAction::ALL[self.welcome_selected.min(WelcomeAction::ALL.len() - 1)]
    }

    pub fn next_welcome_action(&mut self) {
        self.welcome_selected = (self.welcome_selected + 1) % WelcomeAction::ALL.len();
    }

    pub fn prev_welcome_action(&mut self) {
        if self.welcome_selected == 0 {
            self.welcome_selected = WelcomeAction::ALL.len() - 1;
        } else {
            self.welcome_selected -= 1;
        }
    }

    /// Show a toast, replacing any toast already on screen
    pub fn notify(&mut self, severity: Severity, text: impl Into<String>, duration: Duration) {
        let toast = Toast::new(severity, text, duration);
        tracing::debug!("Toast [{}]: {}", severity.label(), toast.text);
        self.toast = Some(toast);
    }

    /// Drop the toast if it has expired
    pub fn clear_expired_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired_at(now)) {
            self.toast = None;
        }
    }

    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
