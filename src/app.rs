//! Application state and core logic

use crate::auth::{
    CredentialAuthenticator, FixedCredentials, GoogleSignIn, LocalGoogleSdk, SIGN_OUT_ERROR,
};
use crate::config::TuiConfig;
use crate::state::{
    AppState, Form, FormState, Session, SessionProvider, Severity, View, ViewParams,
    WelcomeAction,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// Toast shown when the email/password pair is rejected
pub const WRONG_CREDENTIALS: &str = "Wrong credentials";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Email/password check used by the sign-in form
    authenticator: Box<dyn CredentialAuthenticator>,
    /// Federated sign-in hook used by the welcome screen
    pub google: GoogleSignIn,
    /// How long toasts stay visible
    toast_duration: Duration,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App wired to the configured collaborators
    pub fn new(config: &TuiConfig) -> Self {
        let authenticator = match (&config.credential_email, &config.credential_password) {
            (Some(email), Some(password)) => FixedCredentials::new(email, password),
            _ => FixedCredentials::default(),
        };
        let sdk = LocalGoogleSdk::new(
            config.google_account_email.clone(),
            config.google_account_name.clone(),
        );
        let google = GoogleSignIn::new(Box::new(sdk), config.web_client_id());

        Self::with_collaborators(Box::new(authenticator), google, config.toast_duration())
    }

    /// Create an App with explicit collaborators
    pub fn with_collaborators(
        authenticator: Box<dyn CredentialAuthenticator>,
        google: GoogleSignIn,
        toast_duration: Duration,
    ) -> Self {
        Self {
            state: AppState::default(),
            authenticator,
            google,
            toast_duration,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Expire timed UI state and collect a finished federated sign-in
    pub async fn tick(&mut self) {
        self.state.clear_expired_toast(Instant::now());

        // Failures stay in the hook's `error` for the welcome screen to show
        if let Some(Ok(user)) = self.google.poll_sign_in().await {
            self.state.session = Some(Session::new(
                SessionProvider::Google,
                user.email.clone(),
                user.name.clone(),
            ));
            self.reset_to(
                View::Dashboard,
                ViewParams {
                    email: Some(user.email),
                },
            );
        }
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Show a transient toast
    pub fn notify(&mut self, severity: Severity, text: impl Into<String>) {
        self.state.notify(severity, text, self.toast_duration);
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Welcome => self.handle_welcome_key(key).await?,
            View::SignIn => self.handle_sign_in_key(key),
            View::SignUp => self.handle_sign_up_key(key),
            View::Dashboard => self.handle_dashboard_key(key).await?,
            view if view.is_external_stub() => self.handle_stub_key(key),
            _ => {}
        }

        Ok(())
    }

    /// Navigate to a new view, starting a fresh form session if it has one.
    ///
    /// A view already on the history stack is returned to, dropping
    /// everything above it.
    pub fn navigate(&mut self, view: View, params: ViewParams) {
        tracing::info!(
            "Navigating {} -> {}",
            self.state.current_view.route_name(),
            view.route_name()
        );
        if view == self.state.current_view {
            self.enter(view, params);
            return;
        }
        match self.state.view_history.iter().position(|(v, _)| *v == view) {
            Some(index) => self.state.view_history.truncate(index),
            None => self.state.view_history.push((
                self.state.current_view,
                self.state.view_params.clone(),
            )),
        }
        self.enter(view, params);
    }

    /// Navigate by route name. Returns false for unknown routes.
    pub fn navigate_to_route(&mut self, route: &str, params: ViewParams) -> bool {
        match View::from_route_name(route) {
            Some(view) => {
                self.navigate(view, params);
                true
            }
            None => {
                tracing::warn!("Unknown route: {route}");
                false
            }
        }
    }

    /// Replace the whole history with a single view
    pub fn reset_to(&mut self, view: View, params: ViewParams) {
        tracing::info!("Resetting navigation to {}", view.route_name());
        self.state.view_history.clear();
        self.enter(view, params);
    }

    /// Go back to previous view. Form views come back empty.
    pub fn go_back(&mut self) {
        if let Some((view, params)) = self.state.view_history.pop() {
            self.enter(view, params);
        }
    }

    fn enter(&mut self, view: View, params: ViewParams) {
        self.state.current_view = view;
        self.state.view_params = params;
        self.state.reset_form_for(view);
    }

    /// Handle keys on the welcome screen
    async fn handle_welcome_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.state.prev_welcome_action()
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.state.next_welcome_action()
            }
            KeyCode::Enter => {
                let action = self.state.selected_welcome_action();
                self.run_welcome_action(action);
            }
            KeyCode::Char('e') => self.run_welcome_action(WelcomeAction::SignInWithEmail),
            KeyCode::Char('g') => self.run_welcome_action(WelcomeAction::SignInWithGoogle),
            KeyCode::Char('s') => self.run_welcome_action(WelcomeAction::SignUp),
            KeyCode::Esc if self.google.loading => {
                self.google.cancel_sign_in();
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    fn run_welcome_action(&mut self, action: WelcomeAction) {
        match action.route() {
            Some(route) => {
                self.navigate_to_route(route, ViewParams::default());
            }
            // The dashboard opens from `tick` once the sign-in finishes
            None => {
                self.google.start_sign_in();
            }
        }
    }

    /// Keys shared by every form: focus movement, masking and text entry.
    /// Returns true when the key was consumed.
    fn handle_form_edit_key(&mut self, key: KeyEvent) -> bool {
        let Some(form) = self.state.form.as_form_mut() else {
            return false;
        };
        let on_buttons = form.is_buttons_row_active();

        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Left if on_buttons => form.prev_button(),
            KeyCode::Right if on_buttons => form.next_button(),
            KeyCode::Char('r') if is_reveal_shortcut(&key) => form.toggle_secure_text_entry(),
            // Enter in an input behaves like moving to the next field
            KeyCode::Enter if !on_buttons => form.next_field(),
            KeyCode::Char(c) if !on_buttons && !has_command_modifier(&key) => form.input_char(c),
            KeyCode::Backspace if !on_buttons => form.backspace(),
            _ => return false,
        }
        true
    }

    /// Handle keys in the sign-in form
    fn handle_sign_in_key(&mut self, key: KeyEvent) {
        if is_submit_shortcut(&key) {
            self.submit_sign_in();
            return;
        }
        if self.handle_form_edit_key(key) {
            return;
        }

        let FormState::SignIn(form) = &self.state.form else {
            return;
        };
        match key.code {
            KeyCode::Enter => match form.selected_action().route() {
                Some(route) => {
                    self.navigate_to_route(route, ViewParams::default());
                }
                None => self.submit_sign_in(),
            },
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    /// Check the entered credentials. Only acts while the submit gate is open.
    fn submit_sign_in(&mut self) {
        let FormState::SignIn(form) = &self.state.form else {
            return;
        };
        let report = form.report();
        if !report.submit_enabled {
            tracing::debug!(
                mode = report.mode.label(),
                reason = ?report.first_error(),
                "Login pressed while disabled"
            );
            return;
        }

        let email = form.email.as_text().to_string();
        let accepted = self
            .authenticator
            .authenticate(&email, form.password.as_text());

        if accepted {
            tracing::info!("Email sign-in accepted for {email}");
            self.state.session = Some(Session::new(SessionProvider::Email, email.clone(), None));
            self.navigate(View::SetBiometric, ViewParams { email: Some(email) });
        } else {
            tracing::info!("Email sign-in rejected");
            self.notify(Severity::Error, WRONG_CREDENTIALS);
        }
    }

    /// Handle keys in the sign-up form
    fn handle_sign_up_key(&mut self, key: KeyEvent) {
        if is_submit_shortcut(&key) {
            self.submit_sign_up();
            return;
        }
        if self.handle_form_edit_key(key) {
            return;
        }

        let FormState::SignUp(form) = &self.state.form else {
            return;
        };
        match key.code {
            KeyCode::Enter => match form.selected_action().route() {
                Some(route) => {
                    self.navigate_to_route(route, ViewParams::default());
                }
                None => self.submit_sign_up(),
            },
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    /// Proceed to the terms screen. Only acts while the submit gate is open.
    fn submit_sign_up(&mut self) {
        let FormState::SignUp(form) = &self.state.form else {
            return;
        };
        let report = form.report();
        if !report.submit_enabled {
            tracing::debug!(
                mode = report.mode.label(),
                reason = ?report.first_error(),
                "Sign up pressed while disabled"
            );
            return;
        }

        let email = form.email.as_text().to_string();
        let name = Some(form.name.as_text().trim().to_string()).filter(|n| !n.is_empty());
        tracing::info!("Sign-up details accepted for {email}");
        self.state.session = Some(Session::new(SessionProvider::Email, email.clone(), name));
        self.navigate(View::Legal, ViewParams { email: Some(email) });
    }

    /// Handle keys on the dashboard
    async fn handle_dashboard_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('o') => self.sign_out().await,
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// End the session and return to the welcome screen
    async fn sign_out(&mut self) {
        let provider = self.state.session.as_ref().map(|s| s.provider);
        if provider == Some(SessionProvider::Google) && self.google.sign_out().await.is_err() {
            self.push_error(SIGN_OUT_ERROR);
            return;
        }

        self.state.session = None;
        self.reset_to(View::Welcome, ViewParams::default());
        self.notify(Severity::Info, "Signed out");
    }

    /// Handle keys on placeholder screens owned elsewhere
    fn handle_stub_key(&mut self, key: KeyEvent) {
        let continues = matches!(self.state.current_view, View::SetBiometric | View::Legal);
        match key.code {
            KeyCode::Enter if continues => {
                let params = self.state.view_params.clone();
                self.reset_to(View::Dashboard, params);
                self.notify(Severity::Success, "You're all set");
            }
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }
}

fn is_submit_shortcut(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn is_reveal_shortcut(key: &KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | crate::platform::REVEAL_MODIFIER)
}

/// Ctrl/Cmd/Alt chords are never text input
fn has_command_modifier(key: &KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{
        GoogleUser, MockCredentialAuthenticator, MockGoogleSdk, SdkError, StatusCode,
    };

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn test_user() -> GoogleUser {
        GoogleUser {
            id: "1".to_string(),
            email: "ada@example.com".to_string(),
            name: Some("Ada".to_string()),
        }
    }

    fn app_with(authenticator: impl CredentialAuthenticator + 'static, sdk: MockGoogleSdk) -> App {
        App::with_collaborators(
            Box::new(authenticator),
            GoogleSignIn::new(Box::new(sdk), "client-id"),
            Duration::from_secs(3),
        )
    }

    /// App with the built-in credential pair and an SDK that must not be called
    fn default_app() -> App {
        app_with(FixedCredentials::default(), MockGoogleSdk::new())
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    async fn press(app: &mut App, code: KeyCode) {
        app.handle_key(key(code)).await.unwrap();
    }

    /// Drive the event loop until the running Google sign-in settles
    async fn finish_google_sign_in(app: &mut App) {
        while app.google.loading {
            tokio::task::yield_now().await;
            app.tick().await;
        }
    }

    async fn fill_sign_in(app: &mut App, email: &str, password: &str) {
        app.navigate(View::SignIn, ViewParams::default());
        type_text(app, email).await;
        press(app, KeyCode::Tab).await;
        type_text(app, password).await;
    }

    async fn fill_sign_up(app: &mut App, name: &str, email: &str, password: &str, confirm: &str) {
        app.navigate(View::SignUp, ViewParams::default());
        type_text(app, name).await;
        press(app, KeyCode::Tab).await;
        type_text(app, email).await;
        press(app, KeyCode::Tab).await;
        type_text(app, password).await;
        press(app, KeyCode::Tab).await;
        type_text(app, confirm).await;
    }

    fn sign_up_submit_enabled(app: &App) -> bool {
        app.state.form.as_form().is_some_and(|f| f.submit_enabled())
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_starts_on_welcome() {
            let app = default_app();
            assert_eq!(app.state.current_view, View::Welcome);
            assert!(!app.should_quit());
        }

        #[test]
        fn test_navigate_saves_history_and_opens_form() {
            let mut app = default_app();
            app.navigate(View::SignIn, ViewParams::default());
            assert_eq!(app.state.current_view, View::SignIn);
            assert_eq!(app.state.view_history.len(), 1);
            assert!(matches!(app.state.form, FormState::SignIn(_)));
        }

        #[test]
        fn test_navigate_to_route() {
            let mut app = default_app();
            assert!(app.navigate_to_route("Signup", ViewParams::default()));
            assert_eq!(app.state.current_view, View::SignUp);
            assert!(!app.navigate_to_route("Nowhere", ViewParams::default()));
            assert_eq!(app.state.current_view, View::SignUp);
        }

        #[test]
        fn test_navigate_to_view_in_history_unwinds() {
            let mut app = default_app();
            app.navigate(View::SignIn, ViewParams::default());
            for _ in 0..100 {
                app.navigate(View::SignUp, ViewParams::default());
                app.navigate(View::SignIn, ViewParams::default());
            }
            assert_eq!(app.state.current_view, View::SignIn);
            assert_eq!(app.state.view_history.len(), 1);

            app.go_back();
            assert_eq!(app.state.current_view, View::Welcome);
        }

        #[tokio::test]
        async fn test_form_links_keep_history_bounded() {
            let mut app = default_app();
            press(&mut app, KeyCode::Char('e')).await;
            for _ in 0..50 {
                // Sign-in buttons row, "Sign Up" link
                press(&mut app, KeyCode::BackTab).await;
                press(&mut app, KeyCode::Left).await;
                press(&mut app, KeyCode::Enter).await;
                assert_eq!(app.state.current_view, View::SignUp);

                // Sign-up buttons row, "Sign In" link
                press(&mut app, KeyCode::BackTab).await;
                press(&mut app, KeyCode::Right).await;
                press(&mut app, KeyCode::Enter).await;
                assert_eq!(app.state.current_view, View::SignIn);
                assert!(app.state.view_history.len() <= 2);
            }
        }

        #[test]
        fn test_go_back_discards_form_values() {
            let mut app = default_app();
            app.navigate(View::SignIn, ViewParams::default());
            if let FormState::SignIn(form) = &mut app.state.form {
                form.email.set_text("a@b.com");
            }
            app.navigate(View::ResetPassword, ViewParams::default());
            assert!(matches!(app.state.form, FormState::None));

            app.go_back();
            assert_eq!(app.state.current_view, View::SignIn);
            match &app.state.form {
                FormState::SignIn(form) => assert_eq!(form.email.as_text(), ""),
                other => panic!("expected sign-in form, got {other:?}"),
            }
        }

        #[test]
        fn test_go_back_empty_history_does_nothing() {
            let mut app = default_app();
            app.go_back();
            assert_eq!(app.state.current_view, View::Welcome);
        }

        #[test]
        fn test_reset_to_clears_history() {
            let mut app = default_app();
            app.navigate(View::SignIn, ViewParams::default());
            app.reset_to(View::Dashboard, ViewParams::default());
            assert!(app.state.view_history.is_empty());
            app.go_back();
            assert_eq!(app.state.current_view, View::Dashboard);
        }
    }

    mod welcome {
        use super::*;

        #[tokio::test]
        async fn test_shortcuts_open_forms() {
            let mut app = default_app();
            press(&mut app, KeyCode::Char('e')).await;
            assert_eq!(app.state.current_view, View::SignIn);

            press(&mut app, KeyCode::Esc).await;
            assert_eq!(app.state.current_view, View::Welcome);

            press(&mut app, KeyCode::Char('s')).await;
            assert_eq!(app.state.current_view, View::SignUp);
        }

        #[tokio::test]
        async fn test_enter_runs_selected_action() {
            let mut app = default_app();
            press(&mut app, KeyCode::Up).await;
            assert_eq!(app.state.selected_welcome_action(), WelcomeAction::SignUp);
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.current_view, View::SignUp);
        }

        #[tokio::test]
        async fn test_q_quits() {
            let mut app = default_app();
            press(&mut app, KeyCode::Char('q')).await;
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_google_success_opens_dashboard() {
            let mut sdk = MockGoogleSdk::new();
            sdk.expect_configure().return_const(());
            sdk.expect_has_play_services().returning(|| Ok(true));
            sdk.expect_sign_in().times(1).returning(|| Ok(test_user()));

            let mut app = app_with(FixedCredentials::default(), sdk);
            press(&mut app, KeyCode::Char('g')).await;
            assert!(app.google.loading);
            assert_eq!(app.state.current_view, View::Welcome);

            finish_google_sign_in(&mut app).await;
            assert_eq!(app.state.current_view, View::Dashboard);
            assert!(app.state.view_history.is_empty());
            let session = app.state.session.as_ref().unwrap();
            assert_eq!(session.provider, SessionProvider::Google);
            assert_eq!(session.display_name(), "Ada");
            assert!(app.google.error.is_none());
        }

        #[tokio::test]
        async fn test_google_failure_stays_with_error() {
            let mut sdk = MockGoogleSdk::new();
            sdk.expect_configure().return_const(());
            sdk.expect_has_play_services()
                .returning(|| Err(SdkError::new(StatusCode::PlayServicesNotAvailable)));

            let mut app = app_with(FixedCredentials::default(), sdk);
            press(&mut app, KeyCode::Char('g')).await;
            finish_google_sign_in(&mut app).await;

            assert_eq!(app.state.current_view, View::Welcome);
            assert!(app.state.session.is_none());
            assert_eq!(
                app.google.error.as_deref(),
                Some("Play Services are not available or outdated.")
            );
            assert!(!app.google.loading);
        }

        #[tokio::test]
        async fn test_second_google_press_reports_in_progress() {
            let mut sdk = MockGoogleSdk::new();
            sdk.expect_configure().times(1).return_const(());
            sdk.expect_has_play_services().times(1).returning(|| Ok(true));
            sdk.expect_sign_in().times(1).returning(|| Ok(test_user()));

            let mut app = app_with(FixedCredentials::default(), sdk);
            press(&mut app, KeyCode::Char('g')).await;
            press(&mut app, KeyCode::Char('g')).await;
            assert_eq!(
                app.google.error.as_deref(),
                Some("Sign-in operation already in progress.")
            );

            // The first attempt still completes
            finish_google_sign_in(&mut app).await;
            assert_eq!(app.state.current_view, View::Dashboard);
            assert!(app.google.error.is_none());
        }

        #[tokio::test]
        async fn test_esc_cancels_running_google_sign_in() {
            let mut app = default_app();
            press(&mut app, KeyCode::Char('g')).await;
            assert!(app.google.loading);

            press(&mut app, KeyCode::Esc).await;
            assert!(!app.google.loading);
            assert!(!app.should_quit());
            assert_eq!(app.google.error.as_deref(), Some("Sign-in was cancelled."));

            app.tick().await;
            assert_eq!(app.state.current_view, View::Welcome);
            assert!(app.state.session.is_none());
        }

        #[tokio::test]
        async fn test_esc_quits_when_idle() {
            let mut app = default_app();
            press(&mut app, KeyCode::Esc).await;
            assert!(app.should_quit());
        }
    }

    mod sign_in {
        use super::*;

        #[tokio::test]
        async fn test_correct_credentials_navigate_onward() {
            let mut auth = MockCredentialAuthenticator::new();
            auth.expect_authenticate()
                .withf(|email, password| email == "test@gmail.com" && password == "test@123")
                .times(1)
                .return_const(true);

            let mut app = app_with(auth, MockGoogleSdk::new());
            fill_sign_in(&mut app, "test@gmail.com", "test@123").await;
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.current_view, View::SetBiometric);
            assert_eq!(
                app.state.view_params.email.as_deref(),
                Some("test@gmail.com")
            );
            assert!(app.state.toast.is_none());
            assert_eq!(
                app.state.session.as_ref().map(|s| s.provider),
                Some(SessionProvider::Email)
            );
        }

        #[tokio::test]
        async fn test_wrong_credentials_show_toast() {
            let mut app = default_app();
            fill_sign_in(&mut app, "test@gmail.com", "wrong1").await;
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.current_view, View::SignIn);
            let toast = app.state.toast.as_ref().unwrap();
            assert_eq!(toast.text, "Wrong credentials");
            assert_eq!(toast.severity, Severity::Error);
            assert!(app.state.session.is_none());
        }

        #[tokio::test]
        async fn test_short_password_keeps_login_disabled() {
            // "wrong" fails the 6-char rule, so the check never runs
            let mut auth = MockCredentialAuthenticator::new();
            auth.expect_authenticate().never();

            let mut app = app_with(auth, MockGoogleSdk::new());
            fill_sign_in(&mut app, "test@gmail.com", "wrong").await;
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.current_view, View::SignIn);
            assert!(app.state.toast.is_none());
        }

        #[tokio::test]
        async fn test_login_button_via_buttons_row() {
            let mut app = default_app();
            fill_sign_in(&mut app, "test@gmail.com", "test@123").await;
            press(&mut app, KeyCode::Tab).await;
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.current_view, View::SetBiometric);
        }

        #[tokio::test]
        async fn test_forgot_password_and_sign_up_links() {
            let mut app = default_app();
            app.navigate(View::SignIn, ViewParams::default());
            press(&mut app, KeyCode::BackTab).await;
            press(&mut app, KeyCode::Right).await;
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.current_view, View::ResetPassword);

            press(&mut app, KeyCode::Esc).await;
            assert_eq!(app.state.current_view, View::SignIn);
            press(&mut app, KeyCode::BackTab).await;
            press(&mut app, KeyCode::Left).await;
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.current_view, View::SignUp);
        }

        #[tokio::test]
        async fn test_blur_shows_email_error() {
            let mut app = default_app();
            app.navigate(View::SignIn, ViewParams::default());
            type_text(&mut app, "test").await;
            press(&mut app, KeyCode::Tab).await;
            match &app.state.form {
                FormState::SignIn(form) => {
                    assert_eq!(form.email.error.as_deref(), Some("Invalid email address"))
                }
                other => panic!("expected sign-in form, got {other:?}"),
            }
        }

        #[tokio::test]
        async fn test_reveal_toggle() {
            let mut app = default_app();
            app.navigate(View::SignIn, ViewParams::default());
            app.handle_key(ctrl('r')).await.unwrap();
            match &app.state.form {
                FormState::SignIn(form) => {
                    assert!(!form.secure_text_entry);
                    assert_eq!(form.email.as_text(), "");
                }
                other => panic!("expected sign-in form, got {other:?}"),
            }
        }

        #[tokio::test]
        async fn test_continue_from_biometric_stub() {
            let mut app = default_app();
            fill_sign_in(&mut app, "test@gmail.com", "test@123").await;
            app.handle_key(ctrl('s')).await.unwrap();
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.current_view, View::Dashboard);
            assert_eq!(
                app.state.view_params.email.as_deref(),
                Some("test@gmail.com")
            );
        }
    }

    mod sign_up {
        use super::*;

        #[tokio::test]
        async fn test_valid_details_proceed() {
            let mut app = default_app();
            fill_sign_up(&mut app, "Ada", "a@b.com", "Abcdefg1", "Abcdefg1").await;
            assert!(sign_up_submit_enabled(&app));

            app.handle_key(ctrl('s')).await.unwrap();
            assert_eq!(app.state.current_view, View::Legal);
            let session = app.state.session.as_ref().unwrap();
            assert_eq!(session.display_name(), "Ada");
            assert_eq!(session.email, "a@b.com");
        }

        #[tokio::test]
        async fn test_mismatched_confirm_stays_disabled() {
            let mut app = default_app();
            fill_sign_up(&mut app, "Ada", "a@b.com", "Abcdefg1", "Abcdefg2").await;
            assert!(!sign_up_submit_enabled(&app));

            app.handle_key(ctrl('s')).await.unwrap();
            assert_eq!(app.state.current_view, View::SignUp);
            assert!(app.state.session.is_none());
        }

        #[tokio::test]
        async fn test_password_error_while_typing() {
            let mut app = default_app();
            app.navigate(View::SignUp, ViewParams::default());
            press(&mut app, KeyCode::Tab).await;
            press(&mut app, KeyCode::Tab).await;
            type_text(&mut app, "abc").await;
            match &app.state.form {
                FormState::SignUp(form) => assert_eq!(
                    form.password.error.as_deref(),
                    Some("Password must be at least 8 characters long")
                ),
                other => panic!("expected sign-up form, got {other:?}"),
            }
        }

        #[tokio::test]
        async fn test_sign_in_link() {
            let mut app = default_app();
            app.navigate(View::SignUp, ViewParams::default());
            press(&mut app, KeyCode::BackTab).await;
            press(&mut app, KeyCode::Right).await;
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.current_view, View::SignIn);
        }

        #[tokio::test]
        async fn test_continue_from_legal_stub() {
            let mut app = default_app();
            fill_sign_up(&mut app, "", "a@b.com", "Abcdefg1", "Abcdefg1").await;
            app.handle_key(ctrl('s')).await.unwrap();
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.current_view, View::Dashboard);
            assert_eq!(
                app.state.session.as_ref().map(|s| s.display_name().to_string()),
                Some("a@b.com".to_string())
            );
        }
    }

    mod dashboard {
        use super::*;

        #[tokio::test]
        async fn test_email_sign_out_returns_to_welcome() {
            let mut app = default_app();
            app.state.session = Some(Session::new(SessionProvider::Email, "a@b.com", None));
            app.reset_to(View::Dashboard, ViewParams::default());

            press(&mut app, KeyCode::Char('o')).await;

            assert_eq!(app.state.current_view, View::Welcome);
            assert!(app.state.session.is_none());
        }

        #[tokio::test]
        async fn test_google_sign_out_failure_shows_error_dialog() {
            let mut sdk = MockGoogleSdk::new();
            sdk.expect_sign_out()
                .times(1)
                .returning(|| Err(SdkError::new(StatusCode::Developer)));

            let mut app = app_with(FixedCredentials::default(), sdk);
            app.state.session = Some(Session::new(SessionProvider::Google, "a@b.com", None));
            app.reset_to(View::Dashboard, ViewParams::default());

            press(&mut app, KeyCode::Char('o')).await;

            assert_eq!(app.state.current_view, View::Dashboard);
            assert_eq!(app.state.current_error(), Some(SIGN_OUT_ERROR));

            // Modal swallows keys until dismissed
            press(&mut app, KeyCode::Char('q')).await;
            assert!(!app.should_quit());
            press(&mut app, KeyCode::Enter).await;
            assert!(!app.state.has_errors());
        }

        #[tokio::test]
        async fn test_google_sign_out_success() {
            let mut sdk = MockGoogleSdk::new();
            sdk.expect_sign_out().times(1).returning(|| Ok(()));

            let mut app = app_with(FixedCredentials::default(), sdk);
            app.state.session = Some(Session::new(SessionProvider::Google, "a@b.com", None));
            app.reset_to(View::Dashboard, ViewParams::default());

            press(&mut app, KeyCode::Char('o')).await;
            assert_eq!(app.state.current_view, View::Welcome);
        }
    }

    mod toast {
        use super::*;

        #[tokio::test]
        async fn test_tick_clears_expired_toast() {
            let mut app = App::with_collaborators(
                Box::new(FixedCredentials::default()),
                GoogleSignIn::new(Box::new(MockGoogleSdk::new()), "client-id"),
                Duration::ZERO,
            );
            app.notify(Severity::Error, WRONG_CREDENTIALS);
            app.tick().await;
            assert!(app.state.toast.is_none());
        }
    }
}
