//! Form state management and form structs

use super::field::FormField;
use crate::state::View;
use crate::validation::{
    compute_submit_enabled, evaluate, validate_confirm_password, validate_email, validate_password,
    CredentialFields, FormMode, FormReport,
};

/// Trait for common form operations.
///
/// Indices `0..field_count() - 1` are input fields; the last index is the
/// buttons row.
pub trait Form {
    fn mode(&self) -> FormMode;
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn get_field(&self, index: usize) -> Option<&FormField>;
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField>;
    fn credentials(&self) -> CredentialFields<'_>;

    /// Focus is leaving field `index`
    fn on_blur(&mut self, index: usize);

    /// The value of field `index` changed
    fn on_change(&mut self, _index: usize) {}

    fn button_count(&self) -> usize;
    fn selected_button(&self) -> usize;
    fn set_selected_button(&mut self, index: usize);

    fn secure_text_entry(&self) -> bool;
    fn toggle_secure_text_entry(&mut self);

    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.leave_field(current);
        self.set_active_field((current + 1) % count);
    }

    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.leave_field(current);
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }

    fn leave_field(&mut self, index: usize) {
        self.on_blur(index);
        if let Some(field) = self.get_field(index) {
            tracing::trace!(field = %field.name, error = ?field.error, "field blurred");
        }
    }

    fn is_buttons_row_active(&self) -> bool {
        self.active_field() == self.field_count() - 1
    }

    fn next_button(&mut self) {
        let count = self.button_count();
        self.set_selected_button((self.selected_button() + 1) % count);
    }

    fn prev_button(&mut self) {
        let current = self.selected_button();
        if current == 0 {
            self.set_selected_button(self.button_count() - 1);
        } else {
            self.set_selected_button(current - 1);
        }
    }

    fn input_char(&mut self, c: char) {
        let index = self.active_field();
        if let Some(field) = self.get_field_mut(index) {
            field.push_char(c);
            self.on_change(index);
        }
    }

    fn backspace(&mut self) {
        let index = self.active_field();
        if let Some(field) = self.get_field_mut(index) {
            field.pop_char();
            self.on_change(index);
        }
    }

    /// Validity of the current values
    fn report(&self) -> FormReport {
        evaluate(self.credentials(), self.mode())
    }

    fn submit_enabled(&self) -> bool {
        compute_submit_enabled(self.credentials(), self.mode())
    }
}

/// Enum representing all possible form states
#[derive(Debug, Clone, Default)]
pub enum FormState {
    #[default]
    None,
    SignIn(SignInForm),
    SignUp(SignUpForm),
}

impl FormState {
    pub fn as_form(&self) -> Option<&dyn Form> {
        match self {
            FormState::None => None,
            FormState::SignIn(f) => Some(f),
            FormState::SignUp(f) => Some(f),
        }
    }

    pub fn as_form_mut(&mut self) -> Option<&mut dyn Form> {
        match self {
            FormState::None => None,
            FormState::SignIn(f) => Some(f),
            FormState::SignUp(f) => Some(f),
        }
    }
}

/// Buttons on the sign-in form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInAction {
    Login,
    ForgotPassword,
    SignUp,
}

impl SignInAction {
    pub const ALL: [SignInAction; 3] = [Self::Login, Self::ForgotPassword, Self::SignUp];

    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::ForgotPassword => "Forgot Password?",
            Self::SignUp => "Sign Up",
        }
    }

    /// Route the button links to; `None` for the submit button
    pub fn route(self) -> Option<&'static str> {
        match self {
            Self::Login => None,
            Self::ForgotPassword => Some(View::ResetPassword.route_name()),
            Self::SignUp => Some(View::SignUp.route_name()),
        }
    }
}

/// Email/password sign-in.
///
/// Errors refresh only when a field loses focus; typing never changes them.
#[derive(Debug, Clone)]
pub struct SignInForm {
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
    pub selected_button: usize,
    pub secure_text_entry: bool,
}

impl SignInForm {
    const BUTTONS_ROW: usize = 2;

    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "Email"),
            password: FormField::secret("password", "Password"),
            active_field_index: 0,
            selected_button: 0,
            secure_text_entry: true,
        }
    }

    pub fn selected_action(&self) -> SignInAction {
        SignInAction::ALL[self.selected_button.min(SignInAction::ALL.len() - 1)]
    }
}

impl Default for SignInForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignInForm {
    fn mode(&self) -> FormMode {
        FormMode::SignIn
    }
    fn field_count(&self) -> usize {
        3 // email, password, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTONS_ROW);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            1 => Some(&self.password),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.email),
            1 => Some(&mut self.password),
            _ => None,
        }
    }
    fn credentials(&self) -> CredentialFields<'_> {
        CredentialFields {
            email: self.email.as_text(),
            password: self.password.as_text(),
            confirm_password: "",
        }
    }
    fn on_blur(&mut self, index: usize) {
        match index {
            0 => {
                let result = validate_email(self.email.as_text());
                self.email.blur();
                self.email.show_result(result, true);
            }
            1 => {
                let result = validate_password(self.password.as_text(), FormMode::SignIn);
                self.password.blur();
                self.password.show_result(result, true);
            }
            _ => {}
        }
    }
    fn button_count(&self) -> usize {
        SignInAction::ALL.len()
    }
    fn selected_button(&self) -> usize {
        self.selected_button
    }
    fn set_selected_button(&mut self, index: usize) {
        self.selected_button = index.min(SignInAction::ALL.len() - 1);
    }
    fn secure_text_entry(&self) -> bool {
        self.secure_text_entry
    }
    fn toggle_secure_text_entry(&mut self) {
        self.secure_text_entry = !self.secure_text_entry;
    }
}

/// Buttons on the sign-up form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpAction {
    SignUp,
    SignIn,
}

impl SignUpAction {
    pub const ALL: [SignUpAction; 2] = [Self::SignUp, Self::SignIn];

    pub fn label(self) -> &'static str {
        match self {
            Self::SignUp => "Sign Up",
            Self::SignIn => "Sign In",
        }
    }

    pub fn route(self) -> Option<&'static str> {
        match self {
            Self::SignUp => None,
            Self::SignIn => Some(View::SignIn.route_name()),
        }
    }
}

/// Account creation.
///
/// Email and confirmation errors refresh on blur. The password error
/// refreshes on every keystroke as well as on blur.
#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    pub active_field_index: usize,
    pub selected_button: usize,
    pub secure_text_entry: bool,
}

impl SignUpForm {
    const BUTTONS_ROW: usize = 4;

    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name"),
            email: FormField::text("email", "Email"),
            password: FormField::secret("password", "Password"),
            confirm_password: FormField::secret("confirm_password", "Confirm Password"),
            active_field_index: 0,
            selected_button: 0,
            secure_text_entry: true,
        }
    }

    pub fn selected_action(&self) -> SignUpAction {
        SignUpAction::ALL[self.selected_button.min(SignUpAction::ALL.len() - 1)]
    }

    fn refresh_password_error(&mut self) {
        let result = validate_password(self.password.as_text(), FormMode::SignUp);
        self.password.show_result(result, false);
    }
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignUpForm {
    fn mode(&self) -> FormMode {
        FormMode::SignUp
    }
    fn field_count(&self) -> usize {
        5 // name, email, password, confirm, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTONS_ROW);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.password),
            3 => Some(&self.confirm_password),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.password),
            3 => Some(&mut self.confirm_password),
            _ => None,
        }
    }
    fn credentials(&self) -> CredentialFields<'_> {
        CredentialFields {
            email: self.email.as_text(),
            password: self.password.as_text(),
            confirm_password: self.confirm_password.as_text(),
        }
    }
    fn on_blur(&mut self, index: usize) {
        match index {
            0 => self.name.blur(),
            1 => {
                let result = validate_email(self.email.as_text());
                self.email.blur();
                self.email.show_result(result, true);
            }
            2 => {
                self.password.blur();
                self.refresh_password_error();
            }
            3 => {
                let result = validate_confirm_password(
                    self.password.as_text(),
                    self.confirm_password.as_text(),
                );
                self.confirm_password.blur();
                self.confirm_password.show_result(result, true);
            }
            _ => {}
        }
    }
    fn on_change(&mut self, index: usize) {
        if index == 2 {
            self.password.touched = true;
            self.refresh_password_error();
        }
    }
    fn button_count(&self) -> usize {
        SignUpAction::ALL.len()
    }
    fn selected_button(&self) -> usize {
        self.selected_button
    }
    fn set_selected_button(&mut self, index: usize) {
        self.selected_button = index.min(SignUpAction::ALL.len() - 1);
    }
    fn secure_text_entry(&self) -> bool {
        self.secure_text_entry
    }
    fn toggle_secure_text_entry(&mut self) {
        self.secure_text_entry = !self.secure_text_entry;
    }
}
