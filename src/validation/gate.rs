//! Derived validity record and submit gate

use super::rules::{validate_confirm_password, validate_email, validate_password, FormMode};
use super::RuleResult;

/// Borrowed view of the raw values a form holds
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialFields<'a> {
    pub email: &'a str,
    pub password: &'a str,
    /// Ignored in sign-in mode
    pub confirm_password: &'a str,
}

/// Validity of every rule for one set of field values.
///
/// Rebuilt from scratch on each call to [`evaluate`]; holds no state of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormReport {
    pub mode: FormMode,
    pub email: RuleResult,
    pub password: RuleResult,
    /// `None` in sign-in mode
    pub confirm_password: Option<RuleResult>,
    pub submit_enabled: bool,
}

impl FormReport {
    /// First failing rule, in field order
    pub fn first_error(&self) -> Option<String> {
        [
            Some(&self.email),
            Some(&self.password),
            self.confirm_password.as_ref(),
        ]
        .into_iter()
        .flatten()
        .find_map(|r| r.as_ref().err().map(ToString::to_string))
    }
}

/// Run every rule the mode requires and derive the submit gate
pub fn evaluate(fields: CredentialFields<'_>, mode: FormMode) -> FormReport {
    let email = validate_email(fields.email);
    let password = validate_password(fields.password, mode);
    let confirm_password = match mode {
        FormMode::SignIn => None,
        FormMode::SignUp => Some(validate_confirm_password(
            fields.password,
            fields.confirm_password,
        )),
    };

    let submit_enabled =
        email.is_ok() && password.is_ok() && confirm_password.as_ref().is_none_or(Result::is_ok);

    FormReport {
        mode,
        email,
        password,
        confirm_password,
        submit_enabled,
    }
}

/// Whether the primary action should be interactive for these values
pub fn compute_submit_enabled(fields: CredentialFields<'_>, mode: FormMode) -> bool {
    evaluate(fields, mode).submit_enabled
}
