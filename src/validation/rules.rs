//! Field rules

use super::{RuleResult, ValidationError};
use regex::Regex;
use std::sync::LazyLock;

/// Local part: word characters plus `' + - .`, ending on a non-dot.
/// Domain: one or more `label.` followed by an alphabetic TLD.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Characters that satisfy the "number or special character" requirement
/// alongside ASCII digits.
pub const SPECIAL_CHARACTERS: [char; 8] = ['!', '@', '#', '$', '%', '^', '&', '*'];

/// Which form a rule set is evaluated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    SignIn,
    SignUp,
}

impl FormMode {
    /// Minimum password length for this mode
    pub fn min_password_len(self) -> usize {
        match self {
            Self::SignIn => 6,
            Self::SignUp => 8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SignIn => "sign-in",
            Self::SignUp => "sign-up",
        }
    }
}

/// Check an email address against the web-form email grammar.
///
/// Empty input is invalid; the caller decides whether to show it.
pub fn validate_email(value: &str) -> RuleResult {
    let local = value.split('@').next().unwrap_or_default();
    if local.starts_with('.') || local.contains("..") {
        return Err(ValidationError::InvalidEmail);
    }
    if EMAIL_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Check a password for the given mode.
///
/// Sign-up checks run in a fixed order and report only the first failure:
/// length, then uppercase, then digit-or-special.
pub fn validate_password(value: &str, mode: FormMode) -> RuleResult {
    let min = mode.min_password_len();
    if value.chars().count() < min {
        return Err(ValidationError::PasswordTooShort { min });
    }

    if mode == FormMode::SignIn {
        return Ok(());
    }

    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::PasswordMissingUppercase);
    }

    if !value
        .chars()
        .any(|c| c.is_ascii_digit() || SPECIAL_CHARACTERS.contains(&c))
    {
        return Err(ValidationError::PasswordMissingNumberOrSpecial);
    }

    Ok(())
}

/// Confirmation must be non-empty and match exactly (case-sensitive, untrimmed).
pub fn validate_confirm_password(password: &str, confirm: &str) -> RuleResult {
    if !confirm.is_empty() && confirm == password {
        Ok(())
    } else {
        Err(ValidationError::PasswordMismatch)
    }
}
