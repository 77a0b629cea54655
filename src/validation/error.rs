//! Field-level validation failures

use thiserror::Error;

/// A single failed rule. The `Display` text is the message shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },

    #[error("Password must have at least one uppercase letter")]
    PasswordMissingUppercase,

    #[error("Password must have at least one number or special character")]
    PasswordMissingNumberOrSpecial,

    #[error("Passwords do not match")]
    PasswordMismatch,
}
