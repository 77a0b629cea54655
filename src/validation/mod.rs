//! Credential validation and form gating
//!
//! Pure rules shared by the sign-in and sign-up forms:
//! - `rules`: per-field rules (email, password, confirmation)
//! - `gate`: the derived validity record and submit gate
//!
//! Nothing in here knows about touched state or rendering. Hosts decide
//! when an error is shown; the engine only says whether a value passes.

mod error;
mod gate;
mod rules;

pub use error::ValidationError;
pub use gate::{compute_submit_enabled, evaluate, CredentialFields, FormReport};
pub use rules::{validate_confirm_password, validate_email, validate_password, FormMode};

/// Result of running a single rule
pub type RuleResult = Result<(), ValidationError>;
