//! Form domain layer
//!
//! Field values and the per-screen display policy for the sign-in and
//! sign-up forms. Validity comes from `crate::validation`; this layer only
//! decides when an error becomes visible.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{Form, FormState, SignInAction, SignInForm, SignUpAction, SignUpForm};
