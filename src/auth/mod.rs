//! Authentication collaborators
//!
//! The forms never authenticate anything themselves. They hand validated
//! values to one of these seams:
//! - `CredentialAuthenticator`: synchronous email/password check
//! - `GoogleSdk`: federated sign-in provider, wrapped by the `GoogleSignIn` hook

mod credentials;
mod google;
mod local_sdk;
mod traits;

pub use credentials::FixedCredentials;
pub use google::{GoogleSignIn, SIGN_OUT_ERROR};
pub use local_sdk::LocalGoogleSdk;
pub use traits::CredentialAuthenticator;

#[cfg(test)]
pub use traits::{GoogleUser, MockCredentialAuthenticator, MockGoogleSdk, SdkError, StatusCode};
