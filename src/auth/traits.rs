//! Trait abstractions for authentication providers to enable mocking in tests

use async_trait::async_trait;
use thiserror::Error;

/// Checks an email/password pair
#[cfg_attr(test, mockall::automock)]
pub trait CredentialAuthenticator: Send + Sync {
    /// Returns true when the pair is accepted
    fn authenticate(&self, email: &str, password: &str) -> bool;
}

/// Options passed to the federated provider before signing in
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GoogleSignInOptions {
    pub web_client_id: String,
}

/// Account returned by a successful federated sign-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleUser {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

impl GoogleUser {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Status codes a federated provider can fail with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// A sign-in is already running
    InProgress,
    /// Play services missing or outdated
    PlayServicesNotAvailable,
    /// The user dismissed the account picker
    SignInCancelled,
    /// No user is signed in
    SignInRequired,
    /// Misconfiguration (e.g. missing web client id)
    Developer,
}

/// Error raised by a federated provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code:?}: {}", .message.as_deref().unwrap_or("no message"))]
pub struct SdkError {
    pub code: StatusCode,
    pub message: Option<String>,
}

impl SdkError {
    pub fn new(code: StatusCode) -> Self {
        Self {
            code,
            message: None,
        }
    }

    pub fn with_message(code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: Some(message.into()),
        }
    }
}

/// Federated sign-in provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GoogleSdk: Send + Sync {
    /// Set provider options; must be called before `sign_in`
    fn configure(&mut self, options: GoogleSignInOptions);

    /// Check that the provider's platform services are usable
    async fn has_play_services(&self) -> Result<bool, SdkError>;

    /// Run the interactive sign-in
    async fn sign_in(&mut self) -> Result<GoogleUser, SdkError>;

    /// Drop the current provider session
    async fn sign_out(&mut self) -> Result<(), SdkError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_name() {
        let user = GoogleUser {
            id: "1".to_string(),
            email: "ada@example.com".to_string(),
            name: Some("Ada".to_string()),
        };
        assert_eq!(user.display_name(), "Ada");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = GoogleUser {
            id: "1".to_string(),
            email: "ada@example.com".to_string(),
            name: None,
        };
        assert_eq!(user.display_name(), "ada@example.com");
    }

    #[test]
    fn test_sdk_error_display() {
        let err = SdkError::with_message(StatusCode::Developer, "webClientId is required");
        assert_eq!(err.to_string(), "Developer: webClientId is required");
        assert_eq!(
            SdkError::new(StatusCode::InProgress).to_string(),
            "InProgress: no message"
        );
    }
}
