//! Google sign-in hook
//!
//! Wraps a [`GoogleSdk`] with the state a screen needs to render the
//! federated sign-in button: the signed-in user, the last error message and
//! a loading flag.

use super::traits::{GoogleSdk, GoogleSignInOptions, GoogleUser, SdkError, StatusCode};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Shown when the provider fails without a message of its own
pub const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// Shown when signing out fails
pub const SIGN_OUT_ERROR: &str = "Error signing out. Please try again.";

/// User-facing categories for federated sign-in failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FederatedSignInError {
    #[error("Sign-in operation already in progress.")]
    InProgress,

    #[error("Play Services are not available or outdated.")]
    PlayServicesUnavailable,

    /// Any other failure, carrying the provider's message when it gave one
    #[error("{}", .0.as_deref().unwrap_or(UNKNOWN_ERROR))]
    Other(Option<String>),
}

impl From<SdkError> for FederatedSignInError {
    fn from(err: SdkError) -> Self {
        match err.code {
            StatusCode::InProgress => Self::InProgress,
            StatusCode::PlayServicesNotAvailable => Self::PlayServicesUnavailable,
            _ => Self::Other(err.message.filter(|m| !m.is_empty())),
        }
    }
}

/// Message attached when a pending sign-in is abandoned by the user
pub const CANCELLED_MESSAGE: &str = "Sign-in was cancelled.";

type SharedSdk = Arc<Mutex<Box<dyn GoogleSdk>>>;

/// Federated sign-in state for a screen.
///
/// A sign-in runs on a spawned task so the screen can keep drawing while
/// `loading` is set. Call [`GoogleSignIn::poll_sign_in`] from the event loop
/// to collect the outcome.
pub struct GoogleSignIn {
    sdk: SharedSdk,
    web_client_id: String,
    pending: Option<JoinHandle<Result<GoogleUser, SdkError>>>,
    pub user_info: Option<GoogleUser>,
    pub error: Option<String>,
    pub loading: bool,
}

impl GoogleSignIn {
    pub fn new(sdk: Box<dyn GoogleSdk>, web_client_id: impl Into<String>) -> Self {
        Self {
            sdk: Arc::new(Mutex::new(sdk)),
            web_client_id: web_client_id.into(),
            pending: None,
            user_info: None,
            error: None,
            loading: false,
        }
    }

    /// Spawn a sign-in. Returns false, and reports the in-progress error,
    /// when one is already running. Must be called inside a tokio runtime.
    pub fn start_sign_in(&mut self) -> bool {
        if self.pending.is_some() {
            tracing::debug!("Google sign-in already running");
            self.record_failure(SdkError::new(StatusCode::InProgress));
            return false;
        }

        self.loading = true;
        self.error = None;

        let sdk = Arc::clone(&self.sdk);
        let options = GoogleSignInOptions {
            web_client_id: self.web_client_id.clone(),
        };
        self.pending = Some(tokio::spawn(async move {
            let mut sdk = sdk.lock().await;
            request_sign_in(&mut **sdk, options).await
        }));
        true
    }

    /// Collect the outcome of a finished sign-in. `None` while nothing has
    /// finished yet.
    pub async fn poll_sign_in(&mut self) -> Option<Result<GoogleUser, FederatedSignInError>> {
        if !self.pending.as_ref().is_some_and(|handle| handle.is_finished()) {
            return None;
        }
        let handle = self.pending.take()?;
        let result = handle.await.unwrap_or_else(|err| {
            Err(SdkError::with_message(
                StatusCode::Developer,
                format!("sign-in task failed: {err}"),
            ))
        });
        self.loading = false;

        Some(match result {
            Ok(user) => {
                tracing::info!("Google sign-in succeeded for {}", user.display_name());
                self.user_info = Some(user.clone());
                self.error = None;
                Ok(user)
            }
            Err(err) => Err(self.record_failure(err)),
        })
    }

    /// Abandon a running sign-in. Returns false when nothing was running.
    pub fn cancel_sign_in(&mut self) -> bool {
        let Some(handle) = self.pending.take() else {
            return false;
        };
        handle.abort();
        self.loading = false;
        self.record_failure(SdkError::with_message(
            StatusCode::SignInCancelled,
            CANCELLED_MESSAGE,
        ));
        true
    }

    fn record_failure(&mut self, err: SdkError) -> FederatedSignInError {
        tracing::warn!("Google sign-in failed: {err}");
        let mapped = FederatedSignInError::from(err);
        self.error = Some(mapped.to_string());
        mapped
    }

    /// Sign out of the provider. On failure `error` is set to [`SIGN_OUT_ERROR`].
    pub async fn sign_out(&mut self) -> Result<(), SdkError> {
        let result = self.sdk.lock().await.sign_out().await;
        match result {
            Ok(()) => {
                self.user_info = None;
                Ok(())
            }
            Err(err) => {
                tracing::warn!("Google sign-out failed: {err}");
                self.error = Some(SIGN_OUT_ERROR.to_string());
                Err(err)
            }
        }
    }
}

async fn request_sign_in(
    sdk: &mut dyn GoogleSdk,
    options: GoogleSignInOptions,
) -> Result<GoogleUser, SdkError> {
    sdk.configure(options);
    if !sdk.has_play_services().await? {
        return Err(SdkError::new(StatusCode::PlayServicesNotAvailable));
    }
    sdk.sign_in().await
}
