//! Offline stand-in for the Google sign-in provider
//!
//! Signs in as an account taken from the user config. Without one it
//! behaves like a device that lacks Play services. No network access.

use super::traits::{GoogleSdk, GoogleSignInOptions, GoogleUser, SdkError, StatusCode};
use async_trait::async_trait;
use uuid::Uuid;

/// Account the local provider signs in as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAccount {
    pub email: String,
    pub name: Option<String>,
}

#[derive(Debug, Default)]
pub struct LocalGoogleSdk {
    account: Option<LocalAccount>,
    options: Option<GoogleSignInOptions>,
    current_user: Option<GoogleUser>,
}

impl LocalGoogleSdk {
    pub fn new(email: Option<String>, name: Option<String>) -> Self {
        Self {
            account: email.map(|email| LocalAccount { email, name }),
            ..Default::default()
        }
    }
}

#[async_trait]
impl GoogleSdk for LocalGoogleSdk {
    fn configure(&mut self, options: GoogleSignInOptions) {
        tracing::debug!("Configuring local Google provider");
        self.options = Some(options);
    }

    async fn has_play_services(&self) -> Result<bool, SdkError> {
        if self.account.is_some() {
            Ok(true)
        } else {
            Err(SdkError::with_message(
                StatusCode::PlayServicesNotAvailable,
                "No Google account configured",
            ))
        }
    }

    async fn sign_in(&mut self) -> Result<GoogleUser, SdkError> {
        let configured = self
            .options
            .as_ref()
            .is_some_and(|o| !o.web_client_id.is_empty());
        if !configured {
            return Err(SdkError::with_message(
                StatusCode::Developer,
                "webClientId is required",
            ));
        }

        if let Some(user) = &self.current_user {
            return Ok(user.clone());
        }

        let account = self
            .account
            .as_ref()
            .ok_or_else(|| SdkError::new(StatusCode::PlayServicesNotAvailable))?;

        let user = GoogleUser {
            id: Uuid::new_v4().to_string(),
            email: account.email.clone(),
            name: account.name.clone(),
        };
        self.current_user = Some(user.clone());
        Ok(user)
    }

    async fn sign_out(&mut self) -> Result<(), SdkError> {
        match self.current_user.take() {
            Some(_) => Ok(()),
            None => Err(SdkError::with_message(
                StatusCode::SignInRequired,
                "No user is signed in",
            )),
        }
    }
}
