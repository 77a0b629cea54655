//! Fixed email/password pair

use super::traits::CredentialAuthenticator;

pub const DEFAULT_EMAIL: &str = "test@gmail.com";
pub const DEFAULT_PASSWORD: &str = "test@123";

/// Accepts exactly one email/password pair
#[derive(Debug, Clone)]
pub struct FixedCredentials {
    email: String,
    password: String,
}

impl FixedCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Default for FixedCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_EMAIL, DEFAULT_PASSWORD)
    }
}

impl CredentialAuthenticator for FixedCredentials {
    fn authenticate(&self, email: &str, password: &str) -> bool {
        email == self.email && password == self.password
    }
}
