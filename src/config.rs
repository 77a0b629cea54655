//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the Google web client id
pub const WEB_CLIENT_ID_ENV: &str = "ONBOARD_GOOGLE_WEB_CLIENT_ID";

const DEFAULT_WEB_CLIENT_ID: &str = "onboard-tui.local.apps.googleusercontent.com";
const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Email accepted by the sign-in form
    pub credential_email: Option<String>,
    /// Password accepted by the sign-in form
    pub credential_password: Option<String>,
    /// Web client id passed to the Google provider
    pub google_web_client_id: Option<String>,
    /// Account the local Google provider signs in as
    pub google_account_email: Option<String>,
    /// Display name for the local Google account
    pub google_account_name: Option<String>,
    /// How long toasts stay on screen
    pub toast_duration_ms: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "onboard", "onboard-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration, falling back to defaults if the file is unreadable
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::warn!("Ignoring unreadable config: {err:#}");
            Self::default()
        })
    }

    /// Web client id, preferring the environment over the config file
    pub fn web_client_id(&self) -> String {
        std::env::var(WEB_CLIENT_ID_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| self.google_web_client_id.clone())
            .unwrap_or_else(|| DEFAULT_WEB_CLIENT_ID.to_string())
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS))
    }
}
