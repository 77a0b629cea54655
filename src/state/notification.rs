//! Transient toast notifications

use std::time::{Duration, Instant};

/// Severity tag for a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A short message shown on top of the current screen until it expires
#[derive(Debug, Clone)]
pub struct Toast {
    pub severity: Severity,
    pub text: String,
    pub shown_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(severity: Severity, text: impl Into<String>, duration: Duration) -> Self {
        Self {
            severity,
            text: text.into(),
            shown_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }
}
