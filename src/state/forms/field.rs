//! Form field value objects

use crate::validation::RuleResult;

/// Mask character for secret fields
const MASK: char = '•';

/// Represents a single form field with its value and display state.
///
/// `touched` and `error` are presentation state owned by the form's display
/// policy; validity itself is always recomputed from `value`.
#[derive(Debug, Clone, Default)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    pub is_secret: bool,
    /// Focus has left this field at least once
    pub touched: bool,
    /// Error text currently shown under the field
    pub error: Option<String>,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            ..Default::default()
        }
    }

    /// Create a new secret field (rendered masked unless revealed)
    pub fn secret(name: &str, label: &str) -> Self {
        Self {
            is_secret: true,
            ..Self::text(name, label)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    #[cfg(test)]
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Mark the field as left by the user
    pub fn blur(&mut self) {
        self.touched = true;
    }

    /// Replace the displayed error with the outcome of a rule.
    ///
    /// With `hide_when_empty`, an empty value clears the error instead.
    pub fn show_result(&mut self, result: RuleResult, hide_when_empty: bool) {
        self.error = if hide_when_empty && self.is_empty() {
            None
        } else {
            result.err().map(|e| e.to_string())
        };
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Get the display value for rendering
    pub fn display_value(&self, reveal_secrets: bool) -> String {
        if self.is_secret && !reveal_secrets {
            self.value.chars().map(|_| MASK).collect()
        } else {
            self.value.clone()
        }
    }
}
