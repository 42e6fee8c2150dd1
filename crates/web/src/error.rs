// =============================================================================
// OffGriid Web - Error Types
// =============================================================================
// Table of Contents:
// 1. Contact Form Errors
// 2. Storage Errors
// 3. Browser Errors
// =============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

// -----------------------------------------------------------------------------
// 1. Contact Form Errors
// -----------------------------------------------------------------------------

/// A required contact form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

/// One or more required fields were empty after trimming.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Please fill in all fields (missing: {})", missing_list(.missing))]
pub struct ValidationError {
    pub missing: Vec<Field>,
}

impl ValidationError {
    /// Comma-separated labels of the missing fields.
    pub fn missing_fields(&self) -> String {
        missing_list(&self.missing)
    }
}

fn missing_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Why a contact submission did not proceed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Message already sent, try again in {}", wait_text(.retry_after_ms))]
    RateLimited { retry_after_ms: i64 },
}

fn wait_text(ms: &i64) -> String {
    crate::utils::format_wait(*ms)
}

impl SubmitError {
    /// Short toast title for this outcome.
    pub fn title(&self) -> &'static str {
        match self {
            SubmitError::Validation(_) => "Please fill in all fields",
            SubmitError::RateLimited { .. } => "Message already sent",
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Storage Errors
// -----------------------------------------------------------------------------

/// Failure reading or writing the submission record.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Stored value is not a timestamp: {0}")]
    Corrupt(String),
}

// -----------------------------------------------------------------------------
// 3. Browser Errors
// -----------------------------------------------------------------------------

/// A browser API call rejected a request.
#[derive(Error, Debug, Clone)]
pub enum BrowserError {
    #[error("No window object available")]
    NoWindow,

    #[error("{api} failed: {message}")]
    Api { api: &'static str, message: String },
}

impl BrowserError {
    /// Wrap a `JsValue` thrown by `api`.
    pub fn js(api: &'static str, value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        BrowserError::Api { api, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_fields() {
        let err = ValidationError {
            missing: vec![Field::Name, Field::Message],
        };
        assert_eq!(
            err.to_string(),
            "Please fill in all fields (missing: name, message)"
        );
        assert_eq!(err.missing_fields(), "name, message");
    }

    #[test]
    fn test_submit_error_titles_differ() {
        let validation = SubmitError::from(ValidationError {
            missing: vec![Field::Email],
        });
        let limited = SubmitError::RateLimited {
            retry_after_ms: 60 * 60 * 1000,
        };
        assert_ne!(validation.title(), limited.title());
        assert_eq!(limited.to_string(), "Message already sent, try again in 1h 0m");
    }
}
