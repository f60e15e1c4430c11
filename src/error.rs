use serde_json::Value;
use thiserror::Error;

/// Failures at the REST boundary. `Display` is the string shown to the user.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("{what} not found")]
    NotFound { what: String },

    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::NotFound { .. } => Some(404),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Request(err.to_string())
    }
}

/// Client-side form validation failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Slug is required")]
    MissingSlug,

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Unknown field: {0}")]
    UnknownField(String),
}

impl FormError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        FormError::InvalidField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Picks the message out of an error body: `error` first, then `message`.
pub fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            ["error", "message"].iter().find_map(|key| {
                value
                    .get(key)
                    .and_then(Value::as_str)
                    .filter(|s| !s.trim().is_empty())
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| fallback.to_string())
}
