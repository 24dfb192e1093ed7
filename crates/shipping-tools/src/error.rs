//! Error types for `shipping-tools`.

use crate::schema::ValidationError;
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// Errors that prevent a tool source from being built or a call from being routed.
#[derive(Error, Debug)]
pub enum ShippingToolsError {
    /// Configuration errors (invalid base URL, HTTP client construction).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The requested tool is not part of the catalog.
    #[error("Tool not found: {0}")]
    UnknownTool(String),
}

/// Result type alias for tool source operations.
pub type Result<T> = std::result::Result<T, ShippingToolsError>;

/// Per-call failures. These are reported to the caller as structured tool output, never as
/// protocol errors.
#[derive(Error, Debug)]
pub enum CallError {
    /// A parameter was missing or had the wrong type; nothing was sent.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The request could not complete (connect, timeout, body read).
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a body that is not JSON.
    #[error("Invalid JSON response from API (HTTP {status})")]
    Protocol { status: u16, excerpt: String },
}

/// Wire shape of a locally produced failure.
#[derive(Debug, Serialize)]
struct ErrorPayload<'a> {
    status: &'static str,
    error_type: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    http_status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_response: Option<&'a str>,
}

impl CallError {
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Network(_) => "network",
            Self::Protocol { .. } => "protocol",
        }
    }

    /// Structured `{status: "error", ...}` payload returned as the tool's output.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let (field, http_status, raw_response) = match self {
            Self::Validation(e) => (Some(e.field()), None, None),
            Self::Network(_) => (None, None, None),
            Self::Protocol { status, excerpt } => (None, Some(*status), Some(excerpt.as_str())),
        };
        let payload = ErrorPayload {
            status: "error",
            error_type: self.error_type(),
            message: self.to_string(),
            field,
            http_status,
            raw_response,
        };
        serde_json::to_value(&payload)
            .unwrap_or_else(|_| json!({"status": "error", "message": self.to_string()}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_payload_names_the_field() {
        let err = CallError::from(ValidationError::Missing("q".to_string()));
        let v = err.to_value();
        assert_eq!(v["status"], "error");
        assert_eq!(v["error_type"], "validation");
        assert_eq!(v["field"], "q");
        assert!(v.get("raw_response").is_none());
    }

    #[test]
    fn protocol_payload_carries_excerpt_and_status() {
        let err = CallError::Protocol {
            status: 500,
            excerpt: "<html>error</html>".to_string(),
        };
        let v = err.to_value();
        assert_eq!(v["error_type"], "protocol");
        assert_eq!(v["http_status"], 500);
        assert_eq!(v["raw_response"], "<html>error</html>");
        assert!(v["message"].as_str().is_some_and(|m| m.contains("Invalid JSON")));
    }
}
