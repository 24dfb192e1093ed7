//! Tool output formatting.

use serde_json::Value;

/// Maximum number of characters of a non-JSON body echoed back for diagnostics.
pub const RAW_EXCERPT_CHARS: usize = 500;

/// Serialize a backend payload or structured error as indented JSON text.
#[must_use]
pub fn format_output(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// First [`RAW_EXCERPT_CHARS`] characters of `raw`, split on a character boundary.
#[must_use]
pub fn excerpt(raw: &str) -> String {
    raw.chars().take(RAW_EXCERPT_CHARS).collect()
}
