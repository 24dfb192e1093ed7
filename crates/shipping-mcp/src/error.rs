//! Error types for the shipping MCP server.

use thiserror::Error;

/// Startup and transport failures. These are fatal; per-call failures never surface here.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration errors (invalid base URL, HTTP client setup)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport errors (stdio session could not be established or crashed)
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result type alias for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;
