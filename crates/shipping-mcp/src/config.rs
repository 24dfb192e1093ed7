//! Startup configuration: CLI flags with environment fallbacks.
//!
//! Everything here is read once when the process starts and never reloaded.

use clap::{Parser, ValueEnum};
use shipping_tools::{ClientConfig, DEFAULT_BASE_URL};
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "shipping-mcp", version, about = "Shipping API tools for MCP clients over stdio")]
pub struct Args {
    /// Base URL of the shipping API.
    #[arg(long, env = "SHIPPING_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Default integration key, used when a call does not pass `integration_key`.
    #[arg(long, env = "SHIPPING_INTEGRATION_KEY", hide_env_values = true)]
    pub integration_key: Option<String>,

    /// Per-request timeout in seconds (0 or unset: no timeout).
    #[arg(long, env = "SHIPPING_API_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Log level filter (overridden by `RUST_LOG`).
    #[arg(long, env = "SHIPPING_MCP_LOG", default_value = "info")]
    pub log_level: String,

    /// Log output format (always written to stderr).
    #[arg(long, env = "SHIPPING_MCP_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Print the tool catalog as JSON and exit.
    #[arg(long)]
    pub list_tools: bool,
}

impl Args {
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            integration_key: self.integration_key.clone().filter(|k| !k.is_empty()),
            timeout: self
                .timeout_secs
                .filter(|s| *s > 0)
                .map(Duration::from_secs),
        }
    }
}
