//! Shipping MCP server.
//!
//! Exposes the shipping API tool catalog from `shipping-tools` to MCP clients over stdio.

pub mod config;
pub mod error;
pub mod logging;
pub mod server;

pub use error::{Result, ServerError};
pub use server::ShippingServer;

use rmcp::ServiceExt as _;
use rmcp::transport::stdio;
use shipping_tools::ShippingToolSource;
use tracing::info;

/// Build the tool source from startup configuration.
///
/// # Errors
///
/// Returns [`ServerError::Config`] if the configuration is unusable.
pub fn build_source(args: &config::Args) -> Result<ShippingToolSource> {
    ShippingToolSource::new(args.client_config()).map_err(|e| ServerError::Config(e.to_string()))
}

/// Serve MCP over stdin/stdout until the client disconnects.
///
/// # Errors
///
/// Returns [`ServerError::Transport`] if the MCP session cannot be established or the service
/// task fails.
pub async fn serve_stdio(source: ShippingToolSource) -> Result<()> {
    info!(
        base_url = %source.base_url_redacted(),
        default_key = source.has_default_key(),
        tools = source.list_tools().len(),
        "starting shipping MCP server on stdio"
    );

    let service = ShippingServer::new(source)
        .serve(stdio())
        .await
        .map_err(|e| ServerError::Transport(e.to_string()))?;

    let reason = service
        .waiting()
        .await
        .map_err(|e| ServerError::Transport(e.to_string()))?;
    info!(reason = ?reason, "MCP session ended");
    Ok(())
}
