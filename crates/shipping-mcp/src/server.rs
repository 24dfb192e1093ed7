//! MCP server surface: `initialize`, `tools/list` and `tools/call`.

use rmcp::model::{
    CallToolRequestParams, CallToolResult, ErrorData, Implementation, JsonObject, ListToolsResult,
    PaginatedRequestParams, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};
use serde_json::Value;
use shipping_tools::{ShippingToolSource, ShippingToolsError};
use tracing::info;

const INSTRUCTIONS: &str = "Tools for a shipping-management account: list, search and inspect \
shipments, quote rates, buy labels (create_shipment), cancel shipments, schedule pickups, track \
packages, fetch labels, manage the address book, inspect carrier accounts and view account \
statistics. Every tool returns the shipping API's JSON response as text. Responses with \
\"status\": \"error\" describe a failure; read the message before retrying. Call \
get_shipping_rates before create_shipment to pick a carrier and service.";

#[derive(Clone)]
pub struct ShippingServer {
    source: ShippingToolSource,
}

impl ShippingServer {
    #[must_use]
    pub fn new(source: ShippingToolSource) -> Self {
        Self { source }
    }

    /// Route one `tools/call` to the tool source.
    ///
    /// # Errors
    ///
    /// Returns `invalid_params` for tool names outside the catalog. Every other failure is a
    /// regular tool result.
    pub async fn call(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ErrorData> {
        info!(tool = %name, "tools/call");
        let arguments = arguments.map_or(Value::Null, Value::Object);
        self.source
            .call_tool(name, arguments)
            .await
            .map_err(|e| match e {
                ShippingToolsError::UnknownTool(_) => ErrorData::invalid_params(e.to_string(), None),
                ShippingToolsError::Config(_) => ErrorData::internal_error(e.to_string(), None),
            })
    }
}

impl ServerHandler for ShippingServer {
    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, ErrorData>> + Send + '_ {
        std::future::ready(Ok(ListToolsResult::with_all_items(self.source.list_tools())))
    }

    fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, ErrorData>> + Send + '_ {
        async move { self.call(&request.name, request.arguments).await }
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            protocol_version: ProtocolVersion::LATEST,
            server_info: Implementation {
                name: "shipping-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some("Shipping MCP".to_string()),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}
