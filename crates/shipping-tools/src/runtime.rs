//! Runtime for executing catalog tools against the shipping API.
//!
//! One tool call is validated, translated and sent as exactly one HTTP request. Per-call failures
//! come back as structured tool output; only routing errors (unknown tool) are `Err`.

use crate::catalog::{self, CATALOG, INTEGRATION_KEY_PARAM, Payload, ToolDescriptor};
use crate::error::{CallError, Result, ShippingToolsError};
use crate::response::{excerpt, format_output};
use crate::safety::{redact_url, sanitize_reqwest_error};
use crate::schema::{self, ValidationError};
use crate::translate::translate;
use reqwest::{Client, Method};
use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use serde_json::{Map, Value, json};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Production API host used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.shippingapi.io/v1";

/// Settings captured once at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Process-wide integration key; a per-call `integration_key` argument wins.
    pub integration_key: Option<String>,
    /// Request timeout. `None` leaves timeouts to the network stack.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            integration_key: None,
            timeout: None,
        }
    }
}

const INTEGRATION_KEY_DESCRIPTION: &str =
    "Integration key for this call. Defaults to the server's configured key.";

/// The outbound request produced for one tool call.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<Value>,
}

#[derive(Clone)]
pub struct ShippingToolSource {
    inner: Arc<ShippingToolSourceInner>,
}

struct ShippingToolSourceInner {
    base_url: Url,
    default_key: Option<String>,
    client: Client,
    timeout: Option<Duration>,
}

impl ShippingToolSource {
    /// Build a tool source from startup configuration.
    ///
    /// The resulting instance is immutable and safe to share across tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute `http(s)` URL or the HTTP client
    /// cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ShippingToolsError::Config(format!("Invalid base URL '{}': {e}", config.base_url))
        })?;
        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(ShippingToolsError::Config(format!(
                "Unsupported base URL scheme '{}'",
                base_url.scheme()
            )));
        }

        let client = Client::builder()
            .user_agent(concat!("shipping-mcp/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ShippingToolsError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner: Arc::new(ShippingToolSourceInner {
                base_url,
                default_key: config.integration_key.filter(|k| !k.is_empty()),
                client,
                timeout: config.timeout.filter(|t| !t.is_zero()),
            }),
        })
    }

    /// Base URL with credentials and query stripped, for logging.
    #[must_use]
    pub fn base_url_redacted(&self) -> String {
        redact_url(&self.inner.base_url)
    }

    #[must_use]
    pub fn has_default_key(&self) -> bool {
        self.inner.default_key.is_some()
    }

    /// List the MCP `Tool`s exposed by this source, in catalog order.
    #[must_use]
    pub fn list_tools(&self) -> Vec<Tool> {
        CATALOG.iter().map(tool_definition).collect()
    }

    /// Execute a tool call.
    ///
    /// Validation, network and protocol failures are returned as `Ok` results flagged as errors,
    /// so the caller can react to them conversationally.
    ///
    /// # Errors
    ///
    /// Returns an error only if the tool name is not in the catalog.
    pub async fn call_tool(&self, tool_name: &str, arguments: Value) -> Result<CallToolResult> {
        let tool = catalog::find(tool_name)
            .ok_or_else(|| ShippingToolsError::UnknownTool(tool_name.to_string()))?;

        let args = match arguments {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        Ok(match self.invoke(tool, &args).await {
            Ok(body) => CallToolResult::success(vec![Content::text(format_output(&body))]),
            Err(e) => {
                warn!(tool = %tool.name, error = %e, "shipping tool call failed");
                CallToolResult::error(vec![Content::text(format_output(&e.to_value()))])
            }
        })
    }

    /// Validate, translate and send one request, returning the backend's JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`CallError`] for invalid arguments, transport failures and non-JSON bodies.
    pub async fn invoke(
        &self,
        tool: &ToolDescriptor,
        args: &Map<String, Value>,
    ) -> std::result::Result<Value, CallError> {
        let key = self.resolve_key(args);
        let prepared = self.build_request(tool, args, key)?;

        debug!(
            tool = %tool.name,
            method = ?prepared.method,
            url = %redact_url(&prepared.url),
            "sending shipping API request"
        );

        let mut request = self
            .inner
            .client
            .request(prepared.method, prepared.url);
        if let Some(body) = &prepared.body {
            request = request.json(body);
        }
        if let Some(t) = self.inner.timeout {
            request = request.timeout(t);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CallError::Network(sanitize_reqwest_error(&e, key)))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CallError::Network(sanitize_reqwest_error(&e, key)))?;

        debug!(tool = %tool.name, status = status.as_u16(), bytes = text.len(), "shipping API responded");

        serde_json::from_str::<Value>(&text).map_err(|_| CallError::Protocol {
            status: status.as_u16(),
            excerpt: excerpt(&text),
        })
    }

    /// Build the outbound request for a call without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::Validation`] if the arguments do not satisfy the tool's schema.
    pub fn prepare(
        &self,
        tool: &ToolDescriptor,
        args: &Map<String, Value>,
    ) -> std::result::Result<PreparedRequest, CallError> {
        self.build_request(tool, args, self.resolve_key(args))
    }

    fn build_request(
        &self,
        tool: &ToolDescriptor,
        args: &Map<String, Value>,
        key: &str,
    ) -> std::result::Result<PreparedRequest, CallError> {
        if let Some(v) = args.get(INTEGRATION_KEY_PARAM)
            && !(v.is_string() || v.is_null())
        {
            return Err(CallError::Validation(ValidationError::WrongType {
                field: INTEGRATION_KEY_PARAM.to_string(),
                expected: "string",
            }));
        }
        let validated = schema::validate(tool.params, args)?;
        let fields = translate(tool.mapping, &validated);

        let mut url = self.endpoint_url(tool.path);
        let body = match tool.payload {
            Payload::Query => {
                {
                    let mut pairs = url.query_pairs_mut();
                    if let Some(action) = tool.action {
                        pairs.append_pair("action", action);
                    }
                    for (name, value) in &fields {
                        if let Some(s) = query_value(value) {
                            pairs.append_pair(name, &s);
                        }
                    }
                    if !key.is_empty() {
                        pairs.append_pair(INTEGRATION_KEY_PARAM, key);
                    }
                }
                if url.query() == Some("") {
                    url.set_query(None);
                }
                None
            }
            Payload::Body | Payload::MetaBody => {
                let mut body = Map::new();
                body.insert(INTEGRATION_KEY_PARAM.to_string(), json!(key));
                if let Some(action) = tool.action {
                    body.insert("action".to_string(), json!(action));
                }
                if tool.payload == Payload::MetaBody {
                    body.insert("meta".to_string(), Value::Object(fields));
                } else {
                    body.extend(fields);
                }
                Some(Value::Object(body))
            }
        };

        Ok(PreparedRequest {
            method: tool.method.clone(),
            url,
            body,
        })
    }

    fn resolve_key<'a>(&'a self, args: &'a Map<String, Value>) -> &'a str {
        args.get(INTEGRATION_KEY_PARAM)
            .and_then(Value::as_str)
            .filter(|k| !k.is_empty())
            .or(self.inner.default_key.as_deref())
            .unwrap_or("")
    }

    fn endpoint_url(&self, path: &str) -> Url {
        let mut url = self.inner.base_url.clone();
        let joined = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url.set_path(&joined);
        url
    }
}

fn tool_definition(tool: &ToolDescriptor) -> Tool {
    let mut schema = schema::input_schema(tool.params);
    if let Some(props) = schema.get_mut("properties").and_then(Value::as_object_mut) {
        props.insert(
            INTEGRATION_KEY_PARAM.to_string(),
            json!({"type": "string", "description": INTEGRATION_KEY_DESCRIPTION}),
        );
    }

    let schema_obj = schema.as_object().cloned().unwrap_or_else(JsonObject::new);
    let mut t = Tool::new(tool.name, tool.description, Arc::new(schema_obj));
    t.annotations = Some(crate::semantics::annotations_for(tool));
    t
}

/// Query-string form of a value; `None` for null and empty strings.
fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(query_value).collect();
            (!parts.is_empty()).then(|| parts.join(","))
        }
        Value::Object(_) => Some(value.to_string()),
    }
}
