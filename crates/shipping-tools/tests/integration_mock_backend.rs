use anyhow::Context as _;
use serde_json::{Value, json};
use shipping_test_support::{MockBackend, MockResponse};
use shipping_tools::catalog::CATALOG;
use shipping_tools::{ClientConfig, ShippingToolSource};

fn source_for(backend: &MockBackend, key: Option<&str>) -> anyhow::Result<ShippingToolSource> {
    ShippingToolSource::new(ClientConfig {
        base_url: backend.base_url().to_string(),
        integration_key: key.map(str::to_string),
        timeout: None,
    })
    .context("build tool source")
}

fn address(name: &str) -> Value {
    json!({
        "name": name,
        "address1": "1 Main",
        "city": "NYC",
        "state": "NY",
        "postal": "10001",
        "country": "US"
    })
}

/// The smallest argument set that satisfies each tool's schema.
fn minimal_args(tool: &str) -> Value {
    match tool {
        "get_shipment" | "cancel_shipment" => json!({"shipment_id": 42}),
        "search_shipments" => json!({"q": "1Z999"}),
        "create_shipment" => json!({
            "carrier_id": 7,
            "shipper": address("Jane"),
            "recipient": address("Bob"),
            "products": [{"weight": 5}],
        }),
        "get_shipping_rates" => json!({
            "shipper": address("Jane"),
            "recipient": address("Bob"),
            "products": [{"weight": 1.5}],
        }),
        "schedule_pickup" => json!({"carrier_id": 7, "pickup_date": "2026-10-20"}),
        "track_shipment" => json!({"tracking_number": "1Z999"}),
        "get_address" | "delete_address" => json!({"address_id": 5}),
        "add_address" => address("Jane"),
        "edit_address" => json!({"address_id": 5, "city": "Boston"}),
        "get_carrier" => json!({"carrier_id": 7}),
        _ => json!({}),
    }
}

fn result_text(result: &rmcp::model::CallToolResult) -> anyhow::Result<String> {
    let v = serde_json::to_value(result).context("CallToolResult serializes")?;
    v.get("content")
        .and_then(Value::as_array)
        .and_then(|c| c.first())
        .and_then(|c| c.get("text"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .context("content[0].text")
}

#[tokio::test]
async fn every_tool_returns_backend_body_verbatim() -> anyhow::Result<()> {
    let payload = json!({"status": "success", "data": {"id": 42, "items": [1, 2, 3]}});
    let backend = MockBackend::start(MockResponse::json(&payload)).await?;
    let source = source_for(&backend, Some("default-key"))?;

    for tool in CATALOG {
        let result = source
            .call_tool(tool.name, minimal_args(tool.name))
            .await
            .with_context(|| format!("call {}", tool.name))?;
        assert_ne!(result.is_error, Some(true), "{} reported an error", tool.name);

        let text = result_text(&result)?;
        assert_eq!(text, serde_json::to_string_pretty(&payload)?, "{}", tool.name);
    }

    let requests = backend.requests();
    assert_eq!(requests.len(), CATALOG.len());
    for (tool, req) in CATALOG.iter().zip(&requests) {
        assert_eq!(req.method, tool.method.as_str(), "{}", tool.name);
        assert_eq!(req.path, tool.path, "{}", tool.name);
    }
    Ok(())
}

#[tokio::test]
async fn backend_key_order_and_number_precision_survive() -> anyhow::Result<()> {
    let raw = r#"{"zeta":1,"alpha":{"tracking":"1Z","id":123456789012345678901234567890,"rate":0.10000000000000000001}}"#;
    let backend = MockBackend::start(MockResponse {
        status: 200,
        content_type: "application/json",
        body: raw.to_string(),
    })
    .await?;
    let source = source_for(&backend, None)?;

    let result = source.call_tool("get_account_info", json!({})).await?;
    assert_ne!(result.is_error, Some(true));

    let expected = r#"{
  "zeta": 1,
  "alpha": {
    "tracking": "1Z",
    "id": 123456789012345678901234567890,
    "rate": 0.10000000000000000001
  }
}"#;
    assert_eq!(result_text(&result)?, expected);
    Ok(())
}

#[tokio::test]
async fn missing_required_parameter_sends_nothing() -> anyhow::Result<()> {
    let backend = MockBackend::start(MockResponse::json(&json!({"status": "success"}))).await?;
    let source = source_for(&backend, None)?;

    let result = source.call_tool("search_shipments", json!({"page": 2})).await?;
    assert_eq!(result.is_error, Some(true));
    let err: Value = serde_json::from_str(&result_text(&result)?)?;
    assert_eq!(err["status"], "error");
    assert_eq!(err["field"], "q");

    let mut args = minimal_args("create_shipment");
    args.as_object_mut()
        .context("object args")?
        .remove("carrier_id");
    let result = source.call_tool("create_shipment", args).await?;
    assert_eq!(result.is_error, Some(true));

    assert_eq!(backend.request_count(), 0);
    Ok(())
}

#[tokio::test]
async fn create_shipment_sends_flattened_backend_fields() -> anyhow::Result<()> {
    let backend = MockBackend::start(MockResponse::json(&json!({"status": "success"}))).await?;
    let source = source_for(&backend, Some("k-1"))?;

    source
        .call_tool("create_shipment", minimal_args("create_shipment"))
        .await?;

    let req = backend.only_request()?;
    assert_eq!(req.content_type.as_deref(), Some("application/json"));
    let body = req.json_body()?;
    let meta = &body["meta"];
    assert_eq!(meta["s_name"], "Jane");
    assert_eq!(meta["s_city"], "NYC");
    assert_eq!(meta["t_name"], "Bob");
    assert_eq!(meta["products"][0]["prod_weight"], 5);
    assert_eq!(meta["products"][0]["prod_quantity"], 1);
    assert_eq!(body["integration_key"], "k-1");
    Ok(())
}

#[tokio::test]
async fn cancel_shipment_sends_del_ref() -> anyhow::Result<()> {
    let backend = MockBackend::start(MockResponse::json(&json!({"status": "success"}))).await?;
    let source = source_for(&backend, None)?;

    source
        .call_tool("cancel_shipment", json!({"shipment_id": 42}))
        .await?;

    let body = backend.only_request()?.json_body()?;
    assert_eq!(body["del_ref"], 42);
    assert!(body.get("shipment_id").is_none());
    Ok(())
}

#[tokio::test]
async fn non_json_body_becomes_structured_error() -> anyhow::Result<()> {
    let backend = MockBackend::start(MockResponse::text(502, "<html>error</html>")).await?;
    let source = source_for(&backend, None)?;

    let result = source.call_tool("get_account_info", json!({})).await?;
    assert_eq!(result.is_error, Some(true));

    let err: Value = serde_json::from_str(&result_text(&result)?)?;
    assert_eq!(err["status"], "error");
    assert_eq!(err["raw_response"], "<html>error</html>");
    assert_eq!(err["http_status"], 502);
    Ok(())
}

#[tokio::test]
async fn long_non_json_body_is_truncated_to_500_chars() -> anyhow::Result<()> {
    let body = "x".repeat(2000);
    let backend = MockBackend::start(MockResponse::text(200, body)).await?;
    let source = source_for(&backend, None)?;

    let result = source.call_tool("list_carriers", json!({})).await?;
    let err: Value = serde_json::from_str(&result_text(&result)?)?;
    assert_eq!(
        err["raw_response"].as_str().map(str::len),
        Some(500),
        "excerpt length"
    );
    Ok(())
}

#[tokio::test]
async fn backend_business_errors_pass_through() -> anyhow::Result<()> {
    let payload = json!({"status": "error", "message": "Insufficient balance"});
    let mut response = MockResponse::json(&payload);
    response.status = 402;
    let backend = MockBackend::start(response).await?;
    let source = source_for(&backend, None)?;

    let result = source
        .call_tool("create_shipment", minimal_args("create_shipment"))
        .await?;
    assert_ne!(result.is_error, Some(true));
    let text = result_text(&result)?;
    assert_eq!(serde_json::from_str::<Value>(&text)?, payload);
    Ok(())
}

#[tokio::test]
async fn explicit_integration_key_overrides_default() -> anyhow::Result<()> {
    let backend = MockBackend::start(MockResponse::json(&json!({"ok": true}))).await?;
    let source = source_for(&backend, Some("default-key"))?;

    source
        .call_tool("get_account_info", json!({"integration_key": "call-key"}))
        .await?;
    source.call_tool("get_account_info", json!({})).await?;
    source
        .call_tool("delete_address", json!({"address_id": 1, "integration_key": "call-key"}))
        .await?;

    let requests = backend.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(
        requests[0].query_map().get("integration_key").map(String::as_str),
        Some("call-key")
    );
    assert_eq!(
        requests[1].query_map().get("integration_key").map(String::as_str),
        Some("default-key")
    );
    assert_eq!(requests[2].json_body()?["integration_key"], "call-key");
    Ok(())
}

#[tokio::test]
async fn get_tools_never_send_empty_parameters() -> anyhow::Result<()> {
    let backend = MockBackend::start(MockResponse::json(&json!({"ok": true}))).await?;
    let source = source_for(&backend, None)?;

    source
        .call_tool(
            "list_shipments",
            json!({"status": "", "carrier_id": null, "date_to": "2026-10-01"}),
        )
        .await?;

    let req = backend.only_request()?;
    let query = req.query.unwrap_or_default();
    for pair in query.split('&') {
        let (_, value) = pair.split_once('=').unwrap_or((pair, ""));
        assert!(!value.is_empty(), "empty query value in '{query}'");
    }
    assert!(!query.contains("status"));
    assert!(!query.contains("carrier"));
    assert!(!query.contains("integration_key"));
    assert!(query.contains("to=2026-10-01"));
    Ok(())
}

#[tokio::test]
async fn network_failure_becomes_structured_error() -> anyhow::Result<()> {
    let source = ShippingToolSource::new(ClientConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        integration_key: Some("s3cret".to_string()),
        timeout: None,
    })?;

    let result = source.call_tool("list_carriers", json!({})).await?;
    assert_eq!(result.is_error, Some(true));

    let text = result_text(&result)?;
    assert!(!text.contains("s3cret"));
    let err: Value = serde_json::from_str(&text)?;
    assert_eq!(err["status"], "error");
    assert_eq!(err["error_type"], "network");
    Ok(())
}

#[tokio::test]
async fn unknown_tool_is_an_error() -> anyhow::Result<()> {
    let backend = MockBackend::start(MockResponse::json(&json!({}))).await?;
    let source = source_for(&backend, None)?;

    let err = source.call_tool("launch_rocket", json!({})).await.unwrap_err();
    assert!(err.to_string().contains("launch_rocket"));
    assert_eq!(backend.request_count(), 0);
    Ok(())
}
