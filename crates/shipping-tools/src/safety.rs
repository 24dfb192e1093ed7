//! Redaction for outbound request diagnostics.
//!
//! GET requests carry the integration key in the query string, so any URL that ends up in an
//! error message or log line must be stripped first.

use url::Url;

#[must_use]
pub fn redact_url(url: &Url) -> String {
    let mut u = url.clone();
    let _ = u.set_username("");
    let _ = u.set_password(None);
    u.set_query(None);
    u.set_fragment(None);
    u.to_string()
}

/// Render a `reqwest` error without its query string or the given secret.
#[must_use]
pub fn sanitize_reqwest_error(e: &reqwest::Error, secret: &str) -> String {
    let mut msg = e.to_string();
    if let Some(u) = e.url() {
        msg = msg.replace(u.as_str(), &redact_url(u));
    }
    if !secret.is_empty() {
        msg = msg.replace(secret, "[redacted]");
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_url_drops_query_and_credentials() {
        let url = Url::parse("https://user:pw@api.test/shipments?integration_key=s3cret&page=1#x")
            .expect("url");
        assert_eq!(redact_url(&url), "https://api.test/shipments");
    }

    #[tokio::test]
    async fn sanitized_transport_error_hides_key() {
        let client = reqwest::Client::new();
        let err = client
            .get("http://127.0.0.1:1/shipments?integration_key=s3cret")
            .send()
            .await
            .expect_err("nothing listens on port 1");
        let msg = sanitize_reqwest_error(&err, "s3cret");
        assert!(!msg.contains("s3cret"));
        assert!(!msg.contains("integration_key"));
    }
}
