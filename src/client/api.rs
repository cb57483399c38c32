//! The HTTP client adapter every service goes through.

use crate::client::auth::AuthContext;
use crate::client::transport::{Body, HttpRequest, Method, Transport};
use crate::errors::{Error, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Joins a base URL and a relative API path with exactly one slash.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Parses a response body into JSON.
///
/// An empty body becomes `Null` and a body that is not JSON (the API answers
/// some deletes with plain text) becomes a JSON string.
#[must_use]
pub fn parse_body(bytes: &[u8]) -> Value {
    let text = String::from_utf8_lossy(bytes);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_string()))
}

/// REST API client: fixed base URL, injected auth context, pluggable transport.
///
/// No retry and no timeout: a failed call surfaces directly to the caller.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    auth: AuthContext,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.auth.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a client for the API at `base_url`.
    pub fn new(base_url: impl Into<String>, auth: AuthContext, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into(),
            auth,
            transport,
        }
    }

    /// Base URL relative paths are joined onto.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The shared auth context.
    #[must_use]
    pub const fn auth(&self) -> &AuthContext {
        &self.auth
    }

    /// The transport, for callers that need raw bytes (image loading).
    #[must_use]
    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::clone(&self.transport)
    }

    /// `GET path`.
    ///
    /// # Errors
    /// Returns an error on network failure or a non-2xx status.
    pub async fn get(&self, path: &str) -> Result<Value> {
        self.request(Method::Get, path, Vec::new(), Body::Empty).await
    }

    /// `GET path?query`.
    ///
    /// # Errors
    /// Returns an error on network failure or a non-2xx status.
    pub async fn get_with_query(&self, path: &str, query: Vec<(String, String)>) -> Result<Value> {
        self.request(Method::Get, path, query, Body::Empty).await
    }

    /// `POST path`.
    ///
    /// # Errors
    /// Returns an error on network failure or a non-2xx status.
    pub async fn post(&self, path: &str, body: Body) -> Result<Value> {
        self.request(Method::Post, path, Vec::new(), body).await
    }

    /// `PUT path`.
    ///
    /// # Errors
    /// Returns an error on network failure or a non-2xx status.
    pub async fn put(&self, path: &str, body: Body) -> Result<Value> {
        self.request(Method::Put, path, Vec::new(), body).await
    }

    /// `DELETE path`.
    ///
    /// # Errors
    /// Returns an error on network failure or a non-2xx status.
    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.request(Method::Delete, path, Vec::new(), Body::Empty).await
    }

    /// Performs a request against the API and parses the response body.
    ///
    /// A 401 answer drops the held token so the next request goes out
    /// anonymously.
    ///
    /// # Errors
    /// Returns `Error::Network` if the server could not be reached and
    /// `Error::Http` for any non-2xx status.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Body,
    ) -> Result<Value> {
        let mut request = HttpRequest::new(method, join_url(&self.base_url, path));
        request.query = query;
        request.body = body;
        request
            .headers
            .push(("Accept".to_string(), "application/json".to_string()));
        if let Some(bearer) = self.auth.bearer() {
            request.headers.push(("Authorization".to_string(), bearer));
        }

        debug!("{} {}", method, request.url);
        let response = self
            .transport
            .send(request)
            .await
            .inspect_err(|e| error!("Network error or server not responding: {}", e))?;

        if !response.is_success() {
            let body = String::from_utf8_lossy(&response.body).into_owned();
            if response.status == 401 {
                warn!("Authentication error on {} {}; clearing token.", method, path);
                self.auth.clear();
            } else {
                error!("Error from server on {} {} ({}): {}", method, path, response.status, body);
            }
            return Err(Error::Http {
                status: response.status,
                body,
            });
        }

        Ok(parse_body(&response.body))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::MockTransport;
    use serde_json::json;

    #[test]
    fn test_join_url_normalises_slashes() {
        assert_eq!(join_url("http://h/api/", "categories"), "http://h/api/categories");
        assert_eq!(join_url("http://h/api", "/categories/1"), "http://h/api/categories/1");
    }

    #[test]
    fn test_parse_body_variants() {
        assert_eq!(parse_body(b""), Value::Null);
        assert_eq!(parse_body(b"  "), Value::Null);
        assert_eq!(parse_body(br#"{"ok":true}"#), json!({"ok": true}));
        assert_eq!(parse_body(b"Deleted"), json!("Deleted"));
    }

    #[tokio::test]
    async fn test_bearer_token_is_attached() -> Result<()> {
        let transport = MockTransport::new();
        transport.on(Method::Get, "topics", json!([]));
        let client = ApiClient::new(
            crate::test_utils::TEST_BASE_URL,
            AuthContext::new(Some("t0k3n".into())),
            transport.shared(),
        );

        client.get("topics").await?;

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].header("authorization"), Some("Bearer t0k3n"));
        Ok(())
    }

    #[tokio::test]
    async fn test_anonymous_request_has_no_authorization() -> Result<()> {
        let transport = MockTransport::new();
        transport.on(Method::Get, "topics", json!([]));
        let client = ApiClient::new(
            crate::test_utils::TEST_BASE_URL,
            AuthContext::anonymous(),
            transport.shared(),
        );

        client.get("topics").await?;
        assert!(transport.requests()[0].header("Authorization").is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_non_success_status_is_http_error() {
        let transport = MockTransport::new();
        transport.fail(Method::Delete, "posts/delete/4", 500);
        let client = ApiClient::new(
            crate::test_utils::TEST_BASE_URL,
            AuthContext::anonymous(),
            transport.shared(),
        );

        let err = client.delete("posts/delete/4").await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_unauthorized_clears_token() {
        let transport = MockTransport::new();
        transport.fail(Method::Get, "orders", 401);
        let auth = AuthContext::new(Some("expired".into()));
        let client = ApiClient::new(crate::test_utils::TEST_BASE_URL, auth.clone(), transport.shared());

        assert!(client.get("orders").await.is_err());
        assert!(!auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let transport = MockTransport::new();
        transport.unreachable(Method::Get, "banners");
        let client = ApiClient::new(
            crate::test_utils::TEST_BASE_URL,
            AuthContext::anonymous(),
            transport.shared(),
        );

        assert!(matches!(client.get("banners").await, Err(Error::Network(_))));
    }
}
