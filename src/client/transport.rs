//! Wire-level request/response types and the `Transport` seam.
//!
//! Everything above this module talks in terms of [`HttpRequest`] and
//! [`HttpResponse`]; the concrete HTTP stack is injected as an
//! `Arc<dyn Transport>` so that pages and services can be driven by a scripted
//! transport in tests.

use crate::client::multipart::FormData;
use crate::errors::Result;
use async_trait::async_trait;
use serde_json::Value;

/// HTTP verbs used by the REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read a list or a record
    Get,
    /// Create a record
    Post,
    /// Update, toggle, trash or restore a record
    Put,
    /// Permanently delete
    Delete,
}

impl Method {
    /// Upper-case verb as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Body {
    /// No body at all
    #[default]
    Empty,
    /// `application/json`
    Json(Value),
    /// `multipart/form-data`, used whenever an image may be attached
    Multipart(FormData),
}

/// A fully resolved request, ready to hand to a [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP verb
    pub method: Method,
    /// Absolute URL without the query string
    pub url: String,
    /// Query parameters in insertion order
    pub query: Vec<(String, String)>,
    /// Extra headers (authorization, accept)
    pub headers: Vec<(String, String)>,
    /// Payload
    pub body: Body,
}

impl HttpRequest {
    /// Creates a request without query, headers or body.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: Body::Empty,
        }
    }

    /// Looks up a header value, case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response as returned by the transport.
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    /// Status code
    pub status: u16,
    /// `Content-Type` header, if the server sent one
    pub content_type: Option<String>,
    /// Response body bytes
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Sends one request and returns whatever the server answered.
///
/// Implementations return `Ok` for every response that arrived, including
/// non-2xx ones; `Err` is reserved for the request never completing.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs the request.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}
