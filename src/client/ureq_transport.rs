//! Production transport on top of `ureq`.
//!
//! `ureq` is blocking, so every request runs on tokio's blocking pool and the
//! async caller just awaits the join handle.

use crate::client::multipart::FormData;
use crate::client::transport::{Body, HttpRequest, HttpResponse, Transport};
use crate::errors::{Error, Result};
use async_trait::async_trait;
use std::io::Read;

/// Blocking `ureq` agent driven from the tokio blocking pool.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl UreqTransport {
    /// Creates a transport with a fresh agent (connection pool).
    #[must_use]
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

#[async_trait]
impl Transport for UreqTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || send_blocking(&agent, request))
            .await
            .map_err(|e| Error::Network(format!("request task failed: {e}")))?
    }
}

fn send_blocking(agent: &ureq::Agent, request: HttpRequest) -> Result<HttpResponse> {
    let mut call = agent.request(request.method.as_str(), &request.url);
    for (key, value) in &request.query {
        call = call.query(key, value);
    }
    for (key, value) in &request.headers {
        call = call.set(key, value);
    }

    let outcome = match request.body {
        Body::Empty => call.call(),
        Body::Json(value) => {
            let bytes = serde_json::to_vec(&value)?;
            call.set("Content-Type", "application/json")
                .send_bytes(&bytes)
        }
        Body::Multipart(form) => call
            .set("Content-Type", &FormData::content_type())
            .send_bytes(&form.encode()),
    };

    match outcome {
        Ok(response) | Err(ureq::Error::Status(_, response)) => read_response(response),
        Err(ureq::Error::Transport(transport)) => Err(Error::Network(transport.to_string())),
    }
}

fn read_response(response: ureq::Response) -> Result<HttpResponse> {
    let status = response.status();
    let content_type = Some(response.content_type().to_string());
    let mut body = Vec::new();
    response.into_reader().read_to_end(&mut body)?;
    Ok(HttpResponse {
        status,
        content_type,
        body,
    })
}
