//! Shared test utilities for the storefront.
//!
//! This module provides a scripted HTTP transport, scripted dialogs and a
//! harness bundling them into a [`PageContext`] with sensible defaults.

use crate::{
    client::{ApiClient, AuthContext, HttpRequest, HttpResponse, Method, Transport},
    config::AppConfig,
    errors::{Error, Result},
    pages::PageContext,
    ui::{BlobStore, Dialogs, MemoryBlobStore, MemoryNavigator, Navigator},
};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

/// Base URL every test client talks to.
pub const TEST_BASE_URL: &str = "http://api.test";

/// Installs a test-writer tracing subscriber once per process.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[derive(Debug, Clone)]
enum Scripted {
    Respond(u16, Vec<u8>),
    Unreachable,
}

#[derive(Debug, Default)]
struct Script {
    routes: HashMap<(Method, String), VecDeque<Scripted>>,
    log: Vec<HttpRequest>,
}

/// Transport answering from a script keyed by method and API-relative path.
///
/// Several answers scripted for the same route are served in order; the last
/// one keeps being served. Unscripted routes answer 404.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    script: Arc<Mutex<Script>>,
}

impl MockTransport {
    /// Empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The transport as the client expects it.
    #[must_use]
    pub fn shared(&self) -> Arc<dyn Transport> {
        Arc::new(self.clone())
    }

    fn push(&self, method: Method, path: &str, answer: Scripted) {
        lock(&self.script)
            .routes
            .entry((method, path.to_string()))
            .or_default()
            .push_back(answer);
    }

    /// Answers `200` with `body` as JSON.
    pub fn on(&self, method: Method, path: &str, body: Value) {
        let bytes = if body.is_null() {
            Vec::new()
        } else {
            body.to_string().into_bytes()
        };
        self.push(method, path, Scripted::Respond(200, bytes));
    }

    /// Answers `200` with raw bytes.
    pub fn bytes(&self, method: Method, path: &str, body: Vec<u8>) {
        self.push(method, path, Scripted::Respond(200, body));
    }

    /// Answers with an error status.
    pub fn fail(&self, method: Method, path: &str, status: u16) {
        self.push(
            method,
            path,
            Scripted::Respond(status, format!("{{\"message\":\"error {status}\"}}").into_bytes()),
        );
    }

    /// Fails as if the server could not be reached.
    pub fn unreachable(&self, method: Method, path: &str) {
        self.push(method, path, Scripted::Unreachable);
    }

    /// Every request received, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.script).log.clone()
    }

    /// `"METHOD path"` of every request received, in order.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| format!("{} {}", r.method, relative(&r.url)))
            .collect()
    }

    /// How many times a route was called.
    #[must_use]
    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && relative(&r.url) == path)
            .count()
    }
}

fn relative(url: &str) -> &str {
    url.strip_prefix(TEST_BASE_URL)
        .map_or(url, |rest| rest.trim_start_matches('/'))
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let key = (request.method, relative(&request.url).to_string());
        let answer = {
            let mut script = lock(&self.script);
            script.log.push(request);
            script.routes.get_mut(&key).and_then(|queue| {
                if queue.len() > 1 {
                    queue.pop_front()
                } else {
                    queue.front().cloned()
                }
            })
        };
        match answer {
            Some(Scripted::Respond(status, body)) => Ok(HttpResponse {
                status,
                content_type: Some("application/json".to_string()),
                body,
            }),
            Some(Scripted::Unreachable) => Err(Error::Network("connection refused".to_string())),
            None => Ok(HttpResponse {
                status: 404,
                content_type: None,
                body: format!("no script for {} {}", key.0, key.1).into_bytes(),
            }),
        }
    }
}

/// Anonymous client over `transport`.
#[must_use]
pub fn test_client(transport: &MockTransport) -> ApiClient {
    ApiClient::new(TEST_BASE_URL, AuthContext::anonymous(), transport.shared())
}

/// Dialogs answering confirms from a script and recording every message.
#[derive(Debug)]
pub struct ScriptedDialogs {
    answers: Mutex<VecDeque<bool>>,
    default_answer: bool,
    confirms: Mutex<Vec<String>>,
    alerts: Mutex<Vec<String>>,
}

impl ScriptedDialogs {
    /// Accepts every confirm.
    #[must_use]
    pub fn accepting() -> Self {
        Self::answering(true)
    }

    /// Rejects every confirm.
    #[must_use]
    pub fn rejecting() -> Self {
        Self::answering(false)
    }

    fn answering(default_answer: bool) -> Self {
        Self {
            answers: Mutex::new(VecDeque::new()),
            default_answer,
            confirms: Mutex::new(Vec::new()),
            alerts: Mutex::new(Vec::new()),
        }
    }

    /// Queues a one-off answer for the next confirm.
    pub fn answer_next(&self, answer: bool) {
        lock(&self.answers).push_back(answer);
    }

    /// Every confirm text shown.
    #[must_use]
    pub fn confirms(&self) -> Vec<String> {
        lock(&self.confirms).clone()
    }

    /// Every alert text shown.
    #[must_use]
    pub fn alerts(&self) -> Vec<String> {
        lock(&self.alerts).clone()
    }
}

impl Dialogs for ScriptedDialogs {
    fn confirm(&self, message: &str) -> bool {
        lock(&self.confirms).push(message.to_string());
        lock(&self.answers)
            .pop_front()
            .unwrap_or(self.default_answer)
    }

    fn alert(&self, message: &str) {
        lock(&self.alerts).push(message.to_string());
    }
}

/// Scripted collaborators for a page under test.
pub struct Harness {
    /// HTTP script and request log
    pub transport: MockTransport,
    /// Confirm answers and alert log
    pub dialogs: Arc<ScriptedDialogs>,
    /// Location and history
    pub navigator: Arc<MemoryNavigator>,
    /// Object URL bookkeeping
    pub blobs: Arc<MemoryBlobStore>,
    /// Configuration handed to pages
    pub config: AppConfig,
}

impl Harness {
    /// Harness at `/` with an empty query, accepting every confirm.
    #[must_use]
    pub fn new() -> Self {
        Self::at("/", "")
    }

    /// Harness at `route?query`.
    #[must_use]
    pub fn at(route: &str, query: &str) -> Self {
        init_test_tracing();
        let mut config = AppConfig::default();
        config.api.base_url = TEST_BASE_URL.to_string();
        config.api.uploads_url = format!("{TEST_BASE_URL}/uploads");
        Self {
            transport: MockTransport::new(),
            dialogs: Arc::new(ScriptedDialogs::accepting()),
            navigator: Arc::new(MemoryNavigator::at(route, query)),
            blobs: Arc::new(MemoryBlobStore::new()),
            config,
        }
    }

    /// Page context wired to the harness.
    #[must_use]
    pub fn context(&self) -> PageContext {
        PageContext {
            client: test_client(&self.transport),
            config: Arc::new(self.config.clone()),
            dialogs: Arc::clone(&self.dialogs) as Arc<dyn Dialogs>,
            navigator: Arc::clone(&self.navigator) as Arc<dyn Navigator>,
            blobs: Arc::clone(&self.blobs) as Arc<dyn BlobStore>,
        }
    }

    /// Alerts shown so far.
    #[must_use]
    pub fn alerts(&self) -> Vec<String> {
        self.dialogs.alerts()
    }

    /// Current query string.
    #[must_use]
    pub fn query(&self) -> String {
        self.navigator.query().to_string()
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}
