//! HTTP client layer - transport seam, auth context, envelope unwrapping
//!
//! Every entity service depends on [`ApiClient`]; nothing above this module
//! knows which HTTP stack carries the requests.

/// REST client with base URL and bearer token handling
pub mod api;
/// Bearer token holder shared by the client and the image loader
pub mod auth;
/// Defensive unwrapping of inconsistent response envelopes
pub mod envelope;
/// `multipart/form-data` bodies
pub mod multipart;
/// Request/response types and the `Transport` trait
pub mod transport;
/// `ureq`-backed production transport
pub mod ureq_transport;

pub use api::ApiClient;
pub use auth::AuthContext;
pub use multipart::{FormData, Upload};
pub use transport::{Body, HttpRequest, HttpResponse, Method, Transport};
pub use ureq_transport::UreqTransport;
