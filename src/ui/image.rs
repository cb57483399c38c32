//! Images behind the bearer token.
//!
//! Admin tables and detail views fetch uploads with the token attached, turn
//! the bytes into an object URL and fall back to a placeholder on any error.

use super::object_url::{BlobStore, ObjectUrl};
use crate::client::{AuthContext, HttpRequest, Method, Transport};
use std::sync::Arc;
use tracing::{debug, warn};

/// What the `<img>` currently points at.
#[derive(Debug, Default)]
pub enum ImageSource {
    /// Fetch in flight
    #[default]
    Loading,
    /// Fetched bytes
    Object(ObjectUrl),
    /// Missing or failed image
    Placeholder,
}

/// One authenticated image slot.
pub struct AuthenticatedImage {
    transport: Arc<dyn Transport>,
    auth: AuthContext,
    blobs: Arc<dyn BlobStore>,
    placeholder: String,
    loading: String,
    url: Option<String>,
    source: ImageSource,
}

impl std::fmt::Debug for AuthenticatedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedImage")
            .field("url", &self.url)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl AuthenticatedImage {
    /// Creates an empty slot.
    pub fn new(
        transport: Arc<dyn Transport>,
        auth: AuthContext,
        blobs: Arc<dyn BlobStore>,
        placeholder: impl Into<String>,
        loading: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            auth,
            blobs,
            placeholder: placeholder.into(),
            loading: loading.into(),
            url: None,
            source: ImageSource::Loading,
        }
    }

    /// Loads `url` into the slot.
    ///
    /// The URL held for a previous source is revoked before the new fetch
    /// starts. Loading the same URL again is a no-op.
    pub async fn load(&mut self, url: &str) {
        if self.url.as_deref() == Some(url) && !matches!(self.source, ImageSource::Loading) {
            return;
        }
        self.source = ImageSource::Loading;
        self.url = Some(url.to_string());

        if url.is_empty() {
            self.source = ImageSource::Placeholder;
            return;
        }

        let mut request = HttpRequest::new(Method::Get, url);
        if let Some(bearer) = self.auth.bearer() {
            request.headers.push(("Authorization".to_string(), bearer));
        }

        self.source = match self.transport.send(request).await {
            Ok(response) if response.is_success() => {
                debug!("Loaded image {} ({} bytes)", url, response.body.len());
                ImageSource::Object(ObjectUrl::create(
                    &self.blobs,
                    response.body,
                    response.content_type.as_deref(),
                ))
            }
            Ok(response) => {
                warn!("Image {} answered {}; using placeholder", url, response.status);
                ImageSource::Placeholder
            }
            Err(e) => {
                warn!("Failed to load image {}: {}", url, e);
                ImageSource::Placeholder
            }
        };
    }

    /// Value for the `src` attribute.
    #[must_use]
    pub fn src(&self) -> &str {
        match &self.source {
            ImageSource::Loading => &self.loading,
            ImageSource::Object(object) => object.as_str(),
            ImageSource::Placeholder => &self.placeholder,
        }
    }

    /// Current source.
    #[must_use]
    pub const fn source(&self) -> &ImageSource {
        &self.source
    }

    /// Releases the held object URL, if any.
    pub fn release(&mut self) {
        self.source = ImageSource::Loading;
        self.url = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockTransport, TEST_BASE_URL};
    use crate::ui::MemoryBlobStore;

    fn slot(transport: &MockTransport, blobs: &Arc<MemoryBlobStore>) -> AuthenticatedImage {
        AuthenticatedImage::new(
            transport.shared(),
            AuthContext::new(Some("secret".into())),
            Arc::clone(blobs) as Arc<dyn BlobStore>,
            "/placeholder-image.jpg",
            "/loading-placeholder.jpg",
        )
    }

    fn upload(file: &str) -> String {
        format!("{TEST_BASE_URL}/uploads/products/{file}")
    }

    #[tokio::test]
    async fn test_success_yields_object_url_revoked_once_on_drop() {
        let transport = MockTransport::new();
        transport.bytes(Method::Get, "uploads/products/a.jpg", vec![0xFF, 0xD8]);
        let blobs = Arc::new(MemoryBlobStore::new());

        let mut image = slot(&transport, &blobs);
        assert_eq!(image.src(), "/loading-placeholder.jpg");
        image.load(&upload("a.jpg")).await;

        let src = image.src().to_string();
        assert!(src.starts_with("blob:"));
        assert_eq!(transport.requests()[0].header("Authorization"), Some("Bearer secret"));

        drop(image);
        assert_eq!(blobs.revocations(&src), 1);
        assert_eq!(blobs.live(), 0);
    }

    #[tokio::test]
    async fn test_not_found_and_network_failure_use_placeholder() {
        let transport = MockTransport::new();
        transport.fail(Method::Get, "uploads/products/missing.jpg", 404);
        transport.unreachable(Method::Get, "uploads/products/down.jpg");
        let blobs = Arc::new(MemoryBlobStore::new());

        let mut image = slot(&transport, &blobs);
        image.load(&upload("missing.jpg")).await;
        assert!(matches!(image.source(), ImageSource::Placeholder));
        assert_eq!(image.src(), "/placeholder-image.jpg");

        image.load(&upload("down.jpg")).await;
        assert_eq!(image.src(), "/placeholder-image.jpg");
        assert_eq!(blobs.live(), 0);
    }

    #[tokio::test]
    async fn test_changing_source_revokes_previous_url() {
        let transport = MockTransport::new();
        transport.bytes(Method::Get, "uploads/products/a.jpg", vec![1]);
        transport.bytes(Method::Get, "uploads/products/b.jpg", vec![2]);
        let blobs = Arc::new(MemoryBlobStore::new());

        let mut image = slot(&transport, &blobs);
        image.load(&upload("a.jpg")).await;
        let first = image.src().to_string();
        image.load(&upload("a.jpg")).await;
        assert_eq!(transport.requests().len(), 1);

        image.load(&upload("b.jpg")).await;
        assert_eq!(blobs.revocations(&first), 1);
        assert_eq!(blobs.live(), 1);

        image.release();
        assert_eq!(blobs.live(), 0);
        drop(image);
        assert_eq!(blobs.revocations(&first), 1);
    }
}
