//! Page controllers - one struct per screen, holding its view state and
//! exposing user actions as async methods.
//!
//! Every service failure stops here: it is logged with the underlying error
//! and replaced by a fixed Vietnamese message for the user.

/// Back-office pages (lists, trash, forms, dashboard)
pub mod admin;
/// Public storefront pages
pub mod storefront;

use crate::client::ApiClient;
use crate::config::AppConfig;
use crate::core::{EntityService, OrderService};
use crate::entities::Resource;
use crate::ui::{AuthenticatedImage, BlobStore, Dialogs, Navigator};
use std::sync::Arc;

/// Upload folders under `/uploads`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFolder {
    /// Post images
    Posts,
    /// Product images
    Products,
    /// Banner images
    Banners,
}

impl UploadFolder {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Products => "products",
            Self::Banners => "banners",
        }
    }
}

/// Collaborators handed to every page.
#[derive(Clone)]
pub struct PageContext {
    /// REST client
    pub client: ApiClient,
    /// Loaded configuration
    pub config: Arc<AppConfig>,
    /// Confirm/alert dialogs
    pub dialogs: Arc<dyn Dialogs>,
    /// URL bar and history
    pub navigator: Arc<dyn Navigator>,
    /// Object URL store for authenticated images
    pub blobs: Arc<dyn BlobStore>,
}

impl std::fmt::Debug for PageContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageContext")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl PageContext {
    /// Service for resource `E`.
    #[must_use]
    pub fn service<E: Resource>(&self) -> EntityService<E> {
        EntityService::new(self.client.clone())
    }

    /// Order service.
    #[must_use]
    pub fn orders(&self) -> OrderService {
        OrderService::new(self.client.clone())
    }

    /// Public URL of an uploaded file, or `None` when there is no file.
    #[must_use]
    pub fn upload_url(&self, folder: UploadFolder, file: Option<&str>) -> Option<String> {
        let file = file.filter(|f| !f.trim().is_empty())?;
        if file.starts_with("http://") || file.starts_with("https://") {
            return Some(file.to_string());
        }
        Some(format!(
            "{}/{}/{}",
            self.config.api.uploads_url.trim_end_matches('/'),
            folder.as_str(),
            file.trim_start_matches('/')
        ))
    }

    /// Upload URL, or the generic placeholder image.
    #[must_use]
    pub fn image_or_placeholder(&self, folder: UploadFolder, file: Option<&str>) -> String {
        self.upload_url(folder, file)
            .unwrap_or_else(|| self.config.assets.placeholder_image.clone())
    }

    /// A fresh authenticated image slot.
    #[must_use]
    pub fn image_slot(&self) -> AuthenticatedImage {
        AuthenticatedImage::new(
            self.client.transport(),
            self.client.auth().clone(),
            Arc::clone(&self.blobs),
            self.config.assets.placeholder_image.clone(),
            self.config.assets.loading_image.clone(),
        )
    }

    /// Whether the user accepted `message`.
    #[must_use]
    pub fn confirm(&self, message: &str) -> bool {
        self.dialogs.confirm(message)
    }

    /// Shows `message`.
    pub fn alert(&self, message: &str) {
        self.dialogs.alert(message);
    }
}
