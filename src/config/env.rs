//! Environment overrides for the storefront configuration.
//!
//! Values are normally loaded from the `.env` file by `dotenvy` before the
//! configuration is read. The bearer token is only ever read from the
//! environment; it is never part of storefront.toml.

use super::app::AppConfig;

/// Applies `STOREFRONT_API_URL` and `STOREFRONT_UPLOADS_URL` on top of the file configuration.
pub fn apply_overrides(config: &mut AppConfig) {
    if let Ok(url) = std::env::var("STOREFRONT_API_URL") {
        tracing::debug!("API base URL overridden from environment: {}", url);
        config.api.base_url = url;
    }

    if let Ok(url) = std::env::var("STOREFRONT_UPLOADS_URL") {
        tracing::debug!("Uploads URL overridden from environment: {}", url);
        config.api.uploads_url = url;
    }
}

/// Gets the bearer token configured for API access, if any.
///
/// An empty value counts as "not configured".
#[must_use]
pub fn get_api_token() -> Option<String> {
    std::env::var("STOREFRONT_TOKEN")
        .ok()
        .filter(|token| !token.trim().is_empty())
}
