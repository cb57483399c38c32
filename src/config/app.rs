//! Application configuration loading from storefront.toml
//!
//! Every section is optional: a missing key falls back to a local setup
//! (an API on port 8080, page size 12, a five second carousel).

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "storefront.toml";

/// Configuration structure representing the entire storefront.toml file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Remote REST API location
    pub api: ApiConfig,
    /// Static asset paths used when an image is missing
    pub assets: AssetConfig,
    /// Page sizes and cut-offs for the public pages
    pub storefront: StorefrontConfig,
}

/// Where the REST API and uploaded files live.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every relative API path is joined onto (trailing slash optional)
    pub base_url: String,
    /// Origin serving `/uploads/{posts|products|banners}/{file}`
    pub uploads_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api/".to_string(),
            uploads_url: "http://localhost:8080/uploads".to_string(),
        }
    }
}

/// Local placeholder images.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Shown when an image is missing or failed to load
    pub placeholder_image: String,
    /// Shown on product cards without an image
    pub placeholder_product: String,
    /// Shown while an authenticated image is still being fetched
    pub loading_image: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            placeholder_image: "/placeholder-image.jpg".to_string(),
            placeholder_product: "/placeholder-product.jpg".to_string(),
            loading_image: "/loading-placeholder.jpg".to_string(),
        }
    }
}

/// Sizes for the public storefront pages.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Items per page on catalog and post listings
    pub page_size: u32,
    /// How many products the "new products" strip shows
    pub new_products: usize,
    /// How many posts the "new posts" strip shows
    pub new_posts: usize,
    /// Related posts under a post detail
    pub related_posts: usize,
    /// Related products under a product detail
    pub related_products: usize,
    /// Seconds between automatic banner slides
    pub carousel_interval_secs: u64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            page_size: 12,
            new_products: 8,
            new_posts: 4,
            related_posts: 3,
            related_products: 4,
            carousel_interval_secs: 5,
        }
    }
}

impl StorefrontConfig {
    /// Auto-advance period of the banner carousel.
    #[must_use]
    pub const fn carousel_interval(&self) -> Duration {
        Duration::from_secs(self.carousel_interval_secs)
    }
}

/// Loads the configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A key has the wrong type
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;

    parse_config(&contents)
}

/// Parses configuration from TOML text.
///
/// # Errors
/// Returns an error if the TOML is malformed.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse storefront.toml: {e}"),
    })
}

/// Loads the configuration the binary runs with.
///
/// The file path comes from `STOREFRONT_CONFIG` (default `storefront.toml`).
/// A missing file is not an error: defaults are used. Environment overrides
/// from [`super::env`] are applied last.
///
/// # Errors
/// Returns an error if the file exists but cannot be parsed.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var("STOREFRONT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());

    let mut config = if Path::new(&path).exists() {
        load_config(&path)?
    } else {
        tracing::info!("No configuration file at {}, using defaults.", path);
        AppConfig::default()
    };

    super::env::apply_overrides(&mut config);
    Ok(config)
}
