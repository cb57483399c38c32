/// Storefront configuration loading from storefront.toml
pub mod app;

/// Environment variable overrides and the API token
pub mod env;

pub use app::{AppConfig, load_app_configuration};
