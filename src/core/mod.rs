//! Core operations - framework-agnostic services and list logic.
//!
//! Pages call into this layer; nothing here knows about dialogs, the URL bar
//! or rendering.

/// Row selection and concurrent batch dispatch
pub mod bulk;
/// Category parent candidates
pub mod category;
/// Price, currency and excerpt formatting
pub mod format;
/// Active filter, newest-first ordering, pagination
pub mod listing;
/// Read-only orders and revenue
pub mod order;
/// Posts by topic, topic name resolution
pub mod post;
/// Product search and curated listings
pub mod product;
/// Generic CRUD and trash service
pub mod service;

pub use category::CategoryService;
pub use order::OrderService;
pub use post::{PostService, TopicService};
pub use product::{ProductQuery, ProductService, SearchPage, SortOption};
pub use service::{EntityService, Payload};

use crate::entities::Banner;

/// Banner service.
pub type BannerService = EntityService<Banner>;
