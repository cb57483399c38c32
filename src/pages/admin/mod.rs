//! Back-office pages.
//!
//! The list, trash, detail and form pages are written once and instantiated
//! per entity; the per-entity parts are the row builders in [`rows`] and the
//! field sets in [`forms`].

/// Dashboard figures
pub mod dashboard;
/// Record detail
pub mod detail;
/// Generic create/update form
pub mod form;
/// Per-entity field sets
pub mod forms;
/// Active records table
pub mod list;
mod messages;
/// Per-entity table rows and relation lookups
pub mod rows;
mod table;
/// Trashed records table
pub mod trash;

pub use dashboard::{DashboardPage, DashboardStats};
pub use detail::DetailPage;
pub use form::{EntityForm, FormMode, FormPage};
pub use forms::{BannerForm, CategoryForm, PostForm, ProductForm, TopicForm};
pub use list::ListPage;
pub use rows::{AdminResource, Row};
pub use trash::TrashPage;
