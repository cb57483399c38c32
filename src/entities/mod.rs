//! Entity module - canonical records for everything the REST API serves.
//!
//! The API spells the same field several ways (`topic_id`, `topicId`,
//! `topic.id`; `priceSale`, `price_sale`) and mixes booleans with `0`/`1`.
//! Each entity therefore deserialises through a raw `*Record` struct that
//! keeps every spelling, and is converted once into one canonical struct. Code
//! above this module only ever sees the canonical shape.
//!
//! Entities that support the admin CRUD/trash workflow implement [`Resource`],
//! which carries their route table.

pub mod banner;
pub mod category;
pub mod fields;
pub mod order;
pub mod post;
pub mod product;
pub mod timestamp;
pub mod topic;

pub use banner::Banner;
pub use category::Category;
pub use order::Order;
pub use post::Post;
pub use product::Product;
pub use timestamp::Timestamp;
pub use topic::Topic;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// How a resource is permanently deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteRoute {
    /// `DELETE <base>/:id`
    ById,
    /// `DELETE <base>/delete/:id`
    Prefixed,
}

/// REST route table of one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Routes {
    /// Collection path, e.g. `categories`
    pub base: &'static str,
    /// Shape of the permanent delete route
    pub delete: DeleteRoute,
    /// Whether `DELETE <base>/trash/empty` exists
    pub empty_trash: bool,
}

impl Routes {
    /// `GET`/`POST <base>`
    #[must_use]
    pub fn collection(&self) -> String {
        self.base.to_string()
    }

    /// `GET`/`PUT <base>/:id`
    #[must_use]
    pub fn item(&self, id: i64) -> String {
        format!("{}/{id}", self.base)
    }

    /// `PUT <base>/status/:id`
    #[must_use]
    pub fn status(&self, id: i64) -> String {
        format!("{}/status/{id}", self.base)
    }

    /// `PUT <base>/trash/:id`
    #[must_use]
    pub fn move_to_trash(&self, id: i64) -> String {
        format!("{}/trash/{id}", self.base)
    }

    /// `PUT <base>/restore/:id`
    #[must_use]
    pub fn restore(&self, id: i64) -> String {
        format!("{}/restore/{id}", self.base)
    }

    /// `GET <base>/trash`
    #[must_use]
    pub fn trash(&self) -> String {
        format!("{}/trash", self.base)
    }

    /// Permanent delete path.
    #[must_use]
    pub fn delete(&self, id: i64) -> String {
        match self.delete {
            DeleteRoute::ById => format!("{}/{id}", self.base),
            DeleteRoute::Prefixed => format!("{}/delete/{id}", self.base),
        }
    }

    /// `DELETE <base>/trash/empty`, if the resource has it.
    #[must_use]
    pub fn empty_trash(&self) -> Option<String> {
        self.empty_trash.then(|| format!("{}/trash/empty", self.base))
    }
}

/// An entity managed through the generic CRUD and trash workflow.
pub trait Resource: DeserializeOwned + Clone + Send + Sync + 'static {
    /// English name used in logs and errors
    const NAME: &'static str;
    /// Vietnamese noun used in user-facing messages ("danh mục", "bài viết", ...)
    const NOUN: &'static str;
    /// Route table
    const ROUTES: Routes;

    /// Record id.
    fn id(&self) -> i64;

    /// Display label (name or title).
    fn label(&self) -> &str;

    /// Whether the record is visible on the storefront.
    fn is_active(&self) -> bool;

    /// Creation time, if the API sent one.
    fn created_at(&self) -> Option<&Timestamp>;

    /// Body of `PUT <base>/status/:id`; `None` sends no body.
    #[must_use]
    fn status_body() -> Option<Value> {
        None
    }
}

/// A related record embedded in another one, e.g. a product's `category`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbeddedRef {
    /// Related id, when the API included it
    pub id: Option<i64>,
    /// Related display name, when the API included it
    pub name: Option<String>,
}

impl EmbeddedRef {
    /// Reads an embedded object (`{id, name}`) or a bare name string.
    #[must_use]
    pub fn from_value(value: Option<&Value>) -> Option<Self> {
        match value? {
            Value::Object(map) => Some(Self {
                id: fields::integer(map.get("id")),
                name: fields::text(map.get("name")),
            }),
            Value::String(name) if !name.trim().is_empty() => Some(Self {
                id: None,
                name: Some(name.clone()),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_route_tables() {
        assert_eq!(Category::ROUTES.delete(4), "categories/4");
        assert_eq!(Post::ROUTES.delete(4), "posts/delete/4");
        assert_eq!(Topic::ROUTES.status(2), "topics/status/2");
        assert_eq!(Banner::ROUTES.trash(), "banners/trash");
        assert_eq!(Product::ROUTES.empty_trash(), None);
        assert_eq!(
            Category::ROUTES.empty_trash().as_deref(),
            Some("categories/trash/empty")
        );
    }

    #[test]
    fn test_embedded_ref_shapes() {
        assert_eq!(
            EmbeddedRef::from_value(Some(&json!({"id": "3", "name": "Áo"}))),
            Some(EmbeddedRef {
                id: Some(3),
                name: Some("Áo".into())
            })
        );
        assert_eq!(
            EmbeddedRef::from_value(Some(&json!("Giày"))).and_then(|r| r.name),
            Some("Giày".into())
        );
        assert_eq!(EmbeddedRef::from_value(Some(&Value::Null)), None);
    }
}
