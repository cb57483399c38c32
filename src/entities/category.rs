//! Category entity - product grouping, optionally nested under a parent.

use super::{DeleteRoute, EmbeddedRef, Resource, Routes, Timestamp, fields, timestamp};
use serde::Deserialize;
use serde_json::{Value, json};

/// Category as served by `GET categories`, with every alias kept.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CategoryRecord {
    id: Option<Value>,
    name: Option<Value>,
    description: Option<Value>,
    status: Option<Value>,
    #[serde(rename = "parentId")]
    parent_id_camel: Option<Value>,
    #[serde(rename = "parent_id")]
    parent_id_snake: Option<Value>,
    parent: Option<Value>,
    slug: Option<Value>,
    deleted: Option<Value>,
    #[serde(rename = "createdAt")]
    created_at_camel: Option<Value>,
    #[serde(rename = "created_at")]
    created_at_snake: Option<Value>,
    #[serde(rename = "updatedAt")]
    updated_at_camel: Option<Value>,
    #[serde(rename = "updated_at")]
    updated_at_snake: Option<Value>,
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "CategoryRecord")]
pub struct Category {
    /// Unique identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Free text description
    pub description: Option<String>,
    /// Active flag
    pub status: bool,
    /// Parent category id (`parentId`, then `parent_id`, then `parent.id`)
    pub parent_id: Option<i64>,
    /// Embedded parent, when the API resolved it
    pub parent: Option<EmbeddedRef>,
    /// URL slug
    pub slug: Option<String>,
    /// Soft delete marker
    pub deleted: bool,
    /// Creation time
    pub created_at: Option<Timestamp>,
    /// Last modification time
    pub updated_at: Option<Timestamp>,
}

impl From<CategoryRecord> for Category {
    fn from(raw: CategoryRecord) -> Self {
        let parent = EmbeddedRef::from_value(raw.parent.as_ref());
        let parent_id = fields::integer(fields::first(&[
            raw.parent_id_camel.as_ref(),
            raw.parent_id_snake.as_ref(),
        ]))
        .or_else(|| parent.as_ref().and_then(|p| p.id));

        Self {
            id: fields::integer(raw.id.as_ref()).unwrap_or_default(),
            name: fields::text(raw.name.as_ref()).unwrap_or_default(),
            description: fields::text(raw.description.as_ref()),
            status: fields::flag(raw.status.as_ref()),
            parent_id,
            parent,
            slug: fields::text(raw.slug.as_ref()),
            deleted: fields::flag(raw.deleted.as_ref()),
            created_at: timestamp::read(&[
                raw.created_at_camel.as_ref(),
                raw.created_at_snake.as_ref(),
            ]),
            updated_at: timestamp::read(&[
                raw.updated_at_camel.as_ref(),
                raw.updated_at_snake.as_ref(),
            ]),
        }
    }
}

impl Resource for Category {
    const NAME: &'static str = "category";
    const NOUN: &'static str = "danh mục";
    const ROUTES: Routes = Routes {
        base: "categories",
        delete: DeleteRoute::ById,
        empty_trash: true,
    };

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn is_active(&self) -> bool {
        self.status
    }

    fn created_at(&self) -> Option<&Timestamp> {
        self.created_at.as_ref()
    }

    // The categories endpoint is sent a fixed `true` rather than a toggle.
    fn status_body() -> Option<Value> {
        Some(json!({ "status": true }))
    }
}

impl Category {
    /// Name of the parent: the embedded one, else looked up in `all`.
    #[must_use]
    pub fn parent_name<'a>(&'a self, all: &'a [Self]) -> Option<&'a str> {
        self.parent
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .or_else(|| {
                let id = self.parent_id?;
                all.iter().find(|c| c.id == id).map(|c| c.name.as_str())
            })
    }
}
