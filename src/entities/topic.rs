//! Topic entity - the grouping posts are filed under.

use super::{DeleteRoute, Resource, Routes, Timestamp, fields, timestamp};
use serde::Deserialize;
use serde_json::Value;

/// Topic as served by `GET topics`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TopicRecord {
    id: Option<Value>,
    name: Option<Value>,
    description: Option<Value>,
    status: Option<Value>,
    slug: Option<Value>,
    #[serde(rename = "createdAt")]
    created_at_camel: Option<Value>,
    #[serde(rename = "created_at")]
    created_at_snake: Option<Value>,
    #[serde(rename = "updatedAt")]
    updated_at_camel: Option<Value>,
    #[serde(rename = "updated_at")]
    updated_at_snake: Option<Value>,
}

/// A post topic.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "TopicRecord")]
pub struct Topic {
    /// Unique identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Free text description
    pub description: Option<String>,
    /// Active flag
    pub status: bool,
    /// URL slug
    pub slug: Option<String>,
    /// Creation time
    pub created_at: Option<Timestamp>,
    /// Last modification time
    pub updated_at: Option<Timestamp>,
}

impl From<TopicRecord> for Topic {
    fn from(raw: TopicRecord) -> Self {
        Self {
            id: fields::integer(raw.id.as_ref()).unwrap_or_default(),
            name: fields::text(raw.name.as_ref()).unwrap_or_default(),
            description: fields::text(raw.description.as_ref()),
            status: fields::flag(raw.status.as_ref()),
            slug: fields::text(raw.slug.as_ref()),
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

impl Resource for Topic {
    const NAME: &'static str = "topic";
    const NOUN: &'static str = "chủ đề";
    const ROUTES: Routes = Routes {
        base: "topics",
        delete: DeleteRoute::Prefixed,
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
}

impl Topic {
    /// Value used for the `?topic=` query parameter: the slug, else the
    /// lower-cased name, else the literal `topic`.
    #[must_use]
    pub fn query_key(&self) -> String {
        self.slug
            .clone()
            .or_else(|| (!self.name.is_empty()).then(|| self.name.to_lowercase()))
            .unwrap_or_else(|| "topic".to_string())
    }

    /// Whether `key` (from the URL) designates this topic, by slug or lower-cased name.
    #[must_use]
    pub fn matches_key(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        self.slug.as_deref() == Some(key.as_str()) || self.name.to_lowercase() == key
    }
}
