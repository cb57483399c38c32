//! Post entity - blog articles grouped by topic.

use super::{DeleteRoute, EmbeddedRef, Resource, Routes, Timestamp, fields, timestamp};
use serde::Deserialize;
use serde_json::Value;

/// Post as served by `GET posts`, with every alias kept.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PostRecord {
    id: Option<Value>,
    title: Option<Value>,
    content: Option<Value>,
    image: Option<Value>,
    topic: Option<Value>,
    #[serde(rename = "topicId")]
    topic_id_camel: Option<Value>,
    #[serde(rename = "topic_id")]
    topic_id_snake: Option<Value>,
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
    #[serde(rename = "deleted_at")]
    deleted_at_snake: Option<Value>,
    #[serde(rename = "deletedAt")]
    deleted_at_camel: Option<Value>,
}

/// A blog post.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "PostRecord")]
pub struct Post {
    /// Unique identifier
    pub id: i64,
    /// Headline
    pub title: String,
    /// HTML body
    pub content: String,
    /// Uploaded image file name
    pub image: Option<String>,
    /// Topic id (`topic.id`, then `topicId`, then `topic_id`)
    pub topic_id: Option<i64>,
    /// Embedded topic, when the API resolved it
    pub topic: Option<EmbeddedRef>,
    /// Active flag
    pub status: bool,
    /// URL slug
    pub slug: Option<String>,
    /// Creation time
    pub created_at: Option<Timestamp>,
    /// Last modification time
    pub updated_at: Option<Timestamp>,
    /// When the post was moved to trash
    pub deleted_at: Option<Timestamp>,
}

impl From<PostRecord> for Post {
    fn from(raw: PostRecord) -> Self {
        let topic = EmbeddedRef::from_value(raw.topic.as_ref());
        let topic_id = topic.as_ref().and_then(|t| t.id).or_else(|| {
            fields::integer(fields::first(&[
                raw.topic_id_camel.as_ref(),
                raw.topic_id_snake.as_ref(),
            ]))
        });

        Self {
            id: fields::integer(raw.id.as_ref()).unwrap_or_default(),
            title: fields::text(raw.title.as_ref()).unwrap_or_default(),
            content: fields::text(raw.content.as_ref()).unwrap_or_default(),
            image: fields::text(raw.image.as_ref()),
            topic_id,
            topic,
            status: fields::flag(raw.status.as_ref()),
            slug: fields::text(raw.slug.as_ref()),
            created_at: timestamp::read(&[
                raw.created_at_snake.as_ref(),
                raw.created_at_camel.as_ref(),
            ]),
            updated_at: timestamp::read(&[
                raw.updated_at_snake.as_ref(),
                raw.updated_at_camel.as_ref(),
            ]),
            deleted_at: timestamp::read(&[
                raw.deleted_at_snake.as_ref(),
                raw.deleted_at_camel.as_ref(),
            ]),
        }
    }
}

impl Resource for Post {
    const NAME: &'static str = "post";
    const NOUN: &'static str = "bài viết";
    const ROUTES: Routes = Routes {
        base: "posts",
        delete: DeleteRoute::Prefixed,
        empty_trash: true,
    };

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn is_active(&self) -> bool {
        self.status
    }

    fn created_at(&self) -> Option<&Timestamp> {
        self.created_at.as_ref()
    }
}

impl Post {
    /// The slug, or `post-<id>` when the post has none.
    #[must_use]
    pub fn slug_or_default(&self) -> String {
        self.slug
            .clone()
            .unwrap_or_else(|| format!("post-{}", self.id))
    }

    /// Storefront route of the post.
    #[must_use]
    pub fn link(&self) -> String {
        format!("/post/{}", self.slug_or_default())
    }
}
