//! Banner entity - homepage carousel slides.

use super::{DeleteRoute, Resource, Routes, Timestamp, fields, timestamp};
use serde::Deserialize;
use serde_json::Value;

/// Banner as served by `GET banners`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BannerRecord {
    id: Option<Value>,
    name: Option<Value>,
    title: Option<Value>,
    image: Option<Value>,
    link: Option<Value>,
    status: Option<Value>,
    #[serde(rename = "createdAt")]
    created_at_camel: Option<Value>,
    #[serde(rename = "created_at")]
    created_at_snake: Option<Value>,
    #[serde(rename = "updatedAt")]
    updated_at_camel: Option<Value>,
    #[serde(rename = "updated_at")]
    updated_at_snake: Option<Value>,
}

/// A carousel slide.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "BannerRecord")]
pub struct Banner {
    /// Unique identifier
    pub id: i64,
    /// Caption (`name`, or `title` on older records)
    pub name: String,
    /// Uploaded image file name
    pub image: Option<String>,
    /// Where clicking the slide leads
    pub link: Option<String>,
    /// Active flag
    pub status: bool,
    /// Creation time
    pub created_at: Option<Timestamp>,
    /// Last modification time
    pub updated_at: Option<Timestamp>,
}

impl From<BannerRecord> for Banner {
    fn from(raw: BannerRecord) -> Self {
        Self {
            id: fields::integer(raw.id.as_ref()).unwrap_or_default(),
            name: fields::text(fields::first(&[raw.name.as_ref(), raw.title.as_ref()]))
                .unwrap_or_default(),
            image: fields::text(raw.image.as_ref()),
            link: fields::text(raw.link.as_ref()),
            status: fields::flag(raw.status.as_ref()),
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

impl Resource for Banner {
    const NAME: &'static str = "banner";
    const NOUN: &'static str = "banner";
    const ROUTES: Routes = Routes {
        base: "banners",
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
