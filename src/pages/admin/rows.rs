//! Table rows per entity, with relations resolved against a separately
//! fetched lookup list.

use super::messages::NOT_AVAILABLE;
use crate::core::format::format_price;
use crate::core::post::topic_name;
use crate::entities::{Banner, Category, Post, Product, Resource, Topic};
use crate::errors::Result;
use crate::pages::{PageContext, UploadFolder};
use async_trait::async_trait;

/// One table row as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Record id
    pub id: i64,
    /// Name or title
    pub label: String,
    /// Active flag
    pub status: bool,
    /// Resolved relation (parent, topic, category); `N/A` when missing
    pub relation: Option<String>,
    /// Image URL, for entities with uploads
    pub image: Option<String>,
    /// Formatted price, for products
    pub price: Option<String>,
    /// `dd/mm/yyyy hh:mm`, empty when unknown
    pub created_at: String,
}

impl Row {
    fn base<E: Resource>(entity: &E) -> Self {
        Self {
            id: entity.id(),
            label: entity.label().to_string(),
            status: entity.is_active(),
            relation: None,
            image: None,
            price: None,
            created_at: entity
                .created_at()
                .map(|ts| ts.display())
                .unwrap_or_default(),
        }
    }
}

fn or_not_available(name: Option<&str>) -> Option<String> {
    Some(name.unwrap_or(NOT_AVAILABLE).to_string())
}

/// A resource with back-office pages.
#[async_trait]
pub trait AdminResource: Resource {
    /// List route, e.g. `/admin/category`
    const ADMIN_ROUTE: &'static str;

    /// Related records needed to render rows (topics for posts, categories
    /// for products)
    type Lookup: Default + Send + Sync;

    /// Fetches the related records.
    async fn lookup(ctx: &PageContext) -> Result<Self::Lookup>;

    /// Builds the displayed row. `all` is the list the row belongs to.
    fn row(&self, all: &[Self], lookup: &Self::Lookup, ctx: &PageContext) -> Row;
}

#[async_trait]
impl AdminResource for Category {
    const ADMIN_ROUTE: &'static str = "/admin/category";
    type Lookup = ();

    async fn lookup(_ctx: &PageContext) -> Result<()> {
        Ok(())
    }

    fn row(&self, all: &[Self], _lookup: &(), _ctx: &PageContext) -> Row {
        Row {
            relation: or_not_available(self.parent_name(all)),
            ..Row::base(self)
        }
    }
}

#[async_trait]
impl AdminResource for Topic {
    const ADMIN_ROUTE: &'static str = "/admin/topic";
    type Lookup = ();

    async fn lookup(_ctx: &PageContext) -> Result<()> {
        Ok(())
    }

    fn row(&self, _all: &[Self], _lookup: &(), _ctx: &PageContext) -> Row {
        Row::base(self)
    }
}

#[async_trait]
impl AdminResource for Banner {
    const ADMIN_ROUTE: &'static str = "/admin/banner";
    type Lookup = ();

    async fn lookup(_ctx: &PageContext) -> Result<()> {
        Ok(())
    }

    fn row(&self, _all: &[Self], _lookup: &(), ctx: &PageContext) -> Row {
        Row {
            image: ctx.upload_url(UploadFolder::Banners, self.image.as_deref()),
            ..Row::base(self)
        }
    }
}

#[async_trait]
impl AdminResource for Post {
    const ADMIN_ROUTE: &'static str = "/admin/post";
    type Lookup = Vec<Topic>;

    async fn lookup(ctx: &PageContext) -> Result<Vec<Topic>> {
        ctx.service::<Topic>().index().await
    }

    fn row(&self, _all: &[Self], topics: &Vec<Topic>, ctx: &PageContext) -> Row {
        Row {
            relation: or_not_available(topic_name(self, topics)),
            image: ctx.upload_url(UploadFolder::Posts, self.image.as_deref()),
            ..Row::base(self)
        }
    }
}

#[async_trait]
impl AdminResource for Product {
    const ADMIN_ROUTE: &'static str = "/admin/product";
    type Lookup = Vec<Category>;

    async fn lookup(ctx: &PageContext) -> Result<Vec<Category>> {
        ctx.service::<Category>().index().await
    }

    fn row(&self, _all: &[Self], categories: &Vec<Category>, ctx: &PageContext) -> Row {
        Row {
            relation: or_not_available(self.category_name(categories)),
            image: ctx.upload_url(UploadFolder::Products, self.image.as_deref()),
            price: Some(format_price(self.price)),
            ..Row::base(self)
        }
    }
}
