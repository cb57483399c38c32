//! Field sets of the category, topic, post, product and banner forms.

use super::form::EntityForm;
use crate::client::{FormData, Upload};
use crate::core::Payload;
use crate::entities::{Banner, Category, Post, Product, Topic};
use crate::errors::Result;
use crate::pages::PageContext;
use async_trait::async_trait;
use serde_json::json;

const fn flag_number(active: bool) -> u8 {
    if active { 1 } else { 0 }
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

fn number_text(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Category fields. Sent as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryForm {
    /// Required
    pub name: String,
    /// Optional text
    pub description: String,
    /// Chosen parent, `None` for a top-level category
    pub parent_id: Option<i64>,
    /// Active flag
    pub status: bool,
}

impl Default for CategoryForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            parent_id: None,
            status: true,
        }
    }
}

#[async_trait]
impl EntityForm for CategoryForm {
    type Entity = Category;
    type Options = Vec<Category>;

    async fn load_options(ctx: &PageContext, editing: Option<i64>) -> Result<Vec<Category>> {
        ctx.service::<Category>().parent_candidates(editing).await
    }

    fn from_entity(entity: &Category) -> Self {
        Self {
            name: entity.name.clone(),
            description: entity.description.clone().unwrap_or_default(),
            parent_id: entity.parent_id,
            status: entity.status,
        }
    }

    fn is_complete(&self) -> bool {
        filled(&self.name)
    }

    fn payload(&self) -> Payload {
        Payload::Json(json!({
            "name": self.name,
            "description": self.description,
            "status": flag_number(self.status),
            "parentId": self.parent_id,
        }))
    }
}

/// Topic fields. Sent as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicForm {
    /// Required
    pub name: String,
    /// Optional text
    pub description: String,
    /// Active flag
    pub status: bool,
}

impl Default for TopicForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            status: true,
        }
    }
}

#[async_trait]
impl EntityForm for TopicForm {
    type Entity = Topic;
    type Options = ();

    async fn load_options(_ctx: &PageContext, _editing: Option<i64>) -> Result<()> {
        Ok(())
    }

    fn from_entity(entity: &Topic) -> Self {
        Self {
            name: entity.name.clone(),
            description: entity.description.clone().unwrap_or_default(),
            status: entity.status,
        }
    }

    fn is_complete(&self) -> bool {
        filled(&self.name)
    }

    fn payload(&self) -> Payload {
        Payload::Json(json!({
            "name": self.name,
            "description": self.description,
            "status": flag_number(self.status),
        }))
    }
}

/// Post fields. Sent as multipart so an image can be attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostForm {
    /// Required
    pub title: String,
    /// Required, HTML
    pub content: String,
    /// Required
    pub topic_id: Option<i64>,
    /// Active flag
    pub status: bool,
    /// Newly picked image
    pub image: Option<Upload>,
    /// File name of the image already stored
    pub current_image: Option<String>,
}

impl Default for PostForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            topic_id: None,
            status: true,
            image: None,
            current_image: None,
        }
    }
}

#[async_trait]
impl EntityForm for PostForm {
    type Entity = Post;
    type Options = Vec<Topic>;

    async fn load_options(ctx: &PageContext, _editing: Option<i64>) -> Result<Vec<Topic>> {
        ctx.service::<Topic>().index().await
    }

    fn from_entity(entity: &Post) -> Self {
        Self {
            title: entity.title.clone(),
            content: entity.content.clone(),
            topic_id: entity.topic_id,
            status: entity.status,
            image: None,
            current_image: entity.image.clone(),
        }
    }

    fn is_complete(&self) -> bool {
        filled(&self.title) && filled(&self.content) && self.topic_id.is_some()
    }

    fn payload(&self) -> Payload {
        let mut form = FormData::new();
        form.append("title", &self.title)
            .append("content", &self.content)
            .append("topicId", self.topic_id.unwrap_or_default())
            .append("status", flag_number(self.status));
        if let Some(image) = &self.image {
            form.append_file("image", image);
        }
        Payload::Form(form)
    }
}

/// Product fields. Sent as multipart so an image can be attached.
///
/// Numeric fields hold the raw text typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForm {
    /// Required
    pub name: String,
    /// Optional text
    pub description: String,
    /// Required
    pub price: String,
    /// Optional
    price_sale: String,
    /// Whether the sale price is advertised
    is_on_sale: bool,
    /// Required
    pub category_id: Option<i64>,
    /// Optional stock
    pub quantity: String,
    /// Active flag
    pub status: bool,
    /// View counter, sent back unchanged
    pub view: i64,
    /// Newly picked image
    pub image: Option<Upload>,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            price_sale: String::new(),
            is_on_sale: false,
            category_id: None,
            quantity: String::new(),
            status: true,
            view: 0,
            image: None,
        }
    }
}

impl ProductForm {
    /// Typed sale price.
    #[must_use]
    pub fn price_sale(&self) -> &str {
        &self.price_sale
    }

    /// Whether the sale flag is on.
    #[must_use]
    pub const fn is_on_sale(&self) -> bool {
        self.is_on_sale
    }

    /// Sets the sale price; a sale price strictly between zero and the
    /// regular price turns the sale flag on.
    pub fn set_price_sale(&mut self, raw: &str) {
        self.price_sale = raw.to_string();
        let sale = raw.trim().parse::<f64>().ok();
        let price = self.price.trim().parse::<f64>().ok();
        if let (Some(sale), Some(price)) = (sale, price) {
            if sale > 0.0 && sale < price {
                self.is_on_sale = true;
            }
        }
    }

    /// Sets the sale flag; turning it off clears the sale price.
    pub fn set_on_sale(&mut self, on: bool) {
        self.is_on_sale = on;
        if !on {
            self.price_sale.clear();
        }
    }
}

#[async_trait]
impl EntityForm for ProductForm {
    type Entity = Product;
    type Options = Vec<Category>;

    async fn load_options(ctx: &PageContext, _editing: Option<i64>) -> Result<Vec<Category>> {
        ctx.service::<Category>().index().await
    }

    fn from_entity(entity: &Product) -> Self {
        Self {
            name: entity.name.clone(),
            description: entity.description.clone().unwrap_or_default(),
            price: number_text(entity.price),
            price_sale: entity.price_sale.map(number_text).unwrap_or_default(),
            is_on_sale: entity.is_on_sale,
            category_id: entity.category_id,
            quantity: entity.quantity.map(|q| q.to_string()).unwrap_or_default(),
            status: entity.status,
            view: entity.view.unwrap_or_default(),
            image: None,
        }
    }

    fn is_complete(&self) -> bool {
        filled(&self.name) && filled(&self.price) && self.category_id.is_some()
    }

    fn payload(&self) -> Payload {
        let mut form = FormData::new();
        form.append("name", &self.name)
            .append("description", &self.description)
            .append("price", self.price.trim())
            .append("categoryId", self.category_id.unwrap_or_default());
        if filled(&self.price_sale) {
            form.append("priceSale", self.price_sale.trim());
        }
        form.append("isOnSale", self.is_on_sale);
        if filled(&self.quantity) {
            form.append("quantity", self.quantity.trim());
        }
        form.append("status", self.status).append("view", self.view);
        if let Some(image) = &self.image {
            form.append_file("image", image);
        }
        Payload::Form(form)
    }
}

/// Banner fields. Sent as multipart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerForm {
    /// Caption, sent as `title`
    pub title: String,
    /// Target link
    pub link: String,
    /// Active flag
    pub status: bool,
    /// Newly picked image
    pub image: Option<Upload>,
}

impl Default for BannerForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            link: String::new(),
            status: true,
            image: None,
        }
    }
}

#[async_trait]
impl EntityForm for BannerForm {
    type Entity = Banner;
    type Options = ();

    async fn load_options(_ctx: &PageContext, _editing: Option<i64>) -> Result<()> {
        Ok(())
    }

    fn from_entity(entity: &Banner) -> Self {
        Self {
            title: entity.name.clone(),
            link: entity.link.clone().unwrap_or_default(),
            status: entity.status,
            image: None,
        }
    }

    // Image or caption requirements are enforced by the server.
    fn is_complete(&self) -> bool {
        true
    }

    fn payload(&self) -> Payload {
        let mut form = FormData::new();
        form.append("title", &self.title)
            .append("status", flag_number(self.status));
        if filled(&self.link) {
            form.append("link", &self.link);
        }
        if let Some(image) = &self.image {
            form.append_file("image", image);
        }
        Payload::Form(form)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic)]
    use super::*;
    use crate::client::{Body, Method};
    use crate::pages::admin::form::FormPage;
    use crate::test_utils::Harness;

    fn sent_form(harness: &Harness) -> FormData {
        match harness.transport.requests().last().map(|r| r.body.clone()) {
            Some(Body::Multipart(form)) => form,
            other => panic!("expected multipart body, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_category_update_excludes_itself_from_parents() {
        let harness = Harness::new();
        harness.transport.on(
            Method::Get,
            "categories",
            json!([{"id": 1, "name": "A"}, {"id": 2, "name": "B", "parentId": 1}, {"id": 3, "name": "C"}]),
        );
        harness
            .transport
            .on(Method::Get, "categories/2", json!({"data": {"id": 2, "name": "B", "parentId": 1}}));
        let mut page = FormPage::<CategoryForm>::update(harness.context(), 2);

        page.load().await;

        let ids: Vec<i64> = page.options().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(page.form().name, "B");
        assert_eq!(page.form().parent_id, Some(1));
    }

    #[tokio::test]
    async fn test_category_update_submits_json_and_navigates() {
        let harness = Harness::new();
        harness.transport.on(Method::Get, "categories", json!([]));
        harness
            .transport
            .on(Method::Get, "categories/2", json!({"id": 2, "name": "B", "status": 1}));
        harness.transport.on(Method::Put, "categories/2", json!({"id": 2}));
        let mut page = FormPage::<CategoryForm>::update(harness.context(), 2);
        page.load().await;

        page.form_mut().name = "Bé".into();
        assert!(page.submit().await);

        let body = harness.transport.requests().last().map(|r| r.body.clone());
        assert_eq!(
            body,
            Some(Body::Json(json!({"name": "Bé", "description": "", "status": 1, "parentId": null})))
        );
        assert_eq!(harness.alerts(), vec!["Cập nhật danh mục thành công!"]);
        assert_eq!(harness.navigator.current().as_deref(), Some("/admin/category"));
    }

    #[tokio::test]
    async fn test_post_missing_fields_blocks_submission() {
        let harness = Harness::new();
        harness.transport.on(Method::Get, "topics", json!([{"id": 1, "name": "T"}]));
        let mut page = FormPage::<PostForm>::create(harness.context());
        page.load().await;

        page.form_mut().title = "Tiêu đề".into();
        assert!(matches!(page.validate(), Err(crate::errors::Error::Validation(_))));
        assert!(!page.submit().await);

        assert_eq!(page.error(), Some("Vui lòng điền đầy đủ thông tin bắt buộc."));
        assert_eq!(harness.transport.count(Method::Post, "posts"), 0);
    }

    #[tokio::test]
    async fn test_post_create_sends_multipart() {
        let harness = Harness::new();
        harness.transport.on(Method::Get, "topics", json!([{"id": 1, "name": "T"}]));
        harness.transport.on(Method::Post, "posts", json!({"id": 10}));
        let mut page = FormPage::<PostForm>::create(harness.context());
        page.load().await;

        let form = page.form_mut();
        form.title = "Tiêu đề".into();
        form.content = "<p>Nội dung</p>".into();
        form.topic_id = Some(1);
        form.image = Some(Upload {
            filename: "a.png".into(),
            content_type: "image/png".into(),
            bytes: vec![1],
        });
        assert!(page.submit().await);

        let sent = sent_form(&harness);
        assert_eq!(sent.text("topicId"), Some("1"));
        assert_eq!(sent.text("status"), Some("1"));
        assert!(sent.contains("image"));
        assert_eq!(harness.alerts(), vec!["Thêm bài viết thành công!"]);
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_fields() {
        let harness = Harness::new();
        harness.transport.fail(Method::Post, "topics", 500);
        let mut page = FormPage::<TopicForm>::create(harness.context());
        page.load().await;

        page.form_mut().name = "Mới".into();
        assert!(!page.submit().await);

        assert_eq!(
            page.error(),
            Some("Có lỗi xảy ra khi thêm chủ đề. Vui lòng thử lại.")
        );
        assert_eq!(page.form().name, "Mới");
        assert!(harness.alerts().is_empty());
    }

    #[test]
    fn test_product_sale_flag_follows_sale_price() {
        let mut form = ProductForm {
            price: "100".into(),
            ..ProductForm::default()
        };
        form.set_price_sale("80");
        assert!(form.is_on_sale());

        form.set_on_sale(false);
        assert_eq!(form.price_sale(), "");

        form.set_price_sale("150");
        assert!(!form.is_on_sale());
    }

    #[tokio::test]
    async fn test_product_payload_fields() {
        let harness = Harness::new();
        harness.transport.on(Method::Get, "categories", json!([{"id": 4, "name": "Giày"}]));
        harness.transport.on(Method::Post, "products", json!({"id": 1}));
        let mut page = FormPage::<ProductForm>::create(harness.context());
        page.load().await;

        let form = page.form_mut();
        form.name = "Giày".into();
        form.price = "500000".into();
        form.category_id = Some(4);
        form.set_price_sale("450000");
        assert!(page.submit().await);

        let sent = sent_form(&harness);
        assert_eq!(sent.text("priceSale"), Some("450000"));
        assert_eq!(sent.text("isOnSale"), Some("true"));
        assert_eq!(sent.text("status"), Some("true"));
        assert_eq!(sent.text("view"), Some("0"));
        assert!(!sent.contains("quantity"));
        assert!(!sent.contains("image"));
    }

    #[tokio::test]
    async fn test_options_failure_fails_form() {
        let harness = Harness::new();
        harness.transport.fail(Method::Get, "topics", 500);
        let mut page = FormPage::<PostForm>::create(harness.context());
        page.load().await;
        assert_eq!(page.state().error(), Some("Không thể tải dữ liệu."));
    }
}
