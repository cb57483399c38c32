//! Admin detail page - one record, its resolved relation and image.

use super::messages;
use super::rows::{AdminResource, Row};
use crate::core::EntityService;
use crate::pages::PageContext;
use crate::ui::{AuthenticatedImage, ViewState};
use tracing::error;

/// Detail page for resource `E`.
pub struct DetailPage<E: AdminResource> {
    ctx: PageContext,
    service: EntityService<E>,
    id: i64,
    state: ViewState<(E, Row)>,
    image: AuthenticatedImage,
}

impl<E: AdminResource> DetailPage<E> {
    /// Creates the page for record `id`.
    #[must_use]
    pub fn new(ctx: PageContext, id: i64) -> Self {
        Self {
            service: ctx.service(),
            image: ctx.image_slot(),
            ctx,
            id,
            state: ViewState::Loading,
        }
    }

    /// Fetches the record and its lookup list, then its image.
    pub async fn load(&mut self) {
        match tokio::try_join!(self.service.detail(self.id), E::lookup(&self.ctx)) {
            Ok((entity, lookup)) => {
                let row = entity.row(std::slice::from_ref(&entity), &lookup, &self.ctx);
                match row.image.as_deref() {
                    Some(url) => self.image.load(url).await,
                    None => self.image.release(),
                }
                self.state = ViewState::Ready((entity, row));
            }
            Err(e) => {
                error!("Error fetching {} {}: {}", E::NAME, self.id, e);
                self.image.release();
                self.state = ViewState::Failed(messages::load_detail_failed(E::NOUN));
            }
        }
    }

    /// Current view state: the record and its displayed row.
    #[must_use]
    pub const fn state(&self) -> &ViewState<(E, Row)> {
        &self.state
    }

    /// `src` of the record image, if the record has one.
    #[must_use]
    pub fn image_src(&self) -> Option<&str> {
        self.state
            .data()
            .and_then(|(_, row)| row.image.as_ref())
            .map(|_| self.image.src())
    }

    /// Moves the record to the trash and returns to the list.
    pub async fn move_to_trash(&mut self) {
        if !self.ctx.confirm(&messages::confirm_trash_one(E::NOUN)) {
            return;
        }
        match self.service.move_to_trash(self.id).await {
            Ok(()) => {
                self.ctx.alert(&messages::trashed(E::NOUN));
                self.ctx.navigator.navigate(E::ADMIN_ROUTE);
            }
            Err(e) => {
                error!("Error moving {} {} to trash: {}", E::NAME, self.id, e);
                self.ctx.alert(messages::TRASH_FAILED);
            }
        }
    }

    /// Opens the edit form.
    pub fn open_update(&self) {
        self.ctx
            .navigator
            .navigate(&format!("{}/update/{}", E::ADMIN_ROUTE, self.id));
    }

    /// Back to the list.
    pub fn back_to_list(&self) {
        self.ctx.navigator.navigate(E::ADMIN_ROUTE);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::client::Method;
    use crate::entities::Post;
    use crate::test_utils::Harness;
    use serde_json::json;

    #[tokio::test]
    async fn test_post_detail_resolves_topic_and_image() {
        let harness = Harness::new();
        harness.transport.on(
            Method::Get,
            "posts/7",
            json!({"data": {"id": 7, "title": "Tin", "image": "p.png", "topic": {"id": 2}}}),
        );
        harness
            .transport
            .on(Method::Get, "topics", json!([{"id": 2, "name": "Khuyến mãi"}]));
        harness
            .transport
            .fail(Method::Get, "uploads/posts/p.png", 404);
        let mut page = DetailPage::<Post>::new(harness.context(), 7);

        page.load().await;

        let (post, row) = page.state().data().cloned().unwrap();
        assert_eq!(post.title, "Tin");
        assert_eq!(row.relation.as_deref(), Some("Khuyến mãi"));
        assert_eq!(page.image_src(), Some("/placeholder-image.jpg"));
    }

    #[tokio::test]
    async fn test_move_to_trash_returns_to_list() {
        let harness = Harness::new();
        harness.transport.on(Method::Put, "posts/trash/7", json!({}));
        let mut page = DetailPage::<Post>::new(harness.context(), 7);

        page.move_to_trash().await;

        assert_eq!(harness.navigator.current().as_deref(), Some("/admin/post"));
        assert_eq!(harness.alerts(), vec!["Chuyển bài viết vào thùng rác thành công!"]);
    }

    #[tokio::test]
    async fn test_missing_record() {
        let harness = Harness::new();
        harness.transport.on(Method::Get, "topics", json!([]));
        let mut page = DetailPage::<Post>::new(harness.context(), 8);
        page.load().await;
        assert_eq!(page.state().error(), Some("Không thể tải chi tiết bài viết."));
    }
}
