//! Admin trash page - soft-deleted records with restore and permanent delete.

use super::messages;
use super::rows::{AdminResource, Row};
use super::table::Table;
use crate::core::EntityService;
use crate::core::bulk::{Selection, all_or_nothing};
use crate::pages::PageContext;
use crate::ui::ViewState;
use tracing::{error, info};

/// Trash page for resource `E`.
pub struct TrashPage<E: AdminResource> {
    ctx: PageContext,
    service: EntityService<E>,
    table: Table<E>,
}

impl<E: AdminResource> TrashPage<E> {
    /// Creates the page in the loading state.
    #[must_use]
    pub fn new(ctx: PageContext) -> Self {
        Self {
            service: ctx.service(),
            ctx,
            table: Table::default(),
        }
    }

    /// Fetches the trashed records.
    pub async fn load(&mut self) {
        match tokio::try_join!(self.service.trash(), E::lookup(&self.ctx)) {
            Ok((items, lookup)) => {
                info!("Loaded {} trashed {} records", items.len(), E::NAME);
                self.table.set_loaded(items, lookup);
                self.table.load_images(&self.ctx).await;
            }
            Err(e) => {
                error!("Error fetching {} trash: {}", E::NAME, e);
                self.table.set_failed(messages::load_trash_failed(E::NOUN));
            }
        }
    }

    /// Current view state.
    #[must_use]
    pub const fn state(&self) -> &ViewState<Vec<E>> {
        &self.table.state
    }

    /// Rows as displayed.
    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        self.table.rows(&self.ctx)
    }

    /// `src` of a row image.
    #[must_use]
    pub fn image_src(&self, id: i64) -> Option<&str> {
        self.table.image_src(id)
    }

    /// Ticked rows.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.table.selection
    }

    /// Ticks or unticks a row.
    pub fn toggle_selected(&mut self, id: i64) {
        self.table.selection.toggle(id);
    }

    /// Header checkbox.
    pub fn toggle_select_all(&mut self) {
        let ids = self.table.ids();
        self.table.selection.toggle_all(&ids);
    }

    /// Restores one record after confirmation.
    pub async fn restore(&mut self, id: i64) {
        if !self.ctx.confirm(&messages::confirm_restore_one(E::NOUN)) {
            return;
        }
        match self.service.restore_from_trash(id).await {
            Ok(()) => {
                self.load().await;
                self.ctx.alert(&messages::restored(E::NOUN));
            }
            Err(e) => {
                error!("Error restoring {} {}: {}", E::NAME, id, e);
                self.ctx.alert(messages::RESTORE_FAILED);
            }
        }
    }

    /// Permanently deletes one record after confirmation.
    pub async fn delete(&mut self, id: i64) {
        if !self.ctx.confirm(&messages::confirm_delete_one(E::NOUN)) {
            return;
        }
        match self.service.delete(id).await {
            Ok(()) => {
                self.load().await;
                self.ctx.alert(&messages::deleted(E::NOUN));
            }
            Err(e) => {
                error!("Error deleting {} {}: {}", E::NAME, id, e);
                self.ctx.alert(messages::DELETE_FAILED);
            }
        }
    }

    /// Restores every selected record; all-or-nothing.
    pub async fn restore_selected(&mut self) {
        let Some(ids) = self
            .table
            .confirmed_batch(&self.ctx, |n| messages::confirm_restore_many(n, E::NOUN))
        else {
            return;
        };

        let service = &self.service;
        match all_or_nothing(&ids, move |id| service.restore_from_trash(id)).await {
            Ok(_) => {
                self.table.selection.clear();
                self.load().await;
                self.ctx.alert(&messages::restored(E::NOUN));
            }
            Err(e) => {
                error!("Error restoring {} {:?}: {}", E::NAME, ids, e);
                self.ctx.alert(messages::RESTORE_FAILED);
            }
        }
    }

    /// Permanently deletes every selected record; all-or-nothing.
    pub async fn delete_selected(&mut self) {
        let Some(ids) = self
            .table
            .confirmed_batch(&self.ctx, |n| messages::confirm_delete_many(n, E::NOUN))
        else {
            return;
        };

        let service = &self.service;
        match all_or_nothing(&ids, move |id| service.delete(id)).await {
            Ok(_) => {
                self.table.selection.clear();
                self.load().await;
                self.ctx.alert(&messages::deleted(E::NOUN));
            }
            Err(e) => {
                error!("Error deleting {} {:?}: {}", E::NAME, ids, e);
                self.ctx.alert(messages::DELETE_FAILED);
            }
        }
    }

    /// Permanently deletes the whole trash, where the resource supports it.
    pub async fn empty_trash(&mut self) {
        if E::ROUTES.empty_trash().is_none() {
            return;
        }
        if !self.ctx.confirm(&messages::confirm_empty_trash(E::NOUN)) {
            return;
        }
        match self.service.empty_trash().await {
            Ok(()) => {
                self.table.selection.clear();
                self.load().await;
                self.ctx.alert(messages::TRASH_EMPTIED);
            }
            Err(e) => {
                error!("Error emptying {} trash: {}", E::NAME, e);
                self.ctx.alert(messages::DELETE_FAILED);
            }
        }
    }

    /// Back to the list.
    pub fn back_to_list(&self) {
        self.ctx.navigator.navigate(E::ADMIN_ROUTE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Method;
    use crate::entities::{Category, Product, Topic};
    use crate::test_utils::Harness;
    use serde_json::json;

    fn trashed() -> serde_json::Value {
        json!({"data": [{"id": 1, "name": "A"}, {"id": 2, "name": "B"}, {"id": 3, "name": "C"}]})
    }

    #[tokio::test]
    async fn test_bulk_restore_issues_one_call_per_id_then_reloads() {
        let harness = Harness::new();
        harness.transport.on(Method::Get, "topics/trash", trashed());
        for id in 1..=3 {
            harness
                .transport
                .on(Method::Put, &format!("topics/restore/{id}"), json!({}));
        }
        let mut page = TrashPage::<Topic>::new(harness.context());
        page.load().await;

        page.toggle_select_all();
        page.restore_selected().await;

        for id in 1..=3 {
            assert_eq!(harness.transport.count(Method::Put, &format!("topics/restore/{id}")), 1);
        }
        let paths = harness.transport.paths();
        assert_eq!(paths.last().map(String::as_str), Some("GET topics/trash"));
        assert!(page.selection().is_empty());
        assert_eq!(harness.alerts(), vec!["Khôi phục chủ đề thành công!"]);
    }

    #[tokio::test]
    async fn test_bulk_restore_single_failure_keeps_selection() {
        let harness = Harness::new();
        harness.transport.on(Method::Get, "topics/trash", trashed());
        harness.transport.on(Method::Put, "topics/restore/1", json!({}));
        harness.transport.fail(Method::Put, "topics/restore/2", 500);
        harness.transport.on(Method::Put, "topics/restore/3", json!({}));
        let mut page = TrashPage::<Topic>::new(harness.context());
        page.load().await;

        page.toggle_select_all();
        page.restore_selected().await;

        assert_eq!(page.selection().len(), 3);
        assert_eq!(harness.transport.count(Method::Get, "topics/trash"), 1);
        assert_eq!(
            harness.alerts(),
            vec!["Có lỗi xảy ra khi khôi phục. Vui lòng thử lại."]
        );
        assert_eq!(page.state().data().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn test_permanent_delete_warns_irreversible() {
        let harness = Harness::new();
        harness.transport.on(Method::Get, "categories/trash", trashed());
        harness.transport.on(Method::Delete, "categories/2", serde_json::Value::Null);
        let mut page = TrashPage::<Category>::new(harness.context());
        page.load().await;

        page.delete(2).await;

        let confirms = harness.dialogs.confirms();
        assert!(confirms[0].contains("xóa vĩnh viễn"));
        assert!(confirms[0].contains("không thể hoàn tác"));
        assert_eq!(harness.alerts(), vec!["Xóa danh mục thành công!"]);
    }

    #[tokio::test]
    async fn test_empty_trash() {
        let harness = Harness::new();
        harness.transport.on(Method::Get, "categories/trash", trashed());
        harness
            .transport
            .on(Method::Delete, "categories/trash/empty", serde_json::Value::Null);
        let mut page = TrashPage::<Category>::new(harness.context());
        page.load().await;

        page.empty_trash().await;

        assert_eq!(harness.transport.count(Method::Delete, "categories/trash/empty"), 1);
        assert_eq!(harness.alerts(), vec!["Đã dọn sạch thùng rác!"]);
    }

    #[tokio::test]
    async fn test_product_trash_has_no_empty_action() {
        let harness = Harness::new();
        harness.transport.on(Method::Get, "products/trash", json!([]));
        harness.transport.on(Method::Get, "categories", json!([]));
        let mut page = TrashPage::<Product>::new(harness.context());
        page.load().await;

        page.empty_trash().await;

        assert!(harness.dialogs.confirms().is_empty());
        assert_eq!(harness.transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_load_failure_message() {
        let harness = Harness::new();
        harness.transport.fail(Method::Get, "topics/trash", 503);
        let mut page = TrashPage::<Topic>::new(harness.context());
        page.load().await;
        assert_eq!(
            page.state().error(),
            Some("Không thể tải danh sách chủ đề trong thùng rác. Vui lòng thử lại sau.")
        );
    }
}
