//! Admin list page - active records of one resource with status toggling,
//! soft delete and bulk soft delete.

use super::messages;
use super::rows::{AdminResource, Row};
use super::table::Table;
use crate::core::EntityService;
use crate::core::bulk::{Selection, all_or_nothing};
use crate::pages::PageContext;
use crate::ui::ViewState;
use tracing::{error, info};

/// List page for resource `E`.
pub struct ListPage<E: AdminResource> {
    ctx: PageContext,
    service: EntityService<E>,
    table: Table<E>,
}

impl<E: AdminResource> ListPage<E> {
    /// Creates the page in the loading state.
    #[must_use]
    pub fn new(ctx: PageContext) -> Self {
        Self {
            service: ctx.service(),
            ctx,
            table: Table::default(),
        }
    }

    /// Fetches the records and their lookup list concurrently; either
    /// failing fails the page.
    pub async fn load(&mut self) {
        match tokio::try_join!(self.service.index(), E::lookup(&self.ctx)) {
            Ok((items, lookup)) => {
                info!("Loaded {} {} records", items.len(), E::NAME);
                self.table.set_loaded(items, lookup);
                self.table.load_images(&self.ctx).await;
            }
            Err(e) => {
                error!("Error fetching {} list: {}", E::NAME, e);
                self.table.set_failed(messages::load_failed(E::NOUN));
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

    /// Flips a record's status, then reloads.
    pub async fn toggle_status(&mut self, id: i64) {
        match self.service.toggle_status(id).await {
            Ok(_) => {
                self.load().await;
                self.ctx.alert(messages::STATUS_UPDATED);
            }
            Err(e) => {
                error!("Error toggling {} {} status: {}", E::NAME, id, e);
                self.ctx.alert(messages::STATUS_FAILED);
            }
        }
    }

    /// Moves one record to the trash after confirmation.
    pub async fn move_to_trash(&mut self, id: i64) {
        if !self.ctx.confirm(&messages::confirm_trash_one(E::NOUN)) {
            return;
        }
        match self.service.move_to_trash(id).await {
            Ok(()) => {
                self.load().await;
                self.ctx.alert(&messages::trashed(E::NOUN));
            }
            Err(e) => {
                error!("Error moving {} {} to trash: {}", E::NAME, id, e);
                self.ctx.alert(messages::TRASH_FAILED);
            }
        }
    }

    /// Moves every selected record to the trash.
    ///
    /// All requests are sent together; the selection is cleared and the list
    /// reloaded only if every one succeeded.
    pub async fn trash_selected(&mut self) {
        let Some(ids) = self
            .table
            .confirmed_batch(&self.ctx, |n| messages::confirm_trash_many(n, E::NOUN))
        else {
            return;
        };

        let service = &self.service;
        match all_or_nothing(&ids, move |id| service.move_to_trash(id)).await {
            Ok(_) => {
                self.table.selection.clear();
                self.load().await;
                self.ctx.alert(&messages::trashed(E::NOUN));
            }
            Err(e) => {
                error!("Error moving {} {:?} to trash: {}", E::NAME, ids, e);
                self.ctx.alert(messages::TRASH_FAILED);
            }
        }
    }

    /// Opens the create form.
    pub fn open_create(&self) {
        self.ctx.navigator.navigate(&format!("{}/create", E::ADMIN_ROUTE));
    }

    /// Opens a record's detail page.
    pub fn open_detail(&self, id: i64) {
        self.ctx
            .navigator
            .navigate(&format!("{}/detail/{id}", E::ADMIN_ROUTE));
    }

    /// Opens a record's edit form.
    pub fn open_update(&self, id: i64) {
        self.ctx
            .navigator
            .navigate(&format!("{}/update/{id}", E::ADMIN_ROUTE));
    }

    /// Opens the trash.
    pub fn open_trash(&self) {
        self.ctx.navigator.navigate(&format!("{}/trash", E::ADMIN_ROUTE));
    }
}
