//! State shared by the list and trash tables: records, lookup, selection and
//! per-row authenticated images.

use super::messages;
use super::rows::{AdminResource, Row};
use crate::core::bulk::Selection;
use crate::entities::Resource;
use crate::pages::PageContext;
use crate::ui::{AuthenticatedImage, ViewState};
use std::collections::HashMap;

pub struct Table<E: AdminResource> {
    pub state: ViewState<Vec<E>>,
    pub lookup: E::Lookup,
    pub selection: Selection,
    images: HashMap<i64, AuthenticatedImage>,
}

impl<E: AdminResource> Default for Table<E> {
    fn default() -> Self {
        Self {
            state: ViewState::Loading,
            lookup: E::Lookup::default(),
            selection: Selection::new(),
            images: HashMap::new(),
        }
    }
}

impl<E: AdminResource> Table<E> {
    pub fn ids(&self) -> Vec<i64> {
        self.state
            .data()
            .map(|items| items.iter().map(Resource::id).collect())
            .unwrap_or_default()
    }

    pub fn rows(&self, ctx: &PageContext) -> Vec<Row> {
        self.state
            .data()
            .map(|items| {
                items
                    .iter()
                    .map(|item| item.row(items, &self.lookup, ctx))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn set_loaded(&mut self, items: Vec<E>, lookup: E::Lookup) {
        let ids: Vec<i64> = items.iter().map(Resource::id).collect();
        self.selection = {
            let mut kept = Selection::new();
            for id in self.selection.ids() {
                if ids.contains(id) {
                    kept.toggle(*id);
                }
            }
            kept
        };
        self.images.retain(|id, _| ids.contains(id));
        self.state = ViewState::Ready(items);
        self.lookup = lookup;
    }

    pub fn set_failed(&mut self, message: String) {
        self.images.clear();
        self.state = ViewState::Failed(message);
    }

    /// Loads every row image through the authenticated loader. Slots whose
    /// row disappeared were already dropped (and their URLs revoked).
    pub async fn load_images(&mut self, ctx: &PageContext) {
        for row in self.rows(ctx) {
            let Some(url) = row.image else {
                self.images.remove(&row.id);
                continue;
            };
            self.images
                .entry(row.id)
                .or_insert_with(|| ctx.image_slot())
                .load(&url)
                .await;
        }
    }

    pub fn image_src(&self, id: i64) -> Option<&str> {
        self.images.get(&id).map(AuthenticatedImage::src)
    }

    /// Selected ids, if any are selected and the user confirmed `prompt`.
    pub fn confirmed_batch(
        &self,
        ctx: &PageContext,
        prompt: impl FnOnce(usize) -> String,
    ) -> Option<Vec<i64>> {
        if self.selection.is_empty() {
            ctx.alert(&messages::select_at_least_one(E::NOUN));
            return None;
        }
        let ids = self.selection.ids().to_vec();
        ctx.confirm(&prompt(ids.len())).then_some(ids)
    }
}
