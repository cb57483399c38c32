//! Generic entity service - one implementation of the CRUD and trash contract
//! for every [`Resource`].
//!
//! Categories, posts, products, topics and banners all follow the same REST
//! layout; the differences (delete route shape, empty-trash support, the
//! category status body) live in each resource's route table.

use crate::client::envelope::{decode_list, decode_record};
use crate::client::{ApiClient, Body, FormData};
use crate::entities::Resource;
use crate::errors::{Error, Result};
use serde_json::Value;
use std::marker::PhantomData;
use tracing::{debug, info};

/// Create/update request body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// JSON object (categories, topics)
    Json(Value),
    /// Form data, possibly carrying an image (posts, products, banners)
    Form(FormData),
}

impl From<Payload> for Body {
    fn from(payload: Payload) -> Self {
        match payload {
            Payload::Json(value) => Self::Json(value),
            Payload::Form(form) => Self::Multipart(form),
        }
    }
}

/// REST operations for one resource type.
pub struct EntityService<E: Resource> {
    client: ApiClient,
    _resource: PhantomData<fn() -> E>,
}

impl<E: Resource> Clone for EntityService<E> {
    fn clone(&self) -> Self {
        Self::new(self.client.clone())
    }
}

impl<E: Resource> std::fmt::Debug for EntityService<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityService")
            .field("resource", &E::NAME)
            .finish_non_exhaustive()
    }
}

impl<E: Resource> EntityService<E> {
    /// Creates a service on top of `client`.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    /// Underlying client.
    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Lists the non-trashed records.
    ///
    /// # Errors
    /// Returns an error if the request fails or a record cannot be decoded.
    pub async fn index(&self) -> Result<Vec<E>> {
        let value = self.client.get(&E::ROUTES.collection()).await?;
        let items = decode_list::<E>(value)?;
        debug!("Fetched {} {} records", items.len(), E::NAME);
        Ok(items)
    }

    /// Fetches a single record.
    ///
    /// # Errors
    /// Returns `Error::NotFound` when the API answers with an empty body, or
    /// the request/decoding error.
    pub async fn detail(&self, id: i64) -> Result<E> {
        let value = self.client.get(&E::ROUTES.item(id)).await?;
        if value.is_null() {
            return Err(Error::NotFound {
                entity: E::NAME,
                id: id.to_string(),
            });
        }
        decode_record(value)
    }

    /// Creates a record.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    pub async fn create(&self, payload: Payload) -> Result<Value> {
        let created = self
            .client
            .post(&E::ROUTES.collection(), payload.into())
            .await?;
        info!("Created {}", E::NAME);
        Ok(created)
    }

    /// Replaces a record.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    pub async fn update(&self, id: i64, payload: Payload) -> Result<Value> {
        let updated = self.client.put(&E::ROUTES.item(id), payload.into()).await?;
        info!("Updated {} {}", E::NAME, id);
        Ok(updated)
    }

    /// `PUT <base>/status/:id`.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    pub async fn toggle_status(&self, id: i64) -> Result<Value> {
        let body = E::status_body().map_or(Body::Empty, Body::Json);
        self.client.put(&E::ROUTES.status(id), body).await
    }

    /// Soft-deletes a record.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    pub async fn move_to_trash(&self, id: i64) -> Result<()> {
        self.client
            .put(&E::ROUTES.move_to_trash(id), Body::Empty)
            .await?;
        debug!("Moved {} {} to trash", E::NAME, id);
        Ok(())
    }

    /// Brings a record back from the trash.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    pub async fn restore_from_trash(&self, id: i64) -> Result<()> {
        self.client.put(&E::ROUTES.restore(id), Body::Empty).await?;
        debug!("Restored {} {}", E::NAME, id);
        Ok(())
    }

    /// Lists the trashed records.
    ///
    /// # Errors
    /// Returns an error if the request fails or a record cannot be decoded.
    pub async fn trash(&self) -> Result<Vec<E>> {
        let value = self.client.get(&E::ROUTES.trash()).await?;
        decode_list(value)
    }

    /// Permanently deletes a record.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&E::ROUTES.delete(id)).await?;
        info!("Permanently deleted {} {}", E::NAME, id);
        Ok(())
    }

    /// Permanently deletes everything in the trash.
    ///
    /// # Errors
    /// Returns `Error::Unsupported` for resources without the route, or the
    /// request error.
    pub async fn empty_trash(&self) -> Result<()> {
        let path = E::ROUTES.empty_trash().ok_or(Error::Unsupported {
            entity: E::NAME,
            operation: "empty_trash",
        })?;
        self.client.delete(&path).await?;
        info!("Emptied {} trash", E::NAME);
        Ok(())
    }
}
