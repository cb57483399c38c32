//! Admin create/update form - generic over the per-entity field set.

use super::messages;
use super::rows::AdminResource;
use crate::core::{EntityService, Payload};
use crate::entities::Resource;
use crate::errors::{Error, Result};
use crate::pages::PageContext;
use crate::ui::ViewState;
use async_trait::async_trait;
use tracing::{error, info, warn};

/// Field set of one entity's form.
#[async_trait]
pub trait EntityForm: Default + Send + Sync {
    /// Entity the form edits
    type Entity: AdminResource;
    /// Choices the form needs (parents, topics, categories)
    type Options: Default + Send + Sync;

    /// Fetches the choices. `editing` is the id in update mode.
    async fn load_options(ctx: &PageContext, editing: Option<i64>) -> Result<Self::Options>;

    /// Pre-fills the fields from an existing record.
    fn from_entity(entity: &Self::Entity) -> Self;

    /// Whether the required fields are filled in.
    fn is_complete(&self) -> bool;

    /// Request body.
    fn payload(&self) -> Payload;
}

/// Whether the form creates a record or edits one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// New record
    Create,
    /// Existing record
    Update(i64),
}

/// Create/update page for form `F`.
pub struct FormPage<F: EntityForm> {
    ctx: PageContext,
    service: EntityService<F::Entity>,
    mode: FormMode,
    state: ViewState<()>,
    form: F,
    options: F::Options,
    error: Option<String>,
}

impl<F: EntityForm> FormPage<F> {
    /// Create form.
    #[must_use]
    pub fn create(ctx: PageContext) -> Self {
        Self::new(ctx, FormMode::Create)
    }

    /// Update form for record `id`.
    #[must_use]
    pub fn update(ctx: PageContext, id: i64) -> Self {
        Self::new(ctx, FormMode::Update(id))
    }

    fn new(ctx: PageContext, mode: FormMode) -> Self {
        Self {
            service: ctx.service(),
            ctx,
            mode,
            state: ViewState::Loading,
            form: F::default(),
            options: F::Options::default(),
            error: None,
        }
    }

    /// Fetches the options and, in update mode, the record to edit.
    pub async fn load(&mut self) {
        let result = match self.mode {
            FormMode::Create => F::load_options(&self.ctx, None)
                .await
                .map(|options| (options, None)),
            FormMode::Update(id) => {
                tokio::try_join!(F::load_options(&self.ctx, Some(id)), self.service.detail(id))
                    .map(|(options, entity)| (options, Some(entity)))
            }
        };

        match result {
            Ok((options, entity)) => {
                self.options = options;
                if let Some(entity) = entity {
                    self.form = F::from_entity(&entity);
                }
                self.state = ViewState::Ready(());
            }
            Err(e) => {
                error!("Error loading {} form: {}", F::Entity::NAME, e);
                self.state = ViewState::Failed(messages::LOAD_FORM_FAILED.to_string());
            }
        }
    }

    /// Mode of the form.
    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    /// Loading gate.
    #[must_use]
    pub const fn state(&self) -> &ViewState<()> {
        &self.state
    }

    /// Current field values.
    #[must_use]
    pub const fn form(&self) -> &F {
        &self.form
    }

    /// Field values for editing.
    pub const fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    /// Loaded choices.
    #[must_use]
    pub const fn options(&self) -> &F::Options {
        &self.options
    }

    /// Inline error banner.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Checks the required fields.
    ///
    /// # Errors
    /// Returns `Error::Validation` when a required field is empty.
    pub fn validate(&self) -> Result<()> {
        if self.form.is_complete() {
            Ok(())
        } else {
            Err(Error::Validation(messages::REQUIRED_FIELDS.to_string()))
        }
    }

    /// Validates and submits. Returns whether the record was saved.
    ///
    /// Missing required fields block the request. On success the user is
    /// told and sent back to the list; on failure the fields stay as typed.
    pub async fn submit(&mut self) -> bool {
        self.error = None;
        if let Err(e) = self.validate() {
            warn!("{} form rejected: {}", F::Entity::NAME, e);
            self.error = Some(messages::REQUIRED_FIELDS.to_string());
            return false;
        }

        let noun = F::Entity::NOUN;
        let payload = self.form.payload();
        let (result, success, failure) = match self.mode {
            FormMode::Create => (
                self.service.create(payload).await,
                messages::created(noun),
                messages::create_failed(noun),
            ),
            FormMode::Update(id) => (
                self.service.update(id, payload).await,
                messages::updated(noun),
                messages::update_failed(noun),
            ),
        };

        match result {
            Ok(_) => {
                info!("Saved {} from form", F::Entity::NAME);
                self.ctx.alert(&success);
                self.ctx.navigator.navigate(F::Entity::ADMIN_ROUTE);
                true
            }
            Err(e) => {
                error!("Error saving {}: {}", F::Entity::NAME, e);
                self.error = Some(failure);
                false
            }
        }
    }

    /// Leaves without saving.
    pub fn cancel(&self) {
        self.ctx.navigator.navigate(F::Entity::ADMIN_ROUTE);
    }
}
