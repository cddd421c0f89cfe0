//! Form controllers for creating startup and investor profiles.
//!
//! A [`FormController`] owns one draft. Submitting validates the draft,
//! normalizes it and calls the matching gateway create operation. Once the
//! request settles the draft is reset; only a success notifies the parent.
//! Only one submission may be in flight per form.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use novamatch_core::error::{NovaError, Result};
use novamatch_core::gateway::RemoteGateway;
use novamatch_core::profile::{CreatedRecord, InvestorDraft, NewInvestor, NewStartup, StartupDraft};
use tokio::sync::Mutex;

/// Called with the backend identity of a newly created record.
pub type OnCreated = Arc<dyn Fn(String) + Send + Sync>;

/// A draft a [`FormController`] knows how to submit.
#[async_trait]
pub trait DraftForm: Clone + Default + PartialEq + Send + Sync + 'static {
    type Payload: Send + Sync;

    /// Name used in logs.
    const ENTITY: &'static str;

    fn validate(&self) -> Result<()>;

    fn normalize(&self) -> Self::Payload;

    async fn create(gateway: &dyn RemoteGateway, payload: &Self::Payload) -> Result<CreatedRecord>;
}

#[async_trait]
impl DraftForm for StartupDraft {
    type Payload = NewStartup;
    const ENTITY: &'static str = "startup";

    fn validate(&self) -> Result<()> {
        StartupDraft::validate(self)
    }

    fn normalize(&self) -> NewStartup {
        StartupDraft::normalize(self)
    }

    async fn create(gateway: &dyn RemoteGateway, payload: &NewStartup) -> Result<CreatedRecord> {
        gateway.create_startup(payload).await
    }
}

#[async_trait]
impl DraftForm for InvestorDraft {
    type Payload = NewInvestor;
    const ENTITY: &'static str = "investor";

    fn validate(&self) -> Result<()> {
        InvestorDraft::validate(self)
    }

    fn normalize(&self) -> NewInvestor {
        InvestorDraft::normalize(self)
    }

    async fn create(gateway: &dyn RemoteGateway, payload: &NewInvestor) -> Result<CreatedRecord> {
        gateway.create_investor(payload).await
    }
}

pub type StartupForm = FormController<StartupDraft>;
pub type InvestorForm = FormController<InvestorDraft>;

pub struct FormController<D: DraftForm> {
    gateway: Arc<dyn RemoteGateway>,
    draft: Mutex<D>,
    pending: AtomicBool,
    on_created: Option<OnCreated>,
}

/// Clears the pending flag when the submission ends, even if it is dropped.
struct PendingGuard<'a>(&'a AtomicBool);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl<D: DraftForm> FormController<D> {
    pub fn new(gateway: Arc<dyn RemoteGateway>) -> Self {
        Self {
            gateway,
            draft: Mutex::new(D::default()),
            pending: AtomicBool::new(false),
            on_created: None,
        }
    }

    /// Sets the callback invoked after a successful create.
    pub fn with_on_created(mut self, on_created: OnCreated) -> Self {
        self.on_created = Some(on_created);
        self
    }

    /// Returns a copy of the current draft.
    pub async fn draft(&self) -> D {
        self.draft.lock().await.clone()
    }

    /// Edits the draft in place.
    pub async fn update(&self, edit: impl FnOnce(&mut D)) {
        edit(&mut *self.draft.lock().await);
    }

    /// True while a submission is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    /// Submits the current draft and returns the new record's identity.
    ///
    /// Drafts failing validation, and submits while another is pending, are
    /// rejected without any request. Once dispatched, the draft is reset
    /// whether or not the create succeeds.
    pub async fn submit(&self) -> Result<String> {
        let draft = self.draft().await;
        draft.validate()?;

        if self.pending.swap(true, Ordering::SeqCst) {
            return Err(NovaError::validation(format!(
                "a {} submission is already in progress",
                D::ENTITY
            )));
        }
        let _pending = PendingGuard(&self.pending);

        let payload = draft.normalize();
        let outcome = D::create(self.gateway.as_ref(), &payload).await;
        *self.draft.lock().await = D::default();
        match outcome {
            Ok(CreatedRecord { id }) => {
                tracing::info!(entity = D::ENTITY, %id, "Created profile");
                if let Some(on_created) = &self.on_created {
                    on_created(id.clone());
                }
                Ok(id)
            }
            Err(e) => {
                tracing::error!(entity = D::ENTITY, error = %e, "Failed to create profile");
                Err(e)
            }
        }
    }
}
