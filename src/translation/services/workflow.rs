//! Service layer carrying the update-endpoint semantics.

use crate::translation::{
    domain::{
        Actor, QaMark, Translation, TranslationDomainError, TranslationId, TranslationStatus,
        TranslationUpdate, permits_update_attempt,
    },
    ports::{TranslationRepository, TranslationRepositoryError},
    services::TranslationView,
};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a translation record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTranslationRequest {
    original_text: String,
}

impl CreateTranslationRequest {
    /// Creates a request from the text to translate.
    #[must_use]
    pub fn new(original_text: impl Into<String>) -> Self {
        Self {
            original_text: original_text.into(),
        }
    }
}

/// Request payload for updating a translation record.
///
/// Only the fields set on the request are touched; the optimistic
/// `from_status` check rejects the update when the client's view of the
/// record has gone stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTranslationRequest {
    id: TranslationId,
    update: TranslationUpdate,
}

impl UpdateTranslationRequest {
    /// Creates an empty update request for the given record.
    #[must_use]
    pub fn new(id: TranslationId) -> Self {
        Self {
            id,
            update: TranslationUpdate::default(),
        }
    }

    /// Sets the status the client last saw.
    #[must_use]
    pub const fn with_from_status(mut self, from_status: TranslationStatus) -> Self {
        self.update.from_status = Some(from_status);
        self
    }

    /// Requests a status change.
    #[must_use]
    pub const fn with_status(mut self, status: TranslationStatus) -> Self {
        self.update.status = Some(status);
        self
    }

    /// Requests a translated-text change.
    #[must_use]
    pub fn with_translated_text(mut self, text: impl Into<String>) -> Self {
        self.update.translated_text = Some(text.into());
        self
    }

    /// Requests a QA comment change.
    #[must_use]
    pub fn with_qa_comment(mut self, comment: impl Into<String>) -> Self {
        self.update.qa_comment = Some(comment.into());
        self
    }

    /// Requests a hold flag change.
    #[must_use]
    pub const fn with_on_hold(mut self, on_hold: bool) -> Self {
        self.update.on_hold = Some(on_hold);
        self
    }
}

/// Per-status record count with its display name, for dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    /// The summarized status.
    pub status: TranslationStatus,
    /// Human-readable status name.
    pub display: &'static str,
    /// Number of records in the status.
    pub count: u64,
}

/// Service-level errors for translation workflow operations.
#[derive(Debug, Error)]
pub enum TranslationWorkflowError {
    /// Domain validation or permission check failed.
    #[error(transparent)]
    Domain(#[from] TranslationDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TranslationRepositoryError),
    /// The record does not exist.
    #[error("translation not found: {0}")]
    NotFound(TranslationId),
    /// The actor may not attempt an update on this record.
    #[error("permission denied for update on translation {0}")]
    UpdateDenied(TranslationId),
    /// The actor may not view translation records.
    #[error("permission denied for viewing translation records")]
    ViewDenied,
}

/// Result type for translation workflow service operations.
pub type TranslationWorkflowResult<T> = Result<T, TranslationWorkflowError>;

/// Translation workflow orchestration service.
#[derive(Clone)]
pub struct TranslationWorkflowService<R, C>
where
    R: TranslationRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TranslationWorkflowService<R, C>
where
    R: TranslationRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new translation workflow service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and stores a new queued translation record.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationWorkflowError`] when the original text is empty
    /// or the repository rejects persistence.
    pub async fn create(
        &self,
        request: CreateTranslationRequest,
    ) -> TranslationWorkflowResult<Translation> {
        let translation = Translation::new(request.original_text, &*self.clock)?;
        self.repository.store(&translation).await?;
        Ok(translation)
    }

    /// Retrieves a record as seen by the acting user.
    ///
    /// Returns `Ok(None)` when the record does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationWorkflowError::ViewDenied`] when the actor lacks
    /// the view permission and [`TranslationWorkflowError::Repository`] when
    /// the lookup fails.
    pub async fn get(
        &self,
        actor: &Actor,
        id: TranslationId,
    ) -> TranslationWorkflowResult<Option<TranslationView>> {
        Self::ensure_viewer(actor)?;
        let translation = self.repository.find_by_id(id).await?;
        Ok(translation.map(|record| TranslationView::for_actor(&record, actor)))
    }

    /// Lists records as seen by the acting user, optionally filtered by
    /// status.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationWorkflowError::ViewDenied`] when the actor lacks
    /// the view permission and [`TranslationWorkflowError::Repository`] when
    /// the lookup fails.
    pub async fn list(
        &self,
        actor: &Actor,
        status: Option<TranslationStatus>,
    ) -> TranslationWorkflowResult<Vec<TranslationView>> {
        Self::ensure_viewer(actor)?;
        let translations = self.repository.list(status).await?;
        Ok(translations
            .iter()
            .map(|record| TranslationView::for_actor(record, actor))
            .collect())
    }

    /// Applies a field update to a record on behalf of the acting user.
    ///
    /// The object-level gate runs first: QA reviewers may always attempt an
    /// update, translators only within the claim limit and on records they
    /// hold or may claim. Field-level permission checks and the optimistic
    /// `from_status` check follow, and only a fully permitted update is
    /// persisted.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationWorkflowError::NotFound`] for unknown records,
    /// [`TranslationWorkflowError::UpdateDenied`] when the object-level gate
    /// rejects the actor, and [`TranslationWorkflowError::Domain`] when a
    /// field-level check fails.
    pub async fn update(
        &self,
        actor: &Actor,
        request: UpdateTranslationRequest,
    ) -> TranslationWorkflowResult<TranslationView> {
        let mut translation = self.load(request.id).await?;

        let assigned_count = if actor.is_translator() {
            self.repository.count_assigned_to(actor.id()).await?
        } else {
            0
        };
        if !permits_update_attempt(actor, &translation, assigned_count) {
            return Err(TranslationWorkflowError::UpdateDenied(request.id));
        }

        translation.apply_update(actor, &request.update, &*self.clock)?;
        self.repository.update(&translation).await?;
        Ok(TranslationView::for_actor(&translation, actor))
    }

    /// Records a quality mark against a checked record.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationWorkflowError::NotFound`] for unknown records
    /// and [`TranslationWorkflowError::Domain`] when the mark value or the
    /// actor's permission is invalid.
    pub async fn mark(
        &self,
        actor: &Actor,
        id: TranslationId,
        value: u8,
    ) -> TranslationWorkflowResult<TranslationView> {
        let mark = QaMark::new(value)?;
        let mut translation = self.load(id).await?;
        translation.set_mark(actor, mark, &*self.clock)?;
        self.repository.update(&translation).await?;
        Ok(TranslationView::for_actor(&translation, actor))
    }

    /// Summarizes record counts per status, sorted by wire code.
    ///
    /// Only statuses with at least one record appear.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationWorkflowError::ViewDenied`] when the actor lacks
    /// the view permission and [`TranslationWorkflowError::Repository`] when
    /// the count query fails.
    pub async fn status_dashboard(
        &self,
        actor: &Actor,
    ) -> TranslationWorkflowResult<Vec<StatusSummary>> {
        Self::ensure_viewer(actor)?;
        let mut counts = self.repository.status_counts().await?;
        counts.sort_by_key(|entry| entry.status.code());
        Ok(counts
            .into_iter()
            .map(|entry| StatusSummary {
                status: entry.status,
                display: entry.status.display_name(),
                count: entry.count,
            })
            .collect())
    }

    const fn ensure_viewer(actor: &Actor) -> TranslationWorkflowResult<()> {
        if actor.can_view() {
            Ok(())
        } else {
            Err(TranslationWorkflowError::ViewDenied)
        }
    }

    async fn load(&self, id: TranslationId) -> TranslationWorkflowResult<Translation> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TranslationWorkflowError::NotFound(id))
    }
}
