//! Repository port for translation record persistence and lookup.

use crate::translation::domain::{Translation, TranslationId, TranslationStatus, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for translation repository operations.
pub type TranslationRepositoryResult<T> = Result<T, TranslationRepositoryError>;

/// Number of records currently in a given status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCount {
    /// The status being counted.
    pub status: TranslationStatus,
    /// Number of records in that status.
    pub count: u64,
}

/// Translation persistence contract.
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Stores a new translation record.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationRepositoryError::DuplicateTranslation`] when the
    /// record ID already exists.
    async fn store(&self, translation: &Translation) -> TranslationRepositoryResult<()>;

    /// Persists changes to an existing translation record.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationRepositoryError::NotFound`] when the record does
    /// not exist.
    async fn update(&self, translation: &Translation) -> TranslationRepositoryResult<()>;

    /// Finds a record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn find_by_id(
        &self,
        id: TranslationId,
    ) -> TranslationRepositoryResult<Option<Translation>>;

    /// Lists records in creation order, optionally filtered by status.
    async fn list(
        &self,
        status: Option<TranslationStatus>,
    ) -> TranslationRepositoryResult<Vec<Translation>>;

    /// Counts the records currently assigned to the given translator.
    ///
    /// Feeds the claim-limit check in the update gate.
    async fn count_assigned_to(&self, translator: UserId) -> TranslationRepositoryResult<u64>;

    /// Returns per-status record counts for statuses with at least one
    /// record.
    async fn status_counts(&self) -> TranslationRepositoryResult<Vec<StatusCount>>;
}

/// Errors returned by translation repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TranslationRepositoryError {
    /// A record with the same identifier already exists.
    #[error("duplicate translation identifier: {0}")]
    DuplicateTranslation(TranslationId),

    /// The record was not found.
    #[error("translation not found: {0}")]
    NotFound(TranslationId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TranslationRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
