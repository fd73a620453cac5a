//! In-memory repository for translation workflow tests.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use crate::translation::{
    domain::{Translation, TranslationId, TranslationStatus, UserId},
    ports::{
        StatusCount, TranslationRepository, TranslationRepositoryError,
        TranslationRepositoryResult,
    },
};

/// Thread-safe in-memory translation repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTranslationRepository {
    state: Arc<RwLock<HashMap<TranslationId, Translation>>>,
}

impl InMemoryTranslationRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(
        &self,
    ) -> TranslationRepositoryResult<std::sync::RwLockReadGuard<'_, HashMap<TranslationId, Translation>>>
    {
        self.state.read().map_err(|err| {
            TranslationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(
        &self,
    ) -> TranslationRepositoryResult<
        std::sync::RwLockWriteGuard<'_, HashMap<TranslationId, Translation>>,
    > {
        self.state.write().map_err(|err| {
            TranslationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TranslationRepository for InMemoryTranslationRepository {
    async fn store(&self, translation: &Translation) -> TranslationRepositoryResult<()> {
        let mut state = self.write()?;
        if state.contains_key(&translation.id()) {
            return Err(TranslationRepositoryError::DuplicateTranslation(
                translation.id(),
            ));
        }
        state.insert(translation.id(), translation.clone());
        Ok(())
    }

    async fn update(&self, translation: &Translation) -> TranslationRepositoryResult<()> {
        let mut state = self.write()?;
        if !state.contains_key(&translation.id()) {
            return Err(TranslationRepositoryError::NotFound(translation.id()));
        }
        state.insert(translation.id(), translation.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: TranslationId,
    ) -> TranslationRepositoryResult<Option<Translation>> {
        let state = self.read()?;
        Ok(state.get(&id).cloned())
    }

    async fn list(
        &self,
        status: Option<TranslationStatus>,
    ) -> TranslationRepositoryResult<Vec<Translation>> {
        let state = self.read()?;
        let mut records: Vec<Translation> = state
            .values()
            .filter(|record| status.is_none_or(|wanted| record.status() == wanted))
            .cloned()
            .collect();
        records.sort_by_key(|record| (record.created_at(), record.id().into_inner()));
        Ok(records)
    }

    async fn count_assigned_to(&self, translator: UserId) -> TranslationRepositoryResult<u64> {
        let state = self.read()?;
        let count = state
            .values()
            .filter(|record| record.translator() == Some(translator))
            .count();
        u64::try_from(count).map_err(TranslationRepositoryError::persistence)
    }

    async fn status_counts(&self) -> TranslationRepositoryResult<Vec<StatusCount>> {
        let state = self.read()?;
        let mut counts: BTreeMap<i16, StatusCount> = BTreeMap::new();
        for record in state.values() {
            counts
                .entry(record.status().code())
                .and_modify(|entry| entry.count += 1)
                .or_insert(StatusCount {
                    status: record.status(),
                    count: 1,
                });
        }
        Ok(counts.into_values().collect())
    }
}
