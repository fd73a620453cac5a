//! Unit and service tests for the translation workflow.

mod gate_tests;
mod status_tests;

use crate::translation::domain::{
    PersistedTranslationData, Translation, TranslationId, TranslationStatus, UserId,
};
use chrono::Utc;

/// Builds a persisted record in an arbitrary lifecycle position.
pub(crate) fn record_with(
    status: TranslationStatus,
    translator: Option<UserId>,
    qa_reviewer: Option<UserId>,
) -> Translation {
    let timestamp = Utc::now();
    Translation::from_persisted(PersistedTranslationData {
        id: TranslationId::new(),
        original_text: "Das ist ein Test.".to_owned(),
        translated_text: None,
        status,
        translator,
        qa_reviewer,
        on_hold: false,
        qa_comment: None,
        mark: None,
        created_at: timestamp,
        updated_at: timestamp,
    })
}
