//! Actor-specific serialized view of a translation record.

use crate::translation::domain::{
    Actor, AvailableAction, QaMark, Translation, TranslationId, TranslationStatus, UserId,
};
use serde::Serialize;

/// Serialized projection of a translation record for API consumers.
///
/// The view is computed per actor: `available_actions` lists exactly the
/// operations the acting user may perform, and the hold flag is omitted from
/// the serialized form unless the record is actually on hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationView {
    /// Record identifier.
    pub id: TranslationId,
    /// Original text.
    pub original_text: String,
    /// Translated text, if any.
    pub translated_text: Option<String>,
    /// Lifecycle status.
    pub status: TranslationStatus,
    /// QA comment, if any.
    pub qa_comment: Option<String>,
    /// Quality mark, if any.
    pub mark: Option<QaMark>,
    /// Hold flag, serialized only when set.
    #[serde(skip_serializing_if = "is_false")]
    pub on_hold: bool,
    /// Assigned translator, if any.
    pub translator: Option<UserId>,
    /// Assigned QA reviewer, if any.
    pub qa_reviewer: Option<UserId>,
    /// Actions the acting user may perform on this record.
    pub available_actions: Vec<AvailableAction>,
}

impl TranslationView {
    /// Builds the view of `translation` as seen by `actor`.
    #[must_use]
    pub fn for_actor(translation: &Translation, actor: &Actor) -> Self {
        Self {
            id: translation.id(),
            original_text: translation.original_text().to_owned(),
            translated_text: translation.translated_text().map(str::to_owned),
            status: translation.status(),
            qa_comment: translation.qa_comment().map(str::to_owned),
            mark: translation.mark(),
            on_hold: translation.on_hold(),
            translator: translation.translator(),
            qa_reviewer: translation.qa_reviewer(),
            available_actions: translation.available_actions(actor),
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
