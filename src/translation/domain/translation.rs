//! Translation aggregate root and the role-gated status state machine.

use super::{
    Actor, AvailableAction, QaMark, Role, TranslationDomainError, TranslationId, TranslationStatus,
    UserId,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Translation record aggregate root.
///
/// A record starts in [`TranslationStatus::InQueue`] without assignments and
/// is mutated exclusively through the permission-checked methods below. Every
/// denied mutation leaves the aggregate untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    id: TranslationId,
    original_text: String,
    translated_text: Option<String>,
    status: TranslationStatus,
    translator: Option<UserId>,
    qa_reviewer: Option<UserId>,
    on_hold: bool,
    qa_comment: Option<String>,
    mark: Option<QaMark>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted translation record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTranslationData {
    /// Persisted record identifier.
    pub id: TranslationId,
    /// Persisted original text.
    pub original_text: String,
    /// Persisted translated text, if any.
    pub translated_text: Option<String>,
    /// Persisted lifecycle status.
    pub status: TranslationStatus,
    /// Persisted translator assignment, if any.
    pub translator: Option<UserId>,
    /// Persisted QA reviewer assignment, if any.
    pub qa_reviewer: Option<UserId>,
    /// Persisted hold flag.
    pub on_hold: bool,
    /// Persisted QA comment, if any.
    pub qa_comment: Option<String>,
    /// Persisted quality mark, if any.
    pub mark: Option<QaMark>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Field changes requested by a single update call.
///
/// Absent fields are left untouched. The whole update is validated against
/// the record's pre-update state before anything is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationUpdate {
    /// Status the client last saw; mismatch rejects the update as stale.
    pub from_status: Option<TranslationStatus>,
    /// Requested target status.
    pub status: Option<TranslationStatus>,
    /// New translated text.
    pub translated_text: Option<String>,
    /// New QA comment.
    pub qa_comment: Option<String>,
    /// New hold flag value.
    pub on_hold: Option<bool>,
}

impl Translation {
    /// Creates a new queued, unassigned translation record.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationDomainError::EmptyOriginalText`] when the
    /// original text is empty after trimming.
    pub fn new(
        original_text: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, TranslationDomainError> {
        let text = original_text.into();
        if text.trim().is_empty() {
            return Err(TranslationDomainError::EmptyOriginalText);
        }

        let timestamp = clock.utc();
        Ok(Self {
            id: TranslationId::new(),
            original_text: text,
            translated_text: None,
            status: TranslationStatus::InQueue,
            translator: None,
            qa_reviewer: None,
            on_hold: false,
            qa_comment: None,
            mark: None,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a translation record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTranslationData) -> Self {
        Self {
            id: data.id,
            original_text: data.original_text,
            translated_text: data.translated_text,
            status: data.status,
            translator: data.translator,
            qa_reviewer: data.qa_reviewer,
            on_hold: data.on_hold,
            qa_comment: data.qa_comment,
            mark: data.mark,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> TranslationId {
        self.id
    }

    /// Returns the original text.
    #[must_use]
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// Returns the translated text, if any.
    #[must_use]
    pub fn translated_text(&self) -> Option<&str> {
        self.translated_text.as_deref()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TranslationStatus {
        self.status
    }

    /// Returns the assigned translator, if any.
    #[must_use]
    pub const fn translator(&self) -> Option<UserId> {
        self.translator
    }

    /// Returns the assigned QA reviewer, if any.
    #[must_use]
    pub const fn qa_reviewer(&self) -> Option<UserId> {
        self.qa_reviewer
    }

    /// Returns the hold flag.
    #[must_use]
    pub const fn on_hold(&self) -> bool {
        self.on_hold
    }

    /// Returns the QA comment, if any.
    #[must_use]
    pub fn qa_comment(&self) -> Option<&str> {
        self.qa_comment.as_deref()
    }

    /// Returns the quality mark, if any.
    #[must_use]
    pub const fn mark(&self) -> Option<QaMark> {
        self.mark
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when the actor is the assigned translator.
    #[must_use]
    pub fn is_assigned_translator(&self, actor: &Actor) -> bool {
        self.translator == Some(actor.id())
    }

    /// Returns `true` when the actor is the assigned QA reviewer.
    #[must_use]
    pub fn is_assigned_reviewer(&self, actor: &Actor) -> bool {
        self.qa_reviewer == Some(actor.id())
    }

    /// Returns `true` when the actor may move this record to `to`.
    ///
    /// The permitted edges are:
    ///
    /// - translator: `InQueue -> InProgress` (claim); the assigned
    ///   translator additionally `InProgress -> ReadyForQa` and
    ///   `InProgress -> InQueue`
    /// - QA: `ReadyForQa -> InCheck` and `ReadyForQa -> InQueue`; the
    ///   assigned reviewer additionally `InCheck -> Checked` and
    ///   `InCheck -> InQueue`
    #[must_use]
    pub fn can_move_to(&self, actor: &Actor, to: TranslationStatus) -> bool {
        match actor.role() {
            Role::Translator => self.translator_edge(actor, to),
            Role::Qa => self.qa_edge(actor, to),
        }
    }

    fn translator_edge(&self, actor: &Actor, to: TranslationStatus) -> bool {
        match (self.status, to) {
            (TranslationStatus::InQueue, TranslationStatus::InProgress) => true,
            (
                TranslationStatus::InProgress,
                TranslationStatus::ReadyForQa | TranslationStatus::InQueue,
            ) => self.is_assigned_translator(actor),
            _ => false,
        }
    }

    fn qa_edge(&self, actor: &Actor, to: TranslationStatus) -> bool {
        match (self.status, to) {
            (
                TranslationStatus::ReadyForQa,
                TranslationStatus::InCheck | TranslationStatus::InQueue,
            ) => true,
            (TranslationStatus::InCheck, TranslationStatus::Checked | TranslationStatus::InQueue) => {
                self.is_assigned_reviewer(actor)
            }
            _ => false,
        }
    }

    /// Returns `true` when the actor may edit the translated text.
    #[must_use]
    pub fn can_translate(&self, actor: &Actor) -> bool {
        actor.is_translator()
            && self.is_assigned_translator(actor)
            && self.status == TranslationStatus::InProgress
    }

    /// Returns `true` when the actor may add a QA comment.
    ///
    /// QA reviewers may comment on any record awaiting review; once a record
    /// is claimed for checking, only the assigned reviewer may comment.
    #[must_use]
    pub fn can_add_qa_comment(&self, actor: &Actor) -> bool {
        if !actor.is_qa() {
            return false;
        }
        match self.status {
            TranslationStatus::ReadyForQa => true,
            TranslationStatus::InCheck => self.is_assigned_reviewer(actor),
            _ => false,
        }
    }

    /// Returns `true` when the actor may record a quality mark.
    #[must_use]
    pub fn can_set_mark(&self, actor: &Actor) -> bool {
        actor.is_qa() && self.status == TranslationStatus::Checked
    }

    /// Lists the actions the actor may perform on this record.
    #[must_use]
    pub fn available_actions(&self, actor: &Actor) -> Vec<AvailableAction> {
        let mut actions: Vec<AvailableAction> = TranslationStatus::ALL
            .into_iter()
            .filter(|&to| self.can_move_to(actor, to))
            .map(AvailableAction::change_status)
            .collect();
        if self.can_translate(actor) {
            actions.push(AvailableAction::translate());
        }
        if self.can_add_qa_comment(actor) {
            actions.push(AvailableAction::qa_comment());
        }
        actions
    }

    /// Moves this record to `to` on behalf of `actor`, applying the
    /// assignment side effects of the transition.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationDomainError::StatusChangeDenied`] when the
    /// transition is not a permitted role-gated edge.
    pub fn move_to_status(
        &mut self,
        actor: &Actor,
        to: TranslationStatus,
        clock: &impl Clock,
    ) -> Result<(), TranslationDomainError> {
        if !self.can_move_to(actor, to) {
            return Err(TranslationDomainError::StatusChangeDenied {
                id: self.id,
                from: self.status,
                to,
            });
        }
        self.transition(actor, to);
        self.touch(clock);
        Ok(())
    }

    /// Replaces the translated text on behalf of `actor`.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationDomainError::TranslationEditDenied`] when the
    /// actor is not the assigned translator of an in-progress record.
    pub fn set_translation(
        &mut self,
        actor: &Actor,
        text: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), TranslationDomainError> {
        if !self.can_translate(actor) {
            return Err(TranslationDomainError::TranslationEditDenied(self.id));
        }
        self.translated_text = Some(text.into());
        self.touch(clock);
        Ok(())
    }

    /// Replaces the QA comment on behalf of `actor`.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationDomainError::QaCommentDenied`] when the actor may
    /// not comment on this record.
    pub fn set_qa_comment(
        &mut self,
        actor: &Actor,
        comment: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), TranslationDomainError> {
        if !self.can_add_qa_comment(actor) {
            return Err(TranslationDomainError::QaCommentDenied(self.id));
        }
        self.qa_comment = Some(comment.into());
        self.touch(clock);
        Ok(())
    }

    /// Records a quality mark on behalf of `actor`.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationDomainError::MarkDenied`] when the actor may not
    /// mark this record.
    pub fn set_mark(
        &mut self,
        actor: &Actor,
        mark: QaMark,
        clock: &impl Clock,
    ) -> Result<(), TranslationDomainError> {
        if !self.can_set_mark(actor) {
            return Err(TranslationDomainError::MarkDenied(self.id));
        }
        self.mark = Some(mark);
        self.touch(clock);
        Ok(())
    }

    /// Sets the hold flag.
    pub fn set_on_hold(&mut self, on_hold: bool, clock: &impl Clock) {
        self.on_hold = on_hold;
        self.touch(clock);
    }

    /// Applies a combined field update on behalf of `actor`.
    ///
    /// Every requested change is validated against the record's pre-update
    /// state before anything is applied, so a combined update never half
    /// succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationDomainError::StatusOutdated`] when `from_status`
    /// no longer matches the record, or the relevant permission error when
    /// any requested change is denied.
    pub fn apply_update(
        &mut self,
        actor: &Actor,
        update: &TranslationUpdate,
        clock: &impl Clock,
    ) -> Result<(), TranslationDomainError> {
        if let Some(expected) = update.from_status
            && expected != self.status
        {
            return Err(TranslationDomainError::StatusOutdated {
                id: self.id,
                expected,
                actual: self.status,
            });
        }
        if let Some(to) = update.status
            && !self.can_move_to(actor, to)
        {
            return Err(TranslationDomainError::StatusChangeDenied {
                id: self.id,
                from: self.status,
                to,
            });
        }
        if update.translated_text.is_some() && !self.can_translate(actor) {
            return Err(TranslationDomainError::TranslationEditDenied(self.id));
        }
        if update.qa_comment.is_some() && !self.can_add_qa_comment(actor) {
            return Err(TranslationDomainError::QaCommentDenied(self.id));
        }

        if let Some(text) = &update.translated_text {
            self.translated_text = Some(text.clone());
        }
        if let Some(comment) = &update.qa_comment {
            self.qa_comment = Some(comment.clone());
        }
        if let Some(on_hold) = update.on_hold {
            self.on_hold = on_hold;
        }
        if let Some(to) = update.status {
            self.transition(actor, to);
        }
        self.touch(clock);
        Ok(())
    }

    /// Sets the status and applies the role-specific assignment side effects.
    ///
    /// Callers must have validated the edge beforehand.
    fn transition(&mut self, actor: &Actor, to: TranslationStatus) {
        self.status = to;
        match actor.role() {
            Role::Translator => {
                if to == TranslationStatus::InQueue {
                    self.translator = None;
                } else {
                    self.translator = Some(actor.id());
                }
            }
            Role::Qa => {
                if matches!(to, TranslationStatus::InQueue | TranslationStatus::Checked) {
                    self.translator = None;
                } else {
                    self.qa_reviewer = Some(actor.id());
                }
            }
        }
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
