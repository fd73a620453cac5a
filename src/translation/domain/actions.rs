//! Actions a given actor may perform on a translation record.
//!
//! API consumers render these alongside each record so clients never have to
//! duplicate the permission rules.

use super::TranslationStatus;
use serde::Serialize;

/// Kind of action offered to the acting user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Move the record to the accompanying target status.
    ChangeStatus,
    /// Edit the translated text.
    Translate,
    /// Add a QA comment.
    QaComment,
}

/// A single permitted action with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AvailableAction {
    /// Target status for status-change actions, `None` otherwise.
    pub status: Option<TranslationStatus>,
    /// Human-readable label for the action.
    pub display: &'static str,
    /// Action discriminator.
    pub action: ActionKind,
}

impl AvailableAction {
    /// Builds a status-change action labelled with the target's display name.
    #[must_use]
    pub const fn change_status(to: TranslationStatus) -> Self {
        Self {
            status: Some(to),
            display: to.display_name(),
            action: ActionKind::ChangeStatus,
        }
    }

    /// Builds the translated-text edit action.
    #[must_use]
    pub const fn translate() -> Self {
        Self {
            status: None,
            display: "Translate",
            action: ActionKind::Translate,
        }
    }

    /// Builds the QA comment action.
    #[must_use]
    pub const fn qa_comment() -> Self {
        Self {
            status: None,
            display: "Add QA Comment",
            action: ActionKind::QaComment,
        }
    }
}
