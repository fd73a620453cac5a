//! Error types for translation domain validation and parsing.

use super::{TranslationId, TranslationStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating domain translation values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranslationDomainError {
    /// The original text is empty after trimming.
    #[error("original text must not be empty")]
    EmptyOriginalText,

    /// The quality mark is outside the accepted range.
    #[error("invalid quality mark {0}, expected a value between 1 and 5")]
    InvalidMark(u8),

    /// The client's view of the record status no longer matches the record.
    #[error("status is outdated for translation {id}: expected {expected}, record is {actual}")]
    StatusOutdated {
        /// Identifier of the stale record.
        id: TranslationId,
        /// Status the client believed the record was in.
        expected: TranslationStatus,
        /// Status the record is actually in.
        actual: TranslationStatus,
    },

    /// The requested status change is not a permitted role-gated edge.
    #[error("permission denied for status change on translation {id}: {from} -> {to}")]
    StatusChangeDenied {
        /// Identifier of the record.
        id: TranslationId,
        /// Current record status.
        from: TranslationStatus,
        /// Requested target status.
        to: TranslationStatus,
    },

    /// The actor may not edit the translated text.
    #[error("permission denied for translation edit on translation {0}")]
    TranslationEditDenied(TranslationId),

    /// The actor may not add a QA comment.
    #[error("permission denied for QA comment on translation {0}")]
    QaCommentDenied(TranslationId),

    /// The actor may not record a quality mark.
    #[error("permission denied for quality mark on translation {0}")]
    MarkDenied(TranslationId),
}

/// Error returned while parsing translation statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown translation status: {0}")]
pub struct ParseStatusError(pub String);

/// Error returned while parsing workflow roles from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown workflow role: {0}")]
pub struct ParseRoleError(pub String);
