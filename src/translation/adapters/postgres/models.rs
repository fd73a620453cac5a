//! Diesel row models for translation persistence.

use super::schema::translations;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for translation records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = translations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TranslationRow {
    /// Record identifier.
    pub id: uuid::Uuid,
    /// Original text.
    pub original_text: String,
    /// Translated text, if submitted.
    pub translated_text: Option<String>,
    /// Lifecycle status storage string.
    pub status: String,
    /// Assigned translator, if any.
    pub translator: Option<uuid::Uuid>,
    /// Assigned QA reviewer, if any.
    pub qa_reviewer: Option<uuid::Uuid>,
    /// Hold flag.
    pub on_hold: bool,
    /// QA comment, if any.
    pub qa_comment: Option<String>,
    /// Quality mark, if recorded.
    pub mark: Option<i16>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for translation records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = translations)]
pub struct NewTranslationRow {
    /// Record identifier.
    pub id: uuid::Uuid,
    /// Original text.
    pub original_text: String,
    /// Translated text, if submitted.
    pub translated_text: Option<String>,
    /// Lifecycle status storage string.
    pub status: String,
    /// Assigned translator, if any.
    pub translator: Option<uuid::Uuid>,
    /// Assigned QA reviewer, if any.
    pub qa_reviewer: Option<uuid::Uuid>,
    /// Hold flag.
    pub on_hold: bool,
    /// QA comment, if any.
    pub qa_comment: Option<String>,
    /// Quality mark, if recorded.
    pub mark: Option<i16>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset writing every mutable column, clearing nullable columns when
/// the domain value is absent.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = translations)]
#[diesel(treat_none_as_null = true)]
pub struct TranslationChangeset {
    /// Translated text, if submitted.
    pub translated_text: Option<String>,
    /// Lifecycle status storage string.
    pub status: String,
    /// Assigned translator, if any.
    pub translator: Option<uuid::Uuid>,
    /// Assigned QA reviewer, if any.
    pub qa_reviewer: Option<uuid::Uuid>,
    /// Hold flag.
    pub on_hold: bool,
    /// QA comment, if any.
    pub qa_comment: Option<String>,
    /// Quality mark, if recorded.
    pub mark: Option<i16>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
