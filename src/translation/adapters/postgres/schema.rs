//! Diesel schema for translation persistence.

diesel::table! {
    /// Translation workflow records.
    translations (id) {
        /// Record identifier.
        id -> Uuid,
        /// Original text.
        original_text -> Text,
        /// Translated text, if submitted.
        translated_text -> Nullable<Text>,
        /// Lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Assigned translator, if any.
        translator -> Nullable<Uuid>,
        /// Assigned QA reviewer, if any.
        qa_reviewer -> Nullable<Uuid>,
        /// Hold flag.
        on_hold -> Bool,
        /// QA comment, if any.
        qa_comment -> Nullable<Text>,
        /// Quality mark, if recorded.
        mark -> Nullable<SmallInt>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
