//! Unit tests for status parsing and wire codes.

use crate::translation::domain::{ParseStatusError, TranslationStatus};
use rstest::rstest;

#[rstest]
#[case(TranslationStatus::InQueue, "in_queue", 0, "In Queue")]
#[case(TranslationStatus::InProgress, "in_progress", 1, "In Progress")]
#[case(TranslationStatus::ReadyForQa, "ready_for_qa", 2, "Ready for QA")]
#[case(TranslationStatus::InCheck, "in_check", 3, "In Check")]
#[case(TranslationStatus::Checked, "checked", 4, "Checked")]
fn status_representations_are_consistent(
    #[case] status: TranslationStatus,
    #[case] storage: &str,
    #[case] code: i16,
    #[case] display: &str,
) {
    assert_eq!(status.as_str(), storage);
    assert_eq!(status.code(), code);
    assert_eq!(status.display_name(), display);
    assert_eq!(TranslationStatus::try_from(storage), Ok(status));
    assert_eq!(TranslationStatus::from_code(code), Ok(status));
}

#[rstest]
fn status_parse_normalizes_case_and_whitespace() {
    assert_eq!(
        TranslationStatus::try_from("  In_Queue "),
        Ok(TranslationStatus::InQueue)
    );
}

#[rstest]
fn status_parse_rejects_unknown_values() {
    assert_eq!(
        TranslationStatus::try_from("archived"),
        Err(ParseStatusError("archived".to_owned()))
    );
    assert_eq!(
        TranslationStatus::from_code(9),
        Err(ParseStatusError("9".to_owned()))
    );
}

#[rstest]
fn all_statuses_are_listed_in_code_order() {
    let codes: Vec<i16> = TranslationStatus::ALL
        .into_iter()
        .map(TranslationStatus::code)
        .collect();
    assert_eq!(codes, vec![0, 1, 2, 3, 4]);
}
