//! Behavioural integration tests for [`InMemoryTranslationRepository`].
//!
//! These tests exercise the in-memory repository in realistic higher-level
//! flows, verifying that it correctly implements the repository contract
//! when used in translation workflow scenarios.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use conveyor::translation::{
    adapters::memory::InMemoryTranslationRepository,
    domain::{Actor, Role, Translation, TranslationId, TranslationStatus, UserId},
    ports::{TranslationRepository, TranslationRepositoryError},
};
use mockable::DefaultClock;
use tokio::runtime::Runtime;

/// Creates a tokio runtime for async operations in tests.
fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

/// Walks a record through the full lifecycle against the repository,
/// verifying that each persisted step round-trips.
#[test]
fn complete_workflow_through_repository() {
    let rt = test_runtime();
    let repo = InMemoryTranslationRepository::new();
    let clock = DefaultClock;
    let translator = Actor::new(UserId::new(), Role::Translator);
    let reviewer = Actor::new(UserId::new(), Role::Qa);

    let mut record = Translation::new("Es regnet.", &clock).expect("valid record");
    rt.block_on(repo.store(&record)).expect("store record");

    // Translator claims and translates.
    record
        .move_to_status(&translator, TranslationStatus::InProgress, &clock)
        .expect("claim");
    record
        .set_translation(&translator, "It is raining.", &clock)
        .expect("translate");
    record
        .move_to_status(&translator, TranslationStatus::ReadyForQa, &clock)
        .expect("hand off");
    rt.block_on(repo.update(&record)).expect("persist hand-off");

    let fetched = rt
        .block_on(repo.find_by_id(record.id()))
        .expect("lookup")
        .expect("record exists");
    assert_eq!(fetched.status(), TranslationStatus::ReadyForQa);
    assert_eq!(fetched.translated_text(), Some("It is raining."));
    assert_eq!(fetched.translator(), Some(translator.id()));

    // Reviewer claims and approves.
    record
        .move_to_status(&reviewer, TranslationStatus::InCheck, &clock)
        .expect("QA claim");
    record
        .move_to_status(&reviewer, TranslationStatus::Checked, &clock)
        .expect("approve");
    rt.block_on(repo.update(&record)).expect("persist approval");

    let checked = rt
        .block_on(repo.find_by_id(record.id()))
        .expect("lookup")
        .expect("record exists");
    assert_eq!(checked.status(), TranslationStatus::Checked);
    assert_eq!(checked.translator(), None);
    assert_eq!(checked.qa_reviewer(), Some(reviewer.id()));
}

#[test]
fn store_rejects_duplicate_identifiers() {
    let rt = test_runtime();
    let repo = InMemoryTranslationRepository::new();
    let clock = DefaultClock;

    let record = Translation::new("Erste Zeile", &clock).expect("valid record");
    rt.block_on(repo.store(&record)).expect("first store");

    let result = rt.block_on(repo.store(&record));
    assert!(matches!(
        result,
        Err(TranslationRepositoryError::DuplicateTranslation(id)) if id == record.id()
    ));
}

#[test]
fn update_rejects_unknown_records() {
    let rt = test_runtime();
    let repo = InMemoryTranslationRepository::new();
    let clock = DefaultClock;

    let record = Translation::new("Nie gespeichert", &clock).expect("valid record");
    let result = rt.block_on(repo.update(&record));
    assert!(matches!(
        result,
        Err(TranslationRepositoryError::NotFound(id)) if id == record.id()
    ));
}

#[test]
fn find_by_id_returns_none_for_missing_records() {
    let rt = test_runtime();
    let repo = InMemoryTranslationRepository::new();

    let fetched = rt
        .block_on(repo.find_by_id(TranslationId::new()))
        .expect("lookup");
    assert!(fetched.is_none());
}

#[test]
fn list_filters_and_orders_by_creation() {
    let rt = test_runtime();
    let repo = InMemoryTranslationRepository::new();
    let clock = DefaultClock;
    let translator = Actor::new(UserId::new(), Role::Translator);

    let first = Translation::new("Erstes", &clock).expect("valid record");
    let mut second = Translation::new("Zweites", &clock).expect("valid record");
    rt.block_on(repo.store(&first)).expect("store first");
    rt.block_on(repo.store(&second)).expect("store second");

    second
        .move_to_status(&translator, TranslationStatus::InProgress, &clock)
        .expect("claim");
    rt.block_on(repo.update(&second)).expect("persist claim");

    let queued = rt
        .block_on(repo.list(Some(TranslationStatus::InQueue)))
        .expect("filtered list");
    assert_eq!(queued.len(), 1);
    assert_eq!(queued.first().map(Translation::id), Some(first.id()));

    let all = rt.block_on(repo.list(None)).expect("full list");
    assert_eq!(all.len(), 2);
    assert!(all.first().map(Translation::created_at) <= all.last().map(Translation::created_at));
}

#[test]
fn assignment_counts_follow_claims_and_releases() {
    let rt = test_runtime();
    let repo = InMemoryTranslationRepository::new();
    let clock = DefaultClock;
    let translator = Actor::new(UserId::new(), Role::Translator);

    let mut record = Translation::new("Zählprobe", &clock).expect("valid record");
    rt.block_on(repo.store(&record)).expect("store");
    assert_eq!(
        rt.block_on(repo.count_assigned_to(translator.id()))
            .expect("count"),
        0
    );

    record
        .move_to_status(&translator, TranslationStatus::InProgress, &clock)
        .expect("claim");
    rt.block_on(repo.update(&record)).expect("persist claim");
    assert_eq!(
        rt.block_on(repo.count_assigned_to(translator.id()))
            .expect("count"),
        1
    );

    record
        .move_to_status(&translator, TranslationStatus::InQueue, &clock)
        .expect("release");
    rt.block_on(repo.update(&record)).expect("persist release");
    assert_eq!(
        rt.block_on(repo.count_assigned_to(translator.id()))
            .expect("count"),
        0
    );
}

#[test]
fn status_counts_cover_only_populated_statuses() {
    let rt = test_runtime();
    let repo = InMemoryTranslationRepository::new();
    let clock = DefaultClock;
    let translator = Actor::new(UserId::new(), Role::Translator);

    for original in ["Eins", "Zwei"] {
        let record = Translation::new(original, &clock).expect("valid record");
        rt.block_on(repo.store(&record)).expect("store");
    }
    let mut claimed = Translation::new("Drei", &clock).expect("valid record");
    rt.block_on(repo.store(&claimed)).expect("store");
    claimed
        .move_to_status(&translator, TranslationStatus::InProgress, &clock)
        .expect("claim");
    rt.block_on(repo.update(&claimed)).expect("persist claim");

    let counts = rt.block_on(repo.status_counts()).expect("status counts");
    let summarized: Vec<(TranslationStatus, u64)> = counts
        .iter()
        .map(|entry| (entry.status, entry.count))
        .collect();
    assert_eq!(
        summarized,
        vec![
            (TranslationStatus::InQueue, 2),
            (TranslationStatus::InProgress, 1),
        ]
    );
}
