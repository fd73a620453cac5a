//! Truth-table tests for the object-level update gate.

use super::record_with;
use crate::translation::domain::{
    Actor, MAX_ACTIVE_CLAIMS, Role, TranslationStatus, UserId, permits_update_attempt,
};
use rstest::rstest;

#[rstest]
#[case(TranslationStatus::InQueue, 0)]
#[case(TranslationStatus::ReadyForQa, 0)]
#[case(TranslationStatus::InCheck, MAX_ACTIVE_CLAIMS)]
#[case(TranslationStatus::Checked, MAX_ACTIVE_CLAIMS + 1)]
fn qa_may_always_attempt_updates(#[case] status: TranslationStatus, #[case] assigned_count: u64) {
    let reviewer = Actor::new(UserId::new(), Role::Qa);
    let record = record_with(status, Some(UserId::new()), None);
    assert!(permits_update_attempt(&reviewer, &record, assigned_count));
}

#[rstest]
#[case(Role::Translator)]
#[case(Role::Qa)]
fn both_role_groups_carry_the_view_permission(#[case] role: Role) {
    let actor = Actor::new(UserId::new(), role);
    assert!(actor.can_view());
}

#[rstest]
#[case(0, true)]
#[case(1, true)]
#[case(MAX_ACTIVE_CLAIMS, false)]
#[case(MAX_ACTIVE_CLAIMS + 1, false)]
fn translator_claims_from_queue_only_under_the_limit(
    #[case] assigned_count: u64,
    #[case] expected: bool,
) {
    let translator = Actor::new(UserId::new(), Role::Translator);
    let queued = record_with(TranslationStatus::InQueue, None, None);
    assert_eq!(
        permits_update_attempt(&translator, &queued, assigned_count),
        expected
    );
}

#[rstest]
fn translator_at_the_limit_may_still_update_held_records() {
    let translator = Actor::new(UserId::new(), Role::Translator);
    let held = record_with(
        TranslationStatus::InProgress,
        Some(translator.id()),
        None,
    );
    assert!(permits_update_attempt(&translator, &held, MAX_ACTIVE_CLAIMS));
}

#[rstest]
#[case(TranslationStatus::InProgress)]
#[case(TranslationStatus::ReadyForQa)]
#[case(TranslationStatus::InCheck)]
#[case(TranslationStatus::Checked)]
fn translator_cannot_update_records_held_by_others(#[case] status: TranslationStatus) {
    let translator = Actor::new(UserId::new(), Role::Translator);
    let foreign = record_with(status, Some(UserId::new()), None);
    assert!(!permits_update_attempt(&translator, &foreign, 0));
}
