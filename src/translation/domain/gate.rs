//! Object-level update gate.
//!
//! Runs before any field-level permission check and decides whether the
//! actor may attempt an update against the record at all. Field-level rules
//! live on the aggregate itself.

use super::{Actor, Role, Translation, TranslationStatus};

/// Maximum number of records a translator may hold at once.
///
/// The limit only blocks claiming further records from the queue; updates to
/// records the translator already holds stay permitted.
pub const MAX_ACTIVE_CLAIMS: u64 = 2;

/// Returns `true` when the actor may attempt an update on the record.
///
/// QA reviewers may always attempt an update. A translator may attempt one
/// when both hold:
///
/// - the translator holds fewer than [`MAX_ACTIVE_CLAIMS`] records, or the
///   record is not queued (the limit only gates fresh claims);
/// - the record is queued, or the translator is its assigned translator.
///
/// `assigned_count` is the number of records currently assigned to the
/// actor, supplied by the repository.
#[must_use]
pub fn permits_update_attempt(
    actor: &Actor,
    translation: &Translation,
    assigned_count: u64,
) -> bool {
    match actor.role() {
        Role::Qa => true,
        Role::Translator => {
            let queued = translation.status() == TranslationStatus::InQueue;
            let under_claim_limit = assigned_count < MAX_ACTIVE_CLAIMS;
            (under_claim_limit || !queued) && (queued || translation.is_assigned_translator(actor))
        }
    }
}
