//! Domain model for translation workflow tracking.
//!
//! The translation domain models the status state machine, the role-gated
//! permission checks that guard it, and the record mutations performed by the
//! update workflow, while keeping all infrastructure concerns outside of the
//! domain boundary.

mod actions;
mod actor;
mod error;
mod gate;
mod ids;
mod status;
mod translation;

pub use actions::{ActionKind, AvailableAction};
pub use actor::{Actor, Role};
pub use error::{ParseRoleError, ParseStatusError, TranslationDomainError};
pub use gate::{MAX_ACTIVE_CLAIMS, permits_update_attempt};
pub use ids::{QaMark, TranslationId, UserId};
pub use status::TranslationStatus;
pub use translation::{PersistedTranslationData, Translation, TranslationUpdate};
