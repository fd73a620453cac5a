//! Workflow roles and acting users.

use super::{ParseRoleError, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role group gating status transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Translators claim queued records and submit translations.
    Translator,
    /// QA reviewers check submitted translations.
    Qa,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Translator => "translator",
            Self::Qa => "qa",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "translator" => Ok(Self::Translator),
            "qa" => Ok(Self::Qa),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user acting on the workflow: an identity plus the role group it belongs
/// to.
///
/// Account management lives outside this crate; an actor is the minimal
/// projection the domain needs for its permission checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    id: UserId,
    role: Role,
}

impl Actor {
    /// Creates an actor from a user identity and role.
    #[must_use]
    pub const fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }

    /// Returns the acting user's identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the actor's role group.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns `true` when the actor may view translation records.
    ///
    /// Both role groups carry the view permission, so reads share the same
    /// actor-gated surface as writes.
    #[must_use]
    pub const fn can_view(&self) -> bool {
        matches!(self.role, Role::Translator | Role::Qa)
    }

    /// Returns `true` when the actor belongs to the translator group.
    #[must_use]
    pub const fn is_translator(&self) -> bool {
        matches!(self.role, Role::Translator)
    }

    /// Returns `true` when the actor belongs to the QA group.
    #[must_use]
    pub const fn is_qa(&self) -> bool {
        matches!(self.role, Role::Qa)
    }
}
