//! Translation status lifecycle enumeration.

use super::ParseStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a translation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationStatus {
    /// Waiting for a translator to claim the record.
    InQueue,
    /// Claimed by a translator and being translated.
    InProgress,
    /// Translation submitted and waiting for a QA reviewer.
    ReadyForQa,
    /// Claimed by a QA reviewer and being checked.
    InCheck,
    /// Approved by a QA reviewer.
    Checked,
}

impl TranslationStatus {
    /// All statuses in wire-code order.
    pub const ALL: [Self; 5] = [
        Self::InQueue,
        Self::InProgress,
        Self::ReadyForQa,
        Self::InCheck,
        Self::Checked,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InQueue => "in_queue",
            Self::InProgress => "in_progress",
            Self::ReadyForQa => "ready_for_qa",
            Self::InCheck => "in_check",
            Self::Checked => "checked",
        }
    }

    /// Returns the human-readable display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::InQueue => "In Queue",
            Self::InProgress => "In Progress",
            Self::ReadyForQa => "Ready for QA",
            Self::InCheck => "In Check",
            Self::Checked => "Checked",
        }
    }

    /// Returns the numeric wire code used by API clients.
    #[must_use]
    pub const fn code(self) -> i16 {
        match self {
            Self::InQueue => 0,
            Self::InProgress => 1,
            Self::ReadyForQa => 2,
            Self::InCheck => 3,
            Self::Checked => 4,
        }
    }

    /// Parses a status from its numeric wire code.
    ///
    /// # Errors
    ///
    /// Returns [`ParseStatusError`] when the code is unknown.
    pub fn from_code(code: i16) -> Result<Self, ParseStatusError> {
        match code {
            0 => Ok(Self::InQueue),
            1 => Ok(Self::InProgress),
            2 => Ok(Self::ReadyForQa),
            3 => Ok(Self::InCheck),
            4 => Ok(Self::Checked),
            _ => Err(ParseStatusError(code.to_string())),
        }
    }
}

impl TryFrom<&str> for TranslationStatus {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "in_queue" => Ok(Self::InQueue),
            "in_progress" => Ok(Self::InProgress),
            "ready_for_qa" => Ok(Self::ReadyForQa),
            "in_check" => Ok(Self::InCheck),
            "checked" => Ok(Self::Checked),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
