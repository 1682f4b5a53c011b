//! Quest lifecycle status and its transition table.

use super::ParseQuestStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quest lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    /// Posted and open to be claimed.
    Available,
    /// Claimed and being worked by an adventurer.
    Working,
    /// Reported as completed.
    Completed,
}

impl QuestStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Available, Self::Working, Self::Completed];

    /// Returns the integer code stored in the `status` column.
    #[must_use]
    pub const fn code(self) -> i16 {
        match self {
            Self::Available => 0,
            Self::Working => 1,
            Self::Completed => 2,
        }
    }

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Working => "working",
            Self::Completed => "completed",
        }
    }

    /// Returns whether the lifecycle allows moving from `self` to `target`.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Available, Self::Working)
                | (Self::Working, Self::Available | Self::Completed)
        )
    }

    /// Returns whether no transition leaves this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i16> for QuestStatus {
    type Error = ParseQuestStatusError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Available),
            1 => Ok(Self::Working),
            2 => Ok(Self::Completed),
            other => Err(ParseQuestStatusError(other.to_string())),
        }
    }
}

impl TryFrom<&str> for QuestStatus {
    type Error = ParseQuestStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "available" => Ok(Self::Available),
            "working" => Ok(Self::Working),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseQuestStatusError(value.to_owned())),
        }
    }
}
