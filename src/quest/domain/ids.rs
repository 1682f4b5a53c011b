//! Identifier and validated scalar types for the quest domain.

use super::QuestDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier for a quest record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestId(i64);

impl QuestId {
    /// Creates a validated quest identifier.
    ///
    /// # Errors
    ///
    /// Returns [`QuestDomainError::InvalidQuestId`] when the value is zero or
    /// negative.
    pub const fn new(value: i64) -> Result<Self, QuestDomainError> {
        if value <= 0 {
            return Err(QuestDomainError::InvalidQuestId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for QuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Title of a quest as shown on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestName(String);

impl QuestName {
    /// Longest accepted name, in characters. Matches the `name` column.
    pub const MAX_LENGTH: usize = 255;

    /// Creates a validated quest name.
    ///
    /// # Errors
    ///
    /// Returns [`QuestDomainError::EmptyQuestName`] when the value is empty
    /// after trimming, and [`QuestDomainError::QuestNameTooLong`] when it
    /// exceeds [`Self::MAX_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, QuestDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(QuestDomainError::EmptyQuestName);
        }
        let length = normalized.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(QuestDomainError::QuestNameTooLong {
                length,
                max: Self::MAX_LENGTH,
            });
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for QuestName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for QuestName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reward paid out for a quest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Reward(u64);

impl Reward {
    /// Creates a reward amount.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Returns the reward amount.
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Reward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
