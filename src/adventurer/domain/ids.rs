//! Identifier and validated scalar types for the adventurer domain.

use super::AdventurerDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier for an adventurer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdventurerId(i64);

impl AdventurerId {
    /// Creates a validated adventurer identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AdventurerDomainError::InvalidAdventurerId`] when the value
    /// is zero or negative.
    pub const fn new(value: i64) -> Result<Self, AdventurerDomainError> {
        if value <= 0 {
            return Err(AdventurerDomainError::InvalidAdventurerId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AdventurerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name of an adventurer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdventurerName(String);

impl AdventurerName {
    /// Longest accepted name, in characters.
    pub const MAX_LENGTH: usize = 255;

    /// Creates a validated adventurer name.
    ///
    /// # Errors
    ///
    /// Returns [`AdventurerDomainError::EmptyAdventurerName`] when the value
    /// is empty after trimming, and
    /// [`AdventurerDomainError::AdventurerNameTooLong`] when it exceeds
    /// [`Self::MAX_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, AdventurerDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(AdventurerDomainError::EmptyAdventurerName);
        }
        let length = normalized.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(AdventurerDomainError::AdventurerNameTooLong {
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

impl AsRef<str> for AdventurerName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AdventurerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Guild rank of an adventurer, also used as a quest's eligibility floor.
///
/// Higher values are more senior.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rank(u32);

impl Rank {
    /// Creates a rank.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
