//! Error types for adventurer domain validation.

use super::AdventurerId;
use thiserror::Error;

/// Errors returned while constructing adventurer domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdventurerDomainError {
    /// The adventurer identifier is not a positive integer.
    #[error("invalid adventurer id {0}, expected a positive integer")]
    InvalidAdventurerId(i64),

    /// The adventurer name is empty after trimming.
    #[error("adventurer name must not be empty")]
    EmptyAdventurerName,

    /// The adventurer name is longer than the roster allows.
    #[error("adventurer name is {length} characters long, the limit is {max}")]
    AdventurerNameTooLong {
        /// Length of the trimmed name in characters.
        length: usize,
        /// Maximum accepted length.
        max: usize,
    },

    /// The completed-quest counter cannot go any higher.
    #[error("completed quest count of adventurer {0} is already at its maximum")]
    CompletedQuestCountOverflow(AdventurerId),
}
