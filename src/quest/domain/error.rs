//! Error types for quest domain validation and parsing.

use super::{QuestId, QuestStatus};
use thiserror::Error;

/// Errors returned while constructing or transitioning quest values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuestDomainError {
    /// The quest identifier is not a positive integer.
    #[error("invalid quest id {0}, expected a positive integer")]
    InvalidQuestId(i64),

    /// The quest name is empty after trimming.
    #[error("quest name must not be empty")]
    EmptyQuestName,

    /// The quest name is longer than the board allows.
    #[error("quest name is {length} characters long, the limit is {max}")]
    QuestNameTooLong {
        /// Length of the trimmed name in characters.
        length: usize,
        /// Maximum accepted length.
        max: usize,
    },

    /// The requested status change is not part of the quest lifecycle.
    #[error("quest {quest_id} cannot move from {from} to {to}")]
    InvalidStatusTransition {
        /// Quest being transitioned.
        quest_id: QuestId,
        /// Status before the attempted change.
        from: QuestStatus,
        /// Requested status.
        to: QuestStatus,
    },
}

/// Error returned while parsing quest statuses from persistence or input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown quest status: {0}")]
pub struct ParseQuestStatusError(pub String);
