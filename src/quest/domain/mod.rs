//! Domain model for quests, their lifecycle status and claim records.
//!
//! Eligibility is expressed with [`Rank`](crate::adventurer::domain::Rank),
//! shared with the adventurer roster.

mod claim;
mod error;
mod ids;
mod quest;
mod status;

pub use claim::Claim;
pub use error::{ParseQuestStatusError, QuestDomainError};
pub use ids::{QuestId, QuestName, Reward};
pub use quest::{NewQuest, PersistedQuestData, Quest, QuestSummary};
pub use status::QuestStatus;
