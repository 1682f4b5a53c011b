//! Repository port for quest, status and claim persistence.

use crate::adventurer::domain::{AdventurerId, Rank};
use crate::quest::domain::{Claim, NewQuest, Quest, QuestId, QuestStatus, QuestSummary, Reward};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for quest repository operations.
pub type QuestRepositoryResult<T> = Result<T, QuestRepositoryError>;

/// Quest persistence contract.
///
/// Every method is an independent write or read; callers get no atomicity
/// across calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestRepository: Send + Sync {
    /// Loads a quest by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`QuestRepositoryError::NotFound`] when no quest has the
    /// identifier.
    async fn get_quest(&self, id: QuestId) -> QuestRepositoryResult<Quest>;

    /// Persists the quest's status, keyed by its identifier.
    ///
    /// Only the status is written; every other field of `quest` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`QuestRepositoryError::NotFound`] when no quest has the
    /// identifier.
    async fn update_quest_status(&self, quest: &Quest) -> QuestRepositoryResult<()>;

    /// Appends a claim record. Duplicate pairs are accepted.
    async fn create_claim(&self, claim: &Claim) -> QuestRepositoryResult<()>;

    /// Returns whether at least one claim record matches the pair.
    async fn claim_exists(&self, claim: &Claim) -> QuestRepositoryResult<bool>;

    /// Lists quests currently in `status`, ordered by identifier.
    async fn get_quests_by_status(
        &self,
        status: QuestStatus,
    ) -> QuestRepositoryResult<Vec<QuestSummary>>;

    /// Lists working quests the adventurer holds a claim on, ordered by
    /// identifier.
    async fn get_active_quests_for_adventurer(
        &self,
        adventurer_id: AdventurerId,
    ) -> QuestRepositoryResult<Vec<Quest>>;

    /// Stores a new quest and returns it with its assigned identifier.
    async fn create_quest(&self, quest: &NewQuest) -> QuestRepositoryResult<Quest>;

    /// Removes a quest.
    ///
    /// # Errors
    ///
    /// Returns [`QuestRepositoryError::NotFound`] when no quest has the
    /// identifier.
    async fn delete_quest(&self, id: QuestId) -> QuestRepositoryResult<()>;

    /// Overwrites the quest's minimum rank.
    ///
    /// # Errors
    ///
    /// Returns [`QuestRepositoryError::NotFound`] when no quest has the
    /// identifier.
    async fn update_quest_rank(&self, id: QuestId, minimum_rank: Rank)
    -> QuestRepositoryResult<()>;

    /// Overwrites the quest's reward.
    ///
    /// # Errors
    ///
    /// Returns [`QuestRepositoryError::NotFound`] when no quest has the
    /// identifier.
    async fn update_quest_reward(&self, id: QuestId, reward: Reward) -> QuestRepositoryResult<()>;
}

/// Errors returned by quest repository implementations.
#[derive(Debug, Clone, Error)]
pub enum QuestRepositoryError {
    /// The quest was not found.
    #[error("quest not found: {0}")]
    NotFound(QuestId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl QuestRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
