//! Service layer for posting, editing and listing quests.

use crate::adventurer::domain::{AdventurerDomainError, AdventurerId, Rank};
use crate::quest::{
    domain::{
        NewQuest, Quest, QuestDomainError, QuestId, QuestName, QuestStatus, QuestSummary, Reward,
    },
    ports::{QuestRepository, QuestRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Request payload for posting a quest on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuestRequest {
    name: String,
    description: String,
    minimum_rank: u32,
    reward: u64,
}

impl PostQuestRequest {
    /// Creates a posting request with an empty description.
    #[must_use]
    pub fn new(name: impl Into<String>, minimum_rank: u32, reward: u64) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            minimum_rank,
            reward,
        }
    }

    /// Sets the quest description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Request payload for changing a quest's minimum rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateQuestRankRequest {
    quest_id: i64,
    minimum_rank: u32,
}

impl UpdateQuestRankRequest {
    /// Creates a rank update request.
    #[must_use]
    pub const fn new(quest_id: i64, minimum_rank: u32) -> Self {
        Self {
            quest_id,
            minimum_rank,
        }
    }
}

/// Request payload for changing a quest's reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateQuestRewardRequest {
    quest_id: i64,
    reward: u64,
}

impl UpdateQuestRewardRequest {
    /// Creates a reward update request.
    #[must_use]
    pub const fn new(quest_id: i64, reward: u64) -> Self {
        Self { quest_id, reward }
    }
}

/// Service-level errors for quest board operations.
#[derive(Debug, Error)]
pub enum QuestBoardError {
    /// Quest validation failed.
    #[error(transparent)]
    Domain(#[from] QuestDomainError),
    /// Adventurer identifier validation failed.
    #[error(transparent)]
    Adventurer(#[from] AdventurerDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] QuestRepositoryError),
}

/// Result type for quest board operations.
pub type QuestBoardResult<T> = Result<T, QuestBoardError>;

/// Quest board orchestration service.
///
/// Plain record management; status changes go through
/// [`QuestLifecycleService`](super::QuestLifecycleService).
#[derive(Clone)]
pub struct QuestBoardService<R, C>
where
    R: QuestRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> QuestBoardService<R, C>
where
    R: QuestRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Posts a new available quest.
    ///
    /// # Errors
    ///
    /// Returns [`QuestBoardError::Domain`] when the name is empty and
    /// [`QuestBoardError::Repository`] when persistence fails.
    pub async fn post_quest(&self, request: PostQuestRequest) -> QuestBoardResult<Quest> {
        let posting = NewQuest::new(
            QuestName::new(request.name)?,
            request.description,
            Rank::new(request.minimum_rank),
            Reward::new(request.reward),
            &*self.clock,
        );
        let quest = self.repository.create_quest(&posting).await?;
        info!(
            quest_id = %quest.id(),
            minimum_rank = %quest.minimum_rank(),
            reward = %quest.reward(),
            "quest posted"
        );
        Ok(quest)
    }

    /// Removes a quest from the board regardless of its status.
    ///
    /// # Errors
    ///
    /// Returns [`QuestBoardError::Domain`] for a non-positive id and
    /// [`QuestBoardError::Repository`] when the quest does not exist or
    /// persistence fails.
    pub async fn withdraw_quest(&self, quest_id: i64) -> QuestBoardResult<()> {
        let id = QuestId::new(quest_id)?;
        self.repository.delete_quest(id).await?;
        info!(quest_id = %id, "quest withdrawn");
        Ok(())
    }

    /// Changes a quest's minimum rank.
    ///
    /// Adventurers who already hold the quest keep it.
    ///
    /// # Errors
    ///
    /// Returns [`QuestBoardError::Domain`] for a non-positive id and
    /// [`QuestBoardError::Repository`] when the quest does not exist or
    /// persistence fails.
    pub async fn update_rank(&self, request: UpdateQuestRankRequest) -> QuestBoardResult<()> {
        let id = QuestId::new(request.quest_id)?;
        let minimum_rank = Rank::new(request.minimum_rank);
        self.repository.update_quest_rank(id, minimum_rank).await?;
        info!(quest_id = %id, %minimum_rank, "quest minimum rank updated");
        Ok(())
    }

    /// Changes a quest's reward.
    ///
    /// # Errors
    ///
    /// Returns [`QuestBoardError::Domain`] for a non-positive id and
    /// [`QuestBoardError::Repository`] when the quest does not exist or
    /// persistence fails.
    pub async fn update_reward(&self, request: UpdateQuestRewardRequest) -> QuestBoardResult<()> {
        let id = QuestId::new(request.quest_id)?;
        let reward = Reward::new(request.reward);
        self.repository.update_quest_reward(id, reward).await?;
        info!(quest_id = %id, %reward, "quest reward updated");
        Ok(())
    }

    /// Loads a quest by raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`QuestBoardError::Domain`] for a non-positive id and
    /// [`QuestBoardError::Repository`] when the quest does not exist or
    /// persistence fails.
    pub async fn find_quest(&self, quest_id: i64) -> QuestBoardResult<Quest> {
        let id = QuestId::new(quest_id)?;
        Ok(self.repository.get_quest(id).await?)
    }

    /// Lists quests in the given status.
    ///
    /// # Errors
    ///
    /// Returns persistence errors from the repository.
    pub async fn quests_by_status(
        &self,
        status: QuestStatus,
    ) -> QuestBoardResult<Vec<QuestSummary>> {
        Ok(self.repository.get_quests_by_status(status).await?)
    }

    /// Lists the working quests an adventurer has claimed.
    ///
    /// # Errors
    ///
    /// Returns [`QuestBoardError::Adventurer`] for a non-positive id and
    /// persistence errors from the repository.
    pub async fn active_quests_for(&self, adventurer_id: i64) -> QuestBoardResult<Vec<Quest>> {
        let id = AdventurerId::new(adventurer_id)?;
        Ok(self.repository.get_active_quests_for_adventurer(id).await?)
    }
}
