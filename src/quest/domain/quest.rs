//! Quest aggregate root and board projections.

use super::{QuestDomainError, QuestId, QuestName, QuestStatus, Reward};
use crate::adventurer::domain::Rank;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Posting payload for a quest that has not been stored yet.
///
/// Newly posted quests are always [`QuestStatus::Available`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuest {
    name: QuestName,
    description: String,
    minimum_rank: Rank,
    reward: Reward,
    posted_at: DateTime<Utc>,
}

impl NewQuest {
    /// Creates a posting stamped with the current clock time.
    #[must_use]
    pub fn new(
        name: QuestName,
        description: impl Into<String>,
        minimum_rank: Rank,
        reward: Reward,
        clock: &impl Clock,
    ) -> Self {
        Self {
            name,
            description: description.into(),
            minimum_rank,
            reward,
            posted_at: clock.utc(),
        }
    }

    /// Returns the quest name.
    #[must_use]
    pub const fn name(&self) -> &QuestName {
        &self.name
    }

    /// Returns the quest description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the eligibility floor.
    #[must_use]
    pub const fn minimum_rank(&self) -> Rank {
        self.minimum_rank
    }

    /// Returns the reward.
    #[must_use]
    pub const fn reward(&self) -> Reward {
        self.reward
    }

    /// Returns the posting timestamp.
    #[must_use]
    pub const fn posted_at(&self) -> DateTime<Utc> {
        self.posted_at
    }

    /// Materializes the stored quest once the store has assigned an id.
    #[must_use]
    pub fn into_quest(self, id: QuestId) -> Quest {
        Quest {
            id,
            name: self.name,
            description: self.description,
            minimum_rank: self.minimum_rank,
            reward: self.reward,
            status: QuestStatus::Available,
            posted_at: self.posted_at,
        }
    }
}

/// Quest aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    id: QuestId,
    name: QuestName,
    description: String,
    minimum_rank: Rank,
    reward: Reward,
    status: QuestStatus,
    posted_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted quest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedQuestData {
    /// Persisted quest identifier.
    pub id: QuestId,
    /// Persisted name.
    pub name: QuestName,
    /// Persisted description.
    pub description: String,
    /// Persisted eligibility floor.
    pub minimum_rank: Rank,
    /// Persisted reward.
    pub reward: Reward,
    /// Persisted lifecycle status.
    pub status: QuestStatus,
    /// Posting timestamp.
    pub posted_at: DateTime<Utc>,
}

impl Quest {
    /// Reconstructs a quest from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedQuestData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            minimum_rank: data.minimum_rank,
            reward: data.reward,
            status: data.status,
            posted_at: data.posted_at,
        }
    }

    /// Returns the quest identifier.
    #[must_use]
    pub const fn id(&self) -> QuestId {
        self.id
    }

    /// Returns the quest name.
    #[must_use]
    pub const fn name(&self) -> &QuestName {
        &self.name
    }

    /// Returns the quest description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the minimum adventurer rank required to take the quest.
    #[must_use]
    pub const fn minimum_rank(&self) -> Rank {
        self.minimum_rank
    }

    /// Returns the reward.
    #[must_use]
    pub const fn reward(&self) -> Reward {
        self.reward
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> QuestStatus {
        self.status
    }

    /// Returns the posting timestamp.
    #[must_use]
    pub const fn posted_at(&self) -> DateTime<Utc> {
        self.posted_at
    }

    /// Moves the quest to `target` if the lifecycle allows it.
    ///
    /// # Errors
    ///
    /// Returns [`QuestDomainError::InvalidStatusTransition`] and leaves the
    /// quest untouched when `target` is not reachable from the current
    /// status.
    pub const fn transition_to(&mut self, target: QuestStatus) -> Result<(), QuestDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(QuestDomainError::InvalidStatusTransition {
                quest_id: self.id,
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        Ok(())
    }

    /// Overwrites the eligibility floor.
    pub const fn set_minimum_rank(&mut self, minimum_rank: Rank) {
        self.minimum_rank = minimum_rank;
    }

    /// Overwrites the reward.
    pub const fn set_reward(&mut self, reward: Reward) {
        self.reward = reward;
    }

    /// Returns the board listing projection of this quest.
    #[must_use]
    pub fn summary(&self) -> QuestSummary {
        QuestSummary {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            minimum_rank: self.minimum_rank,
            reward: self.reward,
        }
    }
}

/// Board listing entry for a quest, without its status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestSummary {
    /// Quest identifier.
    pub id: QuestId,
    /// Quest name.
    pub name: QuestName,
    /// Quest description.
    pub description: String,
    /// Minimum adventurer rank.
    pub minimum_rank: Rank,
    /// Reward.
    pub reward: Reward,
}
