//! In-memory repository for quest board tests and local use.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::adventurer::domain::{AdventurerId, Rank};
use crate::quest::{
    domain::{
        Claim, NewQuest, PersistedQuestData, Quest, QuestId, QuestStatus, QuestSummary, Reward,
    },
    ports::{QuestRepository, QuestRepositoryError, QuestRepositoryResult},
};

/// Thread-safe in-memory quest repository.
///
/// Identifiers are assigned sequentially starting at 1. Claims are kept in
/// insertion order and never removed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestRepository {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    quests: BTreeMap<QuestId, Quest>,
    claims: Vec<Claim>,
    last_id: i64,
}

impl InMemoryQuestRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every claim recorded so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`QuestRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn claims(&self) -> QuestRepositoryResult<Vec<Claim>> {
        Ok(self.read()?.claims.clone())
    }

    fn read(&self) -> QuestRepositoryResult<RwLockReadGuard<'_, InMemoryBoardState>> {
        self.state.read().map_err(|err| {
            QuestRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> QuestRepositoryResult<RwLockWriteGuard<'_, InMemoryBoardState>> {
        self.state.write().map_err(|err| {
            QuestRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

fn find_mut(state: &mut InMemoryBoardState, id: QuestId) -> QuestRepositoryResult<&mut Quest> {
    state
        .quests
        .get_mut(&id)
        .ok_or(QuestRepositoryError::NotFound(id))
}

/// Copies `quest` with only the status replaced.
fn with_status(quest: &Quest, status: QuestStatus) -> Quest {
    Quest::from_persisted(PersistedQuestData {
        id: quest.id(),
        name: quest.name().clone(),
        description: quest.description().to_owned(),
        minimum_rank: quest.minimum_rank(),
        reward: quest.reward(),
        status,
        posted_at: quest.posted_at(),
    })
}

#[async_trait]
impl QuestRepository for InMemoryQuestRepository {
    async fn get_quest(&self, id: QuestId) -> QuestRepositoryResult<Quest> {
        let state = self.read()?;
        state
            .quests
            .get(&id)
            .cloned()
            .ok_or(QuestRepositoryError::NotFound(id))
    }

    async fn update_quest_status(&self, quest: &Quest) -> QuestRepositoryResult<()> {
        let mut state = self.write()?;
        let stored = find_mut(&mut state, quest.id())?;
        let replacement = with_status(stored, quest.status());
        *stored = replacement;
        Ok(())
    }

    async fn create_claim(&self, claim: &Claim) -> QuestRepositoryResult<()> {
        let mut state = self.write()?;
        state.claims.push(*claim);
        Ok(())
    }

    async fn claim_exists(&self, claim: &Claim) -> QuestRepositoryResult<bool> {
        let state = self.read()?;
        Ok(state.claims.contains(claim))
    }

    async fn get_quests_by_status(
        &self,
        status: QuestStatus,
    ) -> QuestRepositoryResult<Vec<QuestSummary>> {
        let state = self.read()?;
        Ok(state
            .quests
            .values()
            .filter(|quest| quest.status() == status)
            .map(Quest::summary)
            .collect())
    }

    async fn get_active_quests_for_adventurer(
        &self,
        adventurer_id: AdventurerId,
    ) -> QuestRepositoryResult<Vec<Quest>> {
        let state = self.read()?;
        Ok(state
            .quests
            .values()
            .filter(|quest| quest.status() == QuestStatus::Working)
            .filter(|quest| {
                state
                    .claims
                    .contains(&Claim::new(quest.id(), adventurer_id))
            })
            .cloned()
            .collect())
    }

    async fn create_quest(&self, quest: &NewQuest) -> QuestRepositoryResult<Quest> {
        let mut state = self.write()?;
        let next = state.last_id.checked_add(1).ok_or_else(|| {
            QuestRepositoryError::persistence(std::io::Error::other("quest id sequence exhausted"))
        })?;
        let id = QuestId::new(next).map_err(QuestRepositoryError::persistence)?;
        let stored = quest.clone().into_quest(id);
        state.last_id = next;
        state.quests.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_quest(&self, id: QuestId) -> QuestRepositoryResult<()> {
        let mut state = self.write()?;
        if state.quests.remove(&id).is_none() {
            return Err(QuestRepositoryError::NotFound(id));
        }
        state.claims.retain(|claim| claim.quest_id() != id);
        Ok(())
    }

    async fn update_quest_rank(
        &self,
        id: QuestId,
        minimum_rank: Rank,
    ) -> QuestRepositoryResult<()> {
        let mut state = self.write()?;
        find_mut(&mut state, id)?.set_minimum_rank(minimum_rank);
        Ok(())
    }

    async fn update_quest_reward(&self, id: QuestId, reward: Reward) -> QuestRepositoryResult<()> {
        let mut state = self.write()?;
        find_mut(&mut state, id)?.set_reward(reward);
        Ok(())
    }
}
