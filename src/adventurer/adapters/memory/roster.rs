//! In-memory repository for adventurer roster tests and local use.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::adventurer::{
    domain::{Adventurer, AdventurerId, NewAdventurer, Rank},
    ports::{AdventurerRepository, AdventurerRepositoryError, AdventurerRepositoryResult},
};

/// Thread-safe in-memory adventurer repository.
///
/// Identifiers are assigned sequentially starting at 1.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAdventurerRepository {
    state: Arc<RwLock<InMemoryRosterState>>,
}

#[derive(Debug, Default)]
struct InMemoryRosterState {
    adventurers: BTreeMap<AdventurerId, Adventurer>,
    last_id: i64,
}

impl InMemoryAdventurerRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AdventurerRepositoryResult<RwLockReadGuard<'_, InMemoryRosterState>> {
        self.state.read().map_err(|err| {
            AdventurerRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> AdventurerRepositoryResult<RwLockWriteGuard<'_, InMemoryRosterState>> {
        self.state.write().map_err(|err| {
            AdventurerRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

fn find_mut(
    state: &mut InMemoryRosterState,
    id: AdventurerId,
) -> AdventurerRepositoryResult<&mut Adventurer> {
    state
        .adventurers
        .get_mut(&id)
        .ok_or(AdventurerRepositoryError::NotFound(id))
}

#[async_trait]
impl AdventurerRepository for InMemoryAdventurerRepository {
    async fn get_adventurer(&self, id: AdventurerId) -> AdventurerRepositoryResult<Adventurer> {
        let state = self.read()?;
        state
            .adventurers
            .get(&id)
            .cloned()
            .ok_or(AdventurerRepositoryError::NotFound(id))
    }

    async fn increment_completed_quest_count(
        &self,
        id: AdventurerId,
    ) -> AdventurerRepositoryResult<()> {
        let mut state = self.write()?;
        find_mut(&mut state, id)?
            .record_completed_quest()
            .map_err(AdventurerRepositoryError::persistence)
    }

    async fn create_adventurer(
        &self,
        adventurer: &NewAdventurer,
    ) -> AdventurerRepositoryResult<Adventurer> {
        let mut state = self.write()?;
        let next = state.last_id.checked_add(1).ok_or_else(|| {
            AdventurerRepositoryError::persistence(std::io::Error::other(
                "adventurer id sequence exhausted",
            ))
        })?;
        let id = AdventurerId::new(next).map_err(AdventurerRepositoryError::persistence)?;
        let stored = adventurer.clone().into_adventurer(id);
        state.last_id = next;
        state.adventurers.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update_adventurer_rank(
        &self,
        id: AdventurerId,
        rank: Rank,
    ) -> AdventurerRepositoryResult<()> {
        let mut state = self.write()?;
        find_mut(&mut state, id)?.set_rank(rank);
        Ok(())
    }
}
