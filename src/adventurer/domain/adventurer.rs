//! Adventurer aggregate root.

use super::{AdventurerDomainError, AdventurerId, AdventurerName, Rank};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Registration payload for an adventurer that has not been stored yet.
///
/// The store assigns the identifier; the completed-quest count always starts
/// at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdventurer {
    name: AdventurerName,
    rank: Rank,
    registered_at: DateTime<Utc>,
}

impl NewAdventurer {
    /// Creates a registration stamped with the current clock time.
    #[must_use]
    pub fn new(name: AdventurerName, rank: Rank, clock: &impl Clock) -> Self {
        Self {
            name,
            rank,
            registered_at: clock.utc(),
        }
    }

    /// Returns the adventurer name.
    #[must_use]
    pub const fn name(&self) -> &AdventurerName {
        &self.name
    }

    /// Returns the starting rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Materializes the stored adventurer once the store has assigned an id.
    #[must_use]
    pub fn into_adventurer(self, id: AdventurerId) -> Adventurer {
        Adventurer {
            id,
            name: self.name,
            rank: self.rank,
            completed_quest_count: 0,
            registered_at: self.registered_at,
        }
    }
}

/// Adventurer aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adventurer {
    id: AdventurerId,
    name: AdventurerName,
    rank: Rank,
    completed_quest_count: u32,
    registered_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted adventurer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAdventurerData {
    /// Persisted identifier.
    pub id: AdventurerId,
    /// Persisted name.
    pub name: AdventurerName,
    /// Persisted rank.
    pub rank: Rank,
    /// Number of quests completed so far.
    pub completed_quest_count: u32,
    /// Registration timestamp.
    pub registered_at: DateTime<Utc>,
}

impl Adventurer {
    /// Reconstructs an adventurer from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedAdventurerData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            rank: data.rank,
            completed_quest_count: data.completed_quest_count,
            registered_at: data.registered_at,
        }
    }

    /// Returns the adventurer identifier.
    #[must_use]
    pub const fn id(&self) -> AdventurerId {
        self.id
    }

    /// Returns the adventurer name.
    #[must_use]
    pub const fn name(&self) -> &AdventurerName {
        &self.name
    }

    /// Returns the current rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the number of quests this adventurer has completed.
    #[must_use]
    pub const fn completed_quest_count(&self) -> u32 {
        self.completed_quest_count
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Returns whether this adventurer may take work requiring `minimum`.
    #[must_use]
    pub const fn meets_rank(&self, minimum: Rank) -> bool {
        self.rank.value() >= minimum.value()
    }

    /// Changes the adventurer's rank.
    pub const fn set_rank(&mut self, rank: Rank) {
        self.rank = rank;
    }

    /// Records one more completed quest.
    ///
    /// # Errors
    ///
    /// Returns [`AdventurerDomainError::CompletedQuestCountOverflow`] and
    /// leaves the counter unchanged when it is already at `u32::MAX`.
    pub const fn record_completed_quest(&mut self) -> Result<(), AdventurerDomainError> {
        match self.completed_quest_count.checked_add(1) {
            Some(count) => {
                self.completed_quest_count = count;
                Ok(())
            }
            None => Err(AdventurerDomainError::CompletedQuestCountOverflow(self.id)),
        }
    }
}
