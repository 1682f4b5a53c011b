//! Shared fixtures for in-memory guild board integration tests.

use std::sync::Arc;

use guild_board::{
    adventurer::{
        adapters::memory::InMemoryAdventurerRepository,
        domain::{Adventurer, AdventurerId},
        ports::AdventurerRepository,
        services::{AdventurerRosterService, RegisterAdventurerRequest},
    },
    quest::{
        adapters::memory::InMemoryQuestRepository,
        domain::{Quest, QuestId},
        ports::QuestRepository,
        services::{PostQuestRequest, QuestBoardService, QuestLifecycleService},
    },
};
use mockable::DefaultClock;
use rstest::fixture;

/// Services and stores wired together over in-memory repositories.
pub struct Guild {
    pub quests: Arc<InMemoryQuestRepository>,
    pub adventurers: Arc<InMemoryAdventurerRepository>,
    pub board: QuestBoardService<InMemoryQuestRepository, DefaultClock>,
    pub roster: AdventurerRosterService<InMemoryAdventurerRepository, DefaultClock>,
    pub lifecycle: QuestLifecycleService<InMemoryQuestRepository, InMemoryAdventurerRepository>,
}

impl Guild {
    /// Posts a quest and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if posting fails.
    pub async fn post(&self, name: &str, minimum_rank: u32) -> eyre::Result<QuestId> {
        let quest = self
            .board
            .post_quest(PostQuestRequest::new(name, minimum_rank, 1_000))
            .await?;
        Ok(quest.id())
    }

    /// Registers an adventurer and returns their identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if registration fails.
    pub async fn register(&self, name: &str, rank: u32) -> eyre::Result<AdventurerId> {
        let adventurer = self
            .roster
            .register(RegisterAdventurerRequest::new(name, rank))
            .await?;
        Ok(adventurer.id())
    }

    /// Loads the stored quest.
    ///
    /// # Errors
    ///
    /// Returns an error if the quest cannot be loaded.
    pub async fn quest(&self, id: QuestId) -> eyre::Result<Quest> {
        Ok(self.quests.get_quest(id).await?)
    }

    /// Loads the stored adventurer.
    ///
    /// # Errors
    ///
    /// Returns an error if the adventurer cannot be loaded.
    pub async fn adventurer(&self, id: AdventurerId) -> eyre::Result<Adventurer> {
        Ok(self.adventurers.get_adventurer(id).await?)
    }
}

/// Provides a fresh guild board for each test.
#[fixture]
pub fn guild() -> Guild {
    let quests = Arc::new(InMemoryQuestRepository::new());
    let adventurers = Arc::new(InMemoryAdventurerRepository::new());
    let clock = Arc::new(DefaultClock);
    Guild {
        board: QuestBoardService::new(Arc::clone(&quests), Arc::clone(&clock)),
        roster: AdventurerRosterService::new(Arc::clone(&adventurers), clock),
        lifecycle: QuestLifecycleService::new(Arc::clone(&quests), Arc::clone(&adventurers)),
        quests,
        adventurers,
    }
}
