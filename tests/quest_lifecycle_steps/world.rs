//! Shared world state for quest lifecycle BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use guild_board::{
    adventurer::{
        adapters::memory::InMemoryAdventurerRepository,
        domain::AdventurerId,
        services::{AdventurerRosterService, RegisterAdventurerRequest},
    },
    quest::{
        adapters::memory::InMemoryQuestRepository,
        domain::QuestId,
        services::{
            PostQuestRequest, QuestBoardService, QuestLifecycleError, QuestLifecycleService,
            QuestOutcome, ReportQuestRequest, TakeQuestRequest,
        },
    },
};
use mockable::DefaultClock;
use rstest::fixture;

/// Lifecycle service type used by the BDD world.
pub type TestLifecycleService =
    QuestLifecycleService<InMemoryQuestRepository, InMemoryAdventurerRepository>;

/// Scenario world for quest lifecycle behaviour tests.
pub struct QuestLifecycleWorld {
    pub board: QuestBoardService<InMemoryQuestRepository, DefaultClock>,
    pub roster: AdventurerRosterService<InMemoryAdventurerRepository, DefaultClock>,
    pub lifecycle: TestLifecycleService,
    pub quests: HashMap<String, QuestId>,
    pub adventurers: HashMap<String, AdventurerId>,
    pub last_result: Option<Result<(), QuestLifecycleError>>,
}

impl QuestLifecycleWorld {
    /// Creates a world with an empty board and roster.
    #[must_use]
    pub fn new() -> Self {
        let quests = Arc::new(InMemoryQuestRepository::new());
        let adventurers = Arc::new(InMemoryAdventurerRepository::new());
        let clock = Arc::new(DefaultClock);

        Self {
            board: QuestBoardService::new(Arc::clone(&quests), Arc::clone(&clock)),
            roster: AdventurerRosterService::new(Arc::clone(&adventurers), clock),
            lifecycle: QuestLifecycleService::new(quests, adventurers),
            quests: HashMap::new(),
            adventurers: HashMap::new(),
            last_result: None,
        }
    }

    /// Looks up a quest posted earlier in the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error if no quest was posted under `name`.
    pub fn quest_id(&self, name: &str) -> Result<QuestId, eyre::Report> {
        self.quests
            .get(name)
            .copied()
            .ok_or_else(|| eyre::eyre!("no quest named {name} in scenario world"))
    }

    /// Looks up an adventurer registered earlier in the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error if no adventurer was registered under `name`.
    pub fn adventurer_id(&self, name: &str) -> Result<AdventurerId, eyre::Report> {
        self.adventurers
            .get(name)
            .copied()
            .ok_or_else(|| eyre::eyre!("no adventurer named {name} in scenario world"))
    }

    /// Posts a quest and remembers its identifier by name.
    ///
    /// # Errors
    ///
    /// Returns an error if posting fails.
    pub fn post_quest(&mut self, name: String, minimum_rank: u32) -> Result<(), eyre::Report> {
        let quest = run_async(
            self.board
                .post_quest(PostQuestRequest::new(name.clone(), minimum_rank, 1_000)),
        )?;
        self.quests.insert(name, quest.id());
        Ok(())
    }

    /// Registers an adventurer and remembers their identifier by name.
    ///
    /// # Errors
    ///
    /// Returns an error if registration fails.
    pub fn register(&mut self, name: String, rank: u32) -> Result<(), eyre::Report> {
        let adventurer = run_async(
            self.roster
                .register(RegisterAdventurerRequest::new(name.clone(), rank)),
        )?;
        self.adventurers.insert(name, adventurer.id());
        Ok(())
    }

    /// Takes a quest on behalf of a named adventurer.
    ///
    /// # Errors
    ///
    /// Returns an error if either name is unknown.
    pub fn take(
        &self,
        adventurer: &str,
        quest: &str,
    ) -> Result<Result<(), QuestLifecycleError>, eyre::Report> {
        let request = TakeQuestRequest::new(self.quest_id(quest)?, self.adventurer_id(adventurer)?);
        Ok(run_async(self.lifecycle.take_quest(request)))
    }

    /// Reports a quest outcome on behalf of a named adventurer.
    ///
    /// # Errors
    ///
    /// Returns an error if either name is unknown.
    pub fn report(
        &self,
        adventurer: &str,
        quest: &str,
        outcome: QuestOutcome,
    ) -> Result<Result<(), QuestLifecycleError>, eyre::Report> {
        let request = ReportQuestRequest::new(
            self.quest_id(quest)?,
            self.adventurer_id(adventurer)?,
            outcome,
        );
        Ok(run_async(self.lifecycle.report_quest(request)))
    }
}

impl Default for QuestLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> QuestLifecycleWorld {
    QuestLifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
