//! `PostgreSQL` repository implementation for quest board storage.
//!
//! Each trait method runs as its own statement on a pooled connection; no
//! method opens a transaction spanning calls.

use super::{
    models::{NewClaimRow, NewQuestRow, QuestRow},
    schema::{quest_claims, quests},
};
use crate::adventurer::domain::{AdventurerId, Rank};
use crate::quest::{
    domain::{
        Claim, NewQuest, PersistedQuestData, Quest, QuestId, QuestName, QuestStatus,
        QuestSummary, Reward,
    },
    ports::{QuestRepository, QuestRepositoryError, QuestRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by quest adapters.
pub type QuestPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed quest repository.
#[derive(Debug, Clone)]
pub struct PostgresQuestRepository {
    pool: QuestPgPool,
}

impl PostgresQuestRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: QuestPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> QuestRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> QuestRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(QuestRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(QuestRepositoryError::persistence)?
    }
}

#[async_trait]
impl QuestRepository for PostgresQuestRepository {
    async fn get_quest(&self, id: QuestId) -> QuestRepositoryResult<Quest> {
        self.run_blocking(move |connection| {
            let row = quests::table
                .find(id.value())
                .select(QuestRow::as_select())
                .first::<QuestRow>(connection)
                .optional()
                .map_err(QuestRepositoryError::persistence)?
                .ok_or(QuestRepositoryError::NotFound(id))?;
            row_to_quest(row)
        })
        .await
    }

    async fn update_quest_status(&self, quest: &Quest) -> QuestRepositoryResult<()> {
        let id = quest.id();
        let status = quest.status().code();
        self.run_blocking(move |connection| {
            let affected = diesel::update(quests::table.find(id.value()))
                .set(quests::status.eq(status))
                .execute(connection)
                .map_err(QuestRepositoryError::persistence)?;
            ensure_touched(affected, id)
        })
        .await
    }

    async fn create_claim(&self, claim: &Claim) -> QuestRepositoryResult<()> {
        let row = NewClaimRow {
            quest_id: claim.quest_id().value(),
            adventurer_id: claim.adventurer_id().value(),
        };
        self.run_blocking(move |connection| {
            diesel::insert_into(quest_claims::table)
                .values(&row)
                .execute(connection)
                .map_err(QuestRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn claim_exists(&self, claim: &Claim) -> QuestRepositoryResult<bool> {
        let quest_id = claim.quest_id().value();
        let adventurer_id = claim.adventurer_id().value();
        self.run_blocking(move |connection| {
            diesel::select(diesel::dsl::exists(
                quest_claims::table
                    .filter(quest_claims::quest_id.eq(quest_id))
                    .filter(quest_claims::adventurer_id.eq(adventurer_id)),
            ))
            .get_result::<bool>(connection)
            .map_err(QuestRepositoryError::persistence)
        })
        .await
    }

    async fn get_quests_by_status(
        &self,
        status: QuestStatus,
    ) -> QuestRepositoryResult<Vec<QuestSummary>> {
        self.run_blocking(move |connection| {
            let rows = quests::table
                .filter(quests::status.eq(status.code()))
                .order(quests::id.asc())
                .select(QuestRow::as_select())
                .load::<QuestRow>(connection)
                .map_err(QuestRepositoryError::persistence)?;
            rows.into_iter()
                .map(|row| row_to_quest(row).map(|quest| quest.summary()))
                .collect()
        })
        .await
    }

    async fn get_active_quests_for_adventurer(
        &self,
        adventurer_id: AdventurerId,
    ) -> QuestRepositoryResult<Vec<Quest>> {
        self.run_blocking(move |connection| {
            let claimed = quest_claims::table
                .filter(quest_claims::adventurer_id.eq(adventurer_id.value()))
                .select(quest_claims::quest_id);
            let rows = quests::table
                .filter(quests::status.eq(QuestStatus::Working.code()))
                .filter(quests::id.eq_any(claimed))
                .order(quests::id.asc())
                .select(QuestRow::as_select())
                .load::<QuestRow>(connection)
                .map_err(QuestRepositoryError::persistence)?;
            rows.into_iter().map(row_to_quest).collect()
        })
        .await
    }

    async fn create_quest(&self, quest: &NewQuest) -> QuestRepositoryResult<Quest> {
        let new_row = to_new_row(quest)?;
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(quests::table)
                .values(&new_row)
                .returning(QuestRow::as_returning())
                .get_result::<QuestRow>(connection)
                .map_err(QuestRepositoryError::persistence)?;
            row_to_quest(row)
        })
        .await
    }

    async fn delete_quest(&self, id: QuestId) -> QuestRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(quests::table.find(id.value()))
                .execute(connection)
                .map_err(QuestRepositoryError::persistence)?;
            ensure_touched(affected, id)
        })
        .await
    }

    async fn update_quest_rank(
        &self,
        id: QuestId,
        minimum_rank: Rank,
    ) -> QuestRepositoryResult<()> {
        let persisted_rank = rank_to_column(minimum_rank)?;
        self.run_blocking(move |connection| {
            let affected = diesel::update(quests::table.find(id.value()))
                .set(quests::minimum_rank.eq(persisted_rank))
                .execute(connection)
                .map_err(QuestRepositoryError::persistence)?;
            ensure_touched(affected, id)
        })
        .await
    }

    async fn update_quest_reward(&self, id: QuestId, reward: Reward) -> QuestRepositoryResult<()> {
        let persisted_reward = reward_to_column(reward)?;
        self.run_blocking(move |connection| {
            let affected = diesel::update(quests::table.find(id.value()))
                .set(quests::reward_number.eq(persisted_reward))
                .execute(connection)
                .map_err(QuestRepositoryError::persistence)?;
            ensure_touched(affected, id)
        })
        .await
    }
}

const fn ensure_touched(affected: usize, id: QuestId) -> QuestRepositoryResult<()> {
    if affected == 0 {
        return Err(QuestRepositoryError::NotFound(id));
    }
    Ok(())
}

fn rank_to_column(rank: Rank) -> QuestRepositoryResult<i32> {
    i32::try_from(rank.value()).map_err(QuestRepositoryError::persistence)
}

fn reward_to_column(reward: Reward) -> QuestRepositoryResult<i64> {
    i64::try_from(reward.amount()).map_err(QuestRepositoryError::persistence)
}

fn to_new_row(quest: &NewQuest) -> QuestRepositoryResult<NewQuestRow> {
    Ok(NewQuestRow {
        name: quest.name().as_str().to_owned(),
        description: quest.description().to_owned(),
        minimum_rank: rank_to_column(quest.minimum_rank())?,
        reward_number: reward_to_column(quest.reward())?,
        status: QuestStatus::Available.code(),
        posted_at: quest.posted_at(),
    })
}

fn row_to_quest(row: QuestRow) -> QuestRepositoryResult<Quest> {
    let QuestRow {
        id,
        name,
        description,
        minimum_rank,
        reward_number,
        status,
        posted_at,
    } = row;

    let data = PersistedQuestData {
        id: QuestId::new(id).map_err(QuestRepositoryError::persistence)?,
        name: QuestName::new(name).map_err(QuestRepositoryError::persistence)?,
        description,
        minimum_rank: Rank::new(
            u32::try_from(minimum_rank).map_err(QuestRepositoryError::persistence)?,
        ),
        reward: Reward::new(
            u64::try_from(reward_number).map_err(QuestRepositoryError::persistence)?,
        ),
        status: QuestStatus::try_from(status).map_err(QuestRepositoryError::persistence)?,
        posted_at,
    };
    Ok(Quest::from_persisted(data))
}
