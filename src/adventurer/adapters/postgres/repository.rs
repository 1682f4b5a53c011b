//! `PostgreSQL` repository implementation for adventurer storage.

use super::{
    models::{AdventurerRow, NewAdventurerRow},
    schema::adventurers,
};
use crate::adventurer::{
    domain::{
        Adventurer, AdventurerId, AdventurerName, NewAdventurer, PersistedAdventurerData, Rank,
    },
    ports::{AdventurerRepository, AdventurerRepositoryError, AdventurerRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by adventurer adapters.
pub type AdventurerPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed adventurer repository.
#[derive(Debug, Clone)]
pub struct PostgresAdventurerRepository {
    pool: AdventurerPgPool,
}

impl PostgresAdventurerRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: AdventurerPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AdventurerRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AdventurerRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(AdventurerRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(AdventurerRepositoryError::persistence)?
    }
}

#[async_trait]
impl AdventurerRepository for PostgresAdventurerRepository {
    async fn get_adventurer(&self, id: AdventurerId) -> AdventurerRepositoryResult<Adventurer> {
        self.run_blocking(move |connection| {
            let row = adventurers::table
                .find(id.value())
                .select(AdventurerRow::as_select())
                .first::<AdventurerRow>(connection)
                .optional()
                .map_err(AdventurerRepositoryError::persistence)?
                .ok_or(AdventurerRepositoryError::NotFound(id))?;
            row_to_adventurer(row)
        })
        .await
    }

    async fn increment_completed_quest_count(
        &self,
        id: AdventurerId,
    ) -> AdventurerRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::update(adventurers::table.find(id.value()))
                .set(adventurers::completed_quest_count.eq(adventurers::completed_quest_count + 1))
                .execute(connection)
                .map_err(AdventurerRepositoryError::persistence)?;
            ensure_touched(affected, id)
        })
        .await
    }

    async fn create_adventurer(
        &self,
        adventurer: &NewAdventurer,
    ) -> AdventurerRepositoryResult<Adventurer> {
        let new_row = to_new_row(adventurer)?;
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(adventurers::table)
                .values(&new_row)
                .returning(AdventurerRow::as_returning())
                .get_result::<AdventurerRow>(connection)
                .map_err(AdventurerRepositoryError::persistence)?;
            row_to_adventurer(row)
        })
        .await
    }

    async fn update_adventurer_rank(
        &self,
        id: AdventurerId,
        rank: Rank,
    ) -> AdventurerRepositoryResult<()> {
        let persisted_rank = rank_to_column(rank)?;
        self.run_blocking(move |connection| {
            let affected = diesel::update(adventurers::table.find(id.value()))
                .set(adventurers::rank.eq(persisted_rank))
                .execute(connection)
                .map_err(AdventurerRepositoryError::persistence)?;
            ensure_touched(affected, id)
        })
        .await
    }
}

const fn ensure_touched(affected: usize, id: AdventurerId) -> AdventurerRepositoryResult<()> {
    if affected == 0 {
        return Err(AdventurerRepositoryError::NotFound(id));
    }
    Ok(())
}

fn rank_to_column(rank: Rank) -> AdventurerRepositoryResult<i32> {
    i32::try_from(rank.value()).map_err(AdventurerRepositoryError::persistence)
}

fn to_new_row(adventurer: &NewAdventurer) -> AdventurerRepositoryResult<NewAdventurerRow> {
    Ok(NewAdventurerRow {
        name: adventurer.name().as_str().to_owned(),
        rank: rank_to_column(adventurer.rank())?,
        completed_quest_count: 0,
        registered_at: adventurer.registered_at(),
    })
}

fn row_to_adventurer(row: AdventurerRow) -> AdventurerRepositoryResult<Adventurer> {
    let AdventurerRow {
        id,
        name,
        rank,
        completed_quest_count,
        registered_at,
    } = row;

    let data = PersistedAdventurerData {
        id: AdventurerId::new(id).map_err(AdventurerRepositoryError::persistence)?,
        name: AdventurerName::new(name).map_err(AdventurerRepositoryError::persistence)?,
        rank: Rank::new(u32::try_from(rank).map_err(AdventurerRepositoryError::persistence)?),
        completed_quest_count: u32::try_from(completed_quest_count)
            .map_err(AdventurerRepositoryError::persistence)?,
        registered_at,
    };
    Ok(Adventurer::from_persisted(data))
}
