//! Service layer for adventurer registration and rank management.

use crate::adventurer::{
    domain::{Adventurer, AdventurerDomainError, AdventurerId, AdventurerName, NewAdventurer, Rank},
    ports::{AdventurerRepository, AdventurerRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Request payload for registering an adventurer with the guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterAdventurerRequest {
    name: String,
    rank: u32,
}

impl RegisterAdventurerRequest {
    /// Creates a registration request.
    #[must_use]
    pub fn new(name: impl Into<String>, rank: u32) -> Self {
        Self {
            name: name.into(),
            rank,
        }
    }
}

/// Request payload for promoting or demoting an adventurer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateAdventurerRankRequest {
    adventurer_id: i64,
    rank: u32,
}

impl UpdateAdventurerRankRequest {
    /// Creates a rank update request.
    #[must_use]
    pub const fn new(adventurer_id: i64, rank: u32) -> Self {
        Self {
            adventurer_id,
            rank,
        }
    }
}

/// Service-level errors for roster operations.
#[derive(Debug, Error)]
pub enum AdventurerRosterError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] AdventurerDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] AdventurerRepositoryError),
}

/// Result type for roster service operations.
pub type AdventurerRosterResult<T> = Result<T, AdventurerRosterError>;

/// Adventurer roster orchestration service.
#[derive(Clone)]
pub struct AdventurerRosterService<R, C>
where
    R: AdventurerRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> AdventurerRosterService<R, C>
where
    R: AdventurerRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new roster service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Registers a new adventurer with a zero completed-quest count.
    ///
    /// # Errors
    ///
    /// Returns [`AdventurerRosterError`] when the name is invalid or the
    /// repository rejects persistence.
    pub async fn register(
        &self,
        request: RegisterAdventurerRequest,
    ) -> AdventurerRosterResult<Adventurer> {
        let name = AdventurerName::new(request.name)?;
        let registration = NewAdventurer::new(name, Rank::new(request.rank), &*self.clock);
        let adventurer = self.repository.create_adventurer(&registration).await?;
        info!(adventurer_id = %adventurer.id(), rank = %adventurer.rank(), "adventurer registered");
        Ok(adventurer)
    }

    /// Changes an adventurer's rank.
    ///
    /// # Errors
    ///
    /// Returns [`AdventurerRosterError::Domain`] for a non-positive id and
    /// [`AdventurerRosterError::Repository`] when the adventurer does not
    /// exist or persistence fails.
    pub async fn update_rank(
        &self,
        request: UpdateAdventurerRankRequest,
    ) -> AdventurerRosterResult<()> {
        let adventurer_id = AdventurerId::new(request.adventurer_id)?;
        let rank = Rank::new(request.rank);
        self.repository
            .update_adventurer_rank(adventurer_id, rank)
            .await?;
        info!(%adventurer_id, %rank, "adventurer rank updated");
        Ok(())
    }

    /// Loads an adventurer by raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AdventurerRosterError::Domain`] for a non-positive id and
    /// [`AdventurerRosterError::Repository`] when the adventurer does not
    /// exist or persistence fails.
    pub async fn find(&self, adventurer_id: i64) -> AdventurerRosterResult<Adventurer> {
        let id = AdventurerId::new(adventurer_id)?;
        Ok(self.repository.get_adventurer(id).await?)
    }
}
