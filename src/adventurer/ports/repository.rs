//! Repository port for adventurer persistence.

use crate::adventurer::domain::{Adventurer, AdventurerId, NewAdventurer, Rank};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for adventurer repository operations.
pub type AdventurerRepositoryResult<T> = Result<T, AdventurerRepositoryError>;

/// Adventurer persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdventurerRepository: Send + Sync {
    /// Loads an adventurer by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AdventurerRepositoryError::NotFound`] when no adventurer has
    /// the identifier.
    async fn get_adventurer(&self, id: AdventurerId) -> AdventurerRepositoryResult<Adventurer>;

    /// Adds one to the adventurer's completed-quest counter in a single
    /// write.
    ///
    /// # Errors
    ///
    /// Returns [`AdventurerRepositoryError::NotFound`] when no adventurer has
    /// the identifier.
    async fn increment_completed_quest_count(
        &self,
        id: AdventurerId,
    ) -> AdventurerRepositoryResult<()>;

    /// Stores a new adventurer and returns it with its assigned identifier.
    async fn create_adventurer(
        &self,
        adventurer: &NewAdventurer,
    ) -> AdventurerRepositoryResult<Adventurer>;

    /// Overwrites the adventurer's rank.
    ///
    /// # Errors
    ///
    /// Returns [`AdventurerRepositoryError::NotFound`] when no adventurer has
    /// the identifier.
    async fn update_adventurer_rank(
        &self,
        id: AdventurerId,
        rank: Rank,
    ) -> AdventurerRepositoryResult<()>;
}

/// Errors returned by adventurer repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AdventurerRepositoryError {
    /// The adventurer was not found.
    #[error("adventurer not found: {0}")]
    NotFound(AdventurerId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AdventurerRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
