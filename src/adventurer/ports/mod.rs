//! Port contracts for the adventurer roster.
//!
//! Ports define infrastructure-agnostic interfaces used by roster and quest
//! services.

pub mod repository;

#[cfg(test)]
pub use repository::MockAdventurerRepository;
pub use repository::{AdventurerRepository, AdventurerRepositoryError, AdventurerRepositoryResult};
