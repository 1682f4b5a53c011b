//! Port contracts for the quest board and lifecycle.
//!
//! Ports define infrastructure-agnostic interfaces used by quest services.

pub mod repository;

#[cfg(test)]
pub use repository::MockQuestRepository;
pub use repository::{QuestRepository, QuestRepositoryError, QuestRepositoryResult};
