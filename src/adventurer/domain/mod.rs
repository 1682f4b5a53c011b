//! Domain model for the adventurer roster.

mod adventurer;
mod error;
mod ids;

pub use adventurer::{Adventurer, NewAdventurer, PersistedAdventurerData};
pub use error::AdventurerDomainError;
pub use ids::{AdventurerId, AdventurerName, Rank};
