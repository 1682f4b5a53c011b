//! In-memory adapters for the adventurer roster.

mod roster;

pub use roster::InMemoryAdventurerRepository;
