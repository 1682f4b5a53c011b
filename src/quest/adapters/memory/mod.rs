//! In-memory adapters for the quest board.

mod board;

pub use board::InMemoryQuestRepository;
