//! `PostgreSQL` adapters for quest board persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresQuestRepository, QuestPgPool};
