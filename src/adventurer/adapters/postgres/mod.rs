//! `PostgreSQL` adapters for adventurer persistence.

mod models;
mod repository;
mod schema;

pub use repository::{AdventurerPgPool, PostgresAdventurerRepository};
