//! Diesel row models for adventurer persistence.

use super::schema::adventurers;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for adventurer records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = adventurers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AdventurerRow {
    /// Adventurer identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Guild rank.
    pub rank: i32,
    /// Completed-quest counter.
    pub completed_quest_count: i32,
    /// Registration timestamp.
    pub registered_at: DateTime<Utc>,
}

/// Insert model for adventurer records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = adventurers)]
pub struct NewAdventurerRow {
    /// Display name.
    pub name: String,
    /// Guild rank.
    pub rank: i32,
    /// Completed-quest counter, zero on registration.
    pub completed_quest_count: i32,
    /// Registration timestamp.
    pub registered_at: DateTime<Utc>,
}
