//! Diesel row models for quest board persistence.

use super::schema::{quest_claims, quests};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for quest records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = quests)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct QuestRow {
    /// Quest identifier.
    pub id: i64,
    /// Quest title.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Minimum adventurer rank.
    pub minimum_rank: i32,
    /// Reward amount.
    pub reward_number: i64,
    /// Lifecycle status code.
    pub status: i16,
    /// Posting timestamp.
    pub posted_at: DateTime<Utc>,
}

/// Insert model for quest records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = quests)]
pub struct NewQuestRow {
    /// Quest title.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Minimum adventurer rank.
    pub minimum_rank: i32,
    /// Reward amount.
    pub reward_number: i64,
    /// Lifecycle status code.
    pub status: i16,
    /// Posting timestamp.
    pub posted_at: DateTime<Utc>,
}

/// Insert model for claim records.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = quest_claims)]
pub struct NewClaimRow {
    /// Claimed quest.
    pub quest_id: i64,
    /// Claiming adventurer.
    pub adventurer_id: i64,
}
