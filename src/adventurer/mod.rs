//! Adventurer roster management for the guild board.
//!
//! Adventurers are the members who claim and complete quests. This context
//! owns their records and the completed-quest counter that the quest
//! lifecycle bumps when a quest is reported as done. Layout follows the
//! other bounded contexts:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
