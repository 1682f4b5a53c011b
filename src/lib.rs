//! Guild board: quest posting, claiming and completion tracking.
//!
//! The guild posts quests with a minimum rank and a reward; adventurers
//! claim quests they are senior enough for and later report them as
//! completed or abandoned. The interesting part is the quest lifecycle in
//! [`quest::services::QuestLifecycleService`]; everything around it is
//! record keeping.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//!
//! # Modules
//!
//! - [`adventurer`]: Adventurer roster and completed-quest counters
//! - [`quest`]: Quest board, claims and the quest lifecycle
//! - [`config`]: Environment-driven process configuration

pub mod adventurer;
pub mod config;
pub mod quest;
