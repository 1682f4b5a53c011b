//! Quest board and quest lifecycle management.
//!
//! The guild posts quests; adventurers claim them, work them and report the
//! outcome. A quest moves between three states:
//!
//! ```text
//! Available --take--> Working
//! Working --report(abandoned)--> Available
//! Working --report(completed)--> Completed  (terminal)
//! ```
//!
//! Claim records tie a quest to the adventurer who took it. They are
//! append-only: releasing a quest back to the board does not remove them.
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
