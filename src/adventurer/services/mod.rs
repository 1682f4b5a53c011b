//! Application services for the adventurer roster.

mod roster;

pub use roster::{
    AdventurerRosterError, AdventurerRosterResult, AdventurerRosterService,
    RegisterAdventurerRequest, UpdateAdventurerRankRequest,
};
