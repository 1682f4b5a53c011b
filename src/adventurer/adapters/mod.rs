//! Adapter implementations for adventurer roster ports.

pub mod memory;
pub mod postgres;
