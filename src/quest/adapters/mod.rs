//! Adapter implementations for quest board ports.

pub mod memory;
pub mod postgres;
