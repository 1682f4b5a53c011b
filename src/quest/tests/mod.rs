//! Unit tests for the quest bounded context.
