//! Unit tests for the adventurer bounded context.
