//! Test utilities
//!
//! Fixtures and hand-written doubles for unit testing.
//!
//! Repositories are not mocked: tests use the in-memory adapters from
//! `adapters::memory`, seeded through their `with_*` builders. Only the
//! license validator, an external service, gets a scripted double here.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
