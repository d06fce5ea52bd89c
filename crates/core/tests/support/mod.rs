//! Shared test helpers for `kontactshare-core` integration tests.
//!
//! Provides an in-memory recording `ProfileStore` plus small session mocks so
//! controller tests can focus on behaviour instead of boilerplate.

pub mod store;

pub use store::{profile, RecordingStore};
