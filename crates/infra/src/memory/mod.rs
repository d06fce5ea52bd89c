//! In-memory profile store (prototype-variant backend)

mod store;

pub use store::InMemoryProfileStore;
