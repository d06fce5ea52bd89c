//! # KontactShare Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The HTTP gateway client against the remote profile service
//! - Durable (file) and in-memory session token stores
//! - The in-memory profile store (prototype-variant backend)
//! - The configuration loader
//!
//! ## Architecture
//! - Implements traits defined in `kontactshare-core`
//! - Depends on `kontactshare-domain` and `kontactshare-core`
//! - Contains all "impure" code (network, filesystem)

pub mod config;
pub mod gateway;
pub mod http;
pub mod memory;
pub mod session;

// Re-export commonly used items
pub use gateway::ApiGateway;
pub use http::{HttpClient, HttpClientBuilder};
pub use memory::InMemoryProfileStore;
pub use session::{FileTokenStore, MemoryTokenStore};
