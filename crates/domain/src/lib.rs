//! # KontactShare Domain
//!
//! Business domain types and models for the KontactShare admin core.
//!
//! This crate contains:
//! - Profile, query, and statistics data types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - The credential generator (unique code, PIN, ID card)
//!
//! ## Architecture
//! - No dependencies on other KontactShare crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod credentials;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
