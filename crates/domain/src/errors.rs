//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for KontactShare
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum KontactError {
    /// No session token is present, or the backend rejected the one we sent.
    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Validation error: {0}")]
    Validation(String),

    /// Non-2xx response from the backend, carrying the parsed `error` field
    /// or a generic `HTTP <status>` message.
    #[error("{0}")]
    Remote(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for KontactShare operations
pub type Result<T> = std::result::Result<T, KontactError>;
