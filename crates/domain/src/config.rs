//! Configuration structures
//!
//! Plain data carriers for application configuration. Loading (environment
//! variables, config files) lives in the infra crate.

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Remote API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Session persistence settings
    #[serde(default)]
    pub session: SessionConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the profile service (e.g., "http://localhost:3001/api")
    pub base_url: String,
    /// Public base URL used to build shareable profile links
    /// (e.g., "http://localhost:5173")
    pub public_base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001/api".to_string(),
            public_base_url: "http://localhost:5173".to_string(),
            timeout_seconds: 30,
        }
    }
}

/// Session persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Path of the durable session token file
    pub token_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { token_path: ".kontactshare/session.json".to_string() }
    }
}
