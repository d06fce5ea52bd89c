//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files (TOML)
//!
//! ## Environment Variables
//! - `KONTACTSHARE_API_BASE_URL`: Base URL of the profile service (required)
//! - `KONTACTSHARE_PUBLIC_BASE_URL`: Public base for shareable links (required)
//! - `KONTACTSHARE_API_TIMEOUT_SECS`: Request timeout in seconds (optional)
//! - `KONTACTSHARE_TOKEN_PATH`: Durable session token file (optional)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.toml` (current working directory)
//! 2. `./kontactshare.toml` (current working directory)
//! 3. `../config.toml` and `../kontactshare.toml` (parent directory)

use std::path::{Path, PathBuf};

use kontactshare_domain::{ApiConfig, Config, KontactError, Result, SessionConfig};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `KontactError::Config` if configuration cannot be loaded from
/// either source or the file format is invalid.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "environment incomplete, trying config file");
            load_from_file(None)
        }
    }
}

/// Load configuration, falling back to built-in defaults as a last resort.
pub fn load_or_default() -> Config {
    load().unwrap_or_default()
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `KontactError::Config` if a required variable is missing or a
/// numeric variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("KONTACTSHARE_API_BASE_URL")?;
    let public_base_url = env_var("KONTACTSHARE_PUBLIC_BASE_URL")?;

    let timeout_seconds = match std::env::var("KONTACTSHARE_API_TIMEOUT_SECS") {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| KontactError::Config(format!("invalid timeout: {e}")))?,
        Err(_) => ApiConfig::default().timeout_seconds,
    };

    let token_path = std::env::var("KONTACTSHARE_TOKEN_PATH")
        .unwrap_or_else(|_| SessionConfig::default().token_path);

    Ok(Config {
        api: ApiConfig { base_url, public_base_url, timeout_seconds },
        session: SessionConfig { token_path },
    })
}

/// Load configuration from a TOML file
///
/// If `path` is `None`, probes the standard locations.
///
/// # Errors
/// Returns `KontactError::Config` if no file is found or parsing fails.
pub fn load_from_file(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => probe_config_paths().ok_or_else(|| {
            KontactError::Config("no config file found in standard locations".to_string())
        })?,
    };

    let raw = std::fs::read_to_string(&path).map_err(|e| {
        KontactError::Config(format!("failed to read {}: {e}", path.display()))
    })?;

    let config: Config = toml::from_str(&raw).map_err(|e| {
        KontactError::Config(format!("failed to parse {}: {e}", path.display()))
    })?;

    tracing::info!(path = %path.display(), "configuration loaded from file");
    Ok(config)
}

fn probe_config_paths() -> Option<PathBuf> {
    let candidates = [
        "config.toml",
        "kontactshare.toml",
        "../config.toml",
        "../kontactshare.toml",
    ];

    candidates.iter().map(PathBuf::from).find(|p| p.is_file())
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| KontactError::Config(format!("missing environment variable {name}")))
}
