//! Durable file-backed session token slot
//!
//! Persists the bearer token under a fixed path so a process restart
//! preserves the session. Writes go to a sibling temp file first and are
//! moved into place, so a crash mid-write cannot corrupt the slot.

use std::fs;
use std::path::{Path, PathBuf};

use kontactshare_core::TokenStore;
use kontactshare_domain::{KontactError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Serialize, Deserialize)]
struct StoredSession {
    token: String,
}

/// Token slot persisted as a small JSON file
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store backed by the given path. The file and its parent
    /// directories are created lazily on the first `set`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(context: &str, err: std::io::Error) -> KontactError {
        KontactError::Internal(format!("{context}: {err}"))
    }
}

impl TokenStore for FileTokenStore {
    fn set(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| Self::io_err("failed to create session directory", e))?;
            }
        }

        let payload = serde_json::to_string(&StoredSession { token: token.to_string() })
            .map_err(|e| KontactError::Internal(format!("failed to encode session: {e}")))?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, payload).map_err(|e| Self::io_err("failed to write session file", e))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| Self::io_err("failed to move session file into place", e))?;

        debug!(path = %self.path.display(), "session token persisted");
        Ok(())
    }

    fn get(&self) -> Result<Option<String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(Self::io_err("failed to read session file", err)),
        };

        let stored: StoredSession = serde_json::from_str(&raw)
            .map_err(|e| KontactError::Internal(format!("corrupt session file: {e}")))?;
        Ok(Some(stored.token))
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Self::io_err("failed to remove session file", err)),
        }
    }
}
