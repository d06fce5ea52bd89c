//! Port interfaces for session management
//!
//! The session token is an explicit, injected slot rather than ambient
//! process-global state, so tests can run independent sessions concurrently.

use async_trait::async_trait;
use kontactshare_domain::Result;

/// Trait for the durable session token slot
///
/// Storage is local (file, memory), so the interface is synchronous. A
/// durable implementation must survive a process restart: `set` on one
/// instance is visible to a later instance pointed at the same location.
pub trait TokenStore: Send + Sync {
    /// Store the session token, replacing any previous one
    fn set(&self, token: &str) -> Result<()>;

    /// Current session token, if any
    fn get(&self) -> Result<Option<String>>;

    /// Remove the session token
    fn clear(&self) -> Result<()>;
}

/// Trait for exchanging admin credentials for a session token
#[async_trait]
pub trait AdminAuthenticator: Send + Sync {
    /// Authenticate and return the bearer token on success
    async fn login(&self, email: &str, password: &str) -> Result<String>;
}
