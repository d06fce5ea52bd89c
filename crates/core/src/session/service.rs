//! Session service
//!
//! Owns the login/logout lifecycle over an injected authenticator and token
//! slot. Every authenticated gateway call reads the same slot, so after
//! `logout` those calls fail with `Unauthenticated` until the next `login`.

use std::sync::Arc;

use kontactshare_domain::Result;
use tracing::{debug, info};

use super::ports::{AdminAuthenticator, TokenStore};

/// Admin session lifecycle service
pub struct SessionService {
    authenticator: Arc<dyn AdminAuthenticator>,
    tokens: Arc<dyn TokenStore>,
}

impl SessionService {
    /// Create a new session service over the given seams.
    pub fn new(authenticator: Arc<dyn AdminAuthenticator>, tokens: Arc<dyn TokenStore>) -> Self {
        Self { authenticator, tokens }
    }

    /// Log in and persist the resulting bearer token.
    ///
    /// # Errors
    ///
    /// Returns the authenticator's error unchanged if the credentials are
    /// rejected, or a storage error if the token cannot be persisted.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        debug!(email = %email, "admin login attempt");
        let token = self.authenticator.login(email, password).await?;
        self.tokens.set(&token)?;
        info!("admin login successful");
        Ok(())
    }

    /// Clear the stored session token.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the slot cannot be cleared.
    pub fn logout(&self) -> Result<()> {
        self.tokens.clear()?;
        info!("admin session cleared");
        Ok(())
    }

    /// Whether a session token is currently stored.
    ///
    /// There is no client-side expiry tracking; a stale token is only
    /// detected when the backend rejects it.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.tokens.get(), Ok(Some(_)))
    }
}
