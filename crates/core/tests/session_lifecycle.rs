//! Session service behaviour

use std::sync::Arc;

use async_trait::async_trait;
use kontactshare_core::{AdminAuthenticator, SessionService, TokenStore};
use kontactshare_domain::{KontactError, Result as DomainResult};
use parking_lot::RwLock;

/// Token slot kept in memory for tests.
#[derive(Default)]
struct MemoryTokens {
    slot: RwLock<Option<String>>,
}

impl TokenStore for MemoryTokens {
    fn set(&self, token: &str) -> DomainResult<()> {
        *self.slot.write() = Some(token.to_string());
        Ok(())
    }

    fn get(&self) -> DomainResult<Option<String>> {
        Ok(self.slot.read().clone())
    }

    fn clear(&self) -> DomainResult<()> {
        *self.slot.write() = None;
        Ok(())
    }
}

/// Authenticator accepting a single fixed credential pair.
struct FixedAuthenticator;

#[async_trait]
impl AdminAuthenticator for FixedAuthenticator {
    async fn login(&self, email: &str, password: &str) -> DomainResult<String> {
        if email == "admin@example.com" && password == "hunter2" {
            Ok("session-token-1".to_string())
        } else {
            Err(KontactError::Remote("Invalid credentials".to_string()))
        }
    }
}

#[tokio::test]
async fn login_stores_the_token_and_logout_clears_it() {
    let tokens = Arc::new(MemoryTokens::default());
    let service = SessionService::new(Arc::new(FixedAuthenticator), tokens.clone());

    assert!(!service.is_authenticated());

    service.login("admin@example.com", "hunter2").await.unwrap();
    assert!(service.is_authenticated());
    assert_eq!(tokens.get().unwrap().as_deref(), Some("session-token-1"));

    service.logout().unwrap();
    assert!(!service.is_authenticated());
    assert!(tokens.get().unwrap().is_none());
}

#[tokio::test]
async fn rejected_credentials_leave_the_slot_empty() {
    let tokens = Arc::new(MemoryTokens::default());
    let service = SessionService::new(Arc::new(FixedAuthenticator), tokens.clone());

    let err = service.login("admin@example.com", "wrong").await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(!service.is_authenticated());
}

#[tokio::test]
async fn independent_sessions_do_not_share_state() {
    let tokens_a = Arc::new(MemoryTokens::default());
    let tokens_b = Arc::new(MemoryTokens::default());
    let session_a = SessionService::new(Arc::new(FixedAuthenticator), tokens_a);
    let session_b = SessionService::new(Arc::new(FixedAuthenticator), tokens_b);

    session_a.login("admin@example.com", "hunter2").await.unwrap();

    assert!(session_a.is_authenticated());
    assert!(!session_b.is_authenticated());
}
