//! In-memory session token slot

use kontactshare_core::TokenStore;
use kontactshare_domain::Result;
use parking_lot::RwLock;

/// Token slot held in process memory; lost on restart.
#[derive(Default)]
pub struct MemoryTokenStore {
    slot: RwLock<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn set(&self, token: &str) -> Result<()> {
        *self.slot.write() = Some(token.to_string());
        Ok(())
    }

    fn get(&self) -> Result<Option<String>> {
        Ok(self.slot.read().clone())
    }

    fn clear(&self) -> Result<()> {
        *self.slot.write() = None;
        Ok(())
    }
}
