//! Session token stores
//!
//! The durable file-backed slot preserves the session across restarts; the
//! in-memory slot serves tests and the prototype variant.

mod file;
mod memory;

pub use file::FileTokenStore;
pub use memory::MemoryTokenStore;
