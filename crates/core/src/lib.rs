//! # KontactShare Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for profile storage and sessions
//! - The profile list, selection, and creation controllers
//! - The session and dashboard services
//!
//! ## Architecture Principles
//! - Only depends on `kontactshare-domain`
//! - No HTTP or filesystem code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod profiles;
pub mod session;
pub mod stats;

// Re-export specific items to avoid ambiguity
pub use profiles::create::{CreationState, CredentialField, ProfileCreation};
pub use profiles::list::{LoadTicket, ProfileListController};
pub use profiles::ports::ProfileStore;
pub use profiles::selection::SelectionController;
pub use session::ports::{AdminAuthenticator, TokenStore};
pub use session::service::SessionService;
pub use stats::{DashboardService, ProfileActions};
