//! Port interfaces for profile storage
//!
//! These traits define the boundary between core business logic and the
//! backing store. Two adapters exist in infra: the HTTP gateway against the
//! remote profile service, and the in-memory store used by the prototype
//! variant. Both implement the same interface so the controllers never know
//! which backend they are driving.

use async_trait::async_trait;
use kontactshare_domain::{
    BulkAction, BulkOutcome, CreatedProfile, DashboardStats, ListQuery, Profile, ProfilePage,
    ProfilePayload, Result,
};

/// Trait for profile persistence, retrieval, and lifecycle transitions
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Create a new profile from the submitted payload
    async fn create(&self, payload: &ProfilePayload) -> Result<CreatedProfile>;

    /// Delete a profile by unique code (irreversible)
    async fn delete(&self, unique_code: &str) -> Result<()>;

    /// Transition a profile to `banned`
    async fn ban(&self, unique_code: &str) -> Result<()>;

    /// Transition a profile back to `active`
    async fn unban(&self, unique_code: &str) -> Result<()>;

    /// Fetch the public view of a profile by unique code
    async fn get_public(&self, unique_code: &str) -> Result<Profile>;

    /// Fetch one paginated/filtered page of profiles (admin-scoped)
    async fn list(&self, query: &ListQuery) -> Result<ProfilePage>;

    /// Fetch dashboard statistics
    async fn stats(&self) -> Result<DashboardStats>;

    /// Apply one action to a batch of profiles
    async fn bulk(&self, action: BulkAction, unique_codes: &[String]) -> Result<BulkOutcome>;
}
