//! Domain data types
//!
//! Wire-facing types use camelCase field names to match the backend JSON
//! contract exactly.

pub mod bulk;
pub mod profile;
pub mod query;
pub mod stats;

pub use bulk::{BulkAction, BulkItemOutcome, BulkOutcome};
pub use profile::{CreatedProfile, Profile, ProfilePayload, ProfileStatus};
pub use query::{ListQuery, Pagination, ProfilePage};
pub use stats::DashboardStats;
