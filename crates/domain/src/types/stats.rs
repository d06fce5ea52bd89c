//! Dashboard statistics types

use serde::{Deserialize, Serialize};

/// Aggregate profile counts shown on the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Total number of profiles
    pub total_profiles: i64,
    /// Profiles currently in the `active` state
    pub active_profiles: i64,
    /// Profiles currently in the `banned` state
    pub banned_profiles: i64,
    /// Profiles created today (local time)
    pub today_profiles: i64,
    /// Profiles created in the last seven days
    pub week_profiles: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_deserialize_from_backend_json() {
        let raw = r#"{
            "totalProfiles": 120,
            "activeProfiles": 100,
            "bannedProfiles": 20,
            "todayProfiles": 4,
            "weekProfiles": 15
        }"#;

        let stats: DashboardStats = serde_json::from_str(raw).unwrap();
        assert_eq!(stats.total_profiles, 120);
        assert_eq!(stats.banned_profiles, 20);
    }
}
