//! List query and pagination types

use serde::{Deserialize, Serialize};

use super::profile::{Profile, ProfileStatus};

/// Query state for the paginated/filtered profile list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Case-insensitive substring search over name/email/company
    pub search: Option<String>,
    /// Status filter; `None` means all statuses
    pub status: Option<ProfileStatus>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { page: 1, limit: 20, search: None, status: None }
    }
}

impl ListQuery {
    /// Same filters, different page.
    pub fn with_page(&self, page: u32) -> Self {
        Self { page, ..self.clone() }
    }
}

/// Pagination metadata returned alongside a profile page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    /// Total matching profiles across all pages
    pub total: u64,
    /// Total number of pages
    pub pages: u32,
}

/// One page of the profile list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilePage {
    pub profiles: Vec<Profile>,
    pub pagination: Pagination,
}

impl ProfilePage {
    /// Unique codes of every profile on this page, in display order.
    pub fn unique_codes(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.unique_code.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_is_first_page_of_twenty() {
        let query = ListQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 20);
        assert!(query.search.is_none());
        assert!(query.status.is_none());
    }

    #[test]
    fn with_page_preserves_filters() {
        let query = ListQuery {
            search: Some("ada".to_string()),
            status: Some(ProfileStatus::Banned),
            ..ListQuery::default()
        };

        let next = query.with_page(3);
        assert_eq!(next.page, 3);
        assert_eq!(next.search.as_deref(), Some("ada"));
        assert_eq!(next.status, Some(ProfileStatus::Banned));
    }

    #[test]
    fn pagination_deserializes_from_backend_json() {
        let raw = r#"{"page":2,"limit":20,"total":45,"pages":3}"#;
        let pagination: Pagination = serde_json::from_str(raw).unwrap();
        assert_eq!(pagination.page, 2);
        assert_eq!(pagination.pages, 3);
    }
}
