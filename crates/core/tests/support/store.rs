//! Mock store implementations for testing
//!
//! Provides an in-memory mock for the `ProfileStore` port that records every
//! call, enabling deterministic unit tests with call-count assertions and no
//! network dependencies.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use kontactshare_core::ProfileStore;
use kontactshare_domain::{
    BulkAction, BulkItemOutcome, BulkOutcome, CreatedProfile, DashboardStats, KontactError,
    ListQuery, Pagination, Profile, ProfilePage, ProfilePayload, ProfileStatus,
    Result as DomainResult,
};
use parking_lot::Mutex;

/// Build a minimal active profile for tests.
pub fn profile(unique_code: &str, full_name: &str) -> Profile {
    let now = Utc::now();
    Profile {
        id: format!("20240101-0000-{:04}", unique_code.len()),
        unique_code: unique_code.to_string(),
        pin: "12345".to_string(),
        profile_photo: None,
        full_name: full_name.to_string(),
        email: format!("{unique_code}@example.com"),
        job_title: "Engineer".to_string(),
        company_name: "Example Co".to_string(),
        mobile_primary: "555-0100".to_string(),
        landline_number: "555-0101".to_string(),
        address: "1 Example Way".to_string(),
        facebook_link: String::new(),
        instagram_link: String::new(),
        tiktok_link: String::new(),
        whatsapp_number: String::new(),
        website_link: String::new(),
        status: ProfileStatus::Active,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Default)]
struct RecordingState {
    profiles: Vec<Profile>,
    list_calls: Vec<ListQuery>,
    bulk_calls: Vec<(BulkAction, Vec<String>)>,
    create_calls: Vec<ProfilePayload>,
    mutation_calls: Vec<String>,
    fail_next: Option<KontactError>,
}

/// In-memory recording mock for the `ProfileStore` port.
///
/// Seeded with profiles, applies search/status filters and pagination the
/// way the real backends do, and records every call for assertions.
#[derive(Clone, Default)]
pub struct RecordingStore {
    state: Arc<Mutex<RecordingState>>,
}

impl RecordingStore {
    /// Create a mock seeded with the provided profiles.
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { state: Arc::new(Mutex::new(RecordingState { profiles, ..Default::default() })) }
    }

    /// Make the next store call fail with the given error.
    pub fn fail_next(&self, err: KontactError) {
        self.state.lock().fail_next = Some(err);
    }

    /// Every list query issued so far, in order.
    pub fn list_calls(&self) -> Vec<ListQuery> {
        self.state.lock().list_calls.clone()
    }

    /// Every bulk request issued so far, in order.
    pub fn bulk_calls(&self) -> Vec<(BulkAction, Vec<String>)> {
        self.state.lock().bulk_calls.clone()
    }

    /// Number of create requests issued so far.
    pub fn create_call_count(&self) -> usize {
        self.state.lock().create_calls.len()
    }

    /// Single-profile mutations issued so far, as `"<op> <code>"` strings.
    pub fn mutation_calls(&self) -> Vec<String> {
        self.state.lock().mutation_calls.clone()
    }

    /// Current status of a seeded profile.
    pub fn status_of(&self, unique_code: &str) -> Option<ProfileStatus> {
        self.state
            .lock()
            .profiles
            .iter()
            .find(|p| p.unique_code == unique_code)
            .map(|p| p.status)
    }

    fn take_failure(&self) -> Option<KontactError> {
        self.state.lock().fail_next.take()
    }
}

#[async_trait]
impl ProfileStore for RecordingStore {
    async fn create(&self, payload: &ProfilePayload) -> DomainResult<CreatedProfile> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let mut state = self.state.lock();
        state.create_calls.push(payload.clone());
        Ok(CreatedProfile {
            id: payload.id.clone(),
            pin: payload.pin.clone(),
            unique_code: payload.unique_code.clone(),
            profile_link: None,
        })
    }

    async fn delete(&self, unique_code: &str) -> DomainResult<()> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let mut state = self.state.lock();
        state.mutation_calls.push(format!("delete {unique_code}"));
        state.profiles.retain(|p| p.unique_code != unique_code);
        Ok(())
    }

    async fn ban(&self, unique_code: &str) -> DomainResult<()> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let mut state = self.state.lock();
        state.mutation_calls.push(format!("ban {unique_code}"));
        if let Some(p) = state.profiles.iter_mut().find(|p| p.unique_code == unique_code) {
            p.status = ProfileStatus::Banned;
        }
        Ok(())
    }

    async fn unban(&self, unique_code: &str) -> DomainResult<()> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let mut state = self.state.lock();
        state.mutation_calls.push(format!("unban {unique_code}"));
        if let Some(p) = state.profiles.iter_mut().find(|p| p.unique_code == unique_code) {
            p.status = ProfileStatus::Active;
        }
        Ok(())
    }

    async fn get_public(&self, unique_code: &str) -> DomainResult<Profile> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        self.state
            .lock()
            .profiles
            .iter()
            .find(|p| p.unique_code == unique_code)
            .cloned()
            .ok_or_else(|| KontactError::NotFound(format!("profile {unique_code}")))
    }

    async fn list(&self, query: &ListQuery) -> DomainResult<ProfilePage> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let mut state = self.state.lock();
        state.list_calls.push(query.clone());

        let needle = query.search.as_ref().map(|s| s.to_lowercase());
        let matching: Vec<Profile> = state
            .profiles
            .iter()
            .filter(|p| query.status.map_or(true, |status| p.status == status))
            .filter(|p| {
                needle.as_ref().map_or(true, |needle| {
                    p.full_name.to_lowercase().contains(needle)
                        || p.email.to_lowercase().contains(needle)
                        || p.company_name.to_lowercase().contains(needle)
                })
            })
            .cloned()
            .collect();

        let total = matching.len() as u64;
        let limit = query.limit.max(1);
        let pages = total.div_ceil(u64::from(limit)) as u32;
        // Offset in u64: page * limit can exceed u32 for far-out pages.
        let start = (u64::from(query.page.saturating_sub(1)) * u64::from(limit)) as usize;
        let profiles: Vec<Profile> =
            matching.into_iter().skip(start).take(limit as usize).collect();

        Ok(ProfilePage {
            profiles,
            pagination: Pagination { page: query.page, limit, total, pages },
        })
    }

    async fn stats(&self) -> DomainResult<DashboardStats> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let state = self.state.lock();
        let total = state.profiles.len() as i64;
        let banned =
            state.profiles.iter().filter(|p| p.status == ProfileStatus::Banned).count() as i64;
        Ok(DashboardStats {
            total_profiles: total,
            active_profiles: total - banned,
            banned_profiles: banned,
            today_profiles: total,
            week_profiles: total,
        })
    }

    async fn bulk(
        &self,
        action: BulkAction,
        unique_codes: &[String],
    ) -> DomainResult<BulkOutcome> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let mut state = self.state.lock();
        state.bulk_calls.push((action, unique_codes.to_vec()));

        let mut items = Vec::with_capacity(unique_codes.len());
        for code in unique_codes {
            let found = state.profiles.iter_mut().find(|p| p.unique_code == *code);
            match (found, action) {
                (Some(p), BulkAction::Ban) => {
                    p.status = ProfileStatus::Banned;
                    items.push(BulkItemOutcome::ok(code.clone()));
                }
                (Some(p), BulkAction::Unban) => {
                    p.status = ProfileStatus::Active;
                    items.push(BulkItemOutcome::ok(code.clone()));
                }
                (Some(_), BulkAction::Delete) => {
                    state.profiles.retain(|p| p.unique_code != *code);
                    items.push(BulkItemOutcome::ok(code.clone()));
                }
                (None, _) => items.push(BulkItemOutcome::failed(code.clone(), "not found")),
            }
        }
        Ok(BulkOutcome { items })
    }
}
