//! In-memory implementation of the `ProfileStore` port
//!
//! Stands in for the remote service in the prototype variant: the same
//! controllers drive either backend through the shared port, so the profile
//! lifecycle logic exists exactly once. Enforces the server-side rules the
//! gateway delegates to the backend: unique-code collisions are rejected at
//! creation, timestamps are assigned here, and bulk results are reported per
//! item.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Local, Utc};
use kontactshare_core::{AdminAuthenticator, ProfileStore};
use kontactshare_domain::{
    BulkAction, BulkItemOutcome, BulkOutcome, CreatedProfile, DashboardStats, KontactError,
    ListQuery, Pagination, Profile, ProfilePage, ProfilePayload, ProfileStatus, Result,
};
use parking_lot::RwLock;

struct MemoryState {
    profiles: Vec<Profile>,
}

/// Profile store holding everything in process memory
#[derive(Clone)]
pub struct InMemoryProfileStore {
    state: Arc<RwLock<MemoryState>>,
    public_base_url: Option<String>,
}

impl InMemoryProfileStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { state: Arc::new(RwLock::new(MemoryState { profiles: Vec::new() })), public_base_url: None }
    }

    /// Configure the public base used to mint shareable links at creation.
    pub fn with_public_base(mut self, public_base_url: impl Into<String>) -> Self {
        self.public_base_url = Some(public_base_url.into());
        self
    }

    /// Number of stored profiles.
    pub fn len(&self) -> usize {
        self.state.read().profiles.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.state.read().profiles.is_empty()
    }

    fn matches(profile: &Profile, query: &ListQuery) -> bool {
        if let Some(status) = query.status {
            if profile.status != status {
                return false;
            }
        }
        if let Some(search) = &query.search {
            let needle = search.to_lowercase();
            return profile.full_name.to_lowercase().contains(&needle)
                || profile.email.to_lowercase().contains(&needle)
                || profile.company_name.to_lowercase().contains(&needle);
        }
        true
    }
}

impl Default for InMemoryProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdminAuthenticator for InMemoryProfileStore {
    /// The prototype variant has no credential database; any non-empty pair
    /// yields a fixed local session token.
    async fn login(&self, email: &str, password: &str) -> Result<String> {
        if email.is_empty() || password.is_empty() {
            return Err(KontactError::Remote("Invalid credentials".to_string()));
        }
        Ok("local-session".to_string())
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn create(&self, payload: &ProfilePayload) -> Result<CreatedProfile> {
        if payload.unique_code.is_empty() {
            return Err(KontactError::Remote("uniqueCode is required".to_string()));
        }

        let mut state = self.state.write();
        if state.profiles.iter().any(|p| p.unique_code == payload.unique_code) {
            return Err(KontactError::Remote("uniqueCode already exists".to_string()));
        }

        let now = Utc::now();
        let profile = Profile {
            id: payload.id.clone(),
            unique_code: payload.unique_code.clone(),
            pin: payload.pin.clone(),
            profile_photo: payload.profile_photo.clone(),
            full_name: payload.full_name.clone(),
            email: payload.email.clone(),
            job_title: payload.job_title.clone(),
            company_name: payload.company_name.clone(),
            mobile_primary: payload.mobile_primary.clone(),
            landline_number: payload.landline_number.clone(),
            address: payload.address.clone(),
            facebook_link: payload.facebook_link.clone(),
            instagram_link: payload.instagram_link.clone(),
            tiktok_link: payload.tiktok_link.clone(),
            whatsapp_number: payload.whatsapp_number.clone(),
            website_link: payload.website_link.clone(),
            status: ProfileStatus::Active,
            created_at: now,
            updated_at: now,
        };
        state.profiles.push(profile);

        let profile_link = self
            .public_base_url
            .as_ref()
            .map(|base| format!("{}/myprofile/{}", base.trim_end_matches('/'), payload.unique_code));

        Ok(CreatedProfile {
            id: payload.id.clone(),
            pin: payload.pin.clone(),
            unique_code: payload.unique_code.clone(),
            profile_link,
        })
    }

    async fn delete(&self, unique_code: &str) -> Result<()> {
        let mut state = self.state.write();
        let before = state.profiles.len();
        state.profiles.retain(|p| p.unique_code != unique_code);
        if state.profiles.len() == before {
            return Err(KontactError::NotFound(format!("profile {unique_code}")));
        }
        Ok(())
    }

    async fn ban(&self, unique_code: &str) -> Result<()> {
        let mut state = self.state.write();
        let profile = state
            .profiles
            .iter_mut()
            .find(|p| p.unique_code == unique_code)
            .ok_or_else(|| KontactError::NotFound(format!("profile {unique_code}")))?;
        profile.status = ProfileStatus::Banned;
        profile.updated_at = Utc::now();
        Ok(())
    }

    async fn unban(&self, unique_code: &str) -> Result<()> {
        let mut state = self.state.write();
        let profile = state
            .profiles
            .iter_mut()
            .find(|p| p.unique_code == unique_code)
            .ok_or_else(|| KontactError::NotFound(format!("profile {unique_code}")))?;
        profile.status = ProfileStatus::Active;
        profile.updated_at = Utc::now();
        Ok(())
    }

    async fn get_public(&self, unique_code: &str) -> Result<Profile> {
        self.state
            .read()
            .profiles
            .iter()
            .find(|p| p.unique_code == unique_code)
            .cloned()
            .ok_or_else(|| KontactError::NotFound(format!("profile {unique_code}")))
    }

    async fn list(&self, query: &ListQuery) -> Result<ProfilePage> {
        let state = self.state.read();
        let matching: Vec<Profile> =
            state.profiles.iter().filter(|p| Self::matches(p, query)).cloned().collect();

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

    async fn stats(&self) -> Result<DashboardStats> {
        let state = self.state.read();
        let today = Local::now().date_naive();
        let week_ago = Utc::now() - Duration::days(7);

        let total = state.profiles.len() as i64;
        let banned =
            state.profiles.iter().filter(|p| p.status == ProfileStatus::Banned).count() as i64;
        let today_count = state
            .profiles
            .iter()
            .filter(|p| p.created_at.with_timezone(&Local).date_naive() == today)
            .count() as i64;
        let week_count =
            state.profiles.iter().filter(|p| p.created_at >= week_ago).count() as i64;

        Ok(DashboardStats {
            total_profiles: total,
            active_profiles: total - banned,
            banned_profiles: banned,
            today_profiles: today_count,
            week_profiles: week_count,
        })
    }

    async fn bulk(&self, action: BulkAction, unique_codes: &[String]) -> Result<BulkOutcome> {
        let mut state = self.state.write();
        let now = Utc::now();
        let mut items = Vec::with_capacity(unique_codes.len());

        for code in unique_codes {
            let found = state.profiles.iter_mut().find(|p| p.unique_code == *code);
            match (found, action) {
                (Some(profile), BulkAction::Ban) => {
                    profile.status = ProfileStatus::Banned;
                    profile.updated_at = now;
                    items.push(BulkItemOutcome::ok(code.clone()));
                }
                (Some(profile), BulkAction::Unban) => {
                    profile.status = ProfileStatus::Active;
                    profile.updated_at = now;
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
