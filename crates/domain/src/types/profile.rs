//! Profile types
//!
//! A profile is a managed contact-sharing record. The `unique_code` is the
//! sole stable handle for ban/unban/delete/view operations; `id` is a
//! human-formatted display string and is not guaranteed unique.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    Active,
    Banned,
}

impl ProfileStatus {
    /// Wire representation of the status
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Banned => "banned",
        }
    }
}

impl std::fmt::Display for ProfileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A managed contact-sharing record as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Human-formatted ID card string (display only)
    pub id: String,
    /// Opaque token used in public links and as the key for all mutations
    pub unique_code: String,
    /// 5-digit numeric credential
    pub pin: String,
    pub profile_photo: Option<String>,
    pub full_name: String,
    pub email: String,
    pub job_title: String,
    pub company_name: String,
    pub mobile_primary: String,
    pub landline_number: String,
    pub address: String,
    pub facebook_link: String,
    pub instagram_link: String,
    pub tiktok_link: String,
    pub whatsapp_number: String,
    pub website_link: String,
    pub status: ProfileStatus,
    /// Server-assigned, immutable from the client's perspective
    pub created_at: DateTime<Utc>,
    /// Server-assigned, advances on any mutation
    pub updated_at: DateTime<Utc>,
}

/// Create-request body for a new profile
///
/// Carries exactly what is in the form at submit time, defaults included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    pub id: String,
    pub pin: String,
    pub unique_code: String,
    pub profile_photo: Option<String>,
    pub full_name: String,
    pub email: String,
    pub job_title: String,
    pub company_name: String,
    pub mobile_primary: String,
    pub landline_number: String,
    pub address: String,
    pub facebook_link: String,
    pub instagram_link: String,
    pub tiktok_link: String,
    pub whatsapp_number: String,
    pub website_link: String,
}

impl ProfilePayload {
    /// Pre-populated placeholder values shown in a fresh creation form.
    ///
    /// Credentials (`id`, `pin`, `unique_code`) start empty and are filled by
    /// the credential generator or by the operator.
    pub fn with_defaults() -> Self {
        Self {
            id: String::new(),
            pin: String::new(),
            unique_code: String::new(),
            profile_photo: Some("/uploads/kontacksharelogo.png".to_string()),
            full_name: "Default Name".to_string(),
            email: "default@example.com".to_string(),
            job_title: "Default Job Title".to_string(),
            company_name: "Default Company".to_string(),
            mobile_primary: "000-000-0000".to_string(),
            landline_number: "000-000-0000".to_string(),
            address: "Default Address".to_string(),
            facebook_link: "Update your Facebook Link".to_string(),
            instagram_link: "Update your Instagram Link".to_string(),
            tiktok_link: "Update your TikTok Link".to_string(),
            whatsapp_number: "Update your WhatsApp Number".to_string(),
            website_link: "Update your web link".to_string(),
        }
    }
}

/// Success body returned by the create endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedProfile {
    pub id: String,
    pub pin: String,
    pub unique_code: String,
    /// Shareable public link, e.g. `<public base>/myprofile/<uniqueCode>`
    pub profile_link: Option<String>,
}
