//! Profile creation workflow
//!
//! State machine: `Editing -> Submitting -> {Succeeded, Editing}`. A failed
//! submission returns to `Editing` with the error message retained and every
//! entered field value intact. Success surfaces the generated credentials
//! and the shareable profile link.

use std::sync::Arc;

use kontactshare_domain::credentials::{self, Credentials};
use kontactshare_domain::{CreatedProfile, KontactError, ProfilePayload, Result};
use tracing::{debug, info};

use super::ports::ProfileStore;

/// Phase of the creation workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationState {
    Editing,
    Submitting,
    Succeeded,
}

/// Generated credential fields that can be regenerated individually
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    Id,
    Pin,
    UniqueCode,
}

/// Profile creation workflow
pub struct ProfileCreation {
    store: Arc<dyn ProfileStore>,
    public_base_url: String,
    /// The form as the operator sees it; submitted verbatim.
    pub form: ProfilePayload,
    state: CreationState,
    error: Option<String>,
    created: Option<CreatedProfile>,
}

impl ProfileCreation {
    /// Start a fresh workflow with placeholder defaults and empty
    /// credentials.
    pub fn new(store: Arc<dyn ProfileStore>, public_base_url: impl Into<String>) -> Self {
        Self {
            store,
            public_base_url: public_base_url.into(),
            form: ProfilePayload::with_defaults(),
            state: CreationState::Editing,
            error: None,
            created: None,
        }
    }

    /// Current workflow phase.
    pub fn state(&self) -> CreationState {
        self.state
    }

    /// Error message from the last failed submission, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Success payload once the workflow has succeeded.
    pub fn created(&self) -> Option<&CreatedProfile> {
        self.created.as_ref()
    }

    /// Regenerate one credential field in place.
    pub fn regenerate(&mut self, field: CredentialField) {
        match field {
            CredentialField::Id => self.form.id = credentials::generate_id_card(),
            CredentialField::Pin => self.form.pin = credentials::generate_pin(),
            CredentialField::UniqueCode => {
                self.form.unique_code = credentials::generate_unique_code();
            }
        }
    }

    /// Regenerate all three credential fields at once.
    pub fn regenerate_all(&mut self) {
        let creds = Credentials::generate();
        self.form.id = creds.id;
        self.form.pin = creds.pin;
        self.form.unique_code = creds.unique_code;
    }

    /// Submit the form as-is.
    ///
    /// Client-side validation runs first; a malformed PIN blocks submission
    /// before any store call. On failure the workflow returns to `Editing`
    /// with the form untouched and the error retained for display.
    ///
    /// # Errors
    ///
    /// `KontactError::Validation` for client-side rejection,
    /// `KontactError::Internal` when called outside `Editing`, otherwise the
    /// store error unchanged.
    pub async fn submit(&mut self) -> Result<&CreatedProfile> {
        if self.state != CreationState::Editing {
            return Err(KontactError::Internal(
                "submit called while a submission is already in progress".to_string(),
            ));
        }

        if let Err(err) = credentials::validate_pin(&self.form.pin) {
            self.error = Some(err.to_string());
            return Err(err);
        }

        self.state = CreationState::Submitting;
        self.error = None;
        debug!(unique_code = %self.form.unique_code, "submitting new profile");

        match self.store.create(&self.form).await {
            Ok(mut created) => {
                if created.profile_link.is_none() {
                    created.profile_link = Some(self.derive_share_link(&created.unique_code));
                }
                info!(unique_code = %created.unique_code, "profile created");
                self.created = Some(created);
                self.state = CreationState::Succeeded;
                // Succeeded above guarantees the value is present.
                self.created
                    .as_ref()
                    .ok_or_else(|| KontactError::Internal("created profile missing".to_string()))
            }
            Err(err) => {
                self.state = CreationState::Editing;
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Shareable public link for the created profile.
    pub fn share_link(&self) -> Option<String> {
        let created = self.created.as_ref()?;
        Some(match &created.profile_link {
            Some(link) => link.clone(),
            None => self.derive_share_link(&created.unique_code),
        })
    }

    fn derive_share_link(&self, unique_code: &str) -> String {
        format!("{}/myprofile/{}", self.public_base_url.trim_end_matches('/'), unique_code)
    }
}
