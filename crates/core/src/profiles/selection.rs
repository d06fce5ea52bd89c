//! Selection and bulk-action controller
//!
//! Owns the set of selected unique codes within the currently loaded page.
//! A successful bulk action clears the selection and re-runs the list query
//! at the page that was active before the action. Selection never spans
//! pages; when the page changes the old selection is simply stale and the
//! next select-all or toggle rebuilds it.

use std::collections::HashSet;
use std::sync::Arc;

use kontactshare_domain::{BulkAction, BulkOutcome, KontactError, ProfilePage, Result};
use tracing::{debug, info};

use super::list::ProfileListController;
use super::ports::ProfileStore;

/// Controller for the page-scoped selection set
pub struct SelectionController {
    store: Arc<dyn ProfileStore>,
    selected: HashSet<String>,
}

impl SelectionController {
    /// Create an empty selection over the given store.
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store, selected: HashSet::new() }
    }

    /// Symmetric add/remove of one unique code.
    pub fn toggle(&mut self, unique_code: &str) {
        if !self.selected.remove(unique_code) {
            self.selected.insert(unique_code.to_string());
        }
    }

    /// Select every profile on the given page, or clear the selection.
    pub fn select_all(&mut self, page: &ProfilePage, selected: bool) {
        self.selected = if selected {
            page.unique_codes().into_iter().collect()
        } else {
            HashSet::new()
        };
    }

    /// Whether the given code is currently selected.
    pub fn is_selected(&self, unique_code: &str) -> bool {
        self.selected.contains(unique_code)
    }

    /// Number of selected profiles.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected codes in sorted order, for deterministic requests.
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.selected.iter().cloned().collect();
        codes.sort();
        codes
    }

    /// Drop the whole selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Apply one action to every selected profile.
    ///
    /// No-ops with `Ok(None)` on an empty selection, issuing no request.
    /// Destructive actions are irreversible, so they require
    /// `confirmed = true` from an explicit confirmation step and are
    /// rejected before any store call otherwise. On success the selection is
    /// cleared and the list controller re-runs its query at the page that
    /// was active before the action.
    ///
    /// # Errors
    ///
    /// `KontactError::Validation` for an unconfirmed destructive action,
    /// otherwise the store error unchanged; the selection is left intact so
    /// the operator can retry.
    pub async fn bulk_action(
        &mut self,
        action: BulkAction,
        confirmed: bool,
        list: &mut ProfileListController,
    ) -> Result<Option<BulkOutcome>> {
        if action.is_destructive() && !confirmed {
            return Err(KontactError::Validation(
                "bulk delete requires explicit confirmation".to_string(),
            ));
        }

        if self.selected.is_empty() {
            debug!(action = %action, "bulk action skipped: empty selection");
            return Ok(None);
        }

        let codes = self.codes();
        let outcome = self.store.bulk(action, &codes).await?;
        info!(action = %action, count = codes.len(), "bulk action applied");

        self.clear();
        list.refresh().await?;
        Ok(Some(outcome))
    }
}
