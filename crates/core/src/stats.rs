//! Dashboard statistics and single-profile actions

use std::sync::Arc;

use kontactshare_domain::{DashboardStats, KontactError, Result};
use tracing::info;

use crate::profiles::list::ProfileListController;
use crate::profiles::ports::ProfileStore;

/// Read side of the admin dashboard
pub struct DashboardService {
    store: Arc<dyn ProfileStore>,
}

impl DashboardService {
    /// Create a dashboard service over the given store.
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Fetch the aggregate counts.
    ///
    /// # Errors
    ///
    /// Propagates the store error.
    pub async fn stats(&self) -> Result<DashboardStats> {
        self.store.stats().await
    }

    /// Share of active profiles, in `[0, 1]`. Zero when there are none.
    pub fn active_ratio(stats: &DashboardStats) -> f64 {
        if stats.total_profiles <= 0 {
            0.0
        } else {
            stats.active_profiles as f64 / stats.total_profiles as f64
        }
    }
}

/// Single-profile lifecycle actions
///
/// Each successful mutation re-runs the list query at the caller's current
/// page, so the visible rows always reflect the source of truth.
pub struct ProfileActions {
    store: Arc<dyn ProfileStore>,
}

impl ProfileActions {
    /// Create the action dispatcher over the given store.
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Ban one profile and refresh the list.
    ///
    /// # Errors
    ///
    /// Propagates the store error; the list is not refreshed on failure.
    pub async fn ban(
        &self,
        unique_code: &str,
        list: &mut ProfileListController,
    ) -> Result<()> {
        self.store.ban(unique_code).await?;
        info!(unique_code = %unique_code, "profile banned");
        list.refresh().await?;
        Ok(())
    }

    /// Unban one profile and refresh the list.
    ///
    /// # Errors
    ///
    /// Propagates the store error; the list is not refreshed on failure.
    pub async fn unban(
        &self,
        unique_code: &str,
        list: &mut ProfileListController,
    ) -> Result<()> {
        self.store.unban(unique_code).await?;
        info!(unique_code = %unique_code, "profile unbanned");
        list.refresh().await?;
        Ok(())
    }

    /// Delete one profile and refresh the list.
    ///
    /// Deletion is irreversible, so the caller must pass `confirmed = true`
    /// after an explicit confirmation step; anything else is rejected before
    /// any store call.
    ///
    /// # Errors
    ///
    /// `KontactError::Validation` without confirmation, otherwise the store
    /// error unchanged.
    pub async fn delete(
        &self,
        unique_code: &str,
        confirmed: bool,
        list: &mut ProfileListController,
    ) -> Result<()> {
        if !confirmed {
            return Err(KontactError::Validation(
                "delete requires explicit confirmation".to_string(),
            ));
        }

        self.store.delete(unique_code).await?;
        info!(unique_code = %unique_code, "profile deleted");
        list.refresh().await?;
        Ok(())
    }
}
