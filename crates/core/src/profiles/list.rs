//! Profile list controller
//!
//! Owns the paginated/filtered query state and the last-fetched result set.
//! Results are applied atomically: a page either replaces the previous one
//! wholesale or is discarded. Each issued load carries a monotonically
//! increasing ticket, and only the most recently issued ticket may apply its
//! result, so a slow response that lands after a newer request cannot
//! overwrite fresher data.

use std::sync::Arc;

use kontactshare_domain::{ListQuery, ProfilePage, ProfileStatus, Result};
use tracing::debug;

use super::ports::ProfileStore;

/// Handle for one issued list load.
///
/// Obtained from [`ProfileListController::begin`] and redeemed with
/// [`ProfileListController::complete`]. Tickets from superseded loads are
/// rejected at completion time.
#[derive(Debug, Clone)]
pub struct LoadTicket {
    seq: u64,
    query: ListQuery,
}

impl LoadTicket {
    /// The query this ticket was issued for.
    pub fn query(&self) -> &ListQuery {
        &self.query
    }
}

/// Controller for the admin profile list
pub struct ProfileListController {
    store: Arc<dyn ProfileStore>,
    query: ListQuery,
    result: Option<ProfilePage>,
    loading: bool,
    issued: u64,
}

impl ProfileListController {
    /// Create a controller with the default query (page 1, limit 20).
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self::with_query(store, ListQuery::default())
    }

    /// Create a controller with an explicit initial query.
    pub fn with_query(store: Arc<dyn ProfileStore>, query: ListQuery) -> Self {
        Self { store, query, result: None, loading: false, issued: 0 }
    }

    /// Page number of the current query state.
    pub fn current_page(&self) -> u32 {
        self.query.page
    }

    /// The query that produced (or will produce) the current result set.
    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Last successfully applied page, if any.
    pub fn page(&self) -> Option<&ProfilePage> {
        self.result.as_ref()
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Issue a load for the given page with the current filters.
    ///
    /// Returns `None` when the page is out of range: below 1, or beyond the
    /// last known page count. Navigation against an unknown page count is
    /// allowed for any page >= 1.
    pub fn begin(&mut self, page: u32) -> Option<LoadTicket> {
        if page < 1 {
            return None;
        }
        if let Some(result) = &self.result {
            let pages = result.pagination.pages.max(1);
            if page > pages {
                return None;
            }
        }

        self.issued += 1;
        self.loading = true;
        let ticket = LoadTicket { seq: self.issued, query: self.query.with_page(page) };
        debug!(seq = ticket.seq, page, "list load issued");
        Some(ticket)
    }

    /// Apply the result of a completed load.
    ///
    /// Returns `true` if the result was applied, `false` if the ticket was
    /// superseded by a newer load and the result was discarded.
    pub fn complete(&mut self, ticket: LoadTicket, page: ProfilePage) -> bool {
        if ticket.seq != self.issued {
            debug!(seq = ticket.seq, newest = self.issued, "stale list result discarded");
            return false;
        }

        self.query = ticket.query;
        self.result = Some(page);
        self.loading = false;
        true
    }

    /// Record a failed load; prior state is left intact.
    pub fn fail(&mut self, ticket: &LoadTicket) {
        if ticket.seq == self.issued {
            self.loading = false;
        }
    }

    /// Fetch the given page and apply it.
    ///
    /// Returns `Ok(false)` without touching the store when the page is out
    /// of range, or when the response lost to a newer request.
    ///
    /// # Errors
    ///
    /// Propagates the store error; the previous result set is retained.
    pub async fn load(&mut self, page: u32) -> Result<bool> {
        let Some(ticket) = self.begin(page) else {
            return Ok(false);
        };

        match self.store.list(ticket.query()).await {
            Ok(result) => Ok(self.complete(ticket, result)),
            Err(err) => {
                self.fail(&ticket);
                Err(err)
            }
        }
    }

    /// Re-issue the last query at the current page.
    ///
    /// # Errors
    ///
    /// Propagates the store error; the previous result set is retained.
    pub async fn refresh(&mut self) -> Result<bool> {
        self.load(self.query.page).await
    }

    /// Change the search text and reload from page 1.
    ///
    /// # Errors
    ///
    /// Propagates the store error; the previous result set is retained.
    pub async fn set_search(&mut self, search: Option<String>) -> Result<bool> {
        self.query.search = search.filter(|s| !s.is_empty());
        self.reset_to_first_page().await
    }

    /// Change the status filter and reload from page 1.
    ///
    /// # Errors
    ///
    /// Propagates the store error; the previous result set is retained.
    pub async fn set_status(&mut self, status: Option<ProfileStatus>) -> Result<bool> {
        self.query.status = status;
        self.reset_to_first_page().await
    }

    async fn reset_to_first_page(&mut self) -> Result<bool> {
        // Filter changes re-derive the query from page 1 rather than trying
        // to preserve a page that may no longer exist.
        self.query.page = 1;
        self.result = None;
        self.load(1).await
    }
}
