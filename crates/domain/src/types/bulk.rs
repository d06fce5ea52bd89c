//! Bulk operation types
//!
//! A bulk operation applies one action to a batch of profiles identified by
//! their unique codes. Results are reported per item; a backend that only
//! answers with a bare success cannot express partial failure, in which case
//! the gateway synthesizes an all-ok outcome.

use serde::{Deserialize, Serialize};

/// Action applied by a bulk request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkAction {
    Ban,
    Unban,
    Delete,
}

impl BulkAction {
    /// Wire representation of the action
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ban => "ban",
            Self::Unban => "unban",
            Self::Delete => "delete",
        }
    }

    /// Delete is irreversible and requires explicit confirmation upstream.
    pub fn is_destructive(self) -> bool {
        matches!(self, Self::Delete)
    }
}

impl std::fmt::Display for BulkAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a bulk action for a single profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkItemOutcome {
    pub unique_code: String,
    pub ok: bool,
    pub error: Option<String>,
}

impl BulkItemOutcome {
    /// Successful outcome for the given code.
    pub fn ok(unique_code: impl Into<String>) -> Self {
        Self { unique_code: unique_code.into(), ok: true, error: None }
    }

    /// Failed outcome with an error message.
    pub fn failed(unique_code: impl Into<String>, error: impl Into<String>) -> Self {
        Self { unique_code: unique_code.into(), ok: false, error: Some(error.into()) }
    }
}

/// Per-item results of one bulk request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkOutcome {
    pub items: Vec<BulkItemOutcome>,
}

impl BulkOutcome {
    /// Outcome reporting success for every given code.
    pub fn all_ok(unique_codes: &[String]) -> Self {
        Self { items: unique_codes.iter().map(BulkItemOutcome::ok).collect() }
    }

    /// Whether every item succeeded.
    pub fn is_all_ok(&self) -> bool {
        self.items.iter().all(|item| item.ok)
    }

    /// Codes that failed, with their error messages.
    pub fn failures(&self) -> Vec<&BulkItemOutcome> {
        self.items.iter().filter(|item| !item.ok).collect()
    }
}
