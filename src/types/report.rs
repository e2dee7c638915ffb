//! Report types produced by checking a ledger against the live filesystem.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How one tracked entry differs from what the filesystem holds today.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Drift {
    /// The tracked path no longer exists.
    Missing,
    /// Permission bits changed since the entry was recorded.
    Permissions { expected: u32, actual: u32 },
    /// Owner or group changed; both sides rendered as `owner/group`.
    Ownership { expected: String, actual: String },
    /// The path could not be inspected.
    Unreadable { error: String },
}

/// One drift finding for one tracked path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriftRow {
    pub path: PathBuf,
    pub drift: Drift,
}

/// Result of validating every entry in a ledger. Empty `drift` means the
/// filesystem still matches the ledger.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ValidateReport {
    /// Number of entries inspected.
    pub checked: usize,
    /// Findings, in ledger order. An entry may contribute more than one row.
    pub drift: Vec<DriftRow>,
}

impl ValidateReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.drift.is_empty()
    }

    /// Convert to a JSON payload suitable for an audit event.
    #[must_use]
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
