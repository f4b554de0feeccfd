//! Record Store snapshot
//!
//! The aggregation engine never reads ambient global state; it consumes a
//! `MetricsSnapshot` handed to it explicitly. The snapshot is an immutable,
//! pre-validated export of release, pull-request, and issue records
//! (top-level JSON keys `releases`, `pull_requests`, `issues`).
//!
//! Missing collections are treated as empty rather than as errors so the
//! dashboard stays usable with partial data.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;
use crate::models::{Issue, PullRequest, Release};

pub mod enrich;


/// Immutable snapshot of all dashboard input records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MetricsSnapshot {
    /// Release records, in export order
    #[serde(default)]
    pub releases: Vec<Release>,

    /// Pull-request records
    #[serde(default)]
    pub pull_requests: Vec<PullRequest>,

    /// Issue-tracker records
    #[serde(default)]
    pub issues: Vec<Issue>,
}

impl MetricsSnapshot {
    /// Deserializes a snapshot from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let snapshot: MetricsSnapshot = serde_json::from_str(json)?;
        debug!(
            releases = snapshot.releases.len(),
            pull_requests = snapshot.pull_requests.len(),
            issues = snapshot.issues.len(),
            "loaded metrics snapshot"
        );
        Ok(snapshot)
    }

    /// Reads and deserializes a snapshot from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Whether the snapshot contains no records at all
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty() && self.pull_requests.is_empty() && self.issues.is_empty()
    }
}
