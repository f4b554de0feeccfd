//! Pull-request record model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::release::parse_iso_timestamp;

/// A single pull-request record
///
/// Unmerged PRs carry a null `merged_at` and are excluded from time-series
/// aggregation, as are merged PRs without a recorded `time_to_merge`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PullRequest {
    /// Unique PR identifier (PR number as a string)
    pub pr_id: String,

    /// Repository the PR belongs to (owner/name)
    #[serde(default)]
    pub repo: String,

    /// PR author login
    #[serde(default)]
    pub author: String,

    /// Creation timestamp (ISO-8601 string)
    pub created_at: String,

    /// Merge timestamp (ISO-8601 string), null while unmerged
    pub merged_at: Option<String>,

    /// Hours from creation to merge, null while unmerged
    pub time_to_merge: Option<f64>,

    /// Release this PR shipped in, assigned during enrichment
    #[serde(default)]
    pub release_id: Option<String>,
}

impl PullRequest {
    /// Parses the merge timestamp, returning None when the PR is unmerged
    /// or the timestamp is not valid ISO-8601
    pub fn merged_time(&self) -> Option<DateTime<Utc>> {
        self.merged_at
            .as_deref()
            .and_then(parse_iso_timestamp)
    }

    /// Whether this PR participates in merge-time aggregation
    pub fn is_merge_eligible(&self) -> bool {
        self.merged_at.is_some() && self.time_to_merge.is_some()
    }
}
