//! Issue-tracker record model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::release::parse_iso_timestamp;

/// Issue status value for issues waiting on QA
pub const STATUS_READY_FOR_QA: &str = "Ready for QA";

/// Issue status value for issues that cleared QA
pub const STATUS_QA_PASSED: &str = "QA Passed/Done";

/// A single issue-tracker record
///
/// `status` is enum-like free text from the tracker board; only the two
/// QA statuses above carry meaning for the dashboard, everything else
/// passes through unaggregated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Issue {
    /// Unique issue identifier ("owner/repo#number")
    pub issue_id: String,

    /// Repository the issue belongs to
    #[serde(default)]
    pub repo: String,

    /// Issue title
    #[serde(default)]
    pub title: String,

    /// Tracker board status column
    pub status: String,

    /// Creation timestamp (ISO-8601 string)
    #[serde(default)]
    pub created_at: String,

    /// Last-updated timestamp (ISO-8601 string)
    pub updated_at: String,
}

impl Issue {
    /// Parses the last-updated timestamp, returning None when it is not
    /// valid ISO-8601
    pub fn updated_time(&self) -> Option<DateTime<Utc>> {
        parse_iso_timestamp(&self.updated_at)
    }
}
