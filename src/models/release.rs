//! Release record model
//!
//! One versioned software release event with authorship and PR-count
//! metadata, as exported by the metrics ingest pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single software release record
///
/// Field names match the snapshot JSON produced by the ingest pipeline.
/// `version` is not guaranteed unique; `release_id` is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Release {
    /// Unique release identifier
    pub release_id: String,

    /// Version label (tag name, e.g. "v2.3.1")
    pub version: String,

    /// Display name of the release
    #[serde(default)]
    pub name: String,

    /// Release author (free text, used as the leaderboard grouping key)
    pub author: String,

    /// Free-text release notes
    #[serde(default)]
    pub body: String,

    /// Publish timestamp (ISO-8601 string)
    pub published_at: String,

    /// Days since the previous release
    ///
    /// Null for the first release or when unknown. May be negative due to
    /// clock/ordering noise; aggregation normalizes via absolute value.
    pub time_since_last_release: Option<f64>,

    /// Number of pull requests that shipped in this release
    #[serde(default)]
    pub pr_count: u32,
}

impl Release {
    /// Parses the publish timestamp, returning None when it is not
    /// valid ISO-8601
    pub fn published_time(&self) -> Option<DateTime<Utc>> {
        parse_iso_timestamp(&self.published_at)
    }
}

#[cfg(test)]
mod tests;

/// Parses an ISO-8601 timestamp string into a UTC datetime
///
/// Accepts both offset-carrying forms ("2024-01-15T10:00:00Z") and bare
/// naive forms ("2024-01-15T10:00:00"), which both occur in snapshots.
pub(crate) fn parse_iso_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    value
        .parse::<chrono::NaiveDateTime>()
        .ok()
        .map(|naive| naive.and_utc())
}
