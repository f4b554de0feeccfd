//! Analytics type definitions
//!
//! Contains the derived entities the aggregation engine produces: summary
//! metrics, leaderboard entries, timeline entries, and merge-time buckets.
//! All of them are ephemeral, recomputed per request, never stored.

use serde::{Deserialize, Serialize};

/// Chart time-range selector
///
/// Serialized as the selector strings the presentation layer sends
/// (`"7d"`, `"30d"`, `"all"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    /// Last 7 days (default)
    #[serde(rename = "7d")]
    Days7,
    /// Last 30 days
    #[serde(rename = "30d")]
    Days30,
    /// All time (no filter)
    #[serde(rename = "all")]
    All,
}

impl Default for TimeRange {
    fn default() -> Self {
        TimeRange::Days7
    }
}

impl TimeRange {
    /// Returns the number of days covered by this range
    /// Returns None for All (no time limit)
    pub fn to_days(&self) -> Option<i64> {
        match self {
            TimeRange::Days7 => Some(7),
            TimeRange::Days30 => Some(30),
            TimeRange::All => None,
        }
    }
}

/// One ranked (author, count) leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LeaderboardEntry {
    /// Author grouping key (free text from the release record)
    pub author: String,

    /// Releases published or PRs shipped, depending on the leaderboard
    pub count: u32,
}

/// Dashboard summary metrics
///
/// Computed in a single pass over the release set plus one pass over the
/// issue set; see `calculator::calculate_summary_metrics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SummaryMetrics {
    /// Total number of releases in the snapshot
    pub total_releases: u32,

    /// Sum of `pr_count` across all releases
    pub total_prs: u32,

    /// Issues currently in "Ready for QA" status (no time filter)
    pub issues_in_qa: u32,

    /// Issues that reached "QA Passed/Done" within the trailing 7-day window
    pub issues_passed_qa: u32,

    /// Average days between releases, rounded to one decimal
    ///
    /// 0.0 when no release carries a usable interval.
    pub avg_release_time: f64,

    /// Top-5 authors by release count
    pub release_leaders: Vec<LeaderboardEntry>,

    /// Top-5 authors by PR count summed across their releases
    pub pr_leaders: Vec<LeaderboardEntry>,
}

impl Default for SummaryMetrics {
    fn default() -> Self {
        Self {
            total_releases: 0,
            total_prs: 0,
            issues_in_qa: 0,
            issues_passed_qa: 0,
            avg_release_time: 0.0,
            release_leaders: Vec::new(),
            pr_leaders: Vec::new(),
        }
    }
}

/// One release-interval timeline point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ReleaseTimelineEntry {
    /// Version label of the release
    pub version: String,

    /// Absolute days since the previous release (0 when unknown)
    pub days: f64,

    /// Publish timestamp (ISO-8601 string, passed through unparsed)
    pub published_at: String,
}

/// One merge-time bucket for the PR chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MergeTimeBucket {
    /// Bucket label: an ISO date (daily series) or a year (yearly series)
    pub period: String,

    /// Average time-to-merge in whole hours (0 for an empty bucket)
    pub avg_merge_time: u32,
}

/// All three PR merge-time series, keyed by [`TimeRange`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PrMergeSeries {
    /// 7 daily buckets, oldest first
    #[serde(rename = "7d")]
    pub daily_7d: Vec<MergeTimeBucket>,

    /// 30 daily buckets, oldest first
    #[serde(rename = "30d")]
    pub daily_30d: Vec<MergeTimeBucket>,

    /// One bucket per calendar year, in first-encounter order
    #[serde(rename = "all")]
    pub yearly: Vec<MergeTimeBucket>,
}

impl PrMergeSeries {
    /// Returns the series for a selector
    pub fn for_range(&self, range: TimeRange) -> &[MergeTimeBucket] {
        match range {
            TimeRange::Days7 => &self.daily_7d,
            TimeRange::Days30 => &self.daily_30d,
            TimeRange::All => &self.yearly,
        }
    }
}
