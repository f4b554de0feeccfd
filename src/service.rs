//! Dashboard query service
//!
//! The presentation layer's entry point: four query functions over an
//! injected snapshot. The snapshot is owned immutably and every query
//! allocates fresh output, so the service can be shared across threads
//! and queried concurrently.
//!
//! The reference clock is injectable (`with_now`) so QA-window and
//! daily-bucket queries are deterministic under test; production callers
//! get `Utc::now()` per query.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::analytics::axis::{self, AxisTicks, DEFAULT_TICK_COUNT};
use crate::analytics::calculator;
use crate::analytics::{PrMergeSeries, ReleaseTimelineEntry, SummaryMetrics, TimeRange};
use crate::models::Release;
use crate::snapshot::MetricsSnapshot;

/// Query facade over a metrics snapshot
#[derive(Debug, Clone)]
pub struct DashboardService {
    snapshot: MetricsSnapshot,
    fixed_now: Option<DateTime<Utc>>,
}

impl DashboardService {
    /// Creates a service over a snapshot, using the wall clock as "now"
    pub fn new(snapshot: MetricsSnapshot) -> Self {
        Self {
            snapshot,
            fixed_now: None,
        }
    }

    /// Creates a service with a fixed reference clock
    pub fn with_now(snapshot: MetricsSnapshot, now: DateTime<Utc>) -> Self {
        Self {
            snapshot,
            fixed_now: Some(now),
        }
    }

    fn now(&self) -> DateTime<Utc> {
        self.fixed_now.unwrap_or_else(Utc::now)
    }

    /// Returns the snapshot this service reads from
    pub fn snapshot(&self) -> &MetricsSnapshot {
        &self.snapshot
    }

    /// Get the dashboard summary metrics
    ///
    /// Release/PR totals, QA counters, average release interval, and the
    /// two top-5 author leaderboards.
    pub fn summary_metrics(&self) -> SummaryMetrics {
        debug!(releases = self.snapshot.releases.len(), "computing summary metrics");
        calculator::calculate_summary_metrics(
            &self.snapshot.releases,
            &self.snapshot.issues,
            self.now(),
        )
    }

    /// Get the release-interval timeline
    ///
    /// # Arguments
    /// * `limit` - When Some and positive, truncates to the first N entries
    pub fn release_timeline(&self, limit: Option<usize>) -> Vec<ReleaseTimelineEntry> {
        calculator::release_timeline(&self.snapshot.releases, limit)
    }

    /// Get all three PR merge-time series, keyed by the
    /// `"7d" | "30d" | "all"` selector
    pub fn pr_merge_series(&self) -> PrMergeSeries {
        debug!(
            pull_requests = self.snapshot.pull_requests.len(),
            "computing PR merge series"
        );
        calculator::pr_merge_series(&self.snapshot.pull_requests, self.now())
    }

    /// Get nice axis ticks for a numeric series the caller intends to chart
    ///
    /// # Arguments
    /// * `values` - Non-negative magnitudes
    /// * `desired_tick_count` - Approximate tick count; defaults to 6
    pub fn uniform_ticks(&self, values: &[f64], desired_tick_count: Option<usize>) -> AxisTicks {
        axis::uniform_ticks(values, desired_tick_count.unwrap_or(DEFAULT_TICK_COUNT))
    }

    /// Get the releases published within a time range
    pub fn releases_in_timeframe(&self, range: TimeRange) -> Vec<Release> {
        calculator::filter_releases_by_timeframe(&self.snapshot.releases, range, self.now())
    }

    /// Search releases by version, author, or display name
    pub fn search_releases(&self, query: &str) -> Vec<Release> {
        calculator::search_releases(&self.snapshot.releases, query)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::models::Release;

    fn release(author: &str, version: &str, published_at: &str, pr_count: u32) -> Release {
        Release {
            release_id: version.to_string(),
            version: version.to_string(),
            name: String::new(),
            author: author.to_string(),
            body: String::new(),
            published_at: published_at.to_string(),
            time_since_last_release: Some(3.0),
            pr_count,
        }
    }

    fn service() -> DashboardService {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let snapshot = MetricsSnapshot {
            releases: vec![
                release("alice", "v1.0.0", "2024-06-14T10:00:00Z", 4),
                release("bob", "v1.1.0", "2024-05-01T10:00:00Z", 2),
            ],
            pull_requests: vec![],
            issues: vec![],
        };
        DashboardService::with_now(snapshot, now)
    }

    #[test]
    fn test_summary_metrics_reads_snapshot() {
        let svc = service();
        let metrics = svc.summary_metrics();

        assert_eq!(metrics.total_releases, 2);
        assert_eq!(metrics.total_prs, 6);
    }

    #[test]
    fn test_queries_are_idempotent() {
        let svc = service();
        assert_eq!(svc.summary_metrics(), svc.summary_metrics());
        assert_eq!(svc.release_timeline(None), svc.release_timeline(None));
        assert_eq!(svc.pr_merge_series(), svc.pr_merge_series());
    }

    #[test]
    fn test_release_timeline_limit() {
        let svc = service();
        assert_eq!(svc.release_timeline(Some(1)).len(), 1);
        assert_eq!(svc.release_timeline(Some(0)).len(), 2);
        assert_eq!(svc.release_timeline(None).len(), 2);
    }

    #[test]
    fn test_releases_in_timeframe() {
        let svc = service();
        // Only v1.0.0 was published within the last 7 days of the fixed clock
        let recent = svc.releases_in_timeframe(TimeRange::Days7);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].version, "v1.0.0");

        assert_eq!(svc.releases_in_timeframe(TimeRange::All).len(), 2);
    }

    #[test]
    fn test_search_releases() {
        let svc = service();
        let hits = svc.search_releases("ALICE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].author, "alice");

        assert_eq!(svc.search_releases("").len(), 2);
        assert!(svc.search_releases("zzz").is_empty());
    }

    #[test]
    fn test_uniform_ticks_default_count() {
        let svc = service();
        let axis = svc.uniform_ticks(&[47.0], None);
        assert_eq!(axis.max_tick, 50.0);
    }
}
