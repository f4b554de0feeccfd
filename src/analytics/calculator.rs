//! Aggregation engine
//!
//! Pure functions that turn the raw record snapshot into the derived views
//! the dashboard renders: summary metrics with author leaderboards, the
//! release-interval timeline, and the PR merge-time bucket series. Every
//! view folds over its record set exactly once and never mutates input.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::models::{Issue, PullRequest, Release, STATUS_QA_PASSED, STATUS_READY_FOR_QA};

use super::{
    LeaderboardEntry, MergeTimeBucket, PrMergeSeries, ReleaseTimelineEntry, SummaryMetrics,
    TimeRange,
};

/// Maximum rows shown on a leaderboard
pub const LEADERBOARD_SIZE: usize = 5;

/// Trailing window for the "passed QA" counter, in days
pub const QA_WINDOW_DAYS: i64 = 7;

/// Averages a slice of values, yielding 0 for an empty slice
fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Rounds to one decimal place
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Builds a top-5 leaderboard from per-author counts
///
/// `author_order` is the order authors were first encountered while
/// folding the release set; the sort is stable, so equal counts keep
/// that order.
fn build_leaderboard(author_order: &[String], counts: &HashMap<String, u32>) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = author_order
        .iter()
        .map(|author| LeaderboardEntry {
            author: author.clone(),
            count: counts.get(author).copied().unwrap_or(0),
        })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(LEADERBOARD_SIZE);
    entries
}

/// Calculates the dashboard summary metrics
///
/// A single pass over the release set simultaneously accumulates the
/// per-author release counts, the per-author PR-count sums, and the PR
/// total. A second pass over the issue set counts the two QA statuses.
///
/// # Arguments
/// * `releases` - Full release record set
/// * `issues` - Full issue record set
/// * `now` - Reference time for the trailing QA window
///
/// # Returns
/// Computed SummaryMetrics; empty inputs yield zero counts and empty
/// leaderboards, never an error
pub fn calculate_summary_metrics(
    releases: &[Release],
    issues: &[Issue],
    now: DateTime<Utc>,
) -> SummaryMetrics {
    let mut author_order: Vec<String> = Vec::new();
    let mut release_counts: HashMap<String, u32> = HashMap::new();
    let mut pr_counts: HashMap<String, u32> = HashMap::new();
    let mut total_prs: u32 = 0;
    let mut intervals: Vec<f64> = Vec::new();

    for release in releases {
        if !release_counts.contains_key(&release.author) {
            author_order.push(release.author.clone());
        }
        *release_counts.entry(release.author.clone()).or_insert(0) += 1;
        *pr_counts.entry(release.author.clone()).or_insert(0) += release.pr_count;

        total_prs += release.pr_count;

        // Intervals may be negative from clock/ordering noise; normalize
        // via absolute value and drop zeros along with nulls
        if let Some(days) = release.time_since_last_release {
            let days = days.abs();
            if days > 0.0 {
                intervals.push(days);
            }
        }
    }

    let qa_window_start = now - Duration::days(QA_WINDOW_DAYS);
    let mut issues_in_qa: u32 = 0;
    let mut issues_passed_qa: u32 = 0;

    for issue in issues {
        if issue.status == STATUS_READY_FOR_QA {
            issues_in_qa += 1;
        } else if issue.status == STATUS_QA_PASSED {
            if let Some(updated) = issue.updated_time() {
                if updated >= qa_window_start && updated <= now {
                    issues_passed_qa += 1;
                }
            }
        }
    }

    SummaryMetrics {
        total_releases: releases.len() as u32,
        total_prs,
        issues_in_qa,
        issues_passed_qa,
        avg_release_time: round_to_tenth(average(&intervals)),
        release_leaders: build_leaderboard(&author_order, &release_counts),
        pr_leaders: build_leaderboard(&author_order, &pr_counts),
    }
}

/// Maps releases to interval timeline entries, preserving input order
///
/// Null intervals display as 0 days; negative intervals display as their
/// absolute value. A positive `limit` truncates to the first N entries.
pub fn release_timeline(releases: &[Release], limit: Option<usize>) -> Vec<ReleaseTimelineEntry> {
    let entries = releases.iter().map(|release| ReleaseTimelineEntry {
        version: release.version.clone(),
        days: release.time_since_last_release.unwrap_or(0.0).abs(),
        published_at: release.published_at.clone(),
    });

    match limit {
        Some(n) if n > 0 => entries.take(n).collect(),
        _ => entries.collect(),
    }
}

/// Builds the daily merge-time buckets for the N calendar days before `today`
///
/// Bucket `i` covers the day `today - (N - i)`, so the series runs oldest
/// first. Days without merges get a zero bucket.
fn daily_buckets(eligible: &[(NaiveDate, f64)], days: i64, today: NaiveDate) -> Vec<MergeTimeBucket> {
    (0..days)
        .map(|i| {
            let day = today - Duration::days(days - i);
            let times: Vec<f64> = eligible
                .iter()
                .filter(|(merged_day, _)| *merged_day == day)
                .map(|(_, hours)| *hours)
                .collect();

            MergeTimeBucket {
                period: day.format("%Y-%m-%d").to_string(),
                avg_merge_time: average(&times).round() as u32,
            }
        })
        .collect()
}

/// Groups eligible PRs by merge year, in first-encounter order
fn yearly_buckets(eligible: &[(NaiveDate, f64)]) -> Vec<MergeTimeBucket> {
    let mut year_order: Vec<i32> = Vec::new();
    let mut times_by_year: HashMap<i32, Vec<f64>> = HashMap::new();

    for (merged_day, hours) in eligible {
        let year = merged_day.year();
        if !times_by_year.contains_key(&year) {
            year_order.push(year);
        }
        times_by_year.entry(year).or_default().push(*hours);
    }

    year_order
        .into_iter()
        .map(|year| MergeTimeBucket {
            period: year.to_string(),
            avg_merge_time: average(&times_by_year[&year]).round() as u32,
        })
        .collect()
}

/// Computes all three PR merge-time series at once
///
/// Only PRs with both a merge timestamp and a recorded time-to-merge
/// participate; bucket membership compares the calendar day of the merge,
/// not the exact time.
///
/// # Arguments
/// * `pull_requests` - Full pull-request record set
/// * `now` - Reference time anchoring the daily windows
///
/// # Returns
/// PrMergeSeries with 7-day, 30-day, and yearly buckets; an empty PR set
/// still yields all daily buckets (zeroed) and an empty yearly list
pub fn pr_merge_series(pull_requests: &[PullRequest], now: DateTime<Utc>) -> PrMergeSeries {
    let eligible: Vec<(NaiveDate, f64)> = pull_requests
        .iter()
        .filter(|pr| pr.is_merge_eligible())
        .filter_map(|pr| {
            let merged_day = pr.merged_time()?.date_naive();
            Some((merged_day, pr.time_to_merge?))
        })
        .collect();

    let today = now.date_naive();

    PrMergeSeries {
        daily_7d: daily_buckets(&eligible, 7, today),
        daily_30d: daily_buckets(&eligible, 30, today),
        yearly: yearly_buckets(&eligible),
    }
}

/// Keeps the releases published within a time range
///
/// `TimeRange::All` passes everything through unchanged; the day-bounded
/// ranges keep releases published on or after `now - N days`. Releases
/// with an unparseable publish timestamp are excluded by the filter.
pub fn filter_releases_by_timeframe(
    releases: &[Release],
    range: TimeRange,
    now: DateTime<Utc>,
) -> Vec<Release> {
    let days = match range.to_days() {
        Some(days) => days,
        None => return releases.to_vec(),
    };
    let cutoff = now - Duration::days(days);

    releases
        .iter()
        .filter(|release| {
            release
                .published_time()
                .map(|published| published >= cutoff)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Case-insensitive substring search over version, author, and name
///
/// An empty query matches every release.
pub fn search_releases(releases: &[Release], query: &str) -> Vec<Release> {
    if query.is_empty() {
        return releases.to_vec();
    }
    let needle = query.to_lowercase();

    releases
        .iter()
        .filter(|release| {
            release.version.to_lowercase().contains(&needle)
                || release.author.to_lowercase().contains(&needle)
                || release.name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Formats a timestamp as a coarse relative-time label
///
/// "N hours ago" under a day, "N days ago" under 30 days, then
/// "N months ago" with 30-day months. Unparseable input is returned
/// verbatim so the table still renders something.
pub fn format_relative_time(timestamp: &str, now: DateTime<Utc>) -> String {
    let parsed = match crate::models::release::parse_iso_timestamp(timestamp) {
        Some(dt) => dt,
        None => return timestamp.to_string(),
    };

    let hours = (now - parsed).num_hours();
    if hours < 24 {
        return format!("{} hours ago", hours);
    }

    let days = hours / 24;
    if days < 30 {
        return format!("{} days ago", days);
    }

    format!("{} months ago", days / 30)
}
