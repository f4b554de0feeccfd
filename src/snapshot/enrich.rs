//! Snapshot enrichment
//!
//! Derives the fields the ingest pipeline fills in before export:
//! per-release intervals and PR-to-release assignment. Runs once while a
//! snapshot is being built; aggregation itself never mutates records.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::models::{PullRequest, Release};

/// Sorts releases by publish time and fills in `time_since_last_release`
/// as the whole-day difference from the previous release
///
/// The first release gets 0. Releases with an unparseable publish
/// timestamp sort first and keep whatever interval they already carry.
pub fn compute_release_intervals(releases: &mut [Release]) {
    releases.sort_by_key(|r| r.published_time().unwrap_or(DateTime::<Utc>::MIN_UTC));

    let mut last_published: Option<DateTime<Utc>> = None;
    for release in releases.iter_mut() {
        let published = match release.published_time() {
            Some(dt) => dt,
            None => {
                warn!(release_id = %release.release_id, "unparseable publish timestamp, skipping interval");
                continue;
            }
        };
        release.time_since_last_release = match last_published {
            Some(prev) => Some((published - prev).num_days() as f64),
            None => Some(0.0),
        };
        last_published = Some(published);
    }
}

/// Assigns each merged PR to the first release published at or after its
/// merge time, incrementing that release's `pr_count`
///
/// Releases must already be in publish order (see
/// [`compute_release_intervals`]). Unmerged PRs and PRs merged after the
/// last release are left unassigned.
pub fn assign_prs_to_releases(releases: &mut [Release], pull_requests: &mut [PullRequest]) {
    for pr in pull_requests.iter_mut() {
        let merged = match pr.merged_time() {
            Some(dt) => dt,
            None => continue,
        };
        for release in releases.iter_mut() {
            let published = match release.published_time() {
                Some(dt) => dt,
                None => continue,
            };
            if merged <= published {
                pr.release_id = Some(release.release_id.clone());
                release.pr_count += 1;
                break;
            }
        }
    }
}
