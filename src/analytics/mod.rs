//! Analytics module: the dashboard aggregation engine
//!
//! Turns the raw record snapshot into everything the dashboard renders:
//!
//! - **Summary Metrics**: release/PR totals, QA counters, author leaderboards
//! - **Release Timeline**: per-release interval series, input order preserved
//! - **PR Merge Series**: daily and yearly merge-time buckets
//! - **Axis Scaling**: the two chart-specific axis policies
//!
//! All computation is synchronous, pure, and allocation-fresh: functions
//! read the immutable snapshot and build new output, so concurrent calls
//! are safe by construction.

mod types;


pub use types::*;

/// Calculator module for metrics and series computation
pub mod calculator;


/// Axis scaling policies for chart rendering
pub mod axis;

#[cfg(test)]
mod axis_tests;
