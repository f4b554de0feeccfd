//! Chart axis scaling
//!
//! Two deliberately separate policies:
//!
//! - [`uniform_ticks`] derives a "nice" axis maximum and evenly spaced
//!   tick values (multiples of 1, 2, 5, or 10 times a power of ten) for
//!   the release-interval chart.
//! - [`merge_time_axis_max`] rounds the PR-chart maximum up a fixed
//!   threshold ladder.
//!
//! The charts they serve evolved independently and expect exactly these
//! bounds, so the policies are not unified.

use serde::{Deserialize, Serialize};

/// Default number of ticks requested for the release chart axis
pub const DEFAULT_TICK_COUNT: usize = 6;

/// Nice step multipliers, scaled by a power of ten
const STEP_MULTIPLIERS: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

/// A computed axis: tick values plus the chosen maximum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AxisTicks {
    /// Evenly spaced tick values, 0 first, `max_tick` last
    pub ticks: Vec<f64>,

    /// Chosen axis maximum, always >= the largest input value
    pub max_tick: f64,
}

/// Chooses a nice axis maximum and evenly spaced ticks for a value series
///
/// # Arguments
/// * `values` - Non-negative magnitudes to be charted
/// * `desired_tick_count` - Approximate tick count the axis should show
///
/// # Returns
/// AxisTicks whose step is a multiple of 1, 2, 5, or 10 times a power of
/// ten and whose `max_tick` covers the largest value. An empty series (or
/// one with no positive value) yields the degenerate `[0, 1]` axis.
pub fn uniform_ticks(values: &[f64], desired_tick_count: usize) -> AxisTicks {
    let max = values.iter().fold(0.0_f64, |acc, v| acc.max(*v));
    if max == 0.0 {
        return AxisTicks {
            ticks: vec![0.0, 1.0],
            max_tick: 1.0,
        };
    }

    // A tick count below 2 cannot form an axis; treat it as 2
    let segments = desired_tick_count.max(2) - 1;

    let target = max.max(1.0);
    let raw_step = target / segments as f64;
    let pow10 = 10.0_f64.powf(raw_step.log10().floor());

    // Smallest nice candidate that covers the raw step; the largest
    // candidate only wins on floating-point edge cases
    let step = STEP_MULTIPLIERS
        .iter()
        .map(|m| m * pow10)
        .find(|candidate| *candidate >= raw_step)
        .unwrap_or(STEP_MULTIPLIERS[3] * pow10);

    let max_tick = (target / step).ceil() * step;
    let count = (max_tick / step).floor() as usize + 1;
    let ticks = (0..count).map(|i| i as f64 * step).collect();

    AxisTicks { ticks, max_tick }
}

/// Rounds the PR-chart maximum up to the nearest threshold
///
/// The ladder is 10, 20, 50, 100; beyond 100 the bound climbs in
/// multiples of 50.
pub fn merge_time_axis_max(values: &[f64]) -> f64 {
    let max = values.iter().fold(0.0_f64, |acc, v| acc.max(*v));

    if max <= 10.0 {
        10.0
    } else if max <= 20.0 {
        20.0
    } else if max <= 50.0 {
        50.0
    } else if max <= 100.0 {
        100.0
    } else {
        (max / 50.0).ceil() * 50.0
    }
}
