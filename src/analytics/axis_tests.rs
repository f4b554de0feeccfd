//! Unit tests for the axis scaling policies

use proptest::prelude::*;

use super::axis::*;

// ===== uniform_ticks Tests =====

#[test]
fn test_uniform_ticks_empty_series() {
    let axis = uniform_ticks(&[], DEFAULT_TICK_COUNT);

    assert_eq!(axis.ticks, vec![0.0, 1.0]);
    assert_eq!(axis.max_tick, 1.0);
}

#[test]
fn test_uniform_ticks_non_positive_series_is_degenerate() {
    let axis = uniform_ticks(&[0.0, -3.0, -10.0], DEFAULT_TICK_COUNT);

    assert_eq!(axis.ticks, vec![0.0, 1.0]);
    assert_eq!(axis.max_tick, 1.0);
}

#[test]
fn test_uniform_ticks_47_picks_step_10() {
    let axis = uniform_ticks(&[47.0], 6);

    assert_eq!(axis.max_tick, 50.0);
    assert_eq!(axis.ticks, vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
}

#[test]
fn test_uniform_ticks_small_max() {
    let axis = uniform_ticks(&[3.0], 6);

    // raw step 0.6 rounds up to the nice step 1
    assert_eq!(axis.max_tick, 3.0);
    assert_eq!(axis.ticks, vec![0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn test_uniform_ticks_large_max() {
    let axis = uniform_ticks(&[470.0], 6);

    assert_eq!(axis.max_tick, 500.0);
    assert_eq!(axis.ticks.len(), 6);
    assert_eq!(axis.ticks[1], 100.0);
}

#[test]
fn test_uniform_ticks_sub_one_values_still_reach_one() {
    // target clamps to 1 even when every value is below it
    let axis = uniform_ticks(&[0.4], 6);

    assert!(axis.max_tick >= 1.0);
    assert_eq!(axis.ticks[0], 0.0);
}

#[test]
fn test_uniform_ticks_degenerate_tick_count() {
    // Counts below 2 cannot form an axis and behave as 2
    let axis = uniform_ticks(&[47.0], 0);

    assert!(axis.max_tick >= 47.0);
    assert!(axis.ticks.len() >= 2);
}

// ===== merge_time_axis_max Tests =====

#[test]
fn test_merge_time_axis_ladder() {
    assert_eq!(merge_time_axis_max(&[]), 10.0);
    assert_eq!(merge_time_axis_max(&[4.0]), 10.0);
    assert_eq!(merge_time_axis_max(&[10.0]), 10.0);
    assert_eq!(merge_time_axis_max(&[10.5]), 20.0);
    assert_eq!(merge_time_axis_max(&[20.0]), 20.0);
    assert_eq!(merge_time_axis_max(&[35.0]), 50.0);
    assert_eq!(merge_time_axis_max(&[99.0]), 100.0);
    assert_eq!(merge_time_axis_max(&[100.0]), 100.0);
}

#[test]
fn test_merge_time_axis_beyond_ladder_climbs_in_fifties() {
    assert_eq!(merge_time_axis_max(&[101.0]), 150.0);
    assert_eq!(merge_time_axis_max(&[150.0]), 150.0);
    assert_eq!(merge_time_axis_max(&[260.0]), 300.0);
}

#[test]
fn test_merge_time_axis_ignores_order() {
    assert_eq!(merge_time_axis_max(&[3.0, 42.0, 17.0]), 50.0);
    assert_eq!(merge_time_axis_max(&[42.0, 3.0, 17.0]), 50.0);
}

// ===== Property Tests =====

proptest! {
    #[test]
    fn prop_max_tick_covers_every_value(values in prop::collection::vec(0.0f64..1e6, 1..50)) {
        let axis = uniform_ticks(&values, DEFAULT_TICK_COUNT);
        let max = values.iter().fold(0.0f64, |acc, v| acc.max(*v));
        prop_assert!(axis.max_tick >= max.max(1.0) - 1e-9);
    }

    #[test]
    fn prop_ticks_start_at_zero_and_increase(values in prop::collection::vec(0.0f64..1e6, 1..50)) {
        let axis = uniform_ticks(&values, DEFAULT_TICK_COUNT);
        prop_assert_eq!(axis.ticks[0], 0.0);
        for pair in axis.ticks.windows(2) {
            prop_assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn prop_last_tick_lands_on_max_tick(values in prop::collection::vec(0.0f64..1e6, 1..50)) {
        let axis = uniform_ticks(&values, DEFAULT_TICK_COUNT);
        let last = *axis.ticks.last().unwrap();
        let step = axis.ticks[1] - axis.ticks[0];
        // Within one step of the chosen maximum, never past it
        prop_assert!(last <= axis.max_tick + step * 1e-9);
        prop_assert!(axis.max_tick - last < step * (1.0 + 1e-9));
    }

    #[test]
    fn prop_ladder_bound_covers_max(values in prop::collection::vec(0.0f64..1e4, 0..20)) {
        let bound = merge_time_axis_max(&values);
        let max = values.iter().fold(0.0f64, |acc, v| acc.max(*v));
        prop_assert!(bound >= max);
        prop_assert!(bound >= 10.0);
    }
}
