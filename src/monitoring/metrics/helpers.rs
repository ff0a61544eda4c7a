//! Helper functions for metrics calculations

use std::collections::VecDeque;
use std::time::Duration;

/// Calculate average of f64 values, zero when empty
pub(super) fn calculate_average(values: &VecDeque<f64>) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Fold `sample` into a running mean over `count` samples (including this one)
#[inline]
pub(super) fn fold_mean(avg: f64, sample: f64, count: u64) -> f64 {
    if count == 0 {
        return avg;
    }
    avg + (sample - avg) / count as f64
}

/// Durations are reported in fractional seconds
#[inline]
pub(super) fn as_seconds(duration: Duration) -> f64 {
    duration.as_secs_f64()
}
