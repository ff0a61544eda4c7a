//! Bounded collection utilities for metrics

use std::collections::VecDeque;

/// Default number of latency samples retained per endpoint
pub const DEFAULT_HISTORY_CAPACITY: usize = 1_000;

/// Helper trait for bounded VecDeque operations
pub(super) trait BoundedPush<T> {
    fn push_bounded(&mut self, value: T, max_size: usize);
}

impl<T> BoundedPush<T> for VecDeque<T> {
    /// Push a value while maintaining a maximum size (O(1) amortized)
    #[inline]
    fn push_bounded(&mut self, value: T, max_size: usize) {
        while self.len() >= max_size.max(1) {
            self.pop_front();
        }
        self.push_back(value);
    }
}
