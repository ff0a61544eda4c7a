//! Sliding window rate limiting implementation
//!
//! Timestamps are kept in admission order, so expiry only ever pops from the
//! front and each timestamp is removed at most once.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::types::{RateLimitDecision, RateWindow};

impl RateWindow {
    pub(super) fn new(window: Duration) -> Self {
        Self {
            window,
            timestamps: VecDeque::new(),
        }
    }

    /// Drop timestamps whose age has reached the window. Returns how many went.
    pub(super) fn prune(&mut self, now: Instant) -> usize {
        let mut removed = 0;
        while let Some(&oldest) = self.timestamps.front() {
            if now.saturating_duration_since(oldest) < self.window {
                break;
            }
            self.timestamps.pop_front();
            removed += 1;
        }
        removed
    }

    /// Number of timestamps still inside the window at `now`, without pruning
    pub(super) fn live_count(&self, now: Instant, window: Duration) -> usize {
        self.timestamps
            .iter()
            .rev()
            .take_while(|&&t| now.saturating_duration_since(t) < window)
            .count()
    }

    /// True when nothing would survive a prune at `now`
    pub(super) fn is_idle(&self, now: Instant) -> bool {
        self.timestamps
            .back()
            .is_none_or(|&newest| now.saturating_duration_since(newest) >= self.window)
    }

    /// Prune, decide, and record `now` when admitted.
    ///
    /// `horizon` is the caller's `now + window`, already checked to be
    /// representable; reset times that would overflow fall back to it.
    pub(super) fn admit(
        &mut self,
        now: Instant,
        limit: u32,
        window: Duration,
        horizon: Instant,
    ) -> RateLimitDecision {
        self.window = window;
        self.prune(now);

        // Keep insertion order non-decreasing even if the clock is stepped back
        let now = self.timestamps.back().map_or(now, |&last| now.max(last));
        let count = self.timestamps.len();

        if count >= limit as usize {
            let reset_at = self
                .timestamps
                .front()
                .map_or(horizon, |&oldest| expiry(oldest, window, horizon));
            return RateLimitDecision {
                allowed: false,
                limit,
                remaining: 0,
                reset_at,
                decided_at: now,
            };
        }

        self.timestamps.push_back(now);
        RateLimitDecision {
            allowed: true,
            limit,
            remaining: limit - self.timestamps.len() as u32,
            reset_at: expiry(now, window, horizon),
            decided_at: now,
        }
    }

    /// Current standing at `now` without touching state: `remaining` counts
    /// the free slots before any new admission
    pub(super) fn evaluate(
        &self,
        now: Instant,
        limit: u32,
        window: Duration,
        horizon: Instant,
    ) -> RateLimitDecision {
        let live = self.live_count(now, window);
        if live >= limit as usize {
            let oldest_live = self.timestamps.iter().rev().take(live).last().copied();
            return RateLimitDecision {
                allowed: false,
                limit,
                remaining: 0,
                reset_at: oldest_live.map_or(horizon, |oldest| expiry(oldest, window, horizon)),
                decided_at: now,
            };
        }

        RateLimitDecision {
            allowed: true,
            limit,
            remaining: limit - live as u32,
            reset_at: horizon,
            decided_at: now,
        }
    }

    /// When this key's newest admission leaves the window it was last
    /// checked with, if that instant is representable
    pub(super) fn drains_at(&self) -> Option<Instant> {
        self.timestamps
            .back()
            .and_then(|&newest| newest.checked_add(self.window))
    }
}

/// `at + window`, or `horizon` when that is not representable
fn expiry(at: Instant, window: Duration, horizon: Instant) -> Instant {
    at.checked_add(window).unwrap_or(horizon)
}
