//! Core AdmissionController implementation
//!
//! This module contains the AdmissionController struct and its core methods.

use crate::utils::error::{Result, ServiceError};
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use super::clock::{Clock, SystemClock};
use super::types::{RateLimitDecision, RateLimitRule, RateWindow};

/// Default bound on the number of keys tracked at once
pub const DEFAULT_MAX_KEYS: usize = 100_000;

/// Longest window a check accepts
pub const MAX_WINDOW: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Sliding window admission controller
///
/// One lock guards the whole key table, so decisions for a key are totally
/// ordered and "now" is always read while holding it.
///
/// The table holds at most `max_keys` keys. Only idle keys (nothing left in
/// their window) are evicted to make room; while every tracked key is live,
/// checks for new keys are denied until the earliest window drains.
#[derive(Debug)]
pub struct AdmissionController {
    clock: Arc<dyn Clock>,
    table: Mutex<KeyTable>,
}

#[derive(Debug)]
struct KeyTable {
    /// Per-key windows in recency order
    windows: LruCache<String, RateWindow>,
    /// Set while the table is full of live keys: no key drains before this
    full_until: Option<Instant>,
}

impl KeyTable {
    /// Remove every idle key. Returns how many went.
    fn remove_idle(&mut self, now: Instant) -> usize {
        let idle: Vec<String> = self
            .windows
            .iter()
            .filter(|(_, entry)| entry.is_idle(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &idle {
            self.windows.pop(key);
        }
        if !idle.is_empty() {
            self.full_until = None;
        }
        idle.len()
    }

    /// Make room for one new key. On failure returns when to retry.
    fn make_room(&mut self, now: Instant, horizon: Instant) -> std::result::Result<(), Instant> {
        if self.windows.len() < self.windows.cap().get() {
            return Ok(());
        }
        if let Some(until) = self.full_until.filter(|&until| now < until) {
            return Err(until);
        }

        let removed = self.remove_idle(now);
        if removed > 0 {
            debug!(removed, "Evicted idle rate limit keys to make room");
            return Ok(());
        }

        let until = self
            .windows
            .iter()
            .filter_map(|(_, entry)| entry.drains_at())
            .min()
            .map_or(horizon, |t| t.max(now));
        self.full_until = Some(until);
        Err(until)
    }
}

impl AdmissionController {
    /// Create a new controller on the system clock
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_KEYS)
    }

    pub fn with_capacity(max_keys: usize) -> Self {
        Self::with_clock(Arc::new(SystemClock), max_keys)
    }

    /// Create a controller on an explicit clock. `max_keys` of zero is
    /// treated as one.
    pub fn with_clock(clock: Arc<dyn Clock>, max_keys: usize) -> Self {
        let cap = NonZeroUsize::new(max_keys).unwrap_or(NonZeroUsize::MIN);
        debug!(max_keys = cap.get(), "Creating admission controller");
        Self {
            clock,
            table: Mutex::new(KeyTable {
                windows: LruCache::new(cap),
                full_until: None,
            }),
        }
    }

    /// Decide whether one more operation for `key` fits in `limit` per
    /// trailing `window`, recording it when it does.
    ///
    /// Denial is a normal outcome. The only error is a window that is zero
    /// or longer than [`MAX_WINDOW`].
    pub fn check(&self, key: &str, limit: u32, window: Duration) -> Result<RateLimitDecision> {
        let mut table = self.table.lock();
        let now = self.clock.now();
        let horizon = window_end(now, window)?;

        if !table.windows.contains(key) {
            if let Err(reset_at) = table.make_room(now, horizon) {
                warn!(key, "Rate limit key table full, denying untracked key");
                return Ok(RateLimitDecision {
                    allowed: false,
                    limit,
                    remaining: 0,
                    reset_at,
                    decided_at: now,
                });
            }
        }

        let entry = table
            .windows
            .get_or_insert_mut(key.to_string(), || RateWindow::new(window));
        Ok(entry.admit(now, limit, window, horizon))
    }

    /// `check` against a configured rule
    pub fn check_rule(&self, key: &str, rule: &RateLimitRule) -> Result<RateLimitDecision> {
        self.check(key, rule.limit, rule.window)
    }

    /// Report where `key` stands without recording anything or touching its
    /// recency.
    pub fn peek(&self, key: &str, limit: u32, window: Duration) -> Result<RateLimitDecision> {
        let table = self.table.lock();
        let now = self.clock.now();
        let horizon = window_end(now, window)?;

        Ok(match table.windows.peek(key) {
            Some(entry) => entry.evaluate(now, limit, window, horizon),
            None => RateWindow::new(window).evaluate(now, limit, window, horizon),
        })
    }

    /// Drop every key whose window has fully expired. Returns how many went.
    pub fn purge_idle(&self) -> usize {
        let mut table = self.table.lock();
        let now = self.clock.now();

        let removed = table.remove_idle(now);
        if removed > 0 {
            debug!(removed, remaining = table.windows.len(), "Purged idle rate limit keys");
        }
        removed
    }

    /// Number of keys currently tracked
    pub fn tracked_keys(&self) -> usize {
        self.table.lock().windows.len()
    }

    /// Upper bound on tracked keys
    pub fn max_keys(&self) -> usize {
        self.table.lock().windows.cap().get()
    }
}

impl Default for AdmissionController {
    fn default() -> Self {
        Self::new()
    }
}

/// `now + window` for a window in `(0, MAX_WINDOW]`
fn window_end(now: Instant, window: Duration) -> Result<Instant> {
    if window.is_zero() {
        return Err(ServiceError::invalid_argument(
            "rate limit window must be greater than zero",
        ));
    }
    if window > MAX_WINDOW {
        return Err(ServiceError::invalid_argument(format!(
            "rate limit window must be at most {} seconds",
            MAX_WINDOW.as_secs()
        )));
    }
    now.checked_add(window).ok_or_else(|| {
        ServiceError::invalid_argument("rate limit window extends past the clock's range")
    })
}
