//! Rate limiting types and data structures
//!
//! This module defines the core types used for admission decisions.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// A quota: at most `limit` operations per trailing `window`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitRule {
    pub limit: u32,
    pub window: Duration,
}

impl RateLimitRule {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self { limit, window }
    }

    pub fn per_second(limit: u32) -> Self {
        Self::new(limit, Duration::from_secs(1))
    }

    pub fn per_minute(limit: u32) -> Self {
        Self::new(limit, Duration::from_secs(60))
    }
}

/// Admitted request timestamps for one key, oldest first
#[derive(Debug, Clone)]
pub struct RateWindow {
    /// Window the key was last checked with
    pub(super) window: Duration,
    pub(super) timestamps: VecDeque<Instant>,
}

impl RateWindow {
    /// Number of timestamps currently held (including any not yet pruned)
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn oldest(&self) -> Option<Instant> {
        self.timestamps.front().copied()
    }
}

/// Outcome of an admission check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    /// Whether the operation may proceed
    pub allowed: bool,
    /// The limit the decision was made against
    pub limit: u32,
    /// Slots left in the trailing window after this decision
    pub remaining: u32,
    /// When a slot frees up (denied) or when this admission expires (allowed)
    pub reset_at: Instant,
    /// The "now" the decision was made at
    pub decided_at: Instant,
}

impl RateLimitDecision {
    /// Time from the decision until `reset_at`
    pub fn retry_after(&self) -> Duration {
        self.reset_at.saturating_duration_since(self.decided_at)
    }

    pub fn is_denied(&self) -> bool {
        !self.allowed
    }
}
