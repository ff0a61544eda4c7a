//! Time sources for the admission controller

use parking_lot::Mutex;
use std::fmt::Debug;
use std::time::{Duration, Instant};

/// Source of "now" for window decisions
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> Instant;
}

/// Monotonic wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    start: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    /// The instant this clock reads at offset zero
    pub fn start(&self) -> Instant {
        self.start
    }

    /// Time elapsed since `start`
    pub fn elapsed(&self) -> Duration {
        *self.offset.lock()
    }

    pub fn advance(&self, by: Duration) {
        *self.offset.lock() += by;
    }

    /// Jump to an absolute offset from `start`
    pub fn set(&self, offset: Duration) {
        *self.offset.lock() = offset;
    }

    /// Offset of `instant` from `start`, saturating at zero
    pub fn offset_of(&self, instant: Instant) -> Duration {
        instant.saturating_duration_since(self.start)
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.start + *self.offset.lock()
    }
}
