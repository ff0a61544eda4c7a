//! Admission control for the service
//!
//! This module provides a per-key sliding window rate limiter. Each key keeps
//! the timestamps of its admitted requests; a request is admitted when fewer
//! than `limit` of them fall inside the trailing window.

// Module declarations
mod clock;
mod limiter;
mod types;
mod utils;
mod window;


// Re-exports
pub use clock::{Clock, ManualClock, SystemClock};
pub use limiter::{AdmissionController, DEFAULT_MAX_KEYS, MAX_WINDOW};
pub use types::{RateLimitDecision, RateLimitRule, RateWindow};
pub use utils::scoped_key;
