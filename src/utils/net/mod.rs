//! Network-facing utilities
//!
//! This module provides admission control for incoming requests.

pub mod limiter;

pub use limiter::{AdmissionController, RateLimitDecision, RateLimitRule};
