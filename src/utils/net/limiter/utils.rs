//! Utility functions and helper implementations
//!
//! Key building and response header rendering for admission decisions.

use chrono::{DateTime, TimeDelta, Utc};

use super::types::RateLimitDecision;

/// Key an admission check per endpoint and caller, so endpoints with
/// different quotas do not share a window.
pub fn scoped_key(endpoint: &str, caller: &str) -> String {
    format!("{}:{}", endpoint, caller)
}

impl RateLimitDecision {
    /// `X-RateLimit-*` response headers, reset as Unix epoch seconds
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        self.headers_at(Utc::now())
    }

    /// Headers computed against an explicit wall-clock "now"
    pub fn headers_at(&self, now: DateTime<Utc>) -> Vec<(&'static str, String)> {
        let until_reset = TimeDelta::from_std(self.retry_after()).unwrap_or_else(|_| TimeDelta::zero());
        let reset_epoch = (now + until_reset).timestamp();

        vec![
            ("X-RateLimit-Limit", self.limit.to_string()),
            ("X-RateLimit-Remaining", self.remaining.to_string()),
            ("X-RateLimit-Reset", reset_epoch.to_string()),
        ]
    }
}
