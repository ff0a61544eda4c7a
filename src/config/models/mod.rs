//! Configuration data models
//!
//! This module defines all configuration structures used by the service.

pub mod monitoring;
pub mod rate_limit;
pub mod service;

// Re-export all configuration types
pub use monitoring::*;
pub use rate_limit::*;
pub use service::*;

/// Default for boolean flags that are on unless disabled
pub fn default_true() -> bool {
    true
}

/// Default requests allowed per window
pub fn default_limit() -> u32 {
    100
}

/// Default window length in seconds
pub fn default_window_secs() -> u64 {
    60
}

/// Default bound on tracked rate limit keys
pub fn default_max_keys() -> usize {
    crate::utils::net::limiter::DEFAULT_MAX_KEYS
}

/// Default latency samples kept per endpoint
pub fn default_history_capacity() -> usize {
    crate::monitoring::DEFAULT_HISTORY_CAPACITY
}

/// Default upstream data sources
pub fn default_scraper_sources() -> Vec<String> {
    vec!["home_depot".to_string(), "lowes".to_string()]
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}
