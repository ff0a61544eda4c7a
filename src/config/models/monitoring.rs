//! Metrics and logging configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Metrics configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricsConfig {
    /// Latency samples kept per endpoint
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    /// Upstream sources present in every snapshot
    #[serde(default = "default_scraper_sources")]
    pub scraper_sources: Vec<String>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
            scraper_sources: default_scraper_sources(),
        }
    }
}

impl MetricsConfig {
    /// Merge metrics configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.history_capacity != default_history_capacity() {
            self.history_capacity = other.history_capacity;
        }
        if other.scraper_sources != default_scraper_sources() {
            self.scraper_sources = other.scraper_sources;
        }
        self
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Merge logging configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.level != default_log_level() {
            self.level = other.level;
        }
        if other.json {
            self.json = other.json;
        }
        self
    }
}
