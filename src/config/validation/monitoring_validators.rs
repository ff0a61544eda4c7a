//! Metrics and logging configuration validators

use super::trait_def::Validate;
use crate::config::models::*;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Validate for MetricsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.history_capacity == 0 {
            return Err("Metrics history capacity must be greater than 0".to_string());
        }

        if self.scraper_sources.iter().any(|s| s.trim().is_empty()) {
            return Err("Scraper source names cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if !LOG_LEVELS.contains(&self.level.to_ascii_lowercase().as_str()) {
            return Err(format!(
                "Unknown log level '{}', expected one of {:?}",
                self.level, LOG_LEVELS
            ));
        }
        Ok(())
    }
}
