//! Configuration loading utilities
//!
//! Environment overrides use the `SCRAPER_` prefix and are applied on top of
//! the defaults.

use super::models::*;
use crate::utils::error::{Result, ServiceError};
use std::str::FromStr;
use tracing::debug;

const ENDPOINT_PREFIX: &str = "SCRAPER_RATE_LIMIT_ENDPOINT_";

impl ServiceConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_env_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_env_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        debug!("Loading configuration from environment variables");

        let mut config = Self::default();

        for (key, value) in vars {
            let (key, value) = (key.as_ref(), value.as_ref().trim());
            if !key.starts_with("SCRAPER_") {
                continue;
            }

            match key {
                "SCRAPER_RATE_LIMIT_ENABLED" => {
                    config.rate_limit.enabled = parse_bool(key, value)?;
                }
                "SCRAPER_RATE_LIMIT_LIMIT" => {
                    config.rate_limit.default.limit = parse_number(key, value)?;
                }
                "SCRAPER_RATE_LIMIT_WINDOW_SECS" => {
                    config.rate_limit.default.window_secs = parse_number(key, value)?;
                }
                "SCRAPER_RATE_LIMIT_MAX_KEYS" => {
                    config.rate_limit.max_keys = parse_number(key, value)?;
                }
                "SCRAPER_METRICS_HISTORY_CAPACITY" => {
                    config.metrics.history_capacity = parse_number(key, value)?;
                }
                "SCRAPER_METRICS_SOURCES" => {
                    config.metrics.scraper_sources = value
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect();
                }
                "SCRAPER_LOG_LEVEL" => {
                    config.logging.level = value.to_ascii_lowercase();
                }
                "SCRAPER_LOG_JSON" => {
                    config.logging.json = parse_bool(key, value)?;
                }
                _ => {
                    if let Some(endpoint) = key.strip_prefix(ENDPOINT_PREFIX) {
                        let rule = parse_rule(key, value)?;
                        config
                            .rate_limit
                            .endpoints
                            .insert(endpoint.to_ascii_lowercase(), rule);
                    } else {
                        debug!(key, "Ignoring unknown configuration variable");
                    }
                }
            }
        }

        debug!("Configuration loaded from environment variables");
        Ok(config)
    }
}

/// `true`/`yes`/`1` and `false`/`no`/`0`, case-insensitive
fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(ServiceError::config(format!(
            "Invalid boolean for {}: {}",
            key, value
        ))),
    }
}

fn parse_number<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| ServiceError::config(format!("Invalid value for {}: {}", key, e)))
}

/// `<limit>/<window_secs>`, e.g. `10/60`
fn parse_rule(key: &str, value: &str) -> Result<RateLimitRuleConfig> {
    let (limit, window) = value.split_once('/').ok_or_else(|| {
        ServiceError::config(format!(
            "Invalid rule for {}: expected <limit>/<window_secs>, got {}",
            key, value
        ))
    })?;

    Ok(RateLimitRuleConfig {
        limit: parse_number(key, limit.trim())?,
        window_secs: parse_number(key, window.trim())?,
    })
}
