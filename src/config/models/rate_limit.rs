//! Rate limiting configuration

use super::*;
use crate::utils::net::limiter::RateLimitRule;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Rule applied to endpoints without an override
    #[serde(default)]
    pub default: RateLimitRuleConfig,
    /// Per-endpoint overrides
    #[serde(default)]
    pub endpoints: BTreeMap<String, RateLimitRuleConfig>,
    /// Maximum number of keys tracked at once
    #[serde(default = "default_max_keys")]
    pub max_keys: usize,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default: RateLimitRuleConfig::default(),
            endpoints: BTreeMap::new(),
            max_keys: default_max_keys(),
        }
    }
}

impl RateLimitConfig {
    /// Rule for `endpoint`, falling back to the default rule
    pub fn rule_for(&self, endpoint: &str) -> RateLimitRule {
        self.endpoints
            .get(endpoint)
            .unwrap_or(&self.default)
            .rule()
    }

    /// Merge rate limit configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = other.enabled;
        }
        if other.default != RateLimitRuleConfig::default() {
            self.default = other.default;
        }
        self.endpoints.extend(other.endpoints);
        if other.max_keys != default_max_keys() {
            self.max_keys = other.max_keys;
        }
        self
    }
}

/// One `limit` per `window_secs` quota
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimitRuleConfig {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
}

impl Default for RateLimitRuleConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            window_secs: default_window_secs(),
        }
    }
}

impl RateLimitRuleConfig {
    pub fn rule(&self) -> RateLimitRule {
        RateLimitRule::new(self.limit, Duration::from_secs(self.window_secs))
    }
}
