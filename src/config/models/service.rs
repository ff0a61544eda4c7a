//! Main service configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Main service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ServiceConfig {
    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// Metrics configuration
    #[serde(default)]
    pub metrics: MetricsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.rate_limit = self.rate_limit.merge(other.rate_limit);
        self.metrics = self.metrics.merge(other.metrics);
        self.logging = self.logging.merge(other.logging);
        self
    }
}
