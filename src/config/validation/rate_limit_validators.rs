//! Rate limit configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use crate::utils::net::limiter::MAX_WINDOW;
use tracing::debug;

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating service configuration");

        self.rate_limit.validate()?;
        self.metrics.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}

impl Validate for RateLimitConfig {
    fn validate(&self) -> Result<(), String> {
        self.default
            .validate()
            .map_err(|e| format!("default rule: {}", e))?;

        for (endpoint, rule) in &self.endpoints {
            if endpoint.is_empty() {
                return Err("Rate limit endpoint name cannot be empty".to_string());
            }
            rule.validate()
                .map_err(|e| format!("endpoint '{}': {}", endpoint, e))?;
        }

        if self.max_keys == 0 {
            return Err("Rate limit max_keys must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for RateLimitRuleConfig {
    fn validate(&self) -> Result<(), String> {
        if self.window_secs == 0 {
            return Err("Rate limit window must be greater than 0 seconds".to_string());
        }
        if self.window_secs > MAX_WINDOW.as_secs() {
            return Err(format!(
                "Rate limit window must be at most {} seconds",
                MAX_WINDOW.as_secs()
            ));
        }
        Ok(())
    }
}
