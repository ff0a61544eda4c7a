//! Configuration management for the service
//!
//! This module handles loading, validation, and management of the values the
//! admission controller and metrics aggregator are constructed from.

mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{Result, ServiceError};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the service
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,
}

impl Config {
    /// Load configuration from a YAML or JSON file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ServiceError::Config(format!("Failed to read config file: {}", e)))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let service: ServiceConfig = if is_json {
            serde_json::from_str(&content)
                .map_err(|e| ServiceError::Config(format!("Failed to parse config: {}", e)))?
        } else {
            serde_yaml::from_str(&content)
                .map_err(|e| ServiceError::Config(format!("Failed to parse config: {}", e)))?
        };

        let config = Self { service };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables, reading `.env` first
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {:?}", path);
        }

        let config = Self {
            service: ServiceConfig::from_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from explicit variables (no `.env`, no process env)
    pub fn from_env_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let config = Self {
            service: ServiceConfig::from_env_vars(vars)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Get rate limit configuration
    pub fn rate_limit(&self) -> &RateLimitConfig {
        &self.service.rate_limit
    }

    /// Get metrics configuration
    pub fn metrics(&self) -> &MetricsConfig {
        &self.service.metrics
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.service.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.service
            .rate_limit
            .validate()
            .map_err(|e| ServiceError::Config(format!("Rate limit config error: {}", e)))?;

        self.service
            .metrics
            .validate()
            .map_err(|e| ServiceError::Config(format!("Metrics config error: {}", e)))?;

        self.service
            .logging
            .validate()
            .map_err(|e| ServiceError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.service = self.service.merge(other.service);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.service)
            .map_err(|e| ServiceError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.service)
            .map_err(|e| ServiceError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
