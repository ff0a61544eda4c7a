//! Application state shared across request handlers and job runners
//!
//! This module provides the AppState struct and its implementations.

use crate::config::Config;
use crate::monitoring::{MetricsAggregator, MetricsSnapshot};
use crate::utils::net::limiter::{AdmissionController, Clock, SystemClock};
use std::sync::Arc;
use tracing::debug;

/// State shared across handlers and job runners
///
/// Both components are constructed here from configuration and shared by
/// `Arc`; cloning the state is cheap. Separate instances are fully isolated.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Admission controller
    pub admission: Arc<AdmissionController>,
    /// Metrics aggregator
    pub metrics: Arc<MetricsAggregator>,
}

impl AppState {
    /// Create a new AppState on the system clock
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a new AppState whose admission decisions read `clock`
    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        let admission = AdmissionController::with_clock(clock, config.rate_limit().max_keys);
        let metrics = MetricsAggregator::with_sources(
            config.metrics().history_capacity,
            config.metrics().scraper_sources.iter().cloned(),
        );

        debug!(
            rate_limit_enabled = config.rate_limit().enabled,
            "Application state initialized"
        );

        Self {
            config: Arc::new(config),
            admission: Arc::new(admission),
            metrics: Arc::new(metrics),
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current metrics for the operator-facing view
    pub fn snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}
