//! Test fixtures and factories
//!
//! All factories create real objects, not mocks.

use scraper_guard::config::RateLimitRuleConfig;
use scraper_guard::{AdmissionController, AppState, Config, ManualClock};
use std::sync::Arc;

/// Factory for configurations
pub struct ConfigFactory;

impl ConfigFactory {
    /// Defaults: 100 per 60 s, history of 1000, two seeded sources
    pub fn create() -> Config {
        Config::default()
    }

    /// Defaults plus an override for one endpoint
    pub fn with_endpoint(endpoint: &str, limit: u32, window_secs: u64) -> Config {
        let mut config = Self::create();
        config
            .service
            .rate_limit
            .endpoints
            .insert(endpoint.to_string(), RateLimitRuleConfig { limit, window_secs });
        config
    }

    /// Rate limiting switched off
    pub fn unlimited() -> Config {
        let mut config = Self::create();
        config.service.rate_limit.enabled = false;
        config
    }
}

/// Application state paired with the clock driving it
pub struct TestState {
    pub state: AppState,
    pub clock: Arc<ManualClock>,
}

impl TestState {
    pub fn new(config: Config) -> Self {
        let clock = Arc::new(ManualClock::new());
        let state = AppState::with_clock(config, clock.clone());
        Self { state, clock }
    }

    pub fn with_defaults() -> Self {
        Self::new(ConfigFactory::create())
    }
}

/// A bare controller on a manual clock
pub fn manual_controller(max_keys: usize) -> (AdmissionController, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    (AdmissionController::with_clock(clock.clone(), max_keys), clock)
}
