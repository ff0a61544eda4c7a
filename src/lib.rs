//! # scraper-guard
//!
//! In-process admission control and metrics aggregation for a product
//! scraping service.
//!
//! ## Features
//!
//! - **Sliding-window admission**: exact per-key quotas over a trailing window
//! - **Metrics aggregation**: request latencies, error tallies, job and
//!   per-source scraper statistics behind a single consistent snapshot
//! - **Thread-safe**: every operation is safe to call from many tasks at once
//! - **Configurable**: YAML/JSON files or `SCRAPER_*` environment variables
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scraper_guard::{AppState, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/scraper.yaml").await?;
//!     let state = AppState::new(config);
//!
//!     state.admit("scrape", "10.0.0.1")?;
//!     let products = state
//!         .time_request("scrape", async { Ok(12u64) })
//!         .await?;
//!
//!     let job = state.start_job("full_catalog");
//!     job.complete(products);
//!
//!     println!("{}", state.snapshot().to_json_pretty()?);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod monitoring;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use monitoring::{
    JobMetrics, JobStatus, MetricsAggregator, MetricsSnapshot, RequestMetrics, ScraperMetrics,
};
pub use server::{Admission, Admitted, AppState, JobRun, spawn_idle_sweeper};
pub use utils::error::{ErrorResponse, Result, ServiceError};
pub use utils::logging::init_tracing;
pub use utils::net::limiter::{
    AdmissionController, Clock, ManualClock, RateLimitDecision, RateLimitRule, SystemClock,
};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time (Unix seconds)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
