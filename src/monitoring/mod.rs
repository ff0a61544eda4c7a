//! Monitoring and observability
//!
//! This module provides the in-process metrics aggregator and the snapshot
//! types served to the operator-facing metrics view.

pub mod metrics;

mod types;


pub use metrics::{DEFAULT_HISTORY_CAPACITY, MetricsAggregator};
pub use types::{JobMetrics, JobStatus, MetricsSnapshot, RequestMetrics, ScraperMetrics};
