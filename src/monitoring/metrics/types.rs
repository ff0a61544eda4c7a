//! Types for metrics storage

use crate::monitoring::types::{JobMetrics, ScraperMetrics};
use std::collections::HashMap;
use std::collections::VecDeque;

/// Consolidated metrics storage - single lock for all metrics
#[derive(Debug, Default)]
pub(super) struct MetricsStorage {
    pub(super) request: RequestMetricsStorage,
    pub(super) jobs: HashMap<String, JobMetrics>,
    pub(super) scrapers: HashMap<String, ScraperMetrics>,
}

/// Storage for request metrics
#[derive(Debug, Default)]
pub(super) struct RequestMetricsStorage {
    /// Latest latency samples per endpoint, in seconds
    pub(super) latencies: HashMap<String, VecDeque<f64>>,
    /// Keyed by `endpoint:error_type`; pairs that join to the same key share a tally
    pub(super) error_counts: HashMap<String, u64>,
}
