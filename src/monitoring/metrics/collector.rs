//! Metrics aggregator implementation for recording metrics

use super::bounded::{BoundedPush, DEFAULT_HISTORY_CAPACITY};
use super::helpers::{as_seconds, fold_mean};
use super::types::MetricsStorage;
use crate::monitoring::types::{JobStatus, ScraperMetrics, error_key};
use parking_lot::Mutex;
use std::time::Duration;
use tracing::debug;

/// Thread-safe accumulator of request, job and scraper metrics
///
/// Every operation holds the storage lock for its whole duration. None of
/// them can fail.
#[derive(Debug)]
pub struct MetricsAggregator {
    /// Latency samples kept per endpoint
    pub(super) history_capacity: usize,
    pub(super) storage: Mutex<MetricsStorage>,
}

impl MetricsAggregator {
    /// Create an aggregator keeping `history_capacity` latency samples per
    /// endpoint. Zero is treated as one.
    pub fn new(history_capacity: usize) -> Self {
        let history_capacity = history_capacity.max(1);
        debug!(history_capacity, "Creating metrics aggregator");
        Self {
            history_capacity,
            storage: Mutex::new(MetricsStorage::default()),
        }
    }

    /// Create an aggregator with the given scraper sources present (zeroed)
    /// from the start
    pub fn with_sources<I, S>(history_capacity: usize, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let aggregator = Self::new(history_capacity);
        {
            let mut storage = aggregator.storage.lock();
            for source in sources {
                storage.scrapers.entry(source.into()).or_default();
            }
        }
        aggregator
    }

    pub fn history_capacity(&self) -> usize {
        self.history_capacity
    }

    /// Record how long a request to `endpoint` took
    pub fn record_request_latency(&self, endpoint: &str, duration: Duration) {
        let mut storage = self.storage.lock();
        let capacity = self.history_capacity;
        storage
            .request
            .latencies
            .entry(endpoint.to_string())
            .or_default()
            .push_bounded(as_seconds(duration), capacity);
    }

    /// Record one occurrence of `error_type` on `endpoint`
    pub fn record_error(&self, endpoint: &str, error_type: &str) {
        let mut storage = self.storage.lock();
        *storage
            .request
            .error_counts
            .entry(error_key(endpoint, error_type))
            .or_insert(0) += 1;
    }

    /// Record a job status report
    ///
    /// `products_scraped` and `duration` only count for COMPLETED reports.
    /// The `running` counter is never decremented; callers report each
    /// terminal transition exactly once.
    pub fn update_job_metrics(
        &self,
        job_type: &str,
        status: JobStatus,
        products_scraped: u64,
        duration: Duration,
    ) {
        let mut storage = self.storage.lock();
        let metrics = storage.jobs.entry(job_type.to_string()).or_default();

        metrics.total += 1;
        match status {
            JobStatus::Running => metrics.running += 1,
            JobStatus::Completed => {
                metrics.completed += 1;
                metrics.products_scraped = metrics.products_scraped.saturating_add(products_scraped);
                metrics.avg_duration =
                    fold_mean(metrics.avg_duration, as_seconds(duration), metrics.completed);
            }
            JobStatus::Failed => metrics.failed += 1,
        }
    }

    /// Record one upstream request to `source`
    ///
    /// `products_scraped` and `request_time` only count for successes.
    pub fn update_scraper_metrics(
        &self,
        source: &str,
        success: bool,
        products_scraped: u64,
        request_time: Duration,
    ) {
        let mut storage = self.storage.lock();
        let metrics: &mut ScraperMetrics = storage.scrapers.entry(source.to_string()).or_default();

        metrics.requests += 1;
        if success {
            metrics.successful_requests += 1;
            metrics.products_scraped = metrics.products_scraped.saturating_add(products_scraped);
            metrics.avg_request_time = fold_mean(
                metrics.avg_request_time,
                as_seconds(request_time),
                metrics.successful_requests,
            );
        } else {
            metrics.failed_requests += 1;
        }
    }
}

impl Default for MetricsAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
