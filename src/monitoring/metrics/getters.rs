//! Snapshot of the aggregated metrics

use super::collector::MetricsAggregator;
use super::helpers::calculate_average;
use crate::monitoring::types::{MetricsSnapshot, RequestMetrics};

impl MetricsAggregator {
    /// Copy every aggregate under the lock. Rolling means are computed from
    /// the latency samples held at this instant.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let storage = self.storage.lock();

        let average_times = storage
            .request
            .latencies
            .iter()
            .map(|(endpoint, samples)| (endpoint.clone(), calculate_average(samples)))
            .collect();

        let error_counts = storage
            .request
            .error_counts
            .iter()
            .map(|(key, &count)| (key.clone(), count))
            .collect();

        MetricsSnapshot {
            request_metrics: RequestMetrics {
                average_times,
                error_counts,
            },
            job_metrics: storage
                .jobs
                .iter()
                .map(|(job_type, metrics)| (job_type.clone(), metrics.clone()))
                .collect(),
            scraper_metrics: storage
                .scrapers
                .iter()
                .map(|(source, metrics)| (source.clone(), metrics.clone()))
                .collect(),
        }
    }

    /// Number of latency samples currently held for `endpoint`
    pub fn latency_samples(&self, endpoint: &str) -> usize {
        self.storage
            .lock()
            .request
            .latencies
            .get(endpoint)
            .map_or(0, |samples| samples.len())
    }
}
