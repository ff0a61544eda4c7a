//! Metrics aggregator integration tests

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use scraper_guard::{JobStatus, MetricsAggregator};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    fn seeded() -> MetricsAggregator {
        MetricsAggregator::with_sources(1_000, ["home_depot", "lowes"])
    }

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    /// COMPLETED(10), COMPLETED(20), FAILED
    #[test]
    fn test_job_lifecycle_scenario() {
        let aggregator = MetricsAggregator::default();

        aggregator.update_job_metrics("full_catalog", JobStatus::Completed, 40, secs(10));
        aggregator.update_job_metrics("full_catalog", JobStatus::Completed, 60, secs(20));
        aggregator.update_job_metrics("full_catalog", JobStatus::Failed, 0, Duration::ZERO);

        let snapshot = aggregator.snapshot();
        let job = snapshot.job("full_catalog").unwrap();
        assert_eq!(job.total, 3);
        assert_eq!(job.completed, 2);
        assert_eq!(job.failed, 1);
        assert_eq!(job.running, 0);
        assert_eq!(job.products_scraped, 100);
        assert_approx_eq!(job.avg_duration, 15.0);
    }

    /// Only the most recent samples contribute to the average
    #[test]
    fn test_latency_history_is_bounded() {
        let aggregator = MetricsAggregator::new(3);

        for s in [100, 100, 100, 1, 2, 3] {
            aggregator.record_request_latency("products", secs(s));
        }

        assert_eq!(aggregator.latency_samples("products"), 3);
        assert_approx_eq!(aggregator.snapshot().average_time("products").unwrap(), 2.0);
    }

    #[test]
    fn test_running_mean_matches_arithmetic_mean() {
        let aggregator = MetricsAggregator::default();
        let samples: Vec<u64> = (1..=97).map(|i| (i * 7919) % 1013).collect();

        for &ms in &samples {
            aggregator.update_scraper_metrics("lowes", true, 1, Duration::from_millis(ms));
        }

        let expected = samples.iter().sum::<u64>() as f64 / samples.len() as f64 / 1000.0;
        let actual = aggregator.snapshot().scraper("lowes").unwrap().avg_request_time;
        assert!(((actual - expected) / expected).abs() < 1e-9);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let aggregator = seeded();
        aggregator.record_request_latency("scrape", Duration::from_millis(500));
        aggregator.record_error("scrape", "RateLimitError");
        aggregator.update_job_metrics("prices", JobStatus::Running, 0, Duration::ZERO);
        aggregator.update_scraper_metrics("home_depot", false, 0, Duration::ZERO);

        let json: serde_json::Value =
            serde_json::from_str(&aggregator.snapshot().to_json().unwrap()).unwrap();

        assert_eq!(json["request_metrics"]["average_times"]["scrape"], 0.5);
        assert_eq!(json["request_metrics"]["error_counts"]["scrape:RateLimitError"], 1);
        assert_eq!(json["job_metrics"]["prices"]["running"], 1);
        assert_eq!(json["job_metrics"]["prices"]["avg_duration"], 0.0);
        assert_eq!(json["scraper_metrics"]["home_depot"]["failed_requests"], 1);
        assert_eq!(json["scraper_metrics"]["lowes"]["requests"], 0);
    }

    /// requests == successful + failed in every snapshot taken under load
    #[test]
    fn test_snapshots_consistent_under_load() {
        let aggregator = Arc::new(seeded());

        let writers: Vec<_> = (0..8)
            .map(|i| {
                let aggregator = Arc::clone(&aggregator);
                thread::spawn(move || {
                    for n in 0..500 {
                        let success = (n + i) % 3 != 0;
                        aggregator.update_scraper_metrics("home_depot", success, 2, secs(1));
                        aggregator.record_request_latency("scrape", secs(1));
                    }
                })
            })
            .collect();

        let reader = {
            let aggregator = Arc::clone(&aggregator);
            thread::spawn(move || {
                for _ in 0..200 {
                    let snapshot = aggregator.snapshot();
                    let source = snapshot.scraper("home_depot").unwrap();
                    assert_eq!(
                        source.requests,
                        source.successful_requests + source.failed_requests
                    );
                }
            })
        };

        for writer in writers {
            writer.join().unwrap();
        }
        reader.join().unwrap();

        let snapshot = aggregator.snapshot();
        let source = snapshot.scraper("home_depot").unwrap();
        assert_eq!(source.requests, 4000);
        assert_eq!(source.products_scraped, source.successful_requests * 2);
        assert_approx_eq!(source.avg_request_time, 1.0);
    }
}
