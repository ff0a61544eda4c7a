//! Request and job layer integration tests

#[cfg(test)]
mod tests {
    use crate::common::{ConfigFactory, TestState};
    use scraper_guard::{Admission, ServiceError};
    use std::time::Duration;

    /// A handler guarded by admission, timed on success
    async fn fetch_products(state: &scraper_guard::AppState, caller: &str) -> Result<u64, ServiceError> {
        state
            .handle("scrape", caller, async { Ok(7) })
            .await
            .map(|handled| handled.value)
    }

    #[tokio::test]
    async fn test_guarded_requests_until_denied() {
        let test = TestState::new(ConfigFactory::with_endpoint("scrape", 2, 60));

        assert_eq!(fetch_products(&test.state, "10.0.0.1").await.unwrap(), 7);
        assert_eq!(fetch_products(&test.state, "10.0.0.1").await.unwrap(), 7);

        let err = fetch_products(&test.state, "10.0.0.1").await.unwrap_err();
        let body = err.to_response();
        assert_eq!(err.status_code(), 429);
        assert_eq!(body.error_type, "RateLimitError");
        assert!(body.error.contains("Try again after 60 seconds"));

        // Another caller has its own quota
        assert!(fetch_products(&test.state, "10.0.0.2").await.is_ok());

        let snapshot = test.state.snapshot();
        assert_eq!(snapshot.error_count("scrape", "RateLimitError"), 1);
        assert_eq!(test.state.metrics.latency_samples("scrape"), 3);
    }

    #[tokio::test]
    async fn test_denied_caller_recovers() {
        let test = TestState::new(ConfigFactory::with_endpoint("scrape", 1, 30));

        fetch_products(&test.state, "caller").await.unwrap();
        let err = fetch_products(&test.state, "caller").await.unwrap_err();
        assert_eq!(err.retry_after(), Some(Duration::from_secs(30)));

        test.clock.advance(Duration::from_secs(30));
        assert!(fetch_products(&test.state, "caller").await.is_ok());
    }

    #[tokio::test]
    async fn test_guarded_request_carries_headers() {
        let test = TestState::new(ConfigFactory::with_endpoint("scrape", 5, 60));

        let handled = test
            .state
            .handle("scrape", "caller", async { Ok(()) })
            .await
            .unwrap();
        let headers = handled.headers();

        assert_eq!(headers[0], ("X-RateLimit-Limit", "5".to_string()));
        assert_eq!(headers[1], ("X-RateLimit-Remaining", "4".to_string()));
    }

    #[test]
    fn test_admission_headers() {
        let test = TestState::with_defaults();

        let admission = test.state.admit("products", "caller").unwrap();
        let headers = admission.headers();
        let names: Vec<_> = headers.iter().map(|(name, _)| *name).collect();

        assert_eq!(
            names,
            vec!["X-RateLimit-Limit", "X-RateLimit-Remaining", "X-RateLimit-Reset"]
        );
        assert_eq!(headers[0].1, "100");
        assert_eq!(headers[1].1, "99");
    }

    #[test]
    fn test_disabled_rate_limiting() {
        let test = TestState::new(ConfigFactory::unlimited());

        for _ in 0..1_000 {
            assert_eq!(
                test.state.admit("scrape", "caller").unwrap(),
                Admission::Unlimited
            );
        }
        assert_eq!(test.state.admission.tracked_keys(), 0);
    }

    #[tokio::test]
    async fn test_job_with_scrapes() {
        let test = TestState::with_defaults();

        let job = test.state.start_job("full_catalog");
        let mut total = 0;
        for source in ["home_depot", "lowes"] {
            total += test
                .state
                .track_scrape(source, async { Ok(10) })
                .await
                .unwrap();
        }
        let _ = test
            .state
            .track_scrape("lowes", async { Err(ServiceError::api("timeout")) })
            .await;
        job.complete(total);

        let snapshot = test.state.snapshot();
        let job = snapshot.job("full_catalog").unwrap();
        assert_eq!(job.completed, 1);
        assert_eq!(job.products_scraped, 20);

        let lowes = snapshot.scraper("lowes").unwrap();
        assert_eq!(lowes.requests, 2);
        assert_eq!(lowes.failed_requests, 1);
        assert_eq!(snapshot.scraper("home_depot").unwrap().products_scraped, 10);
    }

    #[tokio::test]
    async fn test_abandoned_job_is_failed() {
        let test = TestState::with_defaults();

        let job = test.state.start_job("prices");
        let task = tokio::spawn(async move {
            // panics before resolving the run
            let _job = job;
            panic!("scrape task crashed");
        });
        assert!(task.await.is_err());

        let snapshot = test.state.snapshot();
        let job = snapshot.job("prices").unwrap();
        assert_eq!(job.failed, 1);
        assert_eq!(job.completed, 0);
    }
}
