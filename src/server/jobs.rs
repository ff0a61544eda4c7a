//! Job lifecycle tracking

use crate::monitoring::{JobStatus, MetricsAggregator};
use crate::server::state::AppState;
use crate::utils::error::Result;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// A running job
///
/// Created by [`AppState::start_job`], which reports the RUNNING transition.
/// Exactly one terminal transition is reported: [`JobRun::complete`] or
/// [`JobRun::fail`] consume the token, and dropping an unresolved token
/// reports FAILED.
#[derive(Debug)]
#[must_use = "dropping a JobRun reports the job as failed"]
pub struct JobRun {
    metrics: Arc<MetricsAggregator>,
    job_type: String,
    started_at: Instant,
    resolved: bool,
}

impl JobRun {
    fn new(metrics: Arc<MetricsAggregator>, job_type: &str) -> Self {
        metrics.update_job_metrics(job_type, JobStatus::Running, 0, Duration::ZERO);
        debug!(job_type, "Job started");

        Self {
            metrics,
            job_type: job_type.to_string(),
            started_at: Instant::now(),
            resolved: false,
        }
    }

    pub fn job_type(&self) -> &str {
        &self.job_type
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Report the job as completed with `products_scraped` items
    pub fn complete(mut self, products_scraped: u64) {
        self.finish(JobStatus::Completed, products_scraped);
    }

    /// Report the job as failed
    pub fn fail(mut self) {
        self.finish(JobStatus::Failed, 0);
    }

    fn finish(&mut self, status: JobStatus, products_scraped: u64) {
        let duration = self.started_at.elapsed();
        self.metrics
            .update_job_metrics(&self.job_type, status, products_scraped, duration);
        self.resolved = true;
        debug!(job_type = %self.job_type, %status, ?duration, "Job finished");
    }
}

impl Drop for JobRun {
    fn drop(&mut self) {
        if !self.resolved {
            warn!(job_type = %self.job_type, "Job dropped without a result, recording failure");
            self.finish(JobStatus::Failed, 0);
        }
    }
}

impl AppState {
    /// Start tracking a job of `job_type`
    pub fn start_job(&self, job_type: &str) -> JobRun {
        JobRun::new(Arc::clone(&self.metrics), job_type)
    }

    /// Run one upstream request against `source`, recording its outcome.
    ///
    /// The request resolves to the number of products it yielded.
    pub async fn track_scrape<F>(&self, source: &str, request: F) -> Result<u64>
    where
        F: Future<Output = Result<u64>>,
    {
        let start_time = Instant::now();
        let result = request.await;
        let elapsed = start_time.elapsed();

        match &result {
            Ok(products) => self
                .metrics
                .update_scraper_metrics(source, true, *products, elapsed),
            Err(e) => {
                debug!(source, error = %e, "Scrape request failed");
                self.metrics.update_scraper_metrics(source, false, 0, elapsed);
            }
        }

        result
    }
}
