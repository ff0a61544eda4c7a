//! Type definitions for metrics snapshots

use crate::utils::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Point-in-time copy of every aggregate the service tracks
///
/// Serializes to the `request_metrics` / `job_metrics` / `scraper_metrics`
/// document served by the metrics endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub request_metrics: RequestMetrics,
    pub job_metrics: BTreeMap<String, JobMetrics>,
    pub scraper_metrics: BTreeMap<String, ScraperMetrics>,
}

/// Request-related metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestMetrics {
    /// Rolling mean latency per endpoint, in seconds
    pub average_times: BTreeMap<String, f64>,
    /// Error counts keyed `"<endpoint>:<error_type>"`
    pub error_counts: BTreeMap<String, u64>,
}

/// Aggregates for one job type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobMetrics {
    pub total: u64,
    pub completed: u64,
    pub failed: u64,
    /// Count of RUNNING reports; never decremented
    pub running: u64,
    pub products_scraped: u64,
    /// Mean duration of completed jobs, in seconds
    pub avg_duration: f64,
}

/// Aggregates for one upstream data source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScraperMetrics {
    pub requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub products_scraped: u64,
    /// Mean time of successful requests, in seconds
    pub avg_request_time: f64,
}

/// Reported state of a scrape job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Running,
    Completed,
    Failed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "RUNNING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Running)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "RUNNING" => Ok(Self::Running),
            "COMPLETED" => Ok(Self::Completed),
            "FAILED" => Ok(Self::Failed),
            other => Err(ServiceError::validation(format!(
                "unknown job status: {}",
                other
            ))),
        }
    }
}

impl MetricsSnapshot {
    pub fn job(&self, job_type: &str) -> Option<&JobMetrics> {
        self.job_metrics.get(job_type)
    }

    pub fn scraper(&self, source: &str) -> Option<&ScraperMetrics> {
        self.scraper_metrics.get(source)
    }

    pub fn average_time(&self, endpoint: &str) -> Option<f64> {
        self.request_metrics.average_times.get(endpoint).copied()
    }

    /// Count for one (endpoint, error kind) pair, zero when never seen
    pub fn error_count(&self, endpoint: &str, error_type: &str) -> u64 {
        self.request_metrics
            .error_counts
            .get(&error_key(endpoint, error_type))
            .copied()
            .unwrap_or(0)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub(crate) fn error_key(endpoint: &str, error_type: &str) -> String {
    format!("{}:{}", endpoint, error_type)
}
