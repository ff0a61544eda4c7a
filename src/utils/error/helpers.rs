//! Helper functions for creating specific error types

use super::types::ServiceError;
use std::time::Duration;

impl ServiceError {
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn authentication<S: Into<String>>(message: S) -> Self {
        Self::Authentication(message.into())
    }

    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api(message.into())
    }

    pub fn scraper<S: Into<String>>(message: S) -> Self {
        Self::Scraper(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Rate limit error with the caller-facing "try again" hint
    pub fn rate_limited(retry_after: Duration) -> Self {
        let secs = retry_after.as_secs_f64().ceil() as u64;
        Self::RateLimit {
            message: format!("Rate limit exceeded. Try again after {} seconds.", secs),
            retry_after,
        }
    }

    /// Time the caller should wait before retrying, if any
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimit { retry_after, .. } => Some(*retry_after),
            _ => None,
        }
    }
}
