//! Error types for the service

use std::time::Duration;
use thiserror::Error;

/// Result type alias for the service
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Main error type for the service
#[derive(Error, Debug)]
pub enum ServiceError {
    /// A core operation was called with arguments it cannot honour
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Admission was denied for the caller
    #[error("{message}")]
    RateLimit {
        message: String,
        retry_after: Duration,
    },

    /// Upstream API errors
    #[error("API error: {0}")]
    Api(String),

    /// Scraping errors
    #[error("Scraper error: {0}")]
    Scraper(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// HTTP status code the request layer answers with
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidArgument(_) | Self::Validation(_) => 400,
            Self::Authentication(_) => 401,
            Self::RateLimit { .. } => 429,
            Self::Api(_)
            | Self::Scraper(_)
            | Self::Config(_)
            | Self::Io(_)
            | Self::Serialization(_)
            | Self::Yaml(_)
            | Self::Internal(_) => 500,
        }
    }

    /// Stable error kind, used as the error-tally key and in error bodies
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "InvalidArgument",
            Self::Validation(_) => "ValidationError",
            Self::Authentication(_) => "AuthenticationError",
            Self::RateLimit { .. } => "RateLimitError",
            Self::Api(_) => "APIError",
            Self::Scraper(_) => "ScraperError",
            Self::Config(_) => "ConfigError",
            Self::Io(_) | Self::Serialization(_) | Self::Yaml(_) | Self::Internal(_) => {
                "ServerError"
            }
        }
    }

    /// Whether the error should be shown to callers verbatim
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}
