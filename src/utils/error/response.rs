//! Error envelope served to operators and API callers

use super::types::ServiceError;
use serde::{Deserialize, Serialize};

/// JSON error body: `{"error": ..., "error_type": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
}

impl ServiceError {
    /// Render the error body. Server-side failures are masked.
    pub fn to_response(&self) -> ErrorResponse {
        if self.status_code() >= 500 && matches!(self.error_type(), "ServerError") {
            return ErrorResponse {
                error: "An unexpected error occurred".to_string(),
                error_type: "ServerError".to_string(),
            };
        }

        let error = match self {
            Self::InvalidArgument(msg)
            | Self::Validation(msg)
            | Self::Authentication(msg)
            | Self::Api(msg)
            | Self::Scraper(msg)
            | Self::Config(msg)
            | Self::Internal(msg) => msg.clone(),
            Self::RateLimit { message, .. } => message.clone(),
            other => other.to_string(),
        };

        ErrorResponse {
            error,
            error_type: self.error_type().to_string(),
        }
    }
}
