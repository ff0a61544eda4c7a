//! Error handling integration tests
//!
//! Errors surface to callers as a status code and a JSON body.

#[cfg(test)]
mod tests {
    use scraper_guard::{ErrorResponse, ServiceError};
    use std::time::Duration;

    #[test]
    fn test_client_errors_are_shown() {
        let cases = [
            (ServiceError::invalid_argument("window must be positive"), 400, "InvalidArgument"),
            (ServiceError::validation("bad sku"), 400, "ValidationError"),
            (ServiceError::authentication("missing token"), 401, "AuthenticationError"),
            (ServiceError::rate_limited(Duration::from_millis(2500)), 429, "RateLimitError"),
        ];

        for (err, status, error_type) in cases {
            assert!(err.is_client_error());
            assert_eq!(err.status_code(), status);
            let body = err.to_response();
            assert_eq!(body.error_type, error_type);
            assert_ne!(body.error, "An unexpected error occurred");
        }
    }

    #[test]
    fn test_rate_limit_message_rounds_up() {
        let err = ServiceError::rate_limited(Duration::from_millis(2500));
        assert_eq!(
            err.to_response().error,
            "Rate limit exceeded. Try again after 3 seconds."
        );
    }

    #[test]
    fn test_server_errors_are_masked() {
        let err = ServiceError::internal("lock poisoned at collector.rs:42");
        let body = err.to_response();

        assert_eq!(err.status_code(), 500);
        assert_eq!(
            body,
            ErrorResponse {
                error: "An unexpected error occurred".to_string(),
                error_type: "ServerError".to_string(),
            }
        );
    }

    #[test]
    fn test_upstream_errors_keep_their_kind() {
        let body = ServiceError::scraper("selector not found").to_response();
        assert_eq!(body.error_type, "ScraperError");
        assert_eq!(body.error, "selector not found");

        let body = ServiceError::api("upstream 503").to_response();
        assert_eq!(body.error_type, "APIError");
    }

    #[test]
    fn test_error_body_serializes() {
        let body = ServiceError::validation("bad sku").to_response();
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["error"], "bad sku");
        assert_eq!(json["error_type"], "ValidationError");
    }
}
