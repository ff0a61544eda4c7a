//! Configuration loading and validation integration tests

#[cfg(test)]
mod tests {
    use scraper_guard::config::{Config, Validate};
    use scraper_guard::{AppState, ServiceError};
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    fn write_config(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(suffix).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_yaml_file_drives_state() {
        let file = write_config(
            ".yaml",
            r#"
rate_limit:
  default:
    limit: 50
    window_secs: 30
  endpoints:
    scrape:
      limit: 2
      window_secs: 60
  max_keys: 10
metrics:
  history_capacity: 5
  scraper_sources: [home_depot, lowes, menards]
logging:
  level: debug
"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        let state = AppState::new(config);

        assert_eq!(state.admission.max_keys(), 10);
        assert_eq!(state.metrics.history_capacity(), 5);
        assert!(state.snapshot().scraper("menards").is_some());

        let rule = state.config().rate_limit().rule_for("scrape");
        assert_eq!(rule.limit, 2);
        assert_eq!(rule.window, Duration::from_secs(60));
        assert_eq!(state.config().rate_limit().rule_for("products").limit, 50);
    }

    #[tokio::test]
    async fn test_json_file() {
        let file = write_config(
            ".json",
            r#"{"rate_limit": {"enabled": false}, "logging": {"level": "warn", "json": true}}"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        assert!(!config.rate_limit().enabled);
        assert!(config.logging().json);
        assert_eq!(config.metrics().history_capacity, 1_000);
    }

    #[tokio::test]
    async fn test_invalid_file_rejected() {
        let file = write_config(
            ".yaml",
            "rate_limit:\n  default:\n    limit: 5\n    window_secs: 0\n",
        );

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Config(_)));
        assert!(err.to_string().contains("window"));
    }

    #[tokio::test]
    async fn test_oversized_window_rejected() {
        let file = write_config(
            ".yaml",
            "rate_limit:\n  default:\n    limit: 5\n    window_secs: 18446744073709551615\n",
        );

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Config(_)));
        assert!(err.to_string().contains("at most"));
    }

    #[tokio::test]
    async fn test_missing_file_rejected() {
        let err = Config::from_file("/nonexistent/scraper.yaml").await.unwrap_err();
        assert_eq!(err.error_type(), "ConfigError");
    }

    #[test]
    fn test_env_vars_override_defaults() {
        let config = Config::from_env_vars([
            ("SCRAPER_RATE_LIMIT_LIMIT", "10"),
            ("SCRAPER_RATE_LIMIT_ENDPOINT_SEARCH", "3/1"),
            ("SCRAPER_METRICS_SOURCES", "lowes"),
            ("UNRELATED", "ignored"),
        ])
        .unwrap();

        assert_eq!(config.rate_limit().default.limit, 10);
        assert_eq!(config.rate_limit().rule_for("search").window, Duration::from_secs(1));
        assert_eq!(config.metrics().scraper_sources, vec!["lowes"]);
    }

    #[test]
    fn test_env_vars_validated() {
        let err = Config::from_env_vars([("SCRAPER_METRICS_HISTORY_CAPACITY", "0")]).unwrap_err();
        assert!(matches!(err, ServiceError::Config(_)));
    }

    #[test]
    fn test_yaml_round_trip_is_valid() {
        let config = Config::from_env_vars([("SCRAPER_LOG_LEVEL", "trace")]).unwrap();
        let yaml = config.to_yaml().unwrap();

        assert!(yaml.contains("level: trace"));
        let service: scraper_guard::config::ServiceConfig = serde_yaml::from_str(&yaml).unwrap();
        assert!(service.validate().is_ok());
        assert_eq!(service, config.service);
    }
}
