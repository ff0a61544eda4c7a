//! Integration tests for scraper-guard
//!
//! These tests drive the public API with real components; time is
//! controlled through a manual clock rather than sleeps.

pub mod config_tests;
pub mod error_handling_tests;
pub mod metrics_tests;
pub mod request_flow_tests;
