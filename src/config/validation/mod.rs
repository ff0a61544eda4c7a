//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.
//!
//! - `trait_def`: Core Validate trait definition
//! - `rate_limit_validators`: Rate limit validators
//! - `monitoring_validators`: Metrics and logging validators

mod monitoring_validators;
mod rate_limit_validators;
mod trait_def;

pub use trait_def::Validate;
