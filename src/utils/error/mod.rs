//! Error handling for the service
//!
//! This module defines the error type shared by the admission, metrics and
//! configuration layers, plus the JSON error envelope served to operators.

mod helpers;
mod response;
mod types;

pub use response::ErrorResponse;
pub use types::{Result, ServiceError};
