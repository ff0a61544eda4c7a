//! Request-layer middleware
//!
//! Framework-agnostic pieces the HTTP layer wraps around each handler:
//! - Rate limiting (admission per endpoint and caller)
//! - Metrics collection (latency and error tallies)

mod metrics;
mod rate_limit;


pub use rate_limit::{Admission, Admitted};
