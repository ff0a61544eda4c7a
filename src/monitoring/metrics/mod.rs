//! Metrics collection and aggregation
//!
//! All counters, latency series and error tallies live behind one lock, so a
//! snapshot never observes half of an update.

mod bounded;
mod collector;
mod getters;
mod helpers;
mod types;


pub use bounded::DEFAULT_HISTORY_CAPACITY;
pub use collector::MetricsAggregator;
