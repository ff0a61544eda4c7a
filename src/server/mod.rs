//! Request and job layer
//!
//! Wires the admission controller and metrics aggregator into the shapes a
//! web framework or job runner calls: admit a request, time a handler,
//! track a job, sweep idle keys.

pub mod background;
pub mod jobs;
pub mod middleware;
pub mod state;


pub use background::spawn_idle_sweeper;
pub use jobs::JobRun;
pub use middleware::{Admission, Admitted};
pub use state::AppState;
