//! Background maintenance tasks

use crate::server::state::AppState;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Periodically drop admission keys whose windows have drained.
///
/// Runs until the returned handle is aborted or the runtime shuts down.
pub fn spawn_idle_sweeper(state: &AppState, interval: Duration) -> JoinHandle<()> {
    let admission = state.admission.clone();

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let removed = admission.purge_idle();
            if removed > 0 {
                debug!(removed, remaining = admission.tracked_keys(), "Purged idle rate limit keys");
            }
        }
    })
}
