//! Metrics middleware for request monitoring

use super::rate_limit::Admitted;
use crate::server::state::AppState;
use crate::utils::error::Result;
use std::future::Future;
use std::time::Instant;
use tracing::debug;

impl AppState {
    /// Run a handler, recording its latency on success or its error kind on
    /// failure. The handler's result is returned unchanged.
    pub async fn time_request<F, T>(&self, endpoint: &str, handler: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let start_time = Instant::now();
        let result = handler.await;

        match &result {
            Ok(_) => {
                let duration = start_time.elapsed();
                debug!(endpoint, ?duration, "Request completed");
                self.metrics.record_request_latency(endpoint, duration);
            }
            Err(e) => {
                debug!(endpoint, error = %e, "Request failed");
                self.metrics.record_error(endpoint, e.error_type());
            }
        }

        result
    }

    /// Admit, then run and time the handler. Denied requests never run it.
    ///
    /// The admission is returned with the value so its rate limit headers
    /// can go on the response.
    pub async fn handle<F, T>(
        &self,
        endpoint: &str,
        caller: &str,
        handler: F,
    ) -> Result<Admitted<T>>
    where
        F: Future<Output = Result<T>>,
    {
        let admission = self.admit(endpoint, caller)?;
        let value = self.time_request(endpoint, handler).await?;
        Ok(Admitted { value, admission })
    }
}
