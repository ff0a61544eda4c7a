//! Rate limiting middleware

use crate::server::state::AppState;
use crate::utils::error::{Result, ServiceError};
use crate::utils::net::limiter::{RateLimitDecision, scoped_key};
use tracing::{debug, warn};

/// Result of admitting a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Rate limiting is disabled
    Unlimited,
    /// Admitted under a quota
    Limited(RateLimitDecision),
}

impl Admission {
    /// Headers to attach to the response
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Unlimited => Vec::new(),
            Self::Limited(decision) => decision.headers(),
        }
    }

    pub fn decision(&self) -> Option<&RateLimitDecision> {
        match self {
            Self::Unlimited => None,
            Self::Limited(decision) => Some(decision),
        }
    }
}

/// A handler's value together with the admission it ran under
#[derive(Debug, Clone, PartialEq)]
pub struct Admitted<T> {
    pub value: T,
    pub admission: Admission,
}

impl<T> Admitted<T> {
    /// Headers to attach to the response
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        self.admission.headers()
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl AppState {
    /// Admit a request from `caller` to `endpoint` under the endpoint's
    /// configured rule.
    ///
    /// A denial is tallied as a `RateLimitError` on the endpoint and returned
    /// as `ServiceError::RateLimit`. A misconfigured rule surfaces as
    /// `ServiceError::InvalidArgument`.
    pub fn admit(&self, endpoint: &str, caller: &str) -> Result<Admission> {
        let config = self.config.rate_limit();
        if !config.enabled {
            return Ok(Admission::Unlimited);
        }

        let rule = config.rule_for(endpoint);
        let decision = self.admission.check_rule(&scoped_key(endpoint, caller), &rule)?;

        if decision.allowed {
            debug!(endpoint, caller, remaining = decision.remaining, "Request admitted");
            return Ok(Admission::Limited(decision));
        }

        warn!(endpoint, caller, "Rate limit exceeded for {}", caller);
        let err = ServiceError::rate_limited(decision.retry_after());
        self.metrics.record_error(endpoint, err.error_type());
        Err(err)
    }
}
