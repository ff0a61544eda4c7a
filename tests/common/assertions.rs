//! Custom test assertions

use scraper_guard::RateLimitDecision;

/// Assert two values are approximately equal (for floats)
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr) => {
        $crate::assert_approx_eq!($left, $right, 1e-6_f64)
    };
    ($left:expr, $right:expr, $epsilon:expr) => {
        let (left, right): (f64, f64) = ($left, $right);
        assert!(
            (left - right).abs() < $epsilon,
            "assertion failed: `{} ≈ {}` (epsilon {})",
            left,
            right,
            $epsilon
        );
    };
}

/// Assertions for admission decisions
pub trait DecisionAssertions {
    fn assert_allowed(&self, remaining: u32);
    fn assert_denied(&self);
}

impl DecisionAssertions for RateLimitDecision {
    fn assert_allowed(&self, remaining: u32) {
        assert!(self.allowed, "Expected admission, got denial: {:?}", self);
        assert_eq!(self.remaining, remaining, "Unexpected remaining count");
    }

    fn assert_denied(&self) {
        assert!(!self.allowed, "Expected denial, got admission: {:?}", self);
        assert_eq!(self.remaining, 0, "Denied decisions report no remaining slots");
    }
}
