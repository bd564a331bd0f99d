//! # Seaside Testing
//!
//! Testing utilities and helpers for the Seaside Suites reducer architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits (fixed clock, sequential
//!   confirmation codes)
//! - A fluent Given-When-Then fixture for reducer tests
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use seaside_testing::{ReducerTest, test_clock};
//!
//! ReducerTest::new(BookingReducer::new())
//!     .with_env(test_environment())
//!     .given_state(WizardState::default())
//!     .when_action(BookingAction::IncrementAdults)
//!     .then_state(|state| assert_eq!(state.draft.adults, 3))
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use seaside_core::environment::{Clock, CodeGenerator};

/// Fluent reducer test fixture
pub mod reducer_test;

/// Mock implementations of Environment traits for deterministic tests.
pub mod mocks {
    use super::{Clock, CodeGenerator, DateTime, Utc};
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use seaside_testing::mocks::FixedClock;
    /// use seaside_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-06-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-06-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }

    /// Sequential confirmation codes for deterministic tests
    ///
    /// Produces `SS-TEST00001`, `SS-TEST00002`, ... in order.
    #[derive(Debug, Default)]
    pub struct SequentialCodes {
        next: AtomicU64,
    }

    impl SequentialCodes {
        /// Create a new sequence starting at 1
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl CodeGenerator for SequentialCodes {
        fn confirmation_code(&self) -> String {
            let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
            format!("SS-TEST{n:05}")
        }
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, SequentialCodes, test_clock};
pub use reducer_test::{ReducerTest, assertions};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        let time1 = clock.now();
        let time2 = clock.now();
        assert_eq!(time1, time2);
    }

    #[test]
    fn test_sequential_codes() {
        let codes = SequentialCodes::new();
        assert_eq!(codes.confirmation_code(), "SS-TEST00001");
        assert_eq!(codes.confirmation_code(), "SS-TEST00002");
    }
}
