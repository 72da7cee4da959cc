//! # Dispenser Testing
//!
//! Testing utilities and helpers for the drink dispenser.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A Given-When-Then harness for reducers
//! - Tracing setup for tests
//!
//! ## Example
//!
//! ```ignore
//! use dispenser_testing::RecordingPublisher;
//!
//! #[test]
//! fn publishes_on_success() {
//!     let publisher = RecordingPublisher::new();
//!     let order = compute_order(&publisher, &PriceTable::default(), &request);
//!
//!     assert!(order.is_valid());
//!     assert_eq!(publisher.published().len(), 1);
//! }
//! ```


/// Mock implementations of Environment traits
pub mod mocks {
    use dispenser_core::environment::EventPublisher;
    use std::sync::{Mutex, PoisonError};

    /// Publisher that records every event it is given.
    ///
    /// Stands in for the broker wherever business logic takes an
    /// [`EventPublisher`], so tests can assert on what was published.
    ///
    /// # Example
    ///
    /// ```
    /// use dispenser_testing::mocks::RecordingPublisher;
    /// use dispenser_core::environment::EventPublisher;
    ///
    /// let publisher = RecordingPublisher::new();
    /// publisher.publish("hello");
    /// assert_eq!(publisher.published(), vec!["hello"]);
    /// ```
    #[derive(Debug)]
    pub struct RecordingPublisher<E> {
        events: Mutex<Vec<E>>,
    }

    impl<E> RecordingPublisher<E> {
        /// Create a publisher with nothing recorded
        #[must_use]
        pub const fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
            }
        }

        /// Number of events recorded so far
        #[must_use]
        pub fn count(&self) -> usize {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .len()
        }

        /// Whether nothing has been published
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.count() == 0
        }
    }

    impl<E: Clone> RecordingPublisher<E> {
        /// Copy of every event recorded, in publish order
        #[must_use]
        pub fn published(&self) -> Vec<E> {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }
    }

    impl<E> Default for RecordingPublisher<E> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<E: Send> EventPublisher<E> for RecordingPublisher<E> {
        fn publish(&self, event: E) {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event);
        }
    }
}

/// Test helpers and utilities
pub mod helpers {
    /// Route `tracing` output to the test harness.
    ///
    /// Honors `RUST_LOG`; safe to call from every test, only the first call
    /// installs the subscriber.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}

// Re-export commonly used items
pub use mocks::RecordingPublisher;
pub use reducer_test::ReducerTest;
