//! # Dispenser Runtime
//!
//! Runtime implementation for the drink dispenser.
//!
//! ## Core Components
//!
//! - **`InMemoryBroker`**: synchronous publish/subscribe fan-out
//! - **Store**: holds state and runs the reducer against it
//! - **Metrics**: Prometheus recorder and metric names
//!
//! ## Example
//!
//! ```ignore
//! use dispenser_runtime::Store;
//!
//! let store = Store::new(ReportingState::default(), ReportingReducer, ());
//!
//! // Send an action
//! store.send(ReportingAction::OrderProcessed(payload));
//!
//! // Read state
//! let served = store.state(ReportingState::orders_served);
//! ```

use dispenser_core::reducer::Reducer;
use std::sync::{Arc, PoisonError, RwLock};

/// In-process event broker
pub mod broker;

/// Metric names and the Prometheus recorder
pub mod metrics;

pub use broker::InMemoryBroker;

/// Holds one piece of state and the reducer that owns it
pub mod store {
    use super::{Arc, PoisonError, Reducer, RwLock};
    use crate::metrics::STORE_ACTIONS_TOTAL;

    /// State guarded by a lock, changed only through its reducer.
    ///
    /// The state sits behind an `RwLock`, so there is only ever one writer
    /// however many clones of the store exist. `send` runs on the caller's
    /// thread and returns once the reducer has run.
    ///
    /// Cloning is cheap and yields a handle to the same state.
    ///
    /// # Type Parameters
    ///
    /// - `S`: state
    /// - `A`: action
    /// - `E`: environment passed to the reducer
    /// - `R`: the reducer
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: Arc<R>,
        environment: Arc<E>,
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                environment: Arc::clone(&self.environment),
            }
        }
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        /// Store starting at `initial_state`
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
            }
        }

        /// Apply `action` under the state write lock
        ///
        /// A reducer that panicked on an earlier action leaves the lock
        /// poisoned; the state it left behind is used as is.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&self, action: A) {
            metrics::counter!(STORE_ACTIONS_TOTAL).increment(1);

            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let span = tracing::debug_span!("reducer_execution");
            let _enter = span.enter();
            self.reducer.reduce(&mut *state, action, &self.environment);
            tracing::trace!("Reducer completed");
        }

        /// Read the state through `f` while holding the read lock
        ///
        /// ```ignore
        /// let served = store.state(|s| s.orders_served());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
            f(&*state)
        }
    }
}

pub use store::Store;
