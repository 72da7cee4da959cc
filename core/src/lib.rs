//! # Dispenser Core
//!
//! Traits and small types the drink dispenser is assembled from.
//!
//! Nothing in here knows about drinks: prices, protocol strings and the
//! sales report live in the `coffee-machine` crate. This crate only fixes
//! the shapes they plug into.
//!
//! ## Building Blocks
//!
//! - **Reducer**: folds an action into state, `(State, Action, Environment) → State`
//! - **Environment**: collaborators handed to business logic behind traits
//! - **Event / `EventBus`**: facts broadcast to independent subscribers
//!
//! ## Example
//!
//! ```ignore
//! use dispenser_core::reducer::Reducer;
//!
//! impl Reducer for TallyReducer {
//!     type State = TallyState;
//!     type Action = TallyAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut TallyState, action: TallyAction, _env: &()) {
//!         state.count += 1;
//!     }
//! }
//! ```

pub use serde::{Deserialize, Serialize};

/// Event trait and JSON envelope
pub mod event;

/// Synchronous publish/subscribe abstraction
pub mod event_bus;

/// State transitions.
///
/// A reducer owns the rules for one piece of state. It is deterministic:
/// the same state and action always give the same new state.
pub mod reducer {
    /// Applies actions to a piece of state
    ///
    /// # Type Parameters
    ///
    /// - `State`: what the reducer mutates
    /// - `Action`: the inputs it understands
    /// - `Environment`: collaborators it may consult
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for ReportingReducer {
    ///     type State = ReportingState;
    ///     type Action = ReportingAction;
    ///     type Environment = ();
    ///
    ///     fn reduce(&self, state: &mut ReportingState, action: ReportingAction, _env: &()) {
    ///         let ReportingAction::OrderProcessed(payload) = action;
    ///         *state = increment_reporting(&payload, state);
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// State mutated by this reducer
        type State;

        /// Inputs accepted by this reducer
        type Action;

        /// Collaborators available while reducing
        type Environment;

        /// Apply `action` to `state` in place.
        ///
        /// Reducers never perform I/O themselves.
        fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment);
    }
}

/// Collaborators injected into business logic.
pub mod environment {
    /// Publishes domain events to whoever is listening.
    ///
    /// Business logic receives a publisher instead of a concrete bus so that
    /// tests can capture events and production can forward them to a broker.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // Production - forwards to the broker
    /// struct BrokerPublisher { broker: Arc<InMemoryBroker<DispenserEvent>> }
    /// impl EventPublisher<OrderProcessed> for BrokerPublisher {
    ///     fn publish(&self, payload: OrderProcessed) {
    ///         self.broker.publish(&DispenserEvent::OrderProcessed(payload));
    ///     }
    /// }
    ///
    /// // Test - records every payload
    /// let publisher = RecordingPublisher::new();
    /// ```
    pub trait EventPublisher<E>: Send + Sync {
        /// Publish one event
        fn publish(&self, event: E);
    }

    /// Publisher that drops every event.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct NoopPublisher;

    impl<E> EventPublisher<E> for NoopPublisher {
        fn publish(&self, _event: E) {}
    }
}
