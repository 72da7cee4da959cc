//! Event bus abstraction for decoupling producers from consumers.
//!
//! This module provides the [`EventBus`] trait. A producer publishes an
//! event once; every subscriber registered on the bus receives it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ Order Calculator│
//! └────────┬────────┘
//!          │ publish
//!          ▼
//! ┌─────────────────┐
//! │    Event Bus    │◄─── synchronous fan-out
//! └────────┬────────┘
//!          │
//!     ┌────┴────┐
//!     │         │
//!     ▼         ▼
//! ┌───────┐ ┌───────┐
//! │Report │ │ Other │
//! └───────┘ └───────┘
//! ```
//!
//! # Delivery Guarantees
//!
//! - **Synchronous**: `publish` returns only after every subscriber ran
//! - **Ordered**: subscribers run in registration order; events are observed
//!   in publish order
//! - **Broadcast**: no filtering, subscribers match on the event variant
//! - **No persistence**: subscribers registered after a publish never see it
//!
//! # Implementations
//!
//! - [`InMemoryBroker`](../../dispenser_runtime/struct.InMemoryBroker.html) - in-process broker
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use dispenser_core::event_bus::EventBus;
//!
//! fn wire(bus: &impl EventBus<DispenserEvent>) {
//!     bus.subscribe(Arc::new(|event: &DispenserEvent| {
//!         tracing::info!(event = event.event_type(), "received");
//!     }));
//!
//!     bus.publish(&DispenserEvent::OrderProcessed(payload));
//! }
//! ```

use std::sync::Arc;

/// A registered event handler.
///
/// Handlers receive a shared reference; they clone what they need to keep.
pub type Subscriber<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// Trait for event bus implementations.
///
/// The bus is generic over a closed event type `E` (usually an enum), so
/// adding an event kind forces every exhaustive subscriber to handle it.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so that a bus can be shared through
/// `Arc` between the producer and the subscribers it owns.
pub trait EventBus<E>: Send + Sync {
    /// Register a handler invoked for every event published afterwards.
    ///
    /// There is no unsubscribe; a handler lives as long as the bus.
    fn subscribe(&self, subscriber: Subscriber<E>);

    /// Invoke every registered handler with `event`, in registration order.
    ///
    /// Returns once all handlers have run.
    fn publish(&self, event: &E);

    /// Number of registered handlers.
    fn subscriber_count(&self) -> usize;
}
