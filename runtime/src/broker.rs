//! In-process event broker.
//!
//! [`InMemoryBroker`] is the only [`EventBus`] implementation: it keeps an
//! ordered list of subscribers and calls them inline from `publish`.

use crate::metrics::BROKER_EVENTS_PUBLISHED_TOTAL;
use dispenser_core::event::Event;
use dispenser_core::event_bus::{EventBus, Subscriber};
use std::fmt;
use std::sync::{PoisonError, RwLock};

/// Synchronous broadcast broker.
///
/// # Dispatch
///
/// `publish` copies the subscriber list and releases the lock before calling
/// any handler. A handler may therefore subscribe further handlers (they see
/// only later events), and a panicking handler leaves the list intact.
///
/// # Example
///
/// ```ignore
/// let broker = InMemoryBroker::<DispenserEvent>::new();
/// broker.subscribe(Arc::new(|event| tracing::info!(?event, "got it")));
/// broker.publish(&event);
/// ```
pub struct InMemoryBroker<E> {
    subscribers: RwLock<Vec<Subscriber<E>>>,
}

impl<E> InMemoryBroker<E> {
    /// Create a broker with no subscribers
    #[must_use]
    pub const fn new() -> Self {
        Self {
            subscribers: RwLock::new(Vec::new()),
        }
    }

    fn snapshot(&self) -> Vec<Subscriber<E>> {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<E> Default for InMemoryBroker<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for InMemoryBroker<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryBroker")
            .field("subscribers", &self.snapshot().len())
            .finish()
    }
}

impl<E: Event> EventBus<E> for InMemoryBroker<E> {
    fn subscribe(&self, subscriber: Subscriber<E>) {
        let mut subscribers = self
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.push(subscriber);
        tracing::debug!(subscribers = subscribers.len(), "Subscriber registered");
    }

    fn publish(&self, event: &E) {
        let subscribers = self.snapshot();
        tracing::trace!(
            event_type = event.event_type(),
            subscribers = subscribers.len(),
            "Publishing event"
        );
        metrics::counter!(BROKER_EVENTS_PUBLISHED_TOTAL, "event_type" => event.event_type())
            .increment(1);

        for subscriber in &subscribers {
            subscriber(event);
        }
    }

    fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Ping(u32);

    impl Event for Ping {
        fn event_type(&self) -> &'static str {
            "ping"
        }
    }

    #[test]
    fn a_unique_subscriber_is_invoked() {
        let broker = InMemoryBroker::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        broker.subscribe(Arc::new(move |_: &Ping| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        broker.publish(&Ping(1));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn all_subscribers_are_invoked_in_registration_order() {
        let broker = InMemoryBroker::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        for name in ["first", "second", "third"] {
            let log = Arc::clone(&log);
            broker.subscribe(Arc::new(move |event: &Ping| {
                log.lock().unwrap().push((name, event.0));
            }));
        }

        broker.publish(&Ping(7));

        let log = log.lock().unwrap().clone();
        assert_eq!(log, vec![("first", 7), ("second", 7), ("third", 7)]);
    }

    #[test]
    fn publishing_without_subscribers_is_a_no_op() {
        let broker = InMemoryBroker::<Ping>::new();
        broker.publish(&Ping(1));
        assert_eq!(broker.subscriber_count(), 0);
    }

    #[test]
    fn debug_shows_subscriber_count() {
        let broker = InMemoryBroker::new();
        broker.subscribe(Arc::new(|_: &Ping| {}));
        assert_eq!(format!("{broker:?}"), "InMemoryBroker { subscribers: 1 }");
    }
}
