//! Event trait and related types.
//!
//! Events represent facts about things that have happened and are immutable.
//! On the wire an event is a JSON envelope with a `type` tag and a `payload`
//! object:
//!
//! ```json
//! {"type": "orderProcessed", "payload": {"drink": "coffee", "moneyEarnedInCents": 60}}
//! ```
//!
//! Event enums get this shape from serde's adjacent tagging
//! (`#[serde(tag = "type", content = "payload")]`).
//!
//! # Example
//!
//! ```
//! use dispenser_core::event::Event;
//! use serde::Serialize;
//!
//! #[derive(Clone, Debug, Serialize)]
//! #[serde(tag = "type", content = "payload", rename_all = "camelCase")]
//! enum CupEvent {
//!     CupDropped { slot: u8 },
//! }
//!
//! impl Event for CupEvent {
//!     fn event_type(&self) -> &'static str {
//!         match self {
//!             CupEvent::CupDropped { .. } => "cupDropped",
//!         }
//!     }
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

/// Error types for event operations.
#[derive(Error, Debug)]
pub enum EventError {
    /// Failed to serialize event to its envelope.
    #[error("Failed to serialize event: {0}")]
    SerializationError(String),
}

/// An event that can be broadcast to subscribers.
///
/// # Event Naming Convention
///
/// `event_type()` must return the same string the serde tag produces, so
/// that log lines and envelopes agree on the name.
///
/// # Thread Safety
///
/// Events must be `Send + Sync + 'static` to be shared with subscribers
/// registered from any thread.
pub trait Event: Send + Sync + 'static {
    /// Returns the event type identifier for this event.
    fn event_type(&self) -> &'static str;

    /// Serialize this event to its `{type, payload}` JSON envelope.
    ///
    /// # Errors
    ///
    /// Returns `EventError::SerializationError` if the event cannot be serialized.
    fn to_envelope(&self) -> Result<serde_json::Value, EventError>
    where
        Self: Serialize,
    {
        serde_json::to_value(self).map_err(|e| EventError::SerializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Clone, Debug, Serialize, PartialEq)]
    #[serde(tag = "type", content = "payload", rename_all = "camelCase")]
    enum TestEvent {
        Created { id: String, value: i32 },
        Updated { id: String, new_value: i32 },
    }

    impl Event for TestEvent {
        fn event_type(&self) -> &'static str {
            match self {
                TestEvent::Created { .. } => "created",
                TestEvent::Updated { .. } => "updated",
            }
        }
    }

    #[test]
    #[allow(clippy::expect_used)] // Panics: Test will fail if serialization fails
    fn envelope_carries_type_and_payload() {
        let event = TestEvent::Created {
            id: "test-1".to_string(),
            value: 42,
        };

        let envelope = event.to_envelope().expect("serialization should succeed");

        assert_eq!(envelope["type"], event.event_type());
        assert_eq!(envelope["payload"]["id"], "test-1");
        assert_eq!(envelope["payload"]["value"], 42);
    }

    #[test]
    #[allow(clippy::expect_used)] // Panics: Test will fail if serialization fails
    fn envelope_keeps_field_names_of_the_variant() {
        let event = TestEvent::Updated {
            id: "test-1".to_string(),
            new_value: 100,
        };

        let envelope = event.to_envelope().expect("serialization should succeed");

        assert_eq!(
            envelope,
            serde_json::json!({
                "type": "updated",
                "payload": { "id": "test-1", "new_value": 100 }
            })
        );
    }
}
