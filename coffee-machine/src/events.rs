//! Domain events published on the broker.

use crate::types::Drink;
use dispenser_core::event::Event;
use serde::Serialize;

/// Tag of [`DispenserEvent::OrderProcessed`] on the wire
pub const ORDER_PROCESSED: &str = "orderProcessed";

/// A funded order was accepted.
///
/// `money_earned_in_cents` is the full amount the customer inserted, which
/// can exceed the drink's price: the machine gives no change.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderProcessed {
    /// Drink that was ordered
    pub drink: Drink,
    /// Money collected for it, in cents
    pub money_earned_in_cents: u32,
}

/// Everything the dispenser announces on its broker.
///
/// Serializes to the `{type, payload}` envelope:
///
/// ```
/// use coffee_machine::events::{DispenserEvent, OrderProcessed};
/// use coffee_machine::types::Drink;
/// use dispenser_core::event::Event;
///
/// let event = DispenserEvent::OrderProcessed(OrderProcessed {
///     drink: Drink::Coffee,
///     money_earned_in_cents: 60,
/// });
///
/// assert_eq!(
///     event.to_envelope().unwrap(),
///     serde_json::json!({
///         "type": "orderProcessed",
///         "payload": {"drink": "coffee", "moneyEarnedInCents": 60}
///     })
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum DispenserEvent {
    /// A drink was paid for and will be prepared
    OrderProcessed(OrderProcessed),
}

impl Event for DispenserEvent {
    fn event_type(&self) -> &'static str {
        match self {
            Self::OrderProcessed(_) => ORDER_PROCESSED,
        }
    }
}

impl From<OrderProcessed> for DispenserEvent {
    fn from(payload: OrderProcessed) -> Self {
        Self::OrderProcessed(payload)
    }
}
