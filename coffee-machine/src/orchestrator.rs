//! Wiring: request in, machine instruction out.
//!
//! The orchestrator owns no state. Everything it needs arrives in a
//! [`DispenserEnvironment`], which production builds around a broker and
//! tests build around a [`RecordingPublisher`](dispenser_testing::RecordingPublisher)
//! or a custom formatter.

use crate::calculator::compute_order;
use crate::events::{DispenserEvent, OrderProcessed};
use crate::pricing::PriceTable;
use crate::protocol::{MachineProtocol, OrderFormatter};
use crate::types::{Order, OrderRequest};
use dispenser_core::environment::EventPublisher;
use dispenser_core::event_bus::EventBus;
use std::fmt;
use std::sync::Arc;

/// Dependencies of the order pipeline
#[derive(Clone)]
pub struct DispenserEnvironment {
    /// Turns orders into machine instructions
    pub formatter: Arc<dyn OrderFormatter>,
    /// Receives an [`OrderProcessed`] for every funded order
    pub publisher: Arc<dyn EventPublisher<OrderProcessed>>,
    /// Current prices
    pub prices: PriceTable,
}

impl DispenserEnvironment {
    /// Environment from explicit parts
    #[must_use]
    pub fn new(
        formatter: Arc<dyn OrderFormatter>,
        publisher: Arc<dyn EventPublisher<OrderProcessed>>,
        prices: PriceTable,
    ) -> Self {
        Self {
            formatter,
            publisher,
            prices,
        }
    }

    /// Production environment: machine protocol, events published on `broker`
    #[must_use]
    pub fn with_broker<B>(broker: Arc<B>, prices: PriceTable) -> Self
    where
        B: EventBus<DispenserEvent> + 'static,
    {
        Self::new(
            Arc::new(MachineProtocol),
            Arc::new(BrokerPublisher::new(broker)),
            prices,
        )
    }
}

impl fmt::Debug for DispenserEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispenserEnvironment")
            .field("prices", &self.prices)
            .finish_non_exhaustive()
    }
}

/// Forwards [`OrderProcessed`] payloads to a broker as [`DispenserEvent`]s
pub struct BrokerPublisher<B: ?Sized> {
    broker: Arc<B>,
}

impl<B: ?Sized> BrokerPublisher<B> {
    /// Publisher writing to `broker`
    #[must_use]
    pub const fn new(broker: Arc<B>) -> Self {
        Self { broker }
    }
}

impl<B> EventPublisher<OrderProcessed> for BrokerPublisher<B>
where
    B: EventBus<DispenserEvent> + ?Sized,
{
    fn publish(&self, payload: OrderProcessed) {
        self.broker.publish(&DispenserEvent::OrderProcessed(payload));
    }
}

/// Evaluate `request` with the environment's prices and publisher
#[tracing::instrument(
    skip_all,
    fields(drink = %request.drink(), money_in_cents = request.money_in_cents())
)]
pub fn process_order(env: &DispenserEnvironment, request: &OrderRequest) -> Order {
    compute_order(&*env.publisher, &env.prices, request)
}

/// Evaluate `request` and return the instruction for the machine
#[tracing::instrument(skip_all, fields(drink = %request.drink()))]
pub fn handle_order(env: &DispenserEnvironment, request: &OrderRequest) -> String {
    let order = process_order(env, request);
    env.formatter.format(&order)
}

/// One-shot convenience: standard prices, machine protocol, events on `broker`
pub fn run_with_broker<B>(broker: &Arc<B>, request: &OrderRequest) -> String
where
    B: EventBus<DispenserEvent> + 'static,
{
    let env = DispenserEnvironment::with_broker(Arc::clone(broker), PriceTable::default());
    handle_order(&env, request)
}
