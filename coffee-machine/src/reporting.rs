//! Sales reporting.
//!
//! [`ReportingAggregator`] listens to the broker and keeps a running tally of
//! drinks sold and money collected. The tally is updated by
//! [`ReportingReducer`] inside a [`Store`], so there is only ever one writer.

use crate::events::{DispenserEvent, OrderProcessed};
use crate::types::Drink;
use dispenser_core::event_bus::EventBus;
use dispenser_core::reducer::Reducer;
use dispenser_runtime::Store;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Number of each drink sold
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DrinkCounts {
    /// Teas sold
    pub tea: u64,
    /// Coffees sold
    pub coffee: u64,
    /// Chocolates sold
    pub chocolate: u64,
    /// Orange juices sold
    pub orange: u64,
}

impl DrinkCounts {
    /// Count for one drink
    #[must_use]
    pub const fn get(&self, drink: Drink) -> u64 {
        match drink {
            Drink::Tea => self.tea,
            Drink::Coffee => self.coffee,
            Drink::Chocolate => self.chocolate,
            Drink::Orange => self.orange,
        }
    }

    /// Copy with one more `drink`
    #[must_use]
    pub const fn incremented(mut self, drink: Drink) -> Self {
        match drink {
            Drink::Tea => self.tea += 1,
            Drink::Coffee => self.coffee += 1,
            Drink::Chocolate => self.chocolate += 1,
            Drink::Orange => self.orange += 1,
        }
        self
    }

    /// Drinks sold, all kinds together
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.tea + self.coffee + self.chocolate + self.orange
    }
}

/// Running sales tally
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingState {
    /// Drinks sold, per kind
    pub drink_counts: DrinkCounts,
    /// Money collected for those drinks, in cents
    pub total_money_earned_in_cents: u64,
}

impl ReportingState {
    /// Number of orders served
    #[must_use]
    pub const fn orders_served(&self) -> u64 {
        self.drink_counts.total()
    }

    /// Number of `drink` served
    #[must_use]
    pub const fn count_for(&self, drink: Drink) -> u64 {
        self.drink_counts.get(drink)
    }
}

impl fmt::Display for ReportingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for drink in Drink::ALL {
            write!(f, "{drink}={} ", self.count_for(drink))?;
        }
        write!(f, "total={} cents", self.total_money_earned_in_cents)
    }
}

/// Tally after one more processed order.
///
/// Pure: `state` is left untouched and a new value is returned.
#[must_use]
pub fn increment_reporting(payload: &OrderProcessed, state: &ReportingState) -> ReportingState {
    ReportingState {
        drink_counts: state.drink_counts.incremented(payload.drink),
        total_money_earned_in_cents: state.total_money_earned_in_cents
            + u64::from(payload.money_earned_in_cents),
    }
}

/// Inputs to the reporting reducer
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReportingAction {
    /// An order was paid for
    OrderProcessed(OrderProcessed),
}

/// Reducer folding processed orders into the tally
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportingReducer;

impl Reducer for ReportingReducer {
    type State = ReportingState;
    type Action = ReportingAction;
    type Environment = ();

    fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) {
        match action {
            ReportingAction::OrderProcessed(payload) => {
                *state = increment_reporting(&payload, state);
            },
        }
    }
}

type ReportingStore = Store<ReportingState, ReportingAction, (), ReportingReducer>;

/// Broker subscriber keeping the sales tally.
///
/// Each aggregator owns its own tally; two aggregators on the same broker
/// count the same orders independently.
///
/// ```
/// use coffee_machine::events::DispenserEvent;
/// use coffee_machine::orchestrator::run_with_broker;
/// use coffee_machine::reporting::ReportingAggregator;
/// use coffee_machine::types::{Drink, OrderRequest, Sugar};
/// use dispenser_runtime::InMemoryBroker;
/// use std::sync::Arc;
///
/// let broker = Arc::new(InMemoryBroker::<DispenserEvent>::new());
/// let reporting = ReportingAggregator::new(&*broker);
///
/// let request = OrderRequest::hot(Drink::Coffee, Sugar::One, 60).unwrap();
/// run_with_broker(&broker, &request);
///
/// assert_eq!(reporting.read_reporting().count_for(Drink::Coffee), 1);
/// ```
#[derive(Clone)]
pub struct ReportingAggregator {
    store: ReportingStore,
}

impl ReportingAggregator {
    /// Start counting orders published on `broker`.
    ///
    /// Subscribes exactly one handler.
    pub fn new<B>(broker: &B) -> Self
    where
        B: EventBus<DispenserEvent> + ?Sized,
    {
        let store = Store::new(ReportingState::default(), ReportingReducer, ());

        let handle = store.clone();
        broker.subscribe(Arc::new(move |event: &DispenserEvent| match event {
            DispenserEvent::OrderProcessed(payload) => {
                handle.send(ReportingAction::OrderProcessed(*payload));
            },
        }));
        tracing::info!("Reporting aggregator subscribed");

        Self { store }
    }

    /// Current tally
    #[must_use]
    pub fn read_reporting(&self) -> ReportingState {
        self.store.state(|state| *state)
    }
}

impl fmt::Debug for ReportingAggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportingAggregator")
            .field("state", &self.read_reporting())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispenser_runtime::InMemoryBroker;
    use dispenser_testing::ReducerTest;

    const fn processed(drink: Drink, money: u32) -> OrderProcessed {
        OrderProcessed {
            drink,
            money_earned_in_cents: money,
        }
    }

    #[test]
    fn increment_counts_the_drink_and_the_money() {
        let state = ReportingState::default();

        let next = increment_reporting(&processed(Drink::Tea, 40), &state);

        assert_eq!(next.count_for(Drink::Tea), 1);
        assert_eq!(next.count_for(Drink::Coffee), 0);
        assert_eq!(next.total_money_earned_in_cents, 40);
        assert_eq!(state, ReportingState::default());
    }

    #[test]
    fn reducer_replaces_the_tally() {
        ReducerTest::new(ReportingReducer, ())
            .given(ReportingState {
                drink_counts: DrinkCounts {
                    coffee: 1,
                    ..DrinkCounts::default()
                },
                total_money_earned_in_cents: 60,
            })
            .when(ReportingAction::OrderProcessed(processed(Drink::Coffee, 70)))
            .then_state(|state| {
                assert_eq!(state.count_for(Drink::Coffee), 2);
                assert_eq!(state.total_money_earned_in_cents, 130);
            })
            .run();
    }

    #[test]
    fn reducer_folds_a_day_of_sales() {
        let report = ReducerTest::new(ReportingReducer, ())
            .when(ReportingAction::OrderProcessed(processed(Drink::Tea, 40)))
            .when(ReportingAction::OrderProcessed(processed(Drink::Orange, 60)))
            .when(ReportingAction::OrderProcessed(processed(Drink::Tea, 50)))
            .run();

        assert_eq!(report.count_for(Drink::Tea), 2);
        assert_eq!(report.count_for(Drink::Orange), 1);
        assert_eq!(report.orders_served(), 3);
        assert_eq!(report.total_money_earned_in_cents, 150);
    }

    #[test]
    fn aggregator_starts_at_zero_with_every_drink_listed() {
        let broker = InMemoryBroker::<DispenserEvent>::new();
        let reporting = ReportingAggregator::new(&broker);

        let state = reporting.read_reporting();

        for drink in Drink::ALL {
            assert_eq!(state.count_for(drink), 0);
        }
        assert_eq!(state.total_money_earned_in_cents, 0);
        assert_eq!(broker.subscriber_count(), 1);
    }

    #[test]
    fn aggregator_follows_broker_events() {
        let broker = InMemoryBroker::<DispenserEvent>::new();
        let reporting = ReportingAggregator::new(&broker);

        broker.publish(&DispenserEvent::OrderProcessed(processed(Drink::Chocolate, 50)));
        broker.publish(&DispenserEvent::OrderProcessed(processed(Drink::Orange, 80)));

        let state = reporting.read_reporting();
        assert_eq!(state.orders_served(), 2);
        assert_eq!(state.count_for(Drink::Chocolate), 1);
        assert_eq!(state.count_for(Drink::Orange), 1);
        assert_eq!(state.total_money_earned_in_cents, 130);
    }

    #[test]
    fn aggregator_records_every_order_published_from_many_threads() {
        let broker = Arc::new(InMemoryBroker::<DispenserEvent>::new());
        let reporting = ReportingAggregator::new(&*broker);

        let workers: Vec<_> = (0..4)
            .map(|_| {
                let broker = Arc::clone(&broker);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        broker.publish(&DispenserEvent::OrderProcessed(processed(Drink::Tea, 40)));
                    }
                })
            })
            .collect();
        for worker in workers {
            assert!(worker.join().is_ok());
        }

        let state = reporting.read_reporting();
        assert_eq!(state.count_for(Drink::Tea), 100);
        assert_eq!(state.total_money_earned_in_cents, 4000);
    }

    #[test]
    fn aggregators_are_independent() {
        let broker = InMemoryBroker::<DispenserEvent>::new();
        let early = ReportingAggregator::new(&broker);
        broker.publish(&DispenserEvent::OrderProcessed(processed(Drink::Tea, 40)));
        let late = ReportingAggregator::new(&broker);
        broker.publish(&DispenserEvent::OrderProcessed(processed(Drink::Tea, 40)));

        assert_eq!(early.read_reporting().count_for(Drink::Tea), 2);
        assert_eq!(late.read_reporting().count_for(Drink::Tea), 1);
    }

    #[test]
    fn report_display_lists_every_drink() {
        let state = increment_reporting(&processed(Drink::Coffee, 60), &ReportingState::default());

        assert_eq!(
            state.to_string(),
            "tea=0 coffee=1 chocolate=0 orange=0 total=60 cents"
        );
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn report_serializes_with_camel_case_keys() {
        let state = increment_reporting(&processed(Drink::Coffee, 60), &ReportingState::default());

        let json = serde_json::to_value(state).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "drinkCounts": {"tea": 0, "coffee": 1, "chocolate": 0, "orange": 0},
                "totalMoneyEarnedInCents": 60
            })
        );
    }
}
