//! Order calculation: from a request and the money inserted to an [`Order`].

use crate::events::OrderProcessed;
use crate::pricing::PriceTable;
use crate::types::{FundingError, Order, OrderRequest, ValidOrder};
use dispenser_core::environment::EventPublisher;
use dispenser_runtime::metrics::{DISPENSER_ORDERS_TOTAL, DISPENSER_REVENUE_CENTS_TOTAL};

/// Evaluate `request` against `prices`.
///
/// 1. Not enough money: returns the shortfall, publishes nothing.
/// 2. Enough (or too much) money: publishes one [`OrderProcessed`] carrying
///    the full amount inserted, then returns the order to prepare.
///
/// Overpayment is accepted and no change is computed.
pub fn compute_order<P>(publisher: &P, prices: &PriceTable, request: &OrderRequest) -> Order
where
    P: EventPublisher<OrderProcessed> + ?Sized,
{
    let drink = request.drink();
    let money_in_cents = request.money_in_cents();
    let price = prices.price_of(drink);

    if let Some(error) = FundingError::new(price.saturating_sub(money_in_cents)) {
        tracing::debug!(
            %drink,
            money_in_cents,
            missing_cents = error.missing_cents(),
            "Not enough money"
        );
        metrics::counter!(DISPENSER_ORDERS_TOTAL, "outcome" => "missing_money").increment(1);
        return Order::MissingMoney(error);
    }

    publisher.publish(OrderProcessed {
        drink,
        money_earned_in_cents: money_in_cents,
    });
    tracing::debug!(%drink, money_in_cents, price, "Order accepted");
    metrics::counter!(DISPENSER_ORDERS_TOTAL, "outcome" => "served").increment(1);
    metrics::counter!(DISPENSER_REVENUE_CENTS_TOTAL).increment(u64::from(money_in_cents));

    Order::Valid(ValidOrder::new(drink, request.heat(), request.sugar()))
}
