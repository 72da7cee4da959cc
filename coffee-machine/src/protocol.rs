//! Drink maker protocol.
//!
//! The machine takes one instruction string per order:
//!
//! | Instruction | Meaning |
//! |-------------|---------|
//! | `T:1:0` | tea with 1 sugar and a stick |
//! | `Hh::` | extra hot chocolate, no sugar, no stick |
//! | `O::` | orange juice |
//! | `M:Missing 55 cents` | message shown to the customer |
//!
//! Drink codes are `T` tea, `C` coffee, `H` chocolate and `O` orange juice;
//! an `h` right after the drink code means extra hot. Empty fields keep
//! their colons.

use crate::types::{Drink, Heat, Order, Sugar, ValidOrder};

/// Turns an [`Order`] into a machine instruction.
///
/// The orchestrator holds one of these so that the wire format can be
/// swapped out in tests or for another machine model.
pub trait OrderFormatter: Send + Sync {
    /// Instruction for `order`
    fn format(&self, order: &Order) -> String;
}

/// The drink maker protocol described in this module
#[derive(Debug, Clone, Copy, Default)]
pub struct MachineProtocol;

impl OrderFormatter for MachineProtocol {
    fn format(&self, order: &Order) -> String {
        format_order(order)
    }
}

/// Machine instruction for `order`.
///
/// ```
/// use coffee_machine::protocol::format_order;
/// use coffee_machine::types::{Drink, FundingError, Heat, Order, Sugar, ValidOrder};
///
/// let coffee = Order::Valid(ValidOrder::new(Drink::Coffee, Heat::Hot, Sugar::One));
/// assert_eq!(format_order(&coffee), "C:1:0");
///
/// let broke = Order::MissingMoney(FundingError::new(55).unwrap());
/// assert_eq!(format_order(&broke), "M:Missing 55 cents");
/// ```
#[must_use]
pub fn format_order(order: &Order) -> String {
    match order {
        Order::Valid(order) => format_valid(order),
        Order::MissingMoney(error) => format!("M:Missing {} cents", error.missing_cents()),
    }
}

fn format_valid(order: &ValidOrder) -> String {
    format!(
        "{}{}:{}:{}",
        drink_code(order.drink()),
        heat_code(order.heat()),
        sugar_code(order.sugar()),
        stick_code(order.with_stick()),
    )
}

const fn drink_code(drink: Drink) -> &'static str {
    match drink {
        Drink::Tea => "T",
        Drink::Coffee => "C",
        Drink::Chocolate => "H",
        Drink::Orange => "O",
    }
}

const fn heat_code(heat: Heat) -> &'static str {
    match heat {
        Heat::ExtraHot => "h",
        Heat::Hot | Heat::Cold => "",
    }
}

const fn sugar_code(sugar: Sugar) -> &'static str {
    match sugar {
        Sugar::None => "",
        Sugar::One => "1",
        Sugar::Two => "2",
    }
}

const fn stick_code(with_stick: bool) -> &'static str {
    if with_stick { "0" } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FundingError;

    fn valid(drink: Drink, heat: Heat, sugar: Sugar) -> Order {
        Order::Valid(ValidOrder::new(drink, heat, sugar))
    }

    #[test]
    fn coffee_with_sugar() {
        assert_eq!(format_order(&valid(Drink::Coffee, Heat::Hot, Sugar::One)), "C:1:0");
    }

    #[test]
    fn plain_tea_keeps_empty_fields() {
        assert_eq!(format_order(&valid(Drink::Tea, Heat::Hot, Sugar::None)), "T::");
    }

    #[test]
    fn chocolate_with_two_sugars() {
        assert_eq!(
            format_order(&valid(Drink::Chocolate, Heat::Hot, Sugar::Two)),
            "H:2:0"
        );
    }

    #[test]
    fn orange_juice() {
        assert_eq!(format_order(&valid(Drink::Orange, Heat::Cold, Sugar::None)), "O::");
    }

    #[test]
    fn extra_hot_drinks() {
        assert_eq!(
            format_order(&valid(Drink::Coffee, Heat::ExtraHot, Sugar::None)),
            "Ch::"
        );
        assert_eq!(
            format_order(&valid(Drink::Chocolate, Heat::ExtraHot, Sugar::One)),
            "Hh:1:0"
        );
        assert_eq!(
            format_order(&valid(Drink::Tea, Heat::ExtraHot, Sugar::Two)),
            "Th:2:0"
        );
    }

    #[test]
    fn missing_money_message() {
        let order = FundingError::new(55).map_or_else(
            || valid(Drink::Tea, Heat::Hot, Sugar::None),
            Order::MissingMoney,
        );
        assert_eq!(format_order(&order), "M:Missing 55 cents");
    }

    #[test]
    fn machine_protocol_formatter_delegates() {
        let order = valid(Drink::Tea, Heat::Hot, Sugar::One);
        assert_eq!(MachineProtocol.format(&order), format_order(&order));
    }
}
