//! Drink prices.

use crate::types::Drink;

/// Price of each drink, in cents
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PriceTable {
    tea: u32,
    coffee: u32,
    chocolate: u32,
    orange: u32,
}

impl PriceTable {
    /// Factory prices: tea 40, coffee 60, chocolate 50, orange juice 60
    pub const STANDARD: Self = Self {
        tea: 40,
        coffee: 60,
        chocolate: 50,
        orange: 60,
    };

    /// Price of `drink`, in cents
    #[must_use]
    pub const fn price_of(&self, drink: Drink) -> u32 {
        match drink {
            Drink::Tea => self.tea,
            Drink::Coffee => self.coffee,
            Drink::Chocolate => self.chocolate,
            Drink::Orange => self.orange,
        }
    }

    /// Copy of this table with `drink` repriced
    #[must_use]
    pub const fn with_price(mut self, drink: Drink, cents: u32) -> Self {
        match drink {
            Drink::Tea => self.tea = cents,
            Drink::Coffee => self.coffee = cents,
            Drink::Chocolate => self.chocolate = cents,
            Drink::Orange => self.orange = cents,
        }
        self
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
