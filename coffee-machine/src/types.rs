//! Core domain types for the drink dispenser.
//!
//! A customer request ([`OrderRequest`]) is evaluated into an [`Order`]:
//! either a [`ValidOrder`] ready to be sent to the machine or a
//! [`FundingError`] describing how much money is missing.

use crate::error::RequestError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Drinks the machine can prepare
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Drink {
    /// Tea
    Tea,
    /// Coffee
    Coffee,
    /// Hot chocolate
    Chocolate,
    /// Freshly squeezed orange juice, always served cold
    Orange,
}

impl Drink {
    /// Every drink, in menu order
    pub const ALL: [Self; 4] = [Self::Tea, Self::Coffee, Self::Chocolate, Self::Orange];

    /// Lowercase name used in logs and reports
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tea => "tea",
            Self::Coffee => "coffee",
            Self::Chocolate => "chocolate",
            Self::Orange => "orange",
        }
    }
}

impl fmt::Display for Drink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Serving temperature
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Heat {
    /// Cold (orange juice only)
    Cold,
    /// Hot
    Hot,
    /// Extra hot
    ExtraHot,
}

impl fmt::Display for Heat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cold => write!(f, "cold"),
            Self::Hot => write!(f, "hot"),
            Self::ExtraHot => write!(f, "extra hot"),
        }
    }
}

/// Requested sugar: none, one or two doses
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Sugar {
    /// No sugar
    #[default]
    None,
    /// One dose
    One,
    /// Two doses
    Two,
}

impl Sugar {
    /// Number of doses
    #[must_use]
    pub const fn doses(self) -> u8 {
        match self {
            Self::None => 0,
            Self::One => 1,
            Self::Two => 2,
        }
    }

    /// The dose when any sugar was requested
    #[must_use]
    pub const fn dose(self) -> Option<SugarDose> {
        match self {
            Self::None => None,
            Self::One => Some(SugarDose::One),
            Self::Two => Some(SugarDose::Two),
        }
    }
}

impl TryFrom<u8> for Sugar {
    type Error = RequestError;

    fn try_from(doses: u8) -> Result<Self, Self::Error> {
        match doses {
            0 => Ok(Self::None),
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(RequestError::InvalidSugar(other)),
        }
    }
}

impl From<Sugar> for u8 {
    fn from(sugar: Sugar) -> Self {
        sugar.doses()
    }
}

/// Sugar actually added to a drink; a stick always comes with it
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SugarDose {
    /// One dose
    One,
    /// Two doses
    Two,
}

impl From<SugarDose> for Sugar {
    fn from(dose: SugarDose) -> Self {
        match dose {
            SugarDose::One => Self::One,
            SugarDose::Two => Self::Two,
        }
    }
}

/// A customer request: drink, temperature, sugar and inserted money.
///
/// Construction enforces the serving rules, so a value of this type is
/// always one the machine can prepare:
/// - orange juice is cold and unsweetened
/// - every other drink is hot or extra hot
///
/// Deserialization goes through the same checks:
///
/// ```
/// use coffee_machine::types::{Drink, OrderRequest};
///
/// let request: OrderRequest = serde_json::from_str(
///     r#"{"drink":"coffee","heat":"hot","sugar":1,"moneyInCents":60}"#,
/// ).unwrap();
/// assert_eq!(request.drink(), Drink::Coffee);
///
/// let cold_tea = serde_json::from_str::<OrderRequest>(
///     r#"{"drink":"tea","heat":"cold","sugar":0,"moneyInCents":40}"#,
/// );
/// assert!(cold_tea.is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOrderRequest", rename_all = "camelCase")]
pub struct OrderRequest {
    drink: Drink,
    heat: Heat,
    sugar: Sugar,
    money_in_cents: u32,
}

impl OrderRequest {
    /// Build a request, checking the serving rules.
    ///
    /// # Errors
    ///
    /// - [`RequestError::OrangeMustBeCold`] for warm orange juice
    /// - [`RequestError::OrangeWithSugar`] for sweetened orange juice
    /// - [`RequestError::HotDrinkServedCold`] for a cold tea, coffee or chocolate
    pub const fn new(
        drink: Drink,
        heat: Heat,
        sugar: Sugar,
        money_in_cents: u32,
    ) -> Result<Self, RequestError> {
        match (drink, heat, sugar) {
            (Drink::Orange, Heat::Hot | Heat::ExtraHot, _) => {
                Err(RequestError::OrangeMustBeCold(heat))
            },
            (Drink::Orange, Heat::Cold, Sugar::One | Sugar::Two) => {
                Err(RequestError::OrangeWithSugar)
            },
            (Drink::Tea | Drink::Coffee | Drink::Chocolate, Heat::Cold, _) => {
                Err(RequestError::HotDrinkServedCold(drink))
            },
            _ => Ok(Self {
                drink,
                heat,
                sugar,
                money_in_cents,
            }),
        }
    }

    /// Shorthand for a hot drink
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::OrangeMustBeCold`] when `drink` is orange juice.
    pub const fn hot(drink: Drink, sugar: Sugar, money_in_cents: u32) -> Result<Self, RequestError> {
        Self::new(drink, Heat::Hot, sugar, money_in_cents)
    }

    /// Orange juice: always cold, never sweetened
    #[must_use]
    pub const fn orange_juice(money_in_cents: u32) -> Self {
        Self {
            drink: Drink::Orange,
            heat: Heat::Cold,
            sugar: Sugar::None,
            money_in_cents,
        }
    }

    /// Requested drink
    #[must_use]
    pub const fn drink(&self) -> Drink {
        self.drink
    }

    /// Requested temperature
    #[must_use]
    pub const fn heat(&self) -> Heat {
        self.heat
    }

    /// Requested sugar
    #[must_use]
    pub const fn sugar(&self) -> Sugar {
        self.sugar
    }

    /// Money inserted, in cents
    #[must_use]
    pub const fn money_in_cents(&self) -> u32 {
        self.money_in_cents
    }
}

/// Unchecked wire form of [`OrderRequest`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOrderRequest {
    drink: Drink,
    heat: Heat,
    sugar: u8,
    money_in_cents: u32,
}

impl TryFrom<RawOrderRequest> for OrderRequest {
    type Error = RequestError;

    fn try_from(raw: RawOrderRequest) -> Result<Self, Self::Error> {
        let sugar = Sugar::try_from(raw.sugar)?;
        Self::new(raw.drink, raw.heat, sugar, raw.money_in_cents)
    }
}

/// A funded order, ready for the machine
///
/// A stick is dispensed exactly when sugar is added, which the two variants
/// encode: there is no way to build a sweetened order without a stick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValidOrder {
    /// Sweetened drink, served with a stick
    WithSugar {
        /// Drink to prepare
        drink: Drink,
        /// Serving temperature
        heat: Heat,
        /// Sugar to add
        dose: SugarDose,
    },
    /// Unsweetened drink, no stick
    WithoutSugar {
        /// Drink to prepare
        drink: Drink,
        /// Serving temperature
        heat: Heat,
    },
}

impl ValidOrder {
    /// Build the order for a drink, picking the variant from `sugar`
    #[must_use]
    pub const fn new(drink: Drink, heat: Heat, sugar: Sugar) -> Self {
        match sugar.dose() {
            Some(dose) => Self::WithSugar { drink, heat, dose },
            None => Self::WithoutSugar { drink, heat },
        }
    }

    /// Drink to prepare
    #[must_use]
    pub const fn drink(&self) -> Drink {
        match *self {
            Self::WithSugar { drink, .. } | Self::WithoutSugar { drink, .. } => drink,
        }
    }

    /// Serving temperature
    #[must_use]
    pub const fn heat(&self) -> Heat {
        match *self {
            Self::WithSugar { heat, .. } | Self::WithoutSugar { heat, .. } => heat,
        }
    }

    /// Sugar to add
    #[must_use]
    pub fn sugar(&self) -> Sugar {
        match *self {
            Self::WithSugar { dose, .. } => dose.into(),
            Self::WithoutSugar { .. } => Sugar::None,
        }
    }

    /// Whether a stick is dispensed
    #[must_use]
    pub const fn with_stick(&self) -> bool {
        matches!(self, Self::WithSugar { .. })
    }
}

/// Not enough money was inserted
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FundingError {
    missing_cents: u32,
}

impl FundingError {
    /// Shortfall of `missing_cents`; `None` when nothing is missing
    #[must_use]
    pub const fn new(missing_cents: u32) -> Option<Self> {
        if missing_cents == 0 {
            None
        } else {
            Some(Self { missing_cents })
        }
    }

    /// How much more money is needed, in cents (always positive)
    #[must_use]
    pub const fn missing_cents(&self) -> u32 {
        self.missing_cents
    }
}

/// Outcome of evaluating a request
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// The drink can be prepared
    Valid(ValidOrder),
    /// The customer must insert more money
    MissingMoney(FundingError),
}

impl Order {
    /// Whether the drink will be prepared
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The prepared order, if funded
    #[must_use]
    pub const fn valid(&self) -> Option<&ValidOrder> {
        match self {
            Self::Valid(order) => Some(order),
            Self::MissingMoney(_) => None,
        }
    }

    /// The shortfall, if not funded
    #[must_use]
    pub const fn funding_error(&self) -> Option<&FundingError> {
        match self {
            Self::Valid(_) => None,
            Self::MissingMoney(error) => Some(error),
        }
    }
}

impl From<ValidOrder> for Order {
    fn from(order: ValidOrder) -> Self {
        Self::Valid(order)
    }
}

impl From<FundingError> for Order {
    fn from(error: FundingError) -> Self {
        Self::MissingMoney(error)
    }
}
