//! Error types for the dispenser.
//!
//! A shortfall of money is not an error here: it is an ordinary outcome,
//! see [`FundingError`](crate::types::FundingError).

use crate::types::{Drink, Heat};
use thiserror::Error;

/// A request the machine cannot prepare
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    /// Orange juice requested hot or extra hot
    #[error("orange juice is only served cold, not {0}")]
    OrangeMustBeCold(Heat),

    /// Orange juice requested with sugar
    #[error("orange juice is served without sugar")]
    OrangeWithSugar,

    /// Tea, coffee or chocolate requested cold
    #[error("{0} is served hot or extra hot, not cold")]
    HotDrinkServedCold(Drink),

    /// Sugar outside 0..=2
    #[error("sugar must be 0, 1 or 2, got {0}")]
    InvalidSugar(u8),
}

/// Configuration could not be loaded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable is set to something unusable
    #[error("invalid value {value:?} for {variable}: expected {expected}")]
    InvalidValue {
        /// Variable name
        variable: &'static str,
        /// Raw value found
        value: String,
        /// What would have been accepted
        expected: &'static str,
    },
}
