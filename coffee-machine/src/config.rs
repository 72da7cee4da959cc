//! Configuration management for the dispenser.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::error::ConfigError;
use crate::pricing::PriceTable;
use crate::types::Drink;
use std::env;
use std::str::FromStr;

/// Price of tea, in cents
pub const PRICE_TEA_VAR: &str = "DISPENSER_PRICE_TEA";
/// Price of coffee, in cents
pub const PRICE_COFFEE_VAR: &str = "DISPENSER_PRICE_COFFEE";
/// Price of chocolate, in cents
pub const PRICE_CHOCOLATE_VAR: &str = "DISPENSER_PRICE_CHOCOLATE";
/// Price of orange juice, in cents
pub const PRICE_ORANGE_VAR: &str = "DISPENSER_PRICE_ORANGE";
/// Log filter used when `RUST_LOG` is unset
pub const LOG_LEVEL_VAR: &str = "DISPENSER_LOG_LEVEL";
/// Whether to render Prometheus metrics at exit
pub const METRICS_VAR: &str = "DISPENSER_METRICS";

/// Dispenser configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispenserConfig {
    /// Drink prices
    pub prices: PriceTable,
    /// Fallback log filter (default: info)
    pub log_level: String,
    /// Render metrics at exit (default: false)
    pub metrics_enabled: bool,
}

impl Default for DispenserConfig {
    fn default() -> Self {
        Self {
            prices: PriceTable::STANDARD,
            log_level: "info".to_string(),
            metrics_enabled: false,
        }
    }
}

impl DispenserConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable is set but
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from any variable source.
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable is set but
    /// cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let mut prices = defaults.prices;
        for (variable, drink) in [
            (PRICE_TEA_VAR, Drink::Tea),
            (PRICE_COFFEE_VAR, Drink::Coffee),
            (PRICE_CHOCOLATE_VAR, Drink::Chocolate),
            (PRICE_ORANGE_VAR, Drink::Orange),
        ] {
            if let Some(cents) = parse_var::<u32>(&lookup, variable, "a price in cents")? {
                prices = prices.with_price(drink, cents);
            }
        }

        let log_level = lookup(LOG_LEVEL_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.log_level);

        let metrics_enabled = parse_var::<bool>(&lookup, METRICS_VAR, "true or false")?
            .unwrap_or(defaults.metrics_enabled);

        Ok(Self {
            prices,
            log_level,
            metrics_enabled,
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    variable: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(value) = lookup(variable) else {
        return Ok(None);
    };

    let parsed = value.trim().parse::<T>();
    match parsed {
        Ok(parsed) => Ok(Some(parsed)),
        Err(_) => Err(ConfigError::InvalidValue {
            variable,
            value,
            expected,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = DispenserConfig::from_lookup(|_| None);

        assert_eq!(config, Ok(DispenserConfig::default()));
    }

    #[test]
    fn prices_can_be_overridden() {
        let config = DispenserConfig::from_lookup(lookup_from(&[
            (PRICE_TEA_VAR, "45"),
            (PRICE_ORANGE_VAR, " 80 "),
        ]));

        let prices = config.map(|c| c.prices);
        assert_eq!(
            prices,
            Ok(PriceTable::STANDARD
                .with_price(Drink::Tea, 45)
                .with_price(Drink::Orange, 80))
        );
    }

    #[test]
    fn log_level_and_metrics() {
        let config = DispenserConfig::from_lookup(lookup_from(&[
            (LOG_LEVEL_VAR, "coffee_machine=debug"),
            (METRICS_VAR, "true"),
        ]));

        assert_eq!(
            config,
            Ok(DispenserConfig {
                prices: PriceTable::STANDARD,
                log_level: "coffee_machine=debug".to_string(),
                metrics_enabled: true,
            })
        );
    }

    #[test]
    fn blank_log_level_keeps_default() {
        let config = DispenserConfig::from_lookup(lookup_from(&[(LOG_LEVEL_VAR, "  ")]));

        assert_eq!(config.map(|c| c.log_level), Ok("info".to_string()));
    }

    #[test]
    fn unparsable_price_names_the_variable() {
        let config = DispenserConfig::from_lookup(lookup_from(&[(PRICE_COFFEE_VAR, "cheap")]));

        assert_eq!(
            config,
            Err(ConfigError::InvalidValue {
                variable: PRICE_COFFEE_VAR,
                value: "cheap".to_string(),
                expected: "a price in cents",
            })
        );
    }

    #[test]
    fn negative_price_is_rejected() {
        let config = DispenserConfig::from_lookup(lookup_from(&[(PRICE_TEA_VAR, "-5")]));

        assert!(matches!(
            config,
            Err(ConfigError::InvalidValue { variable, .. }) if variable == PRICE_TEA_VAR
        ));
    }

    #[test]
    fn unparsable_metrics_flag_is_rejected() {
        let config = DispenserConfig::from_lookup(lookup_from(&[(METRICS_VAR, "yes")]));

        assert!(config.is_err());
    }
}
