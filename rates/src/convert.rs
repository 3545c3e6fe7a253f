//! Conversions between DZD and the other currencies of the rate table.

use crate::currency::CurrencyCode;
use crate::input::parse_amount;
use crate::rate_map::RateMap;

/// Returns `1 / rate`, or 0 when the rate is exactly zero.
pub fn inverse_rate(rate: f64) -> f64 {
    if rate == 0.0 {
        return 0.0;
    }
    1.0 / rate
}

/// Converts a DZD amount into a currency worth `rate` DZD per unit.
pub fn dzd_to_foreign(amount: f64, rate: f64) -> f64 {
    amount * inverse_rate(rate)
}

/// Converts an amount of a currency worth `rate` DZD per unit into DZD.
pub fn foreign_to_dzd(amount: f64, rate: f64) -> f64 {
    amount * rate
}

/// One side of the calculator: what was typed, what it converts to, and the rate used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub currency: CurrencyCode,
    pub amount: f64,
    pub result: f64,
    /// DZD per one unit of `currency`.
    pub rate: f64,
}

impl Conversion {
    /// Converts the DZD buffer into `to`.
    pub fn from_dzd(buffer: &str, to: CurrencyCode, rates: &RateMap) -> Self {
        let amount = parse_amount(buffer);
        let rate = rates.get(to);
        Self {
            currency: to,
            amount,
            result: dzd_to_foreign(amount, rate),
            rate,
        }
    }

    /// Converts the foreign buffer, denominated in `from`, into DZD.
    pub fn to_dzd(buffer: &str, from: CurrencyCode, rates: &RateMap) -> Self {
        let amount = parse_amount(buffer);
        let rate = rates.get(from);
        Self {
            currency: from,
            amount,
            result: foreign_to_dzd(amount, rate),
            rate,
        }
    }
}
