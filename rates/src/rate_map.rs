//! Provides the two user-editable base rates and the DZD rate map derived from them.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::convert::inverse_rate;
use crate::currency::Anchor;
use crate::currency::CurrencyCode;
use crate::currency::CurrencyDefinition;

pub const DEFAULT_DZD_PER_EURO: f64 = 146.5;
pub const DEFAULT_DZD_PER_USD: f64 = 136.2;

/// The market parities every other rate derives from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseRates {
    pub dzd_per_euro: f64,
    pub dzd_per_usd: f64,
}

impl Default for BaseRates {
    fn default() -> Self {
        Self {
            dzd_per_euro: DEFAULT_DZD_PER_EURO,
            dzd_per_usd: DEFAULT_DZD_PER_USD,
        }
    }
}

impl BaseRates {
    pub fn new(dzd_per_euro: f64, dzd_per_usd: f64) -> Self {
        Self {
            dzd_per_euro,
            dzd_per_usd,
        }
    }

    /// Restores both rates to their defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when a reset would change nothing.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Returns how many DZD one unit of the given anchor is worth.
    pub fn dzd_per_anchor(&self, anchor: Anchor) -> f64 {
        match anchor {
            Anchor::USD => self.dzd_per_usd,
            Anchor::EUR => self.dzd_per_euro,
            Anchor::DZD => 1.0,
        }
    }
}

/// A map holding the DZD value of one unit of every currency in the table.
///
/// The map is always complete: `derive` fills one entry per `CurrencyCode`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateMap(HashMap<CurrencyCode, f64>);

impl RateMap {
    /// Computes the DZD value of every currency from the base rates.
    pub fn derive(base: &BaseRates) -> Self {
        Self(
            CurrencyDefinition::all()
                .map(|def| {
                    let rate = match def.anchor {
                        Anchor::DZD => def.anchor_per_unit,
                        anchor => base.dzd_per_anchor(anchor) * def.anchor_per_unit,
                    };
                    (def.code, rate)
                })
                .collect(),
        )
    }

    /// DZD per one unit of `code`. A code missing from the map counts as 1.
    pub fn get(&self, code: CurrencyCode) -> f64 {
        self.0.get(&code).copied().unwrap_or(1.0)
    }

    /// Units of `code` per one DZD, or 0 when the rate is 0.
    pub fn inverse(&self, code: CurrencyCode) -> f64 {
        inverse_rate(self.get(code))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the rows of the derived rate table, in table order.
    pub fn rows(&self) -> impl Iterator<Item = RateRow> + '_ {
        CurrencyCode::iter().map(move |code| RateRow {
            definition: code.definition(),
            dzd_per_unit: self.get(code),
            units_per_dzd: self.inverse(code),
        })
    }
}

/// One line of the derived rate table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateRow {
    pub definition: CurrencyDefinition,
    pub dzd_per_unit: f64,
    pub units_per_dzd: f64,
}
