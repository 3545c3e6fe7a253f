//! Defines the currencies known to the calculator and how each one is anchored.

use serde::Deserialize;
use serde::Serialize;
use strum::IntoEnumIterator;

/// One of the three pivots a currency's DZD value is derived from.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::IntoStaticStr,
    strum::Display,
)]
#[allow(clippy::upper_case_acronyms)]
pub enum Anchor {
    USD,
    EUR,
    DZD,
}

/// A currency in the rate table.
///
/// Declaration order is the table order: it drives the derived rate table and
/// `CurrencyCode::iter()`.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum CurrencyCode {
    DZD, // Algerian Dinar
    EUR, // Euro
    USD, // US Dollar
    GBP, // British Pound
    CAD, // Canadian Dollar
    AUD, // Australian Dollar
    CHF, // Swiss Franc
    JPY, // Japanese Yen
    CNY, // Chinese Yuan
    SAR, // Saudi Riyal
    AED, // UAE Dirham
    QAR, // Qatari Riyal
    MAD, // Moroccan Dirham
    TND, // Tunisian Dinar
    EGP, // Egyptian Pound
    TRY, // Turkish Lira
    NOK, // Norwegian Krone
    SEK, // Swedish Krona
    DKK, // Danish Krone
    XOF, // West African CFA Franc
    XAF, // Central African CFA Franc
    CFA, // CFA Franc BEAC
}

impl CurrencyCode {
    /// Returns the string code for the currency (e.g., "USD").
    /// This is handled automatically by the `strum::IntoStaticStr` derive macro.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the full name of the currency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DZD => "Algerian Dinar",
            Self::EUR => "Euro",
            Self::USD => "US Dollar",
            Self::GBP => "British Pound",
            Self::CAD => "Canadian Dollar",
            Self::AUD => "Australian Dollar",
            Self::CHF => "Swiss Franc",
            Self::JPY => "Japanese Yen",
            Self::CNY => "Chinese Yuan",
            Self::SAR => "Saudi Riyal",
            Self::AED => "UAE Dirham",
            Self::QAR => "Qatari Riyal",
            Self::MAD => "Moroccan Dirham",
            Self::TND => "Tunisian Dinar",
            Self::EGP => "Egyptian Pound",
            Self::TRY => "Turkish Lira",
            Self::NOK => "Norwegian Krone",
            Self::SEK => "Swedish Krona",
            Self::DKK => "Danish Krone",
            Self::XOF => "West African CFA Franc",
            Self::XAF => "Central African CFA Franc",
            Self::CFA => "CFA Franc BEAC",
        }
    }

    /// Returns the pivot currency this currency's value is expressed against.
    pub fn anchor(&self) -> Anchor {
        match self {
            Self::DZD => Anchor::DZD,
            Self::EUR | Self::DKK | Self::XOF | Self::XAF | Self::CFA => Anchor::EUR,
            _ => Anchor::USD,
        }
    }

    /// Returns how many units of the anchor one unit of this currency is worth.
    ///
    /// The three anchors are worth exactly one of themselves.
    pub fn anchor_per_unit(&self) -> f64 {
        match self {
            Self::DZD | Self::EUR | Self::USD => 1.0,
            Self::GBP => 1.27,
            Self::CAD => 0.73,
            Self::AUD => 0.65,
            Self::CHF => 1.09,
            Self::JPY => 0.0066,
            Self::CNY => 0.14,
            Self::SAR => 0.2667,
            Self::AED => 0.2723,
            Self::QAR => 0.2747,
            Self::MAD => 0.096,
            Self::TND => 0.32,
            Self::EGP => 0.0204,
            Self::TRY => 0.031,
            Self::NOK => 0.095,
            Self::SEK => 0.094,
            Self::DKK => 0.134,
            // the three CFA codes intentionally share a multiplier
            Self::XOF | Self::XAF | Self::CFA => 0.001524,
        }
    }

    pub fn definition(&self) -> CurrencyDefinition {
        CurrencyDefinition {
            code: *self,
            name: self.name(),
            anchor: self.anchor(),
            anchor_per_unit: self.anchor_per_unit(),
        }
    }

    /// Currencies offered in the pickers: everything but DZD, sorted by code.
    pub fn foreign() -> Vec<Self> {
        let mut foreign = Self::iter().filter(|c| !c.is_dzd()).collect::<Vec<_>>();
        foreign.sort_by_key(|c| c.code());
        foreign
    }
}

/// A row of the rate table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrencyDefinition {
    pub code: CurrencyCode,
    pub name: &'static str,
    pub anchor: Anchor,
    pub anchor_per_unit: f64,
}

impl CurrencyDefinition {
    /// All definitions in table order.
    pub fn all() -> impl Iterator<Item = CurrencyDefinition> {
        CurrencyCode::iter().map(|code| code.definition())
    }
}
