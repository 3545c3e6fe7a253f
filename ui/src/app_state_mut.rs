//! Defines the mutable, reactive state for the application's UI.

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;
use rates::currency::CurrencyCode;
use rates::input::sanitize_number_input;
use rates::keypad::ActiveField;
use rates::keypad::AmountState;
use rates::keypad::KeypadKey;
use rates::persist;
use rates::rate_map::BaseRates;
use rates::rate_map::RateMap;
use rates::store::KeyValueStore;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// Every mutation goes through a method here so the matching store write
/// happens synchronously right after the signal update.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The two market parities, as edited on the Rates screen.
    pub base_rates: Signal<BaseRates>,
    /// DZD per unit for every currency. Recomputed whenever `base_rates` changes.
    pub rate_map: Memo<RateMap>,
    /// The DZD and foreign amount buffers and which one the keypad types into.
    pub amounts: Signal<AmountState>,
    /// Target of the DZD → foreign panel.
    pub to_currency: Signal<CurrencyCode>,
    /// Source of the foreign → DZD panel.
    pub from_currency: Signal<CurrencyCode>,
    pub store: Signal<Box<dyn KeyValueStore>>,
}

impl AppStateMut {
    pub fn set_base_rates(&mut self, rates: BaseRates) {
        self.base_rates.set(rates);
        if let Err(e) = persist::save_base_rates(&mut *self.store.write(), &rates) {
            warn!("could not save base rates: {e}");
        }
    }

    pub fn set_dzd_per_euro(&mut self, dzd_per_euro: f64) {
        let rates = BaseRates {
            dzd_per_euro,
            ..*self.base_rates.peek()
        };
        self.set_base_rates(rates);
    }

    pub fn set_dzd_per_usd(&mut self, dzd_per_usd: f64) {
        let rates = BaseRates {
            dzd_per_usd,
            ..*self.base_rates.peek()
        };
        self.set_base_rates(rates);
    }

    pub fn reset_base_rates(&mut self) {
        info!("resetting base rates to defaults");
        self.set_base_rates(BaseRates::default());
    }

    pub fn focus(&mut self, field: ActiveField) {
        if self.amounts.peek().active != field {
            self.amounts.write().focus(field);
        }
    }

    /// Replaces a buffer with sanitized typed text.
    pub fn set_amount(&mut self, field: ActiveField, text: &str) {
        let sanitized = sanitize_number_input(text);
        *self.amounts.write().buffer_mut(field) = sanitized;
        self.save_amount(field);
    }

    /// Types a keypad key into the active buffer.
    pub fn press_key(&mut self, key: KeypadKey) {
        let field = self.amounts.write().press(key);
        debug!(
            "keypad {key} -> {:?} = {:?}",
            field,
            self.amounts.peek().buffer(field)
        );
        self.save_amount(field);
    }

    fn save_amount(&mut self, field: ActiveField) {
        let buffer = self.amounts.peek().buffer(field).to_string();
        if let Err(e) = persist::save_amount(&mut *self.store.write(), field, &buffer) {
            warn!("could not save {:?} amount: {e}", field);
        }
    }
}
