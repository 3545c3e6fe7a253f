//! Reads and writes the calculator's state through a [`KeyValueStore`].
//!
//! Loading never fails: missing or corrupt values fall back to defaults.

use dioxus_logger::tracing::warn;

use crate::keypad::ActiveField;
use crate::keypad::AmountState;
use crate::rate_map::BaseRates;
use crate::store::KeyValueStore;
use crate::store::StoreError;

/// The keys the calculator persists under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::IntoStaticStr, strum::EnumIter)]
pub enum StorageKey {
    #[strum(serialize = "dzd-per-euro")]
    DzdPerEuro,
    #[strum(serialize = "dzd-per-usd")]
    DzdPerUsd,
    #[strum(serialize = "last-dzd-amount")]
    LastDzdAmount,
    #[strum(serialize = "last-foreign-amount")]
    LastForeignAmount,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// The key holding the buffer of an amount field.
    pub fn amount(field: ActiveField) -> Self {
        match field {
            ActiveField::Dzd => Self::LastDzdAmount,
            ActiveField::Foreign => Self::LastForeignAmount,
        }
    }
}

fn read<S: KeyValueStore + ?Sized>(store: &S, key: StorageKey) -> Option<String> {
    match store.get(key.as_str()) {
        Ok(value) => value,
        Err(e) => {
            warn!("could not read {}: {e}", key.as_str());
            None
        }
    }
}

fn read_rate<S: KeyValueStore + ?Sized>(store: &S, key: StorageKey, default: f64) -> f64 {
    let Some(text) = read(store, key) else {
        return default;
    };
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            warn!("ignoring stored {} {:?}", key.as_str(), text);
            default
        }
    }
}

/// Loads the base rates, substituting the default for each missing or invalid one.
pub fn load_base_rates<S: KeyValueStore + ?Sized>(store: &S) -> BaseRates {
    let defaults = BaseRates::default();
    BaseRates {
        dzd_per_euro: read_rate(store, StorageKey::DzdPerEuro, defaults.dzd_per_euro),
        dzd_per_usd: read_rate(store, StorageKey::DzdPerUsd, defaults.dzd_per_usd),
    }
}

/// Loads the last typed amounts exactly as they were stored, `"0"` when absent.
pub fn load_amounts<S: KeyValueStore + ?Sized>(store: &S) -> AmountState {
    let dzd = read(store, StorageKey::LastDzdAmount)
        .unwrap_or_else(|| "0".to_string());
    let foreign = read(store, StorageKey::LastForeignAmount)
        .unwrap_or_else(|| "0".to_string());
    AmountState::new(dzd, foreign)
}

pub fn save_base_rates<S: KeyValueStore + ?Sized>(
    store: &mut S,
    rates: &BaseRates,
) -> Result<(), StoreError> {
    store.set(
        StorageKey::DzdPerEuro.as_str(),
        &rates.dzd_per_euro.to_string(),
    )?;
    store.set(
        StorageKey::DzdPerUsd.as_str(),
        &rates.dzd_per_usd.to_string(),
    )
}

pub fn save_amount<S: KeyValueStore + ?Sized>(
    store: &mut S,
    field: ActiveField,
    buffer: &str,
) -> Result<(), StoreError> {
    store.set(StorageKey::amount(field).as_str(), buffer)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::store::MemoryStore;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("broken".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("broken".to_string()))
        }
    }

    #[test]
    fn empty_store_loads_defaults() {
        let store = MemoryStore::new();
        assert_eq!(load_base_rates(&store), BaseRates::default());
        assert_eq!(load_amounts(&store), AmountState::default());
    }

    #[test]
    fn unreadable_store_loads_defaults() {
        assert_eq!(load_base_rates(&BrokenStore), BaseRates::default());
        assert_eq!(load_amounts(&BrokenStore), AmountState::default());
        assert!(save_amount(&mut BrokenStore, ActiveField::Dzd, "1").is_err());
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("NaN")]
    #[case("1.2.3")]
    fn corrupt_rates_fall_back(#[case] stored: &str) {
        let mut store = MemoryStore::new();
        store.set("dzd-per-euro", stored).unwrap();
        store.set("dzd-per-usd", "140.5").unwrap();
        assert_eq!(load_base_rates(&store), BaseRates::new(146.5, 140.5));
    }

    #[test]
    fn rates_round_trip() {
        let mut store = MemoryStore::new();
        let rates = BaseRates::new(151.75, 0.0);
        save_base_rates(&mut store, &rates).unwrap();
        assert_eq!(store.get("dzd-per-euro").unwrap().as_deref(), Some("151.75"));
        assert_eq!(store.get("dzd-per-usd").unwrap().as_deref(), Some("0"));
        assert_eq!(load_base_rates(&store), rates);
    }

    #[test]
    fn amounts_are_restored_verbatim() {
        let mut store = MemoryStore::new();
        save_amount(&mut store, ActiveField::Dzd, "1200.").unwrap();
        save_amount(&mut store, ActiveField::Foreign, "007").unwrap();
        let amounts = load_amounts(&store);
        assert_eq!(amounts.dzd, "1200.");
        assert_eq!(amounts.foreign, "007");
        assert_eq!(amounts.active, ActiveField::Dzd);
    }

    #[test]
    fn keys_match_the_storage_layout() {
        use strum::IntoEnumIterator;
        let keys = StorageKey::iter().map(|k| k.as_str()).collect::<Vec<_>>();
        assert_eq!(
            keys,
            vec![
                "dzd-per-euro",
                "dzd-per-usd",
                "last-dzd-amount",
                "last-foreign-amount",
            ]
        );
    }
}
