//! Platform-specific key/value stores and environment lookups.

use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;
use rates::prefs::user_prefs::UserPrefs;
use rates::store::KeyValueStore;
use rates::store::MemoryStore;

// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

/// Opens the persistent store for this platform.
///
/// Falls back to an in-memory store (and logs why) when the platform store is
/// unavailable, so the calculator always starts.
pub fn open_store(prefs: &UserPrefs) -> Box<dyn KeyValueStore> {
    match open_platform_store(prefs) {
        Ok(store) => store,
        Err(e) => {
            warn!("persistent storage unavailable, using memory: {e}");
            Box::new(MemoryStore::new())
        }
    }
}

/// Reads the user prefs, letting the browser's language decide the locale on the web.
pub fn load_prefs() -> UserPrefs {
    let prefs = UserPrefs::from_env();
    let prefs = match preferred_locale() {
        Some(locale) => prefs.with_locale(locale),
        None => prefs,
    };
    info!("prefs: {:#?}", prefs);
    prefs
}

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use rates::prefs::user_prefs::UserPrefs;
    use rates::store::KeyValueStore;
    use rates::store::StoreError;
    use web_sys::Storage;

    fn js_error(value: wasm_bindgen::JsValue) -> StoreError {
        StoreError::Unavailable(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }

    /// `window.localStorage`.
    pub struct BrowserStore {
        storage: Storage,
    }

    impl BrowserStore {
        pub fn open() -> Result<Self, StoreError> {
            let window = web_sys::window()
                .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
            let storage = window
                .local_storage()
                .map_err(js_error)?
                .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))?;
            Ok(Self { storage })
        }
    }

    impl KeyValueStore for BrowserStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.storage.get_item(key).map_err(js_error)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            self.storage.set_item(key, value).map_err(js_error)
        }
    }

    pub fn open_platform_store(_prefs: &UserPrefs) -> Result<Box<dyn KeyValueStore>, StoreError> {
        Ok(Box::new(BrowserStore::open()?))
    }

    pub fn preferred_locale() -> Option<String> {
        web_sys::window()?.navigator().language()
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use rates::prefs::user_prefs::UserPrefs;
    use rates::store::FileStore;
    use rates::store::KeyValueStore;
    use rates::store::StoreError;

    pub fn open_platform_store(prefs: &UserPrefs) -> Result<Box<dyn KeyValueStore>, StoreError> {
        let store = match prefs.data_dir() {
            Some(dir) => FileStore::open(dir)?,
            None => FileStore::open_default()?,
        };
        dioxus_logger::tracing::info!("using store {}", store.path().display());
        Ok(Box::new(store))
    }

    /// Native builds take the locale from the environment only.
    pub fn preferred_locale() -> Option<String> {
        None
    }
}
