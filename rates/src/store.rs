//! Key/value persistence for rates and amounts.
//!
//! Values are plain strings. The browser build keeps them in `localStorage`
//! (see the `ui` crate); native builds keep them in a small JSON file.

use std::collections::HashMap;

use thiserror::Error;

/// An error raised by a store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("store json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Get/set-by-key string storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// A store that lives only as long as the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore(HashMap<String, String>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.0.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.0.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store {
    use std::collections::BTreeMap;
    use std::fs;
    use std::io::ErrorKind;
    use std::path::Path;
    use std::path::PathBuf;

    use dioxus_logger::tracing::debug;
    use dioxus_logger::tracing::warn;

    use super::KeyValueStore;
    use super::StoreError;

    const FILE_NAME: &str = "store.json";
    const APP_DIR: &str = "dinar-desk";

    /// A store backed by a JSON object file. Every write rewrites the file.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct FileStore {
        path: PathBuf,
        entries: BTreeMap<String, String>,
    }

    impl FileStore {
        /// Opens `store.json` inside `dir`. A missing file is an empty store.
        ///
        /// A file that is not a JSON object of strings is moved aside to
        /// `store.json.bak` and the store starts empty, so later writes land.
        pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
            let path = dir.as_ref().join(FILE_NAME);
            let entries: BTreeMap<String, String> = match fs::read_to_string(&path) {
                Ok(text) => match serde_json::from_str(&text) {
                    Ok(entries) => entries,
                    Err(e) => {
                        let backup = path.with_extension("json.bak");
                        warn!("discarding corrupt store {}: {e}", path.display());
                        fs::rename(&path, &backup)?;
                        BTreeMap::new()
                    }
                },
                Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
                Err(e) => return Err(e.into()),
            };
            debug!(
                "opened store {} ({} entries)",
                path.display(),
                entries.len()
            );
            Ok(Self { path, entries })
        }

        /// Opens the store in the platform data directory, e.g. `~/.local/share/dinar-desk`.
        pub fn open_default() -> Result<Self, StoreError> {
            let dir = dirs::data_dir()
                .ok_or_else(|| StoreError::Unavailable("no data directory".to_string()))?;
            Self::open(dir.join(APP_DIR))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn flush(&self) -> Result<(), StoreError> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(&self.entries)?;
            fs::write(&self.path, json)?;
            Ok(())
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            Ok(self.entries.get(key).cloned())
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            if self.entries.get(key).map(String::as_str) == Some(value) {
                return Ok(());
            }
            self.entries.insert(key.to_string(), value.to_string());
            self.flush()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("dzd-per-usd").unwrap(), None);
        store.set("dzd-per-usd", "140").unwrap();
        assert_eq!(store.get("dzd-per-usd").unwrap().as_deref(), Some("140"));
    }

    #[test]
    fn boxed_store_delegates() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod file {
        use std::fs;

        use pretty_assertions::assert_eq;

        use super::super::*;

        #[test]
        fn missing_file_is_an_empty_store() {
            let dir = tempfile::tempdir().unwrap();
            let store = FileStore::open(dir.path()).unwrap();
            assert_eq!(store.get("dzd-per-euro").unwrap(), None);
        }

        #[test]
        fn writes_survive_reopening() {
            let dir = tempfile::tempdir().unwrap();
            let nested = dir.path().join("nested");
            let mut store = FileStore::open(&nested).unwrap();
            store.set("dzd-per-euro", "150.25").unwrap();
            store.set("last-dzd-amount", "1200.").unwrap();

            let reopened = FileStore::open(&nested).unwrap();
            assert_eq!(
                reopened.get("dzd-per-euro").unwrap().as_deref(),
                Some("150.25")
            );
            assert_eq!(
                reopened.get("last-dzd-amount").unwrap().as_deref(),
                Some("1200.")
            );
        }

        #[test]
        fn corrupt_file_is_replaced_on_next_write() {
            let dir = tempfile::tempdir().unwrap();
            let corrupt = r#"{"dzd-per-euro": 1"#;
            fs::write(dir.path().join("store.json"), corrupt).unwrap();

            let mut store = FileStore::open(dir.path()).unwrap();
            assert_eq!(store.get("dzd-per-euro").unwrap(), None);
            assert!(dir.path().join("store.json.bak").exists());

            store.set("dzd-per-euro", "150").unwrap();
            let reopened = FileStore::open(dir.path()).unwrap();
            assert_eq!(
                reopened.get("dzd-per-euro").unwrap().as_deref(),
                Some("150")
            );
        }
    }
}
