//! Key/value persistence
//!
//! The simulation never touches storage directly; hosts hand it a [`Store`].
//! Reads that fail default upstream (a missing high score is just 0) and
//! writes that fail are logged and swallowed - losing a best score is not
//! worth interrupting a game for.

use std::cell::RefCell;
use std::collections::BTreeMap;

/// String key/value storage collaborator
pub trait Store {
    /// Read a value, `None` when absent or unreadable
    fn read(&self, key: &str) -> Option<String>;
    /// Write a value, best effort
    fn write(&self, key: &str, value: &str);
}

/// JSON-file-backed store for native hosts. The whole store is one small
/// map, rewritten on every write.
#[cfg(not(target_arch = "wasm32"))]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load_map(&self) -> Option<BTreeMap<String, String>> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(map) => Some(map),
            Err(err) => {
                log::warn!("corrupt store {}: {err}", self.path.display());
                None
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Store for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        self.load_map()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        let mut map = self.load_map().unwrap_or_default();
        map.insert(key.to_string(), value.to_string());
        match serde_json::to_string_pretty(&map) {
            Ok(json) => {
                if let Err(err) = std::fs::write(&self.path, json) {
                    log::warn!("failed to write {}: {err}", self.path.display());
                }
            }
            Err(err) => log::warn!("failed to encode store: {err}"),
        }
    }
}

/// LocalStorage-backed store for web hosts
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl Store for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if let Some(storage) = storage {
            if storage.set_item(key, value).is_err() {
                log::warn!("LocalStorage write failed for {key:?}");
            }
        }
    }
}

/// In-memory store for tests and ephemeral hosts
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
