//! Key-value persistence.
//!
//! `LocalStore` is the browser's `localStorage` (through `gloo-storage`).
//! `MemoryStore` keeps the same JSON encoding in a map so autosave and
//! dark-mode logic can be exercised without a browser.

use gloo_storage::Storage as _;
use serde::{Serialize, de::DeserializeOwned};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("stored value under {key} could not be decoded: {reason}")]
    Corrupt { key: String, reason: String },
    #[error("value for {key} could not be encoded: {reason}")]
    Encode { key: String, reason: String },
    #[error("storage backend failed: {0}")]
    Backend(String),
}

/// Values are stored as JSON text, matching what `JSON.stringify` and
/// `localStorage.setItem(key, bool)` produce on the JS side.
pub trait KeyValueStore {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError>;
    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError>;
    fn remove(&self, key: &str);
}

impl<S: KeyValueStore> KeyValueStore for &S {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        (**self).get(key)
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

// ── Browser localStorage ──

#[derive(Clone, Copy, Debug)]
pub struct LocalStore {
    _private: (),
}

impl LocalStore {
    /// Probe `window.localStorage`. Private browsing modes can make it throw.
    pub fn open() -> Result<Self, StoreError> {
        let available = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .is_some();
        if available {
            Ok(LocalStore { _private: () })
        } else {
            Err(StoreError::Unavailable)
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match gloo_storage::LocalStorage::get::<T>(key) {
            Ok(value) => Ok(Some(value)),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(None),
            Err(gloo_storage::errors::StorageError::SerdeError(e)) => Err(StoreError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            }),
            Err(other) => Err(StoreError::Backend(other.to_string())),
        }
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        gloo_storage::LocalStorage::set(key, value).map_err(|e| match e {
            gloo_storage::errors::StorageError::SerdeError(e) => StoreError::Encode {
                key: key.to_string(),
                reason: e.to_string(),
            },
            other => StoreError::Backend(other.to_string()),
        })
    }

    fn remove(&self, key: &str) {
        gloo_storage::LocalStorage::delete(key);
    }
}

// ── In-memory ──

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored text, as `localStorage.getItem` would return it.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let entries = self.entries.borrow();
        let Some(raw) = entries.get(key) else {
            return Ok(None);
        };
        serde_json::from_str(raw)
            .map(Some)
            .map_err(|e| StoreError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|e| StoreError::Encode {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        self.entries.borrow_mut().insert(key.to_string(), raw);
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
