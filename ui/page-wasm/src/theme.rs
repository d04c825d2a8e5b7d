//! Dark mode.
//!
//! The preference is a JSON boolean under a fixed key, so `"true"` written by
//! older page scripts is read back unchanged.

use crate::dom;
use crate::error::PageError;
use crate::storage::{KeyValueStore, StoreError};

pub const DARK_MODE_CLASS: &str = "dark-mode";

pub struct DarkModePreference<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> DarkModePreference<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        DarkModePreference {
            store,
            key: key.into(),
        }
    }

    /// Anything other than a stored `true` means light mode.
    pub fn load(&self) -> bool {
        matches!(self.store.get::<bool>(&self.key), Ok(Some(true)))
    }

    pub fn store(&self, enabled: bool) -> Result<(), StoreError> {
        self.store.set(&self.key, &enabled)
    }
}

/// Apply a stored preference before the user touches the toggle.
pub fn apply_stored<S: KeyValueStore>(pref: &DarkModePreference<S>) -> Result<(), PageError> {
    if pref.load() {
        let body = dom::body()?;
        dom::add_class(&body, DARK_MODE_CLASS);
    }
    Ok(())
}

/// Wire the toggle button: flip the body class and persist the result.
pub fn bind_toggle<S>(toggle_id: &str, pref: DarkModePreference<S>) -> Result<(), PageError>
where
    S: KeyValueStore + 'static,
{
    let Some(toggle) = dom::by_id(toggle_id) else {
        return Ok(());
    };
    dom::listen(&toggle, "click", move |_: web_sys::MouseEvent| {
        let Ok(body) = dom::body() else {
            return;
        };
        let enabled = dom::toggle_class(&body, DARK_MODE_CLASS);
        if let Err(e) = pref.store(enabled) {
            gloo_console::warn!(format!("dark mode: {e}"));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn defaults_to_light() {
        let store = MemoryStore::new();
        assert!(!DarkModePreference::new(&store, "darkMode").load());
    }

    #[test]
    fn enabled_preference_survives_reload() {
        let store = MemoryStore::new();
        DarkModePreference::new(&store, "darkMode").store(true).unwrap();

        let fresh = DarkModePreference::new(&store, "darkMode");
        assert!(fresh.load());
        assert_eq!(store.raw("darkMode").as_deref(), Some("true"));
    }

    #[test]
    fn toggling_off_is_persisted() {
        let store = MemoryStore::new();
        let pref = DarkModePreference::new(&store, "darkMode");
        pref.store(true).unwrap();
        pref.store(false).unwrap();
        assert!(!DarkModePreference::new(&store, "darkMode").load());
        assert_eq!(store.raw("darkMode").as_deref(), Some("false"));
    }

    #[test]
    fn unreadable_value_means_light() {
        let store = MemoryStore::new();
        store.insert_raw("darkMode", "yes please");
        assert!(!DarkModePreference::new(&store, "darkMode").load());
    }
}
