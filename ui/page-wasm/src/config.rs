//! Page configuration.
//!
//! Element ids and storage key prefixes default to what the Flask templates
//! render. A template can override any of them with a JSON object in
//! `<body data-page-config='{"searchInputId": "..."}'>`.

use crate::dom;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

pub const CONFIG_ATTRIBUTE: &str = "data-page-config";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub chat_form_id: String,
    pub chat_input_id: String,
    pub code_content_id: String,
    pub filename_input_id: String,
    pub language_select_id: String,
    pub search_input_id: String,
    pub dark_mode_toggle_id: String,
    pub toast_container_id: String,
    pub dark_mode_key: String,
    pub autosave_key_prefix: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            chat_form_id: "chat-form".into(),
            chat_input_id: "user_message".into(),
            code_content_id: "code_content".into(),
            filename_input_id: "filename".into(),
            language_select_id: "language".into(),
            search_input_id: "search-files".into(),
            dark_mode_toggle_id: "dark-mode-toggle".into(),
            toast_container_id: "toast-container".into(),
            dark_mode_key: "darkMode".into(),
            autosave_key_prefix: "autosave_".into(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read overrides from `<body>`. Malformed JSON falls back to defaults.
    pub fn load() -> Self {
        let raw = dom::body()
            .ok()
            .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
        let Some(raw) = raw else {
            return PageConfig::default();
        };
        match PageConfig::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                gloo_console::warn!(format!("ignoring {CONFIG_ATTRIBUTE}: {e}"));
                PageConfig::default()
            }
        }
    }
}

thread_local! {
    static CURRENT: RefCell<Option<PageConfig>> = const { RefCell::new(None) };
}

/// Make `config` the one exported helpers see.
pub fn install(config: PageConfig) {
    CURRENT.with(|c| *c.borrow_mut() = Some(config));
}

/// Installed configuration, or defaults before `install` runs.
pub fn current() -> PageConfig {
    CURRENT.with(|c| c.borrow().clone().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_defaults() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = PageConfig::from_json(r#"{"searchInputId":"file-search"}"#).unwrap();
        assert_eq!(config.search_input_id, "file-search");
        assert_eq!(config.chat_form_id, "chat-form");
        assert_eq!(config.autosave_key_prefix, "autosave_");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(PageConfig::from_json("{searchInputId:").is_err());
    }

    #[test]
    fn current_falls_back_to_defaults() {
        assert_eq!(current(), PageConfig::default());
        let custom = PageConfig {
            toast_container_id: "notices".into(),
            ..PageConfig::default()
        };
        install(custom.clone());
        assert_eq!(current(), custom);
    }
}
