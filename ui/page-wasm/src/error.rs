//! Error types shared by the DOM wiring.
//!
//! Behaviors never propagate these past their own binder: `events::bind_all`
//! logs the error and moves on to the next behavior.

use crate::storage::StoreError;
use gloo_utils::errors::JsError;
use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("no global window or document")]
    NoDocument,
    #[error("missing element {0}")]
    MissingElement(String),
    #[error("javascript error: {0}")]
    Js(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl PageError {
    pub fn missing(what: impl Into<String>) -> Self {
        PageError::MissingElement(what.into())
    }
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        let message = match JsError::try_from(value) {
            Ok(err) => err.to_string(),
            Err(not_error) => not_error.to_string(),
        };
        PageError::Js(message)
    }
}
