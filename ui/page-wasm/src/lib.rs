//! Code Analyser page behavior.
//!
//! Rust + WASM replacement for the site-wide page script. Pure pieces
//! (formatting, debounce, table filtering, autosave snapshots, shortcut and
//! severity mapping) are target independent and unit-tested on the host;
//! the DOM wiring binds each behavior only when its elements are present.

pub mod autosave;
pub mod bootstrap;
pub mod chat;
pub mod clipboard;
pub mod config;
pub mod debounce;
pub mod dom;
pub mod error;
pub mod events;
pub mod exports;
pub mod filter;
pub mod format;
pub mod forms;
pub mod keyboard;
pub mod perf;
pub mod storage;
pub mod theme;
pub mod toast;
pub mod upload;
pub mod widgets;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point, called when the module is instantiated.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    events::when_ready(init).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn init() {
    let config = config::PageConfig::load();
    config::install(config.clone());
    events::bind_all(&config);
}
