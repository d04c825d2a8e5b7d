//! Behavior wiring.
//!
//! Each behavior binds independently; a failure is logged and the rest still
//! bind.

use crate::chat;
use crate::config::PageConfig;
use crate::dom;
use crate::error::PageError;
use crate::filter;
use crate::forms;
use crate::keyboard;
use crate::perf;
use crate::storage::LocalStore;
use crate::theme::{self, DarkModePreference};
use crate::upload;
use crate::widgets;
use web_sys::HtmlInputElement;

fn report(behavior: &str, result: Result<(), PageError>) {
    if let Err(e) = result {
        gloo_console::warn!(format!("{behavior}: {e}"));
    }
}

/// Run `f` once the DOM is parsed.
pub fn when_ready(f: impl FnOnce() + 'static) -> Result<(), PageError> {
    let document = dom::document()?;
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let mut f = Some(f);
    dom::listen_once(&document, "DOMContentLoaded", move |_: web_sys::Event| {
        if let Some(f) = f.take() {
            f();
        }
    })
}

/// Bind every behavior. Call once per page.
pub fn bind_all(config: &PageConfig) {
    widgets::activate_tooltips();
    widgets::schedule_alert_dismiss();
    report("smooth scroll", widgets::bind_smooth_scroll());
    report("validation", forms::bind_validation_guard());
    widgets::number_code_blocks();
    report("chat", chat::bind(&config.chat_form_id, &config.chat_input_id));
    report("file preview", upload::bind(config));
    report("search", bind_search(&config.search_input_id));
    report("dark mode", bind_dark_mode(config));
    report("autosave", forms::bind_autosave(config));
    report("loading buttons", forms::bind_loading_buttons());
    report("shortcuts", keyboard::bind(&config.search_input_id));
    report("performance", perf::bind());
}

fn bind_search(search_input_id: &str) -> Result<(), PageError> {
    let Some(search) = dom::by_id_typed::<HtmlInputElement>(search_input_id) else {
        return Ok(());
    };
    let Some(tbody) = filter::target_body(&search) else {
        return Ok(());
    };
    let field = search.clone();
    dom::listen(&search, "keyup", move |_: web_sys::Event| {
        filter::apply(&tbody, &field.value());
    })
}

fn bind_dark_mode(config: &PageConfig) -> Result<(), PageError> {
    let store = LocalStore::open()?;
    theme::apply_stored(&DarkModePreference::new(store, config.dark_mode_key.clone()))?;
    theme::bind_toggle(
        &config.dark_mode_toggle_id,
        DarkModePreference::new(store, config.dark_mode_key.clone()),
    )
}
