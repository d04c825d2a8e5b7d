//! Global keyboard shortcuts.
//!
//! - Ctrl/Cmd+K focuses the file search field.
//! - Escape hides open modals and closes alerts.

use crate::dom;
use crate::error::PageError;
use crate::widgets;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    FocusSearch,
    DismissOverlays,
}

pub fn classify(key: &str, ctrl: bool, meta: bool) -> Option<Shortcut> {
    match key {
        "k" if ctrl || meta => Some(Shortcut::FocusSearch),
        "Escape" => Some(Shortcut::DismissOverlays),
        _ => None,
    }
}

fn search_field(search_input_id: &str) -> Option<HtmlElement> {
    dom::by_id_typed::<HtmlElement>(search_input_id)
        .or_else(|| dom::query("input[type=\"search\"]").and_then(|e| e.dyn_into().ok()))
}

pub fn bind(search_input_id: &str) -> Result<(), PageError> {
    let search_input_id = search_input_id.to_string();
    let document = dom::document()?;
    dom::listen(&document, "keydown", move |e: KeyboardEvent| {
        match classify(&e.key(), e.ctrl_key(), e.meta_key()) {
            Some(Shortcut::FocusSearch) => {
                e.prevent_default();
                if let Some(field) = search_field(&search_input_id) {
                    let _ = field.focus();
                }
            }
            Some(Shortcut::DismissOverlays) => {
                widgets::hide_open_modals();
                widgets::close_alerts();
            }
            None => {}
        }
    })
}
