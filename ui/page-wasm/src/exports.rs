//! Functions exported to template scripts.

use crate::clipboard;
use crate::debounce::{Debouncer, TimeoutScheduler};
use crate::format;
use crate::toast::{self, Severity};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: Option<String>) {
    let severity = kind.as_deref().map(Severity::parse).unwrap_or_default();
    toast::show(message, severity);
}

#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: String) {
    clipboard::copy_with_feedback(text);
}

#[wasm_bindgen(js_name = formatBytes)]
pub fn format_bytes(bytes: f64, decimals: Option<i32>) -> String {
    format::format_bytes(bytes, decimals.unwrap_or(format::DEFAULT_BYTE_DECIMALS))
}

#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(date: &js_sys::Date) -> String {
    format::format_date(date)
}

/// Debounced wrapper around `func`. The returned function forwards its first
/// argument.
#[wasm_bindgen]
pub fn debounce(func: js_sys::Function, wait: u32, immediate: Option<bool>) -> JsValue {
    let debouncer = Debouncer::new(
        wait,
        immediate.unwrap_or(false),
        TimeoutScheduler,
        move |arg: JsValue| {
            if let Err(e) = func.call1(&JsValue::NULL, &arg) {
                gloo_console::error!("debounced call failed:", e);
            }
        },
    );
    Closure::<dyn FnMut(JsValue)>::new(move |arg: JsValue| debouncer.call(arg)).into_js_value()
}
