//! Slow page-load warning.

use crate::dom;
use crate::error::PageError;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::PerformanceEntry;

pub const SLOW_LOAD_MS: f64 = 3_000.0;

pub fn is_slow_load(duration_ms: f64) -> bool {
    duration_ms > SLOW_LOAD_MS
}

/// Duration of the navigation entry (navigation start to `loadEventEnd`).
fn navigation_duration() -> Option<f64> {
    let performance = dom::window().ok()?.performance()?;
    let entry = performance
        .get_entries_by_type("navigation")
        .get(0)
        .dyn_into::<PerformanceEntry>()
        .ok()?;
    Some(entry.duration())
}

pub fn bind() -> Result<(), PageError> {
    let window = dom::window()?;
    dom::listen_once(&window, "load", |_: web_sys::Event| {
        // `loadEventEnd` is only filled in after the load handlers return.
        Timeout::new(0, || {
            if let Some(duration) = navigation_duration() {
                if is_slow_load(duration) {
                    gloo_console::warn!(format!("Page load time is slow: {duration:.0}ms"));
                }
            }
        })
        .forget();
    })
}
