//! Bootstrap widget wiring: tooltips, alerts, modals, in-page anchors and
//! code-block line numbers.

use crate::bootstrap;
use crate::dom;
use crate::error::PageError;
use gloo_timers::callback::Timeout;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

pub const ALERT_DISMISS_MS: u32 = 5_000;

pub fn activate_tooltips() {
    for el in dom::query_all("[data-bs-toggle=\"tooltip\"]") {
        if let Err(e) = bootstrap::Tooltip::new(&el) {
            gloo_console::warn!("tooltip:", e);
        }
    }
}

pub fn close_alerts() {
    for alert in dom::query_all(".alert") {
        if let Err(e) = bootstrap::close_alert(&alert) {
            gloo_console::warn!("alert:", e);
        }
    }
}

pub fn hide_open_modals() {
    for modal in dom::query_all(".modal.show") {
        if let Err(e) = bootstrap::hide_modal(&modal) {
            gloo_console::warn!("modal:", e);
        }
    }
}

/// Close whatever alerts are on the page once the dismiss delay has passed.
pub fn schedule_alert_dismiss() {
    Timeout::new(ALERT_DISMISS_MS, close_alerts).forget();
}

// ── Anchors ──

/// Element id an in-page `href` points at. A bare `#` points nowhere.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn bind_smooth_scroll() -> Result<(), PageError> {
    for anchor in dom::query_all("a[href^=\"#\"]") {
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |e: MouseEvent| {
            e.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            if let Some(target) = anchor_target_id(&href).and_then(dom::by_id) {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                opts.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        })?;
    }
    Ok(())
}

// ── Code blocks ──

pub const LINE_NUMBERS_ATTRIBUTE: &str = "data-line-numbers";

/// `1..=n` for the `n` newline-separated lines of `text`, newline-joined.
pub fn line_numbers(text: &str) -> String {
    let count = text.split('\n').count();
    (1..=count)
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn number_code_blocks() {
    for block in dom::query_all("pre code") {
        let text = block.text_content().unwrap_or_default();
        let _ = block.set_attribute(LINE_NUMBERS_ATTRIBUTE, &line_numbers(&text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_ids() {
        assert_eq!(anchor_target_id("#features"), Some("features"));
        assert_eq!(anchor_target_id("#"), None);
        assert_eq!(anchor_target_id("/upload"), None);
    }

    #[test]
    fn line_numbers_count_every_line() {
        assert_eq!(line_numbers("a\nb\nc"), "1\n2\n3");
        assert_eq!(line_numbers("single"), "1");
    }

    #[test]
    fn trailing_newline_adds_a_line() {
        assert_eq!(line_numbers("a\n"), "1\n2");
        assert_eq!(line_numbers(""), "1");
    }
}
