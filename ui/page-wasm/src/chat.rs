//! Chat composer: auto-growing textarea, Enter to send.

use crate::dom;
use crate::error::PageError;
use web_sys::{HtmlTextAreaElement, KeyboardEvent};

/// Enter sends; Shift+Enter inserts a newline.
pub fn submits_on_enter(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

fn grow(area: &HtmlTextAreaElement) {
    let style = area.style();
    let _ = style.set_property("height", "auto");
    let _ = style.set_property("height", &format!("{}px", area.scroll_height()));
}

pub fn bind(chat_form_id: &str, chat_input_id: &str) -> Result<(), PageError> {
    let Some(area) = dom::by_id_typed::<HtmlTextAreaElement>(chat_input_id) else {
        return Ok(());
    };

    let grown = area.clone();
    dom::listen(&area, "input", move |_: web_sys::Event| grow(&grown))?;

    let chat_form_id = chat_form_id.to_string();
    dom::listen(&area, "keydown", move |e: KeyboardEvent| {
        if !submits_on_enter(&e.key(), e.shift_key()) {
            return;
        }
        e.prevent_default();
        if let Some(form) = dom::by_id(&chat_form_id) {
            if let Err(e) = dom::dispatch(&form, "submit") {
                gloo_console::error!(format!("chat submit: {e}"));
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_sends_shift_enter_does_not() {
        assert!(submits_on_enter("Enter", false));
        assert!(!submits_on_enter("Enter", true));
        assert!(!submits_on_enter("a", false));
    }
}
