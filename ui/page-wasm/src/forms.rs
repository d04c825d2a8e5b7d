//! Form submission behaviors: validation guard, submit-button spinner and
//! autosave wiring.

use crate::autosave::{self, AUTOSAVE_ATTRIBUTE};
use crate::config::PageConfig;
use crate::dom;
use crate::error::PageError;
use crate::storage::LocalStore;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlButtonElement, HtmlFormElement};

pub const VALIDATED_CLASS: &str = "was-validated";

/// How long the spinner stays up. The timer is cosmetic; it does not track
/// the actual request.
pub const LOADING_RESET_MS: u32 = 3_000;

pub const LOADING_HTML: &str =
    "<span class=\"spinner-border spinner-border-sm me-2\" role=\"status\" aria-hidden=\"true\"></span>Processing...";

/// Block submission of invalid `.needs-validation` forms and reveal the
/// field feedback.
pub fn bind_validation_guard() -> Result<(), PageError> {
    for form in dom::query_all("form.needs-validation") {
        let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let checked = form.clone();
        dom::listen(&form, "submit", move |e: web_sys::Event| {
            if !checked.check_validity() {
                e.prevent_default();
                e.stop_propagation();
                dom::add_class(&checked, VALIDATED_CLASS);
            }
        })?;
    }
    Ok(())
}

/// Swap submit buttons to a spinner while a valid form submits.
pub fn bind_loading_buttons() -> Result<(), PageError> {
    for button in dom::query_all("button[type=\"submit\"]") {
        let Ok(button) = button.dyn_into::<HtmlButtonElement>() else {
            continue;
        };
        let clicked = button.clone();
        dom::listen(&button, "click", move |_: web_sys::MouseEvent| {
            let valid = clicked
                .closest("form")
                .ok()
                .flatten()
                .and_then(|f| f.dyn_into::<HtmlFormElement>().ok())
                .is_some_and(|f| f.check_validity());
            if !valid {
                return;
            }
            let original = clicked.inner_html();
            clicked.set_inner_html(LOADING_HTML);
            let restored = clicked.clone();
            Timeout::new(LOADING_RESET_MS, move || {
                restored.set_inner_html(&original);
                restored.set_disabled(false);
            })
            .forget();
        })?;
    }
    Ok(())
}

pub fn bind_autosave(config: &PageConfig) -> Result<(), PageError> {
    let forms = dom::query_all(&format!("form[{AUTOSAVE_ATTRIBUTE}]"));
    if forms.is_empty() {
        return Ok(());
    }
    let store = LocalStore::open()?;
    for form in forms {
        autosave::bind_form(&form, store, &config.autosave_key_prefix)?;
    }
    Ok(())
}
