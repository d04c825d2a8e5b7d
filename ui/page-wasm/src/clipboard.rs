//! Copy-to-clipboard with toast feedback.

use crate::dom;
use crate::error::PageError;
use crate::toast::{self, Severity, Toast};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

impl CopyOutcome {
    pub fn toast(self) -> Toast {
        match self {
            CopyOutcome::Copied => Toast::new("Copied to clipboard!", Severity::Info),
            CopyOutcome::Failed => Toast::new("Failed to copy to clipboard", Severity::Error),
        }
    }
}

/// `navigator.clipboard.writeText(text)`.
async fn write_text(text: &str) -> Result<(), PageError> {
    let navigator = dom::window()?.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(PageError::Js("clipboard API unavailable".into()));
    }
    let write: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    let promise: Promise = write.call1(&clipboard, &JsValue::from_str(text))?.dyn_into()?;
    JsFuture::from(promise).await?;
    Ok(())
}

pub async fn copy(text: &str) -> CopyOutcome {
    match write_text(text).await {
        Ok(()) => CopyOutcome::Copied,
        Err(e) => {
            gloo_console::error!(format!("failed to copy: {e}"));
            CopyOutcome::Failed
        }
    }
}

/// Copy and report the outcome as a toast.
pub fn copy_with_feedback(text: String) {
    wasm_bindgen_futures::spawn_local(async move {
        let feedback = copy(&text).await.toast();
        toast::show(&feedback.message, feedback.severity);
    });
}
