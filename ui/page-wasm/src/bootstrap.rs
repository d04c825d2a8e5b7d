//! Imports for the Bootstrap 5 widget classes the templates load.
//!
//! Every entry point is `catch`, so a page without the `bootstrap` global
//! yields an `Err` instead of trapping.

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Tooltip)]
    pub type Tooltip;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Tooltip")]
    pub fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Alert)]
    pub type Alert;

    #[wasm_bindgen(catch, static_method_of = Alert, js_namespace = bootstrap, js_class = "Alert", js_name = getOrCreateInstance)]
    pub fn get_or_create_instance(element: &Element) -> Result<Alert, JsValue>;

    #[wasm_bindgen(method, js_class = "Alert")]
    pub fn close(this: &Alert);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Modal)]
    pub type Modal;

    #[wasm_bindgen(catch, static_method_of = Modal, js_namespace = bootstrap, js_class = "Modal", js_name = getInstance)]
    pub fn get_instance(element: &Element) -> Result<Option<Modal>, JsValue>;

    #[wasm_bindgen(method, js_class = "Modal")]
    pub fn hide(this: &Modal);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Toast)]
    pub type Toast;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Toast")]
    pub fn new(element: &Element) -> Result<Toast, JsValue>;

    #[wasm_bindgen(method, js_class = "Toast")]
    pub fn show(this: &Toast);
}

/// Close one alert with its fade-out transition.
pub fn close_alert(element: &Element) -> Result<(), JsValue> {
    Alert::get_or_create_instance(element)?.close();
    Ok(())
}

/// Hide a modal if Bootstrap has one attached to `element`.
pub fn hide_modal(element: &Element) -> Result<(), JsValue> {
    if let Some(modal) = Modal::get_instance(element)? {
        modal.hide();
    }
    Ok(())
}
