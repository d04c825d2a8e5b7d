//! DOM helpers.
//!
//! Every lookup is optional: behaviors check for their elements and quietly
//! skip when a page does not render them.

use crate::error::PageError;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, NodeList};

// ── Lookup ──

pub fn window() -> Result<web_sys::Window, PageError> {
    web_sys::window().ok_or(PageError::NoDocument)
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoDocument)
}

pub fn body() -> Result<HtmlElement, PageError> {
    document()?.body().ok_or_else(|| PageError::missing("<body>"))
}

pub fn by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().ok()?.query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    match document().map(|d| d.query_selector_all(selector)) {
        Ok(Ok(nl)) => elements(&nl),
        _ => Vec::new(),
    }
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    parent
        .query_selector_all(selector)
        .map(|nl| elements(&nl))
        .unwrap_or_default()
}

fn elements(nl: &NodeList) -> Vec<Element> {
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

// ── Mutation ──

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

/// Flip `cls` and return whether it is now present.
pub fn toggle_class(el: &Element, cls: &str) -> bool {
    el.class_list().toggle(cls).unwrap_or(false)
}

pub fn create_element(tag: &str) -> Result<Element, PageError> {
    Ok(document()?.create_element(tag)?)
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

/// Value of an `<input>`, `<textarea>` or `<select>`; `None` for anything else.
pub fn field_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        Some(input.value())
    } else if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        Some(area.value())
    } else {
        el.dyn_ref::<web_sys::HtmlSelectElement>().map(|s| s.value())
    }
}

/// Set the value of an `<input>`, `<textarea>` or `<select>`.
pub fn set_field_value(el: &Element, value: &str) -> bool {
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.set_value(value);
    } else if let Some(select) = el.dyn_ref::<web_sys::HtmlSelectElement>() {
        select.set_value(value);
    } else {
        return false;
    }
    true
}

pub fn has_option(sel: &web_sys::HtmlSelectElement, value: &str) -> bool {
    let opts = sel.options();
    for i in 0..opts.length() {
        if let Some(opt) = opts.item(i) {
            if let Ok(o) = opt.dyn_into::<web_sys::HtmlOptionElement>() {
                if o.value() == value {
                    return true;
                }
            }
        }
    }
    false
}

// ── Events ──

/// Attach a listener that lives for the rest of the page.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Attach a listener that removes itself after the first event.
pub fn listen_once<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web_sys::AddEventListenerOptions::new();
    opts.set_once(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &opts,
    )?;
    cb.forget();
    Ok(())
}

/// Dispatch a bubbling, cancelable event of type `kind` on `target`.
pub fn dispatch(target: &EventTarget, kind: &str) -> Result<bool, PageError> {
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = web_sys::Event::new_with_event_init_dict(kind, &init)?;
    Ok(target.dispatch_event(&event)?)
}
