//! Form autosave.
//!
//! Forms marked `data-autosave="<id>"` keep a snapshot of their named fields
//! in local storage under `<prefix><id>`. The snapshot is restored on load,
//! rewritten on every input and dropped on successful submit.

use crate::dom;
use crate::error::PageError;
use crate::storage::{KeyValueStore, StoreError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

pub const AUTOSAVE_ATTRIBUTE: &str = "data-autosave";

/// Field name to value, serialized as a flat JSON object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSnapshot {
    fields: BTreeMap<String, String>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later duplicates of a name overwrite earlier ones.
    pub fn from_fields<N, V>(fields: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        FormSnapshot {
            fields: fields
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Values to write back, in `names` order. Presence of the key decides,
    /// so stored empty strings are restored too.
    pub fn restorable<'a>(
        &'a self,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Vec<(&'a str, &'a str)> {
        names
            .into_iter()
            .filter_map(|name| self.get(name).map(|value| (name, value)))
            .collect()
    }
}

pub fn storage_key(prefix: &str, form_id: &str) -> String {
    format!("{prefix}{form_id}")
}

/// One form's slot in the store.
pub struct Autosave<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> Autosave<S> {
    pub fn new(store: S, prefix: &str, form_id: &str) -> Self {
        Autosave {
            store,
            key: storage_key(prefix, form_id),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn load(&self) -> Result<Option<FormSnapshot>, StoreError> {
        self.store.get(&self.key)
    }

    pub fn save(&self, snapshot: &FormSnapshot) -> Result<(), StoreError> {
        self.store.set(&self.key, snapshot)
    }

    pub fn clear(&self) {
        self.store.remove(&self.key);
    }

    /// Drop the snapshot once a submission goes through. A submit another
    /// listener cancelled (e.g. the validation guard) keeps the draft.
    pub fn submitted(&self, cancelled: bool) {
        if !cancelled {
            self.clear();
        }
    }
}

// ── DOM ──

/// Named fields that take part in a snapshot. Passwords and file inputs are
/// never persisted.
fn snapshot_fields(form: &Element) -> Vec<(String, Element)> {
    dom::query_all_within(form, "input[name], textarea[name], select[name]")
        .into_iter()
        .filter(|el| match el.dyn_ref::<HtmlInputElement>() {
            Some(input) => !matches!(
                input.type_().as_str(),
                "password" | "file" | "submit" | "button" | "reset" | "image"
            ),
            None => true,
        })
        .filter_map(|el| el.get_attribute("name").map(|name| (name, el)))
        .collect()
}

/// Current values, the way `FormData` would report them: unchecked boxes and
/// radios are left out.
pub fn capture(form: &Element) -> FormSnapshot {
    let mut snapshot = FormSnapshot::new();
    for (name, el) in snapshot_fields(form) {
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            let kind = input.type_();
            if (kind == "checkbox" || kind == "radio") && !input.checked() {
                continue;
            }
        }
        if let Some(value) = dom::field_value(&el) {
            snapshot.insert(name, value);
        }
    }
    snapshot
}

/// Write `snapshot` back into the form's fields.
pub fn restore(form: &Element, snapshot: &FormSnapshot) {
    for (name, el) in snapshot_fields(form) {
        let Some(value) = snapshot.get(&name) else {
            continue;
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            let kind = input.type_();
            if kind == "checkbox" || kind == "radio" {
                input.set_checked(input.value() == value);
                continue;
            }
        }
        dom::set_field_value(&el, value);
    }
}

/// Wire one `form[data-autosave]`.
pub fn bind_form<S>(form: &Element, store: S, prefix: &str) -> Result<(), PageError>
where
    S: KeyValueStore + Clone + 'static,
{
    let Some(form_id) = form.get_attribute(AUTOSAVE_ATTRIBUTE) else {
        return Ok(());
    };
    let slot = Autosave::new(store.clone(), prefix, &form_id);

    match slot.load() {
        Ok(Some(snapshot)) => restore(form, &snapshot),
        Ok(None) => {}
        Err(e) => gloo_console::warn!(format!("autosave {}: {e}", slot.key())),
    }

    let on_input = Autosave::new(store.clone(), prefix, &form_id);
    let input_form = form.clone();
    dom::listen(form, "input", move |_: web_sys::Event| {
        if let Err(e) = on_input.save(&capture(&input_form)) {
            gloo_console::warn!(format!("autosave {}: {e}", on_input.key()));
        }
    })?;

    dom::listen(form, "submit", move |e: web_sys::Event| {
        slot.submitted(e.default_prevented())
    })?;
    Ok(())
}
