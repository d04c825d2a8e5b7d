//! Upload page file preview.
//!
//! Choosing a file reads it as text into the code field. The upload endpoint
//! rejects submissions without both a file name and content, so an empty
//! file-name field is filled from the chosen file, and the language select is
//! preset from the extension when it offers a matching option.

use crate::config::PageConfig;
use crate::dom;
use crate::error::PageError;
use crate::toast::{self, Severity};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement, HtmlSelectElement};

pub const READ_FAILED_MESSAGE: &str = "Failed to read file";

/// Language option value for a file name, keyed on its extension.
pub fn language_for_filename(name: &str) -> Option<&'static str> {
    let (_, ext) = name.rsplit_once('.')?;
    let language = match ext.to_ascii_lowercase().as_str() {
        "py" | "pyw" => "python",
        "js" | "mjs" | "cjs" | "jsx" => "javascript",
        "ts" | "tsx" => "typescript",
        "java" => "java",
        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "hpp" | "hh" => "cpp",
        "cs" => "csharp",
        "go" => "go",
        "rs" => "rust",
        "rb" => "ruby",
        "php" => "php",
        "swift" => "swift",
        "kt" | "kts" => "kotlin",
        "html" | "htm" => "html",
        "css" => "css",
        "sql" => "sql",
        "sh" | "bash" => "shell",
        _ => return None,
    };
    Some(language)
}

async fn read_text(file: &File) -> Result<String, PageError> {
    let text = JsFuture::from(file.text()).await?;
    Ok(text.as_string().unwrap_or_default())
}

fn fill_metadata(config: &PageConfig, file_name: &str) {
    if let Some(name_field) = dom::by_id_typed::<HtmlInputElement>(&config.filename_input_id) {
        if name_field.value().trim().is_empty() {
            name_field.set_value(file_name);
        }
    }
    if let Some(select) = dom::by_id_typed::<HtmlSelectElement>(&config.language_select_id) {
        if let Some(language) = language_for_filename(file_name) {
            if dom::has_option(&select, language) {
                select.set_value(language);
            }
        }
    }
}

pub fn bind(config: &PageConfig) -> Result<(), PageError> {
    for input in dom::query_all("input[type=\"file\"]") {
        let Ok(input) = input.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let source = input.clone();
        let config = config.clone();
        dom::listen(&input, "change", move |_: web_sys::Event| {
            let Some(file) = source.files().and_then(|list| list.get(0)) else {
                return;
            };
            fill_metadata(&config, &file.name());
            let target_id = config.code_content_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match read_text(&file).await {
                    Ok(text) => {
                        if let Some(target) = dom::by_id(&target_id) {
                            dom::set_field_value(&target, &text);
                        }
                    }
                    Err(e) => {
                        gloo_console::error!(format!("file preview: {e}"));
                        toast::show(READ_FAILED_MESSAGE, Severity::Error);
                    }
                }
            });
        })?;
    }
    Ok(())
}
