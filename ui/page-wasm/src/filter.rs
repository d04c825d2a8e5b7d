//! Client-side filtering of the uploaded-files table.
//!
//! A row stays visible when the lower-cased query appears in either of its
//! first two cells (file name and language).

use crate::dom;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Number of leading cells a query is matched against.
const SEARCHED_CELLS: usize = 2;

pub fn row_matches<S: AsRef<str>>(query: &str, cells: &[S]) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    cells
        .iter()
        .take(SEARCHED_CELLS)
        .any(|cell| cell.as_ref().to_lowercase().contains(&needle))
}

/// Visibility of each row for `query`, in row order.
pub fn visible_rows<S: AsRef<str>>(query: &str, rows: &[Vec<S>]) -> Vec<bool> {
    rows.iter().map(|cells| row_matches(query, cells)).collect()
}

// ── DOM ──

/// Resolve the body of the table the search field filters: the table the
/// field sits in, else the first table on the page.
pub fn target_body(search: &Element) -> Option<Element> {
    search
        .closest("table")
        .ok()
        .flatten()
        .and_then(|table| table.query_selector("tbody").ok().flatten())
        .or_else(|| dom::query("table tbody"))
}

pub fn apply(tbody: &Element, query: &str) {
    for row in dom::query_all_within(tbody, "tr") {
        let cells: Vec<String> = dom::query_all_within(&row, "td, th")
            .iter()
            .take(SEARCHED_CELLS)
            .map(|cell| cell.text_content().unwrap_or_default())
            .collect();
        let display = if row_matches(query, &cells) { "" } else { "none" };
        if let Some(row) = row.dyn_ref::<HtmlElement>() {
            let _ = row.style().set_property("display", display);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files() -> Vec<Vec<&'static str>> {
        vec![vec!["Foo.py", "python"], vec!["bar.js", "javascript"]]
    }

    #[test]
    fn query_matches_file_name_case_insensitively() {
        assert_eq!(visible_rows("foo", &files()), vec![true, false]);
        assert_eq!(visible_rows("FOO", &files()), vec![true, false]);
    }

    #[test]
    fn query_matches_file_extension_in_name() {
        assert_eq!(visible_rows("js", &files()), vec![false, true]);
    }

    #[test]
    fn query_matches_language_cell() {
        assert_eq!(visible_rows("python", &files()), vec![true, false]);
        assert_eq!(visible_rows("script", &files()), vec![false, true]);
    }

    #[test]
    fn empty_query_shows_everything() {
        assert_eq!(visible_rows("", &files()), vec![true, true]);
        assert!(row_matches::<&str>("", &[]));
    }

    #[test]
    fn cells_past_the_second_are_ignored() {
        let rows = vec![vec!["main.rs", "rust", "uploaded by foo"]];
        assert_eq!(visible_rows("foo", &rows), vec![false]);
    }
}
