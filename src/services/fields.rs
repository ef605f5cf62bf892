use crate::domain::constants::{
    CAS_END_ANCHOR, CAS_START_ANCHOR, NAME_END_ANCHOR, NAME_START_ANCHOR,
};
use crate::domain::models::CompoundFields;

/// Returns the trimmed text between the first `start` and the first `end` after it.
///
/// The whole text is one span, so the value may cross line breaks. A blank value
/// counts as absent.
pub fn extract_between(text: &str, start: &str, end: &str) -> Option<String> {
    let from = text.find(start)? + start.len();
    let rest = &text[from..];
    let to = rest.find(end)?;
    let value = rest[..to].trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Reads compound name and CAS number from the first page's text.
pub fn parse_first_page(text: &str) -> CompoundFields {
    let text = join_lines(text);
    CompoundFields {
        name: extract_between(&text, NAME_START_ANCHOR, NAME_END_ANCHOR),
        cas: extract_between(&text, CAS_START_ANCHOR, CAS_END_ANCHOR),
    }
}

// Extracted page text breaks lines wherever the PDF ends a text object,
// which can fall inside a value or an anchor. Breaks become a space, so a word
// split mid-way comes back with an extra space ("Potas sium").
fn join_lines(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\r', '\n'], " ")
}
