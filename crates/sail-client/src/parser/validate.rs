//! Cheap content-shape check run before extraction.

use super::selectors::{PRIMARY_BOX_CLASS, SECONDARY_BOX_CLASS};

/// Hebrew keyword for "sailing".
const HEBREW_SAILING: &str = "שיט";
const ENGLISH_SAILING: &str = "sailing";

/// Cheap check that `html` plausibly is a schedule page.
///
/// Plain substring tests on the raw text; the document is not parsed, so a
/// `true` here does not promise that any event can be extracted.
pub fn validate(html: &str) -> bool {
    let valid = html.contains(PRIMARY_BOX_CLASS)
        || html.contains(SECONDARY_BOX_CLASS)
        || html.contains(HEBREW_SAILING)
        || contains_ignore_ascii_case(html, ENGLISH_SAILING);

    tracing::debug!(valid, bytes = html.len(), "Content validation");
    valid
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}
