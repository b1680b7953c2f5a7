//! Text normalization helpers shared by the provider adapters.
//!
//! Upstream APIs return inconsistently formatted text: embedded HTML
//! markup (Naver wraps matched terms in `<b>` tags), entity escapes,
//! and irregular whitespace. Every title and snippet passes through
//! these helpers before landing in a [`crate::types::SearchResult`].

use scraper::Html;

/// Collapse all runs of whitespace to single spaces and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip embedded HTML markup, returning the text content only.
///
/// Entity escapes (`&quot;`, `&amp;`, …) are decoded as a side effect of
/// parsing. Input without markup passes through unchanged.
pub fn strip_markup(text: &str) -> String {
    if !text.contains('<') && !text.contains('&') {
        return text.to_string();
    }
    Html::parse_fragment(text)
        .root_element()
        .text()
        .collect::<String>()
}

/// Full cleanup for fields that may embed markup: strip, then collapse.
pub fn clean_html_text(text: &str) -> String {
    collapse_whitespace(&strip_markup(text))
}
