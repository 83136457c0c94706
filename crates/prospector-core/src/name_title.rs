//! Splitting a search-result title into a display name and a job title.
//!
//! LinkedIn result titles look like `"Jane Doe – Product Manager - Google | LinkedIn"`.
//! The split happens at the first dash (en-dash, em-dash or hyphen), so the
//! title keeps everything after it.

use std::sync::LazyLock;

use regex::Regex;

static NAME_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s*[–—\-]\s*(.+)$").expect("valid regex"));

/// Split `text` into `(name, title)`.
///
/// Falls back to a single split on `" - "` when the regex does not match, and
/// to `(text, "")` when neither works. Never fails.
#[must_use]
pub fn split_name_title(text: &str) -> (String, String) {
    if let Some(caps) = NAME_TITLE_RE.captures(text) {
        return (caps[1].trim().to_string(), caps[2].trim().to_string());
    }
    match text.split_once(" - ") {
        Some((name, title)) => (name.trim().to_string(), title.trim().to_string()),
        None => (text.to_string(), String::new()),
    }
}
