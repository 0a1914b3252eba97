//! Removal of organizational prefixes from titles.

use crate::config::{TITLE_PREFIXES, UNTITLED};

/// Strip the first known organizational prefix from a title.
///
/// Prefixes are tried in [`TITLE_PREFIXES`] order and at most one is
/// removed. Blank input, or nothing left after stripping, gives
/// [`UNTITLED`].
///
/// Not idempotent when the remainder itself starts with a known prefix:
/// `"SCE PLAN X"` gives `"PLAN X"`, and a second call gives `"X"`.
///
/// # Examples
/// ```
/// use notice_parser::title::normalize_title;
///
/// assert_eq!(normalize_title("SCE CNF Bomba sin presión"), "Bomba sin presión");
/// assert_eq!(normalize_title("   "), "untitled");
/// ```
#[must_use]
pub fn normalize_title(title: &str) -> String {
    let title = title.trim();

    let stripped = TITLE_PREFIXES
        .iter()
        .find_map(|prefix| title.strip_prefix(prefix))
        .unwrap_or(title)
        .trim();

    if stripped.is_empty() {
        UNTITLED.to_string()
    } else {
        stripped.to_string()
    }
}
