//! In-memory matcher used as a fallback filter when the database query for a
//! pattern set comes back empty and related rows are scanned in memory.

use crate::normalizer::normalize_for_search;

/// True if any pattern is a case-insensitive substring of `text`, or its
/// normalised form is a substring of the normalised `text`.
///
/// `None` or empty text never matches, nor does an empty pattern list.
/// A pattern that normalises to nothing only matches through its raw form.
pub fn matches_search<S: AsRef<str>>(text: Option<&str>, patterns: &[S]) -> bool {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return false;
    };
    if patterns.is_empty() {
        return false;
    }

    let text_lower = text.to_lowercase();
    let text_normalized = normalize_for_search(text);
    patterns.iter().any(|pattern| {
        let pattern = pattern.as_ref();
        if text_lower.contains(&pattern.to_lowercase()) {
            return true;
        }
        let pattern_normalized = normalize_for_search(pattern);
        !pattern_normalized.is_empty() && text_normalized.contains(&pattern_normalized)
    })
}
