//! Name variant dictionary — alternate spellings of the same given name.

use crate::normalizer::normalize_for_search;
use crate::tables::NAME_VARIANTS;

/// Alternate spellings for a single whitespace-delimited token.
///
/// The token is normalised before lookup and must match a dictionary entry as
/// a whole word; "natalijas" finds nothing even though it starts with one.
pub fn lookup_name_variants(word: &str) -> Vec<&'static str> {
    let key = normalize_for_search(word);
    NAME_VARIANTS
        .get(key.as_str())
        .map(|variants| variants.to_vec())
        .unwrap_or_default()
}
