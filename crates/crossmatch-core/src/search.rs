//! Pattern set builder — fans a raw query out into literal match candidates.
//!
//! The builder combines diacritic folding and re-insertion, keyboard layout
//! recovery, phonetic transliteration, name variants and keyboard typos into a
//! single ordered [`PatternSet`]. Steps run from most to least trustworthy, so
//! when the cap is hit it is the speculative typo candidates that get cut.
//!
//! # Call-site contract
//!
//! Every member is meant to become one `ILIKE '%…%'` disjunct. The set is
//! bounded by [`PatternLimits::max_patterns`], but callers building SQL must
//! apply their own, stricter cap (see [`crate::filter::ilike_or_filter`]).

use serde::Deserialize;

use crate::keyboard::{
    contains_cyrillic, convert_keyboard_cyrillic_to_latin, convert_keyboard_latin_to_cyrillic,
};
use crate::names::lookup_name_variants;
use crate::normalizer::{diacritic_expansions, normalize_for_search};
use crate::translit::transliterate_cyrillic_to_latin;
use crate::typo::keyboard_typos;
use crate::types::{PatternSet, DEFAULT_MAX_PATTERNS};

/// Caps applied while building a [`PatternSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PatternLimits {
    /// Hard cap on the size of the returned set.
    #[serde(default = "default_max_patterns")]
    pub max_patterns: usize,
    /// Diacritic re-insertions taken from the raw query, and again from its
    /// normalised form.
    #[serde(default = "default_diacritic_expansions")]
    pub diacritic_expansions: usize,
    /// Keyboard-neighbour typo variants of the raw query.
    #[serde(default = "default_typo_variants")]
    pub typo_variants: usize,
}

fn default_max_patterns() -> usize { DEFAULT_MAX_PATTERNS }
fn default_diacritic_expansions() -> usize { 6 }
fn default_typo_variants() -> usize { 25 }

impl Default for PatternLimits {
    fn default() -> Self {
        Self {
            max_patterns: default_max_patterns(),
            diacritic_expansions: default_diacritic_expansions(),
            typo_variants: default_typo_variants(),
        }
    }
}

/// Build the literal match candidates for `query` with default limits.
///
/// Empty for blank input; otherwise the trimmed query is always the first
/// member. Deterministic: the same input yields the same ordered set.
pub fn get_search_patterns(query: &str) -> PatternSet {
    build_search_patterns(query, &PatternLimits::default())
}

/// Build the literal match candidates for `query` under explicit `limits`.
pub fn build_search_patterns(query: &str, limits: &PatternLimits) -> PatternSet {
    // room for the trimmed query at least
    let mut set = PatternSet::with_capacity(limits.max_patterns.max(1));
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return set;
    }

    // 1–2. verbatim and canonical forms
    set.insert(trimmed);
    let normalized = normalize_for_search(trimmed);
    set.insert(normalized.as_str());

    // 3. plain ASCII must still reach accented stored values
    set.extend(diacritic_expansions(trimmed).take(limits.diacritic_expansions));
    set.extend(diacritic_expansions(&normalized).take(limits.diacritic_expansions));

    // 4. script / layout branch
    if contains_cyrillic(trimmed) {
        let phonetic = transliterate_cyrillic_to_latin(trimmed);
        let phonetic_normalized = normalize_for_search(&phonetic);
        set.insert(phonetic);
        set.insert(phonetic_normalized);

        let layout = convert_keyboard_cyrillic_to_latin(trimmed);
        if layout != trimmed {
            tracing::trace!(query = trimmed, %layout, "patterns: cyrillic layout candidate");
            let layout_normalized = normalize_for_search(&layout);
            set.insert(layout);
            set.insert(layout_normalized);
        }
    } else {
        let layout = convert_keyboard_latin_to_cyrillic(trimmed);
        if layout != trimmed {
            tracing::trace!(query = trimmed, %layout, "patterns: latin layout candidate");
            let phonetic = transliterate_cyrillic_to_latin(&layout);
            set.insert(layout);
            set.insert(phonetic);
        }
    }

    // 5. whole-word name variants
    for token in trimmed.split_whitespace() {
        set.extend(lookup_name_variants(token));
    }

    // 6. keyboard-neighbour typos, each with a folded and a re-accented form
    for typo in keyboard_typos(trimmed).take(limits.typo_variants) {
        if set.is_full() {
            break;
        }
        let typo_normalized = normalize_for_search(&typo);
        let reaccented = diacritic_expansions(&typo_normalized).next();
        set.insert(typo);
        set.insert(typo_normalized);
        if let Some(reaccented) = reaccented {
            set.insert(reaccented);
        }
    }

    tracing::debug!(query = trimmed, patterns = set.len(), "patterns: built");
    set
}
