//! Semantic variant builder — a short, cost-bounded chain of query rewrites
//! for embedding search.
//!
//! Each string returned here costs the caller one embedding call, so the chain
//! is deliberately tiny: the script/layout-normalised query first, then at
//! most `max_variants - 1` single-best-guess typo corrections, each applied to
//! the previous element.

use crate::keyboard::{contains_cyrillic, convert_keyboard_cyrillic_to_latin, introduces_latin_letters};
use crate::normalizer::normalize_for_search;
use crate::translit::transliterate_cyrillic_to_latin;
use crate::typo::typo_correction_for_semantic;

/// Default chain length.
pub const DEFAULT_MAX_SEMANTIC_VARIANTS: usize = 3;

/// Script/layout-normalised form of `query`, with no typo correction.
///
/// Cyrillic input goes through the wrong-layout heuristic first: when the
/// keyboard conversion introduces Latin letters the query did not already
/// contain, the converted text is used. Otherwise Cyrillic input is
/// transliterated by sound, and anything else is just normalised.
///
/// The heuristic favours layout correction. A genuinely Cyrillic name
/// therefore usually ends up as its keyboard reading; the phonetic reading is
/// still covered by the literal pattern set.
pub fn normalize_query_for_semantic(query: &str) -> String {
    let trimmed = query.trim();
    if !contains_cyrillic(trimmed) {
        return normalize_for_search(trimmed);
    }

    let layout = convert_keyboard_cyrillic_to_latin(trimmed);
    if introduces_latin_letters(trimmed, &layout) {
        tracing::debug!(query = trimmed, %layout, "semantic: layout correction applied");
        normalize_for_search(&layout)
    } else {
        normalize_for_search(&transliterate_cyrillic_to_latin(trimmed))
    }
}

/// Build the semantic variant chain for `query`.
///
/// Element 0 is [`normalize_query_for_semantic`]; each following element is
/// [`typo_correction_for_semantic`] applied to the previous one. The chain
/// stops at `max_variants`, when a correction is a no-op, or when a correction
/// returns to an earlier element (the rule is deterministic, so from there it
/// would only cycle). Empty input yields an empty chain.
pub fn get_semantic_query_variants(query: &str, max_variants: usize) -> Vec<String> {
    let base = normalize_query_for_semantic(query);
    if base.is_empty() || max_variants == 0 {
        return Vec::new();
    }

    let mut chain = vec![base];
    while chain.len() < max_variants {
        let Some(last) = chain.last() else { break };
        let Some(corrected) = typo_correction_for_semantic(last) else {
            break;
        };
        if chain.contains(&corrected) {
            break;
        }
        chain.push(corrected);
    }

    tracing::debug!(query = query.trim(), variants = chain.len(), "semantic: chain built");
    chain
}
