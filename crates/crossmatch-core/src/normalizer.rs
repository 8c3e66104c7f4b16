//! Normalizer — diacritic folding and case/whitespace canonicalisation.
//!
//! [`normalize_for_search`] is the comparison form used everywhere else in the
//! crate. [`diacritic_expansions`] goes the other way and re-inserts accents
//! into plain ASCII so that literal (SQL) matching can still hit stored values
//! such as "Švanka" from a query typed as "sva".

use crate::tables::{ASCII_TO_DIACRITICS, DIACRITIC_TO_ASCII};

/// Fold diacritics to ASCII, lowercase, trim and collapse whitespace runs to a
/// single space.
///
/// Total and idempotent: `normalize_for_search(&normalize_for_search(s))`
/// equals `normalize_for_search(s)` for every input.
pub fn normalize_for_search(s: &str) -> String {
    let mut folded = String::with_capacity(s.len());
    for c in s.chars() {
        // Lowercase before the lookup so an uppercase letter missing from the
        // table cannot turn into a mapped lowercase one on a second pass.
        for lower in c.to_lowercase() {
            match DIACRITIC_TO_ASCII.get(&lower) {
                Some(ascii) => folded.push_str(ascii),
                None => folded.push(lower),
            }
        }
    }
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lazily yield `s` with exactly one letter replaced by an accented form.
///
/// Positions are visited left to right and, at each position, alternatives in
/// table order. Case is preserved. Each yielded string is distinct.
pub fn diacritic_expansions(s: &str) -> impl Iterator<Item = String> + '_ {
    s.char_indices().flat_map(move |(at, c)| {
        let alternatives = ASCII_TO_DIACRITICS
            .get(&c.to_ascii_lowercase())
            .copied()
            .unwrap_or("");
        alternatives.chars().map(move |accented| {
            let mut out = String::with_capacity(s.len() + 2);
            out.push_str(&s[..at]);
            if c.is_ascii_uppercase() {
                out.extend(accented.to_uppercase());
            } else {
                out.push(accented);
            }
            out.push_str(&s[at + c.len_utf8()..]);
            out
        })
    })
}

/// Collect at most `max` single-diacritic variants of `s`, stopping as soon as
/// the cap is reached.
pub fn diacritic_variants(s: &str, max: usize) -> Vec<String> {
    diacritic_expansions(s).take(max).collect()
}
