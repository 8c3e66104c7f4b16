//! Keyboard-neighbour typo variants.
//!
//! Two generators share [`QWERTY_NEIGHBORS`] but serve different budgets:
//!
//! - [`keyboard_typo_variants`] fans out one substitution per position and
//!   neighbour. Many cheap candidates for literal matching.
//! - [`typo_correction_for_semantic`] returns at most one rewrite, replacing
//!   every occurrence of one letter according to [`SEMANTIC_TYPO_PAIRS`]. Few
//!   high-value candidates for embedding calls.

use crate::tables::{QWERTY_NEIGHBORS, SEMANTIC_TYPO_PAIRS};

/// Neighbouring keys of `c`, in table order, with the case of `c` applied.
fn neighbors(c: char) -> impl Iterator<Item = char> {
    let keys = QWERTY_NEIGHBORS
        .get(&c.to_ascii_lowercase())
        .copied()
        .unwrap_or("");
    let upper = c.is_ascii_uppercase();
    keys.chars()
        .map(move |n| if upper { n.to_ascii_uppercase() } else { n })
}

/// Lazily yield every single-position neighbour substitution of `s`, scanning
/// left to right.
///
/// A neighbour never equals its key, so each yielded string differs from `s`
/// and from every other yielded string.
pub fn keyboard_typos(s: &str) -> impl Iterator<Item = String> + '_ {
    s.char_indices().flat_map(move |(at, c)| {
        neighbors(c).map(move |n| {
            let mut out = String::with_capacity(s.len());
            out.push_str(&s[..at]);
            out.push(n);
            out.push_str(&s[at + c.len_utf8()..]);
            out
        })
    })
}

/// Collect at most `max_variants` typo variants of `s`. Stops scanning the
/// moment the cap is reached, so long inputs cost no more than short ones.
pub fn keyboard_typo_variants(s: &str, max_variants: usize) -> Vec<String> {
    keyboard_typos(s).take(max_variants).collect()
}

/// Single best-guess correction: the first pair in [`SEMANTIC_TYPO_PAIRS`]
/// whose `from` letter occurs in `s` is applied to every occurrence.
///
/// Returns `None` when no pair applies. Models "this one letter is wrong
/// everywhere in the word", not a slip at one random position.
pub fn typo_correction_for_semantic(s: &str) -> Option<String> {
    SEMANTIC_TYPO_PAIRS.iter().find_map(|&(from, to)| {
        if !s.contains(from) {
            return None;
        }
        let corrected = s.replace(from, to.encode_utf8(&mut [0; 4]));
        (corrected != s).then_some(corrected)
    })
}
