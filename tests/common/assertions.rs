//! Domain-specific assertion macros for crossmatch harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! candidate was expected and what the builder produced instead.

/// Assert that a pattern set (anything iterable over `&str`-likes) contains
/// a specific member.
///
/// ```rust
/// assert_has_pattern!(get_search_patterns("sva"), "šva");
/// ```
#[macro_export]
macro_rules! assert_has_pattern {
    ($patterns:expr, $expected:expr) => {{
        let patterns: Vec<String> = $patterns.into_iter().map(|p| p.to_string()).collect();
        let expected: &str = $expected;
        if !patterns.iter().any(|p| p == expected) {
            panic!(
                "assert_has_pattern! failed: {:?} not in pattern set.\n  patterns: {:?}",
                expected, patterns
            );
        }
    }};
}

/// Assert that a stored value is reached by the pattern set of a query.
///
/// ```rust
/// assert_query_reaches!("sva", "Švanka Laura");
/// ```
#[macro_export]
macro_rules! assert_query_reaches {
    ($query:expr, $stored:expr) => {{
        let query: &str = $query;
        let stored: &str = $stored;
        let patterns = crossmatch_core::get_search_patterns(query).into_vec();
        if !crossmatch_core::matches_search(Some(stored), &patterns[..]) {
            panic!(
                "assert_query_reaches! failed: {:?} does not reach {:?}.\n  patterns: {:?}",
                query, stored, patterns
            );
        }
    }};
}

/// Assert that a semantic chain is well formed: bounded by `max`, starts with
/// the uncorrected base, and every later element is the single-best-guess
/// correction of the element before it.
pub fn assert_chain_well_formed(query: &str, chain: &[String], max: usize) {
    assert!(
        chain.len() <= max,
        "chain for {query:?} has {} elements, max {max}: {chain:?}",
        chain.len()
    );
    let Some(first) = chain.first() else {
        return;
    };
    assert_eq!(
        first,
        &crossmatch_core::normalize_query_for_semantic(query),
        "chain for {query:?} must start with the uncorrected base"
    );
    for pair in chain.windows(2) {
        assert_eq!(
            crossmatch_core::typo_correction_for_semantic(&pair[0]).as_deref(),
            Some(pair[1].as_str()),
            "chain for {query:?}: {:?} is not the correction of {:?}",
            pair[1],
            pair[0]
        );
    }
}
