//! Core types shared across the search layers.
//!
//! [`PatternSet`] is the output of the pattern builder: an insertion-ordered,
//! deduplicated, capacity-capped collection of non-empty strings.

use indexmap::IndexSet;
use serde::Serialize;

/// Default upper bound on [`PatternSet`] size. Each member may become one
/// disjunct in a downstream filter, so the set must stay bounded.
pub const DEFAULT_MAX_PATTERNS: usize = 128;

/// Ordered, deduplicated set of candidate strings for literal matching.
///
/// Inserts beyond the capacity are dropped, so members added by earlier
/// (higher-value) builder steps always survive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PatternSet {
    patterns: IndexSet<String>,
    #[serde(skip)]
    capacity: usize,
}

impl PatternSet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            patterns: IndexSet::with_capacity(capacity.min(DEFAULT_MAX_PATTERNS)),
            capacity,
        }
    }

    /// Add `pattern` unless it is empty, already present, or the set is full.
    /// Returns whether the set changed.
    pub fn insert(&mut self, pattern: impl Into<String>) -> bool {
        let pattern = pattern.into();
        if pattern.is_empty() || self.is_full() {
            return false;
        }
        self.patterns.insert(pattern)
    }

    pub fn extend<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for pattern in patterns {
            self.insert(pattern);
        }
    }

    pub fn is_full(&self) -> bool {
        self.patterns.len() >= self.capacity
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.patterns.contains(pattern)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn first(&self) -> Option<&str> {
        self.patterns.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.patterns.into_iter().collect()
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_PATTERNS)
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

impl IntoIterator for PatternSet {
    type Item = String;
    type IntoIter = indexmap::set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_insertion_order_and_drops_duplicates() {
        let mut set = PatternSet::default();
        assert!(set.insert("b"));
        assert!(set.insert("a"));
        assert!(!set.insert("b"));
        assert_eq!(set.into_vec(), vec!["b", "a"]);
    }

    #[test]
    fn rejects_empty_strings() {
        let mut set = PatternSet::default();
        assert!(!set.insert(""));
        assert!(set.is_empty());
    }

    #[test]
    fn drops_inserts_past_capacity() {
        let mut set = PatternSet::with_capacity(2);
        set.extend(["x", "y", "z"]);
        assert_eq!(set.len(), 2);
        assert!(set.is_full());
        assert!(!set.contains("z"));
    }
}
