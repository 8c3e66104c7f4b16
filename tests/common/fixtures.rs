//! Static query and record corpora used across harnesses.
//!
//! Values mirror what the CRM directory actually stores: Latvian and
//! Lithuanian names with diacritics, Russian names in both scripts, and
//! company names with punctuation.

/// Stored directory values (display names) that searches should reach.
pub const DIRECTORY_RECORDS: &[&str] = &[
    "Švanka Laura",
    "Bērziņš Jānis",
    "Ozoliņa Natalja",
    "Иванов Сергей",
    "Kalniņš & Partneri SIA",
    "Žukovs Dmitrijs",
    "Łukasiewicz Anna",
    "Baltic Travel Group",
];

/// Plain Latin queries.
pub const CORPUS_LATIN: &[&str] = &["sva", "laura", "Ozola", "travel", "Baltic Travel"];

/// Queries with diacritics, as typed by users with a Baltic keyboard.
pub const CORPUS_DIACRITIC: &[&str] = &["Bērziņš", "Jānis", "Žukovs", "Kalniņš", "Łukasiewicz"];

/// Russian names typed in Cyrillic.
pub const CORPUS_CYRILLIC: &[&str] = &["Иванов", "Сергей", "Жукова Юлия", "Щукин"];

/// Queries typed with the wrong OS layout active, paired with what the user
/// meant.
pub const CORPUS_WRONG_LAYOUT: &[(&str, &str)] = &[
    ("ghbdtn", "привет"),
    ("bdfyjd", "иванов"),
    ("Ыфмфтлф", "Savanka"),
    ("Шмфтщм", "Ivanov"),
];

/// Queries with a single keyboard-neighbour slip, paired with the intended
/// spelling.
pub const CORPUS_TYPOS: &[(&str, &str)] = &[
    ("procote", "pricote"),
    ("laurs", "laura"),
    ("ozila", "ozola"),
    ("tracel", "travel"),
];

/// Inputs that must not blow up generation cost.
pub fn corpus_pathological() -> Vec<String> {
    vec![
        "a".repeat(50_000),
        "qwertyuiop".repeat(5_000),
        "Ж".repeat(20_000),
        " \t".repeat(10_000) + "x",
        "ā š ž ".repeat(3_000),
    ]
}
