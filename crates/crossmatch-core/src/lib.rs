//! crossmatch-core — cross-script query normalization and fuzzy matching.
//!
//! Turns a raw contact/order search query into candidate strings that survive
//! diacritics, the wrong keyboard layout, Cyrillic vs. Latin spellings, known
//! name variants and keyboard-neighbour typos.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─► normalizer ─┐
//!  query ─► search ──┼─► keyboard  ──┼─► PatternSet ─► filter (SQL) / matcher (memory)
//!                    ├─► translit  ──┤
//!                    ├─► names     ──┤
//!                    └─► typo      ──┘
//!
//!  query ─► semantic (normalizer, keyboard, translit, typo) ─► variant chain ─► embeddings
//! ```
//!
//! Everything here is pure and synchronous. The character tables are
//! compile-time constants, so every function can be called concurrently from
//! any number of request handlers without locking. Nothing here performs I/O
//! except [`config::Config::load`].

pub mod config;
pub mod filter;
pub mod keyboard;
pub mod matcher;
pub mod names;
pub mod normalizer;
pub mod search;
pub mod semantic;
pub mod tables;
pub mod translit;
pub mod typo;
pub mod types;

pub use filter::ilike_or_filter;
pub use keyboard::{convert_keyboard_cyrillic_to_latin, convert_keyboard_latin_to_cyrillic};
pub use matcher::matches_search;
pub use names::lookup_name_variants;
pub use normalizer::normalize_for_search;
pub use search::{build_search_patterns, get_search_patterns, PatternLimits};
pub use semantic::{get_semantic_query_variants, normalize_query_for_semantic};
pub use translit::transliterate_cyrillic_to_latin;
pub use typo::{keyboard_typo_variants, typo_correction_for_semantic};
pub use types::PatternSet;
