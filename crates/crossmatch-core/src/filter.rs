//! Disjunctive `ILIKE` filter composition for the database call site.
//!
//! A [`PatternSet`](crate::PatternSet) can hold over a hundred members; every
//! one of them turned into an OR'd substring condition per column would make
//! the database query needlessly expensive. [`ilike_or_filter`] applies the
//! caller-side cap and renders a PostgREST `or` expression. It only composes
//! text; executing it is up to the caller.

/// Default number of patterns turned into disjuncts.
pub const DEFAULT_MAX_DISJUNCTS: usize = 15;

/// Characters with a meaning inside a PostgREST logic tree.
const RESERVED: &[char] = &[',', '.', ':', '(', ')', '"', '\\'];

/// Render `col.ilike.%pattern%` for each column and each of the first
/// `max_disjuncts` non-empty patterns, joined with commas.
///
/// Returns `None` when there is nothing to filter on.
pub fn ilike_or_filter<I, S>(columns: &[&str], patterns: I, max_disjuncts: usize) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if columns.is_empty() {
        return None;
    }

    let mut conditions = Vec::new();
    for pattern in patterns
        .into_iter()
        .filter(|p| !p.as_ref().is_empty())
        .take(max_disjuncts)
    {
        let value = quote(&format!("%{}%", escape_like(pattern.as_ref())));
        for column in columns {
            conditions.push(format!("{column}.ilike.{value}"));
        }
    }

    if conditions.is_empty() {
        None
    } else {
        Some(conditions.join(","))
    }
}

/// Escape LIKE wildcards so the pattern matches literally.
fn escape_like(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Double-quote a value if it contains PostgREST reserved characters.
fn quote(value: &str) -> String {
    if !value.contains(RESERVED) && !value.contains(char::is_whitespace) {
        return value.to_string();
    }
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}
