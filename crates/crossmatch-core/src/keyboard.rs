//! Keyboard layout mapper — recovers text typed with the wrong OS layout.
//!
//! Conversion is by physical key position (Russian JCUKEN <-> US QWERTY), not
//! by sound: "ghbdtn" typed with the Latin layout active becomes "привет".
//! See [`crate::translit`] for the phonetic rendering.

use crate::tables::{KEYBOARD_CYRILLIC_TO_LATIN, KEYBOARD_LATIN_TO_CYRILLIC};

/// Map every Cyrillic character to the Latin character on the same key.
pub fn convert_keyboard_cyrillic_to_latin(s: &str) -> String {
    s.chars()
        .map(|c| KEYBOARD_CYRILLIC_TO_LATIN.get(&c).copied().unwrap_or(c))
        .collect()
}

/// Map every Latin character (and the punctuation keys that carry Cyrillic
/// letters) to the Cyrillic character on the same key.
pub fn convert_keyboard_latin_to_cyrillic(s: &str) -> String {
    s.chars()
        .map(|c| KEYBOARD_LATIN_TO_CYRILLIC.get(&c).copied().unwrap_or(c))
        .collect()
}

/// True if `s` contains any code point from the Cyrillic block (U+0400–U+04FF).
pub fn contains_cyrillic(s: &str) -> bool {
    s.chars().any(|c| ('\u{0400}'..='\u{04FF}').contains(&c))
}

/// Wrong-layout heuristic: `after` contains a Latin letter (case-insensitive)
/// that does not occur in `before`.
///
/// Coarse by nature. Any purely Cyrillic word with letters on it fires, and
/// mixed-script input can fire on a single stray key. Callers treat a `true`
/// as "a layout correction is plausible", never as proof.
pub fn introduces_latin_letters(before: &str, after: &str) -> bool {
    let mut seen = [false; 26];
    for c in before.chars().filter(char::is_ascii_alphabetic) {
        seen[(c.to_ascii_lowercase() as u8 - b'a') as usize] = true;
    }
    after
        .chars()
        .filter(char::is_ascii_alphabetic)
        .any(|c| !seen[(c.to_ascii_lowercase() as u8 - b'a') as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ghbdtn", "привет")]
    #[case("Bdfyjd", "Иванов")]
    #[case("[jhjij", "хорошо")]
    #[case("123 !", "123 !")]
    fn latin_to_cyrillic(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(convert_keyboard_latin_to_cyrillic(input), expected);
    }

    #[rstest]
    #[case("Шмфтщм", "Ivanov")]
    #[case("ызфтлф", "spanka")]
    #[case("abc", "abc")]
    fn cyrillic_to_latin(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(convert_keyboard_cyrillic_to_latin(input), expected);
    }

    #[test]
    fn detects_cyrillic_block() {
        assert!(contains_cyrillic("Ivan Иванов"));
        assert!(contains_cyrillic("ё"));
        assert!(!contains_cyrillic("Švanka"));
        assert!(!contains_cyrillic(""));
    }

    #[test]
    fn heuristic_fires_on_new_latin_letters_only() {
        assert!(introduces_latin_letters("Шмфтщм", "Ivanov"));
        assert!(!introduces_latin_letters("abc", "cab"));
        assert!(!introduces_latin_letters("ABC", "abc"));
        assert!(!introduces_latin_letters("хэ", "[,'"));
        assert!(introduces_latin_letters("ab Шм", "ab Iv"));
    }
}
