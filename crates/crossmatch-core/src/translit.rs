//! Phonetic Cyrillic → Latin transliteration ("Иванов" → "Ivanov").

use crate::tables::PHONETIC_CYRILLIC_TO_LATIN;

/// Render Cyrillic text in readable Latin. Non-Cyrillic characters pass
/// through unchanged.
pub fn transliterate_cyrillic_to_latin(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match PHONETIC_CYRILLIC_TO_LATIN.get(&c) {
            Some(latin) => out.push_str(latin),
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Иванов", "Ivanov")]
    #[case("Жукова Юлия", "Zhukova Julija")]
    #[case("Щукин", "Schukin")]
    #[case("Подъём", "Podem")]
    #[case("Ольга", "Olga")]
    #[case("Їжак", "Jizhak")]
    #[case("Smith", "Smith")]
    fn renders_by_sound(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(transliterate_cyrillic_to_latin(input), expected);
    }
}
