// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Character classes and compiled patterns for orthographic features.
//!
//! All patterns run over the raw text. Counts are the number of
//! non-overlapping, left-to-right matches.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// `a, e, i, o, u` in either case.
pub const VOWEL_CLASS: &str = "[aeiouAEIOU]";
/// English letters that are not vowels (`y` included).
pub const CONSONANT_CLASS: &str = "[b-df-hj-np-tv-zB-DF-HJ-NP-TV-Z]";
/// The ASCII punctuation set.
pub const PUNCTUATION_CLASS: &str = "[[:punct:]]";

pub struct CharacterPatterns {
    pub vowel: Regex,
    pub consonant: Regex,
    pub punctuation: Regex,
    pub non_digit: Regex,
    pub comma: Regex,
    pub hyphenated_word: Regex,
    pub hyphenated_phrase: Regex,
    pub capitalized_word: Regex,
    pub uppercase: Regex,
    pub lowercase: Regex,
    pub decimal: Regex,
    pub quoted: Regex,
    pub vowel_vowel: Regex,
    pub consonant_consonant: Regex,
    pub consonant_vowel: Regex,
    pub vowel_consonant: Regex,
    pub digit_digit: Regex,
    pub digit_point_digit: Regex,
    pub hyphenated_chain: Regex,
    pub vowel_digit: Regex,
    pub consonant_digit: Regex,
    pub punctuation_digit: Regex,
    pub comma_digit: Regex,
    pub digit_vowel: Regex,
    pub digit_consonant: Regex,
    pub punctuation_vowel: Regex,
    pub punctuation_consonant: Regex,
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("character class patterns are valid")
}

impl CharacterPatterns {
    fn new() -> Self {
        let (v, c, p) = (VOWEL_CLASS, CONSONANT_CLASS, PUNCTUATION_CLASS);
        Self {
            vowel: compile(v),
            consonant: compile(c),
            punctuation: compile(p),
            non_digit: compile("[^0-9]"),
            comma: compile(","),
            hyphenated_word: compile(r"\w+-\w+"),
            hyphenated_phrase: compile(r"\w+ - \w+"),
            capitalized_word: compile("[A-Z][a-z]+"),
            uppercase: compile("[A-Z]"),
            lowercase: compile("[a-z]"),
            decimal: compile(r"\d+\.\d+"),
            quoted: compile(r#"".*?""#),
            vowel_vowel: compile(&format!("{v}{v}")),
            consonant_consonant: compile(&format!("{c}{c}")),
            consonant_vowel: compile(&format!("{c}{v}")),
            vowel_consonant: compile(&format!("{v}{c}")),
            digit_digit: compile(r"\d\d"),
            digit_point_digit: compile(r"\d\.\d"),
            hyphenated_chain: compile(r"\w+-\w+-\w+"),
            vowel_digit: compile(&format!(r"{v}\d")),
            consonant_digit: compile(&format!(r"{c}\d")),
            punctuation_digit: compile(&format!(r"{p}\d")),
            comma_digit: compile(r",\d"),
            digit_vowel: compile(&format!(r"\d{v}")),
            digit_consonant: compile(&format!(r"\d{c}")),
            punctuation_vowel: compile(&format!("{p}{v}")),
            punctuation_consonant: compile(&format!("{p}{c}")),
        }
    }
}

pub static PATTERNS: LazyLock<CharacterPatterns> = LazyLock::new(CharacterPatterns::new);

pub fn count_matches(pattern: &Regex, text: &str) -> usize {
    pattern.find_iter(text).count()
}

pub fn count_distinct_matches(pattern: &Regex, text: &str) -> usize {
    pattern
        .find_iter(text)
        .map(|found| found.as_str())
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consonant_class_excludes_vowels() {
        let consonants: String = ('a'..='z')
            .chain('A'..='Z')
            .filter(|c| PATTERNS.consonant.is_match(&c.to_string()))
            .collect();
        assert_eq!(consonants.len(), 42);
        assert!(!consonants.chars().any(|c| "aeiouAEIOU".contains(c)));
        assert!(consonants.contains('y'));
    }

    #[test]
    fn test_punctuation_class_is_ascii_punctuation() {
        let ascii_punctuation: String = (0u8..128)
            .map(char::from)
            .filter(char::is_ascii_punctuation)
            .collect();
        assert_eq!(count_matches(&PATTERNS.punctuation, &ascii_punctuation), 32);
        assert_eq!(count_matches(&PATTERNS.punctuation, "a b\u{2014}c"), 0);
    }

    #[test]
    fn test_pair_matches_do_not_overlap() {
        assert_eq!(count_matches(&PATTERNS.vowel_vowel, "queue"), 2);
        assert_eq!(count_matches(&PATTERNS.vowel_vowel, "aaa"), 1);
        assert_eq!(count_matches(&PATTERNS.digit_digit, "12345"), 2);
    }

    #[test]
    fn test_capitalized_word_requires_lowercase_tail() {
        assert_eq!(
            count_matches(&PATTERNS.capitalized_word, "Wow! The ship was GREAT"),
            2
        );
    }

    #[test]
    fn test_quoted_spans_are_lazy() {
        assert_eq!(count_matches(&PATTERNS.quoted, r#"he said "hi" and "bye""#), 2);
    }

    #[test]
    fn test_distinct_matches() {
        assert_eq!(count_distinct_matches(&PATTERNS.punctuation, "a, b, c!"), 2);
    }
}
