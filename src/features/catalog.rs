// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The feature catalog.
//!
//! Every feature a sample can produce is a `FeatureId`. Each id knows its
//! output name, which tier computes it, which other features it reads, and
//! whether it needs the annotation pass. The catalog is the single source the
//! dependency graph, config validation and the flat output are built from.

use std::borrow::Cow;
use std::fmt;

/// Which tier computes a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Annotation-derived aggregates, tag-grams, entropy and deltas.
    Base,
    /// Orthographic counts and densities over the raw text.
    Extension,
}

/// A declared feature.
///
/// The derived ordering follows declaration order, with tag-gram features
/// ordered by n.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureId {
    // Base tier
    Sentiment,
    Polarity,
    Subjectivity,
    TokenCount,
    CharacterCount,
    TagGrams(usize),
    Entropy,
    AvgEntropyChange,
    AvgPolarityChange,
    AvgSubjectivityChange,
    UniqueWordsCount,
    AvgTokenLength,

    // Extension tier
    VowelCount,
    ConsonantCount,
    PunctuationCount,
    UniquePunctuationCount,
    WordCount,
    UniqueWordCount,
    SentenceCount,
    NounCount,
    DigitCount,
    BreakCount,
    HyphenatedWordCount,
    HyphenatedPhraseCount,
    CapitalizedWordCount,
    CapitalizedCount,
    LowercaseCount,
    DecimalCount,
    AvgWordsPerSentence,
    VowelDensity,
    ConsonantDensity,
    PunctuationDensity,
    NounDensity,
    DigitDensity,
    QuotedCount,
    BreakDensity,
    CapitalizationDensity,
    VowelFollowingVowels,
    ConsonantFollowingConsonants,
    VowelFollowingConsonants,
    ConsonantFollowingVowels,
    DigitFollowingDigits,
    DecimalFollowingDigits,
    HyphenatedWordFollowingHyphenatedWords,
    DigitFollowingVowel,
    DigitFollowingConsonant,
    DigitFollowingPunctuation,
    DigitFollowingBreak,
    VowelFollowingDigit,
    ConsonantFollowingDigit,
    VowelFollowingPunctuation,
    ConsonantFollowingPunctuation,
}

/// Base features declared before the tag-gram slot.
const BASE_HEAD: &[FeatureId] = &[
    FeatureId::Sentiment,
    FeatureId::Polarity,
    FeatureId::Subjectivity,
    FeatureId::TokenCount,
    FeatureId::CharacterCount,
];

/// Base features declared after the tag-gram slot.
const BASE_TAIL: &[FeatureId] = &[
    FeatureId::Entropy,
    FeatureId::AvgEntropyChange,
    FeatureId::AvgPolarityChange,
    FeatureId::AvgSubjectivityChange,
    FeatureId::UniqueWordsCount,
    FeatureId::AvgTokenLength,
];

pub const EXTENSION_FEATURES: &[FeatureId] = &[
    FeatureId::VowelCount,
    FeatureId::ConsonantCount,
    FeatureId::PunctuationCount,
    FeatureId::UniquePunctuationCount,
    FeatureId::WordCount,
    FeatureId::UniqueWordCount,
    FeatureId::SentenceCount,
    FeatureId::NounCount,
    FeatureId::DigitCount,
    FeatureId::BreakCount,
    FeatureId::HyphenatedWordCount,
    FeatureId::HyphenatedPhraseCount,
    FeatureId::CapitalizedWordCount,
    FeatureId::CapitalizedCount,
    FeatureId::LowercaseCount,
    FeatureId::DecimalCount,
    FeatureId::AvgWordsPerSentence,
    FeatureId::VowelDensity,
    FeatureId::ConsonantDensity,
    FeatureId::PunctuationDensity,
    FeatureId::NounDensity,
    FeatureId::DigitDensity,
    FeatureId::QuotedCount,
    FeatureId::BreakDensity,
    FeatureId::CapitalizationDensity,
    FeatureId::VowelFollowingVowels,
    FeatureId::ConsonantFollowingConsonants,
    FeatureId::VowelFollowingConsonants,
    FeatureId::ConsonantFollowingVowels,
    FeatureId::DigitFollowingDigits,
    FeatureId::DecimalFollowingDigits,
    FeatureId::HyphenatedWordFollowingHyphenatedWords,
    FeatureId::DigitFollowingVowel,
    FeatureId::DigitFollowingConsonant,
    FeatureId::DigitFollowingPunctuation,
    FeatureId::DigitFollowingBreak,
    FeatureId::VowelFollowingDigit,
    FeatureId::ConsonantFollowingDigit,
    FeatureId::VowelFollowingPunctuation,
    FeatureId::ConsonantFollowingPunctuation,
];

/// Base-tier features for a tag-gram order, in declaration order.
pub fn base_features(tagram_order: usize) -> Vec<FeatureId> {
    BASE_HEAD
        .iter()
        .copied()
        .chain((1..=tagram_order).map(FeatureId::TagGrams))
        .chain(BASE_TAIL.iter().copied())
        .collect()
}

/// Every declared feature: the base tier followed by the extension tier.
pub fn declared_features(tagram_order: usize) -> Vec<FeatureId> {
    let mut features = base_features(tagram_order);
    features.extend_from_slice(EXTENSION_FEATURES);
    features
}

/// A feature and the names of the features it reads.
///
/// This is the string form of the catalog consumed by graph validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureDeclaration {
    pub id: String,
    pub depends_on: Vec<String>,
}

/// Declarations for every feature of a tag-gram order.
pub fn declarations(tagram_order: usize) -> Vec<FeatureDeclaration> {
    declared_features(tagram_order)
        .into_iter()
        .map(|feature| FeatureDeclaration {
            id: feature.name().into_owned(),
            depends_on: feature
                .dependencies()
                .iter()
                .map(|dependency| dependency.name().into_owned())
                .collect(),
        })
        .collect()
}

impl FeatureId {
    /// Output name of the feature.
    pub fn name(&self) -> Cow<'static, str> {
        use FeatureId::*;
        let name = match self {
            Sentiment => "sentiment",
            Polarity => "polarity",
            Subjectivity => "subjectivity",
            TokenCount => "token_count",
            CharacterCount => "character_count",
            TagGrams(1) => "unitags",
            TagGrams(2) => "bitags",
            TagGrams(3) => "tritags",
            TagGrams(n) => return Cow::Owned(format!("tags_{}gram", n)),
            Entropy => "entropy",
            AvgEntropyChange => "avg_entropy_change",
            AvgPolarityChange => "avg_polarity_change",
            AvgSubjectivityChange => "avg_subjectivity_change",
            UniqueWordsCount => "unique_words_count",
            AvgTokenLength => "avg_token_length",
            VowelCount => "vowel_count",
            ConsonantCount => "consonant_count",
            PunctuationCount => "punctuation_count",
            UniquePunctuationCount => "unique_punctuation_count",
            WordCount => "word_count",
            UniqueWordCount => "unique_word_count",
            SentenceCount => "sentence_count",
            NounCount => "noun_count",
            DigitCount => "digit_count",
            BreakCount => "break_count",
            HyphenatedWordCount => "hyphenated_word_count",
            HyphenatedPhraseCount => "hyphenated_phrase_count",
            CapitalizedWordCount => "capitalized_word_count",
            CapitalizedCount => "capitalized_count",
            LowercaseCount => "lowercase_count",
            DecimalCount => "decimal_count",
            AvgWordsPerSentence => "avg_words_per_sentence",
            VowelDensity => "vowel_density",
            ConsonantDensity => "consonant_density",
            PunctuationDensity => "punctuation_density",
            NounDensity => "noun_density",
            DigitDensity => "digit_density",
            QuotedCount => "quoted_count",
            BreakDensity => "break_density",
            CapitalizationDensity => "capitalization_density",
            VowelFollowingVowels => "vowel_following_vowels",
            ConsonantFollowingConsonants => "consonant_following_consonants",
            VowelFollowingConsonants => "vowel_following_consonants",
            ConsonantFollowingVowels => "consonant_following_vowels",
            DigitFollowingDigits => "digit_following_digits",
            DecimalFollowingDigits => "decimal_following_digits",
            HyphenatedWordFollowingHyphenatedWords => "hyphenated_word_following_hyphenated_words",
            DigitFollowingVowel => "digit_following_vowel",
            DigitFollowingConsonant => "digit_following_consonant",
            DigitFollowingPunctuation => "digit_following_punctuation",
            DigitFollowingBreak => "digit_following_break",
            VowelFollowingDigit => "vowel_following_digit",
            ConsonantFollowingDigit => "consonant_following_digit",
            VowelFollowingPunctuation => "vowel_following_punctuation",
            ConsonantFollowingPunctuation => "consonant_following_punctuation",
        };
        Cow::Borrowed(name)
    }

    /// Parse an output name back into a feature id.
    ///
    /// Tag-gram names beyond `tritags` use the `tags_{n}gram` form.
    pub fn from_name(name: &str) -> Option<FeatureId> {
        match name {
            "unitags" => return Some(FeatureId::TagGrams(1)),
            "bitags" => return Some(FeatureId::TagGrams(2)),
            "tritags" => return Some(FeatureId::TagGrams(3)),
            _ => {}
        }

        if let Some(n) = name
            .strip_prefix("tags_")
            .and_then(|rest| rest.strip_suffix("gram"))
            .and_then(|n| n.parse::<usize>().ok())
        {
            return (n > 3).then_some(FeatureId::TagGrams(n));
        }

        BASE_HEAD
            .iter()
            .chain(BASE_TAIL)
            .chain(EXTENSION_FEATURES)
            .copied()
            .find(|feature| feature.name() == name)
    }

    pub fn tier(&self) -> Tier {
        if EXTENSION_FEATURES.contains(self) {
            Tier::Extension
        } else {
            Tier::Base
        }
    }

    /// Features this feature reads. Annotation and raw-text inputs are not
    /// features and are reported by `needs_annotation` instead.
    pub fn dependencies(&self) -> &'static [FeatureId] {
        use FeatureId::*;
        match self {
            Polarity | Subjectivity => &[Sentiment],
            AvgTokenLength => &[TokenCount],
            WordCount => &[TokenCount],
            AvgWordsPerSentence => &[WordCount, SentenceCount],
            VowelDensity => &[VowelCount, CharacterCount],
            ConsonantDensity => &[ConsonantCount, CharacterCount],
            PunctuationDensity => &[PunctuationCount, CharacterCount],
            NounDensity => &[NounCount, WordCount],
            DigitDensity => &[DigitCount, CharacterCount],
            BreakDensity => &[BreakCount, CharacterCount],
            CapitalizationDensity => &[CapitalizedCount, CharacterCount],
            _ => &[],
        }
    }

    /// Whether computing this feature reads the annotation bundle directly.
    pub fn needs_annotation(&self) -> bool {
        use FeatureId::*;
        matches!(
            self,
            Sentiment
                | TokenCount
                | TagGrams(_)
                | AvgEntropyChange
                | AvgPolarityChange
                | AvgSubjectivityChange
                | AvgTokenLength
                | UniqueWordCount
                | SentenceCount
                | NounCount
        )
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_declaration_order() {
        let names: Vec<String> = declared_features(3)
            .iter()
            .map(|feature| feature.name().into_owned())
            .collect();

        assert_eq!(names[0], "sentiment");
        assert_eq!(names[5..8], ["unitags", "bitags", "tritags"]);
        assert_eq!(names[13], "avg_token_length");
        assert_eq!(names[14], "vowel_count");
        assert_eq!(names.last().map(String::as_str), Some("consonant_following_punctuation"));
        assert_eq!(names.len(), 14 + EXTENSION_FEATURES.len());
    }

    #[test]
    fn test_names_are_unique() {
        let features = declared_features(5);
        let names: HashSet<String> = features.iter().map(|f| f.name().into_owned()).collect();
        assert_eq!(names.len(), features.len());
    }

    #[test]
    fn test_from_name_round_trips_every_feature() {
        for feature in declared_features(6) {
            assert_eq!(FeatureId::from_name(&feature.name()), Some(feature));
        }
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        assert_eq!(FeatureId::from_name("syllable_count"), None);
        assert_eq!(FeatureId::from_name("tags_2gram"), None);
        assert_eq!(FeatureId::from_name("tags_xgram"), None);
    }

    #[test]
    fn test_tagram_order_controls_slot() {
        let order_one = base_features(1);
        assert!(order_one.contains(&FeatureId::TagGrams(1)));
        assert!(!order_one.contains(&FeatureId::TagGrams(2)));

        let order_four = base_features(4);
        assert_eq!(FeatureId::TagGrams(4).name(), "tags_4gram");
        assert!(order_four.contains(&FeatureId::TagGrams(4)));
    }

    #[test]
    fn test_tiers() {
        assert_eq!(FeatureId::Entropy.tier(), Tier::Base);
        assert_eq!(FeatureId::TagGrams(7).tier(), Tier::Base);
        assert_eq!(FeatureId::VowelDensity.tier(), Tier::Extension);
    }

    #[test]
    fn test_declarations_mirror_dependencies() {
        let declarations = declarations(3);
        let density = declarations
            .iter()
            .find(|declaration| declaration.id == "noun_density")
            .expect("noun_density is declared");
        assert_eq!(density.depends_on, vec!["noun_count", "word_count"]);
    }
}
