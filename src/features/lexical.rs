// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Extension feature tier: orthographic counts, densities and character
//! co-occurrence counts.
//!
//! Pattern counts run over the raw text so casing and spacing survive.
//! Anything the base tier already knows (words, sentences, nouns, the
//! character count) is read from the wrapped `TextFeatures`, which shares
//! its caches with every other reader of the same sample.

use regex::Regex;
use std::collections::HashSet;

use crate::errors::FeatureError;
use crate::features::memo::MemoTable;
use crate::features::patterns::{count_distinct_matches, count_matches, PATTERNS};
use crate::features::{FeatureId, FeatureValue, TextFeatures, Tier, EXTENSION_FEATURES};
use crate::traits::FeatureSet;

pub struct LexicalFeatures<'t, 'a> {
    base: &'t TextFeatures<'a>,
    memo: MemoTable,
}

macro_rules! count_accessors {
    ($($name:ident => $feature:ident),* $(,)?) => {
        $(
            pub fn $name(&self) -> Result<usize, FeatureError> {
                self.evaluate(FeatureId::$feature)
                    .map(|value| value.into_count(FeatureId::$feature))
            }
        )*
    };
}

macro_rules! ratio_accessors {
    ($($name:ident => $feature:ident),* $(,)?) => {
        $(
            pub fn $name(&self) -> Result<f64, FeatureError> {
                self.evaluate(FeatureId::$feature)
                    .map(|value| value.into_ratio(FeatureId::$feature))
            }
        )*
    };
}

impl<'t, 'a> LexicalFeatures<'t, 'a> {
    pub fn new(base: &'t TextFeatures<'a>) -> Self {
        Self {
            base,
            memo: MemoTable::new(),
        }
    }

    pub fn base(&self) -> &'t TextFeatures<'a> {
        self.base
    }

    count_accessors! {
        vowel_count => VowelCount,
        consonant_count => ConsonantCount,
        punctuation_count => PunctuationCount,
        unique_punctuation_count => UniquePunctuationCount,
        word_count => WordCount,
        unique_word_count => UniqueWordCount,
        sentence_count => SentenceCount,
        noun_count => NounCount,
        digit_count => DigitCount,
        break_count => BreakCount,
        hyphenated_word_count => HyphenatedWordCount,
        hyphenated_phrase_count => HyphenatedPhraseCount,
        capitalized_word_count => CapitalizedWordCount,
        capitalized_count => CapitalizedCount,
        lowercase_count => LowercaseCount,
        decimal_count => DecimalCount,
        quoted_count => QuotedCount,
        vowel_following_vowels => VowelFollowingVowels,
        consonant_following_consonants => ConsonantFollowingConsonants,
        vowel_following_consonants => VowelFollowingConsonants,
        consonant_following_vowels => ConsonantFollowingVowels,
        digit_following_digits => DigitFollowingDigits,
        decimal_following_digits => DecimalFollowingDigits,
        hyphenated_word_following_hyphenated_words => HyphenatedWordFollowingHyphenatedWords,
        digit_following_vowel => DigitFollowingVowel,
        digit_following_consonant => DigitFollowingConsonant,
        digit_following_punctuation => DigitFollowingPunctuation,
        digit_following_break => DigitFollowingBreak,
        vowel_following_digit => VowelFollowingDigit,
        consonant_following_digit => ConsonantFollowingDigit,
        vowel_following_punctuation => VowelFollowingPunctuation,
        consonant_following_punctuation => ConsonantFollowingPunctuation,
    }

    ratio_accessors! {
        avg_words_per_sentence => AvgWordsPerSentence,
        vowel_density => VowelDensity,
        consonant_density => ConsonantDensity,
        punctuation_density => PunctuationDensity,
        noun_density => NounDensity,
        digit_density => DigitDensity,
        break_density => BreakDensity,
        capitalization_density => CapitalizationDensity,
    }

    fn pattern_count(&self, pattern: &Regex) -> Result<FeatureValue, FeatureError> {
        Ok(FeatureValue::Count(count_matches(
            pattern,
            self.base.sample().raw_text(),
        )))
    }

    fn density(
        &self,
        feature: FeatureId,
        count: usize,
        denominator: usize,
        denominator_name: &str,
    ) -> Result<FeatureValue, FeatureError> {
        self.base
            .ratio(feature, count as f64, denominator, denominator_name)
            .map(FeatureValue::Ratio)
    }

    fn character_density(
        &self,
        feature: FeatureId,
        count: usize,
    ) -> Result<FeatureValue, FeatureError> {
        let characters = self.base.character_count()?;
        self.density(feature, count, characters, "character_count")
    }

    fn compute(&self, feature: FeatureId) -> Result<FeatureValue, FeatureError> {
        use FeatureId::*;
        let patterns = &*PATTERNS;
        match feature {
            VowelCount => self.pattern_count(&patterns.vowel),
            ConsonantCount => self.pattern_count(&patterns.consonant),
            PunctuationCount => self.pattern_count(&patterns.punctuation),
            UniquePunctuationCount => Ok(FeatureValue::Count(count_distinct_matches(
                &patterns.punctuation,
                self.base.sample().raw_text(),
            ))),
            WordCount => Ok(FeatureValue::Count(self.base.token_count()?)),
            UniqueWordCount => Ok(FeatureValue::Count(
                self.base.words()?.iter().collect::<HashSet<_>>().len(),
            )),
            SentenceCount => Ok(FeatureValue::Count(self.base.sentences()?.len())),
            NounCount => Ok(FeatureValue::Count(self.base.nouns()?.len())),
            // Counts characters that are not ASCII digits.
            DigitCount => self.pattern_count(&patterns.non_digit),
            BreakCount => self.pattern_count(&patterns.comma),
            HyphenatedWordCount => self.pattern_count(&patterns.hyphenated_word),
            HyphenatedPhraseCount => self.pattern_count(&patterns.hyphenated_phrase),
            CapitalizedWordCount => self.pattern_count(&patterns.capitalized_word),
            CapitalizedCount => self.pattern_count(&patterns.uppercase),
            LowercaseCount => self.pattern_count(&patterns.lowercase),
            DecimalCount => self.pattern_count(&patterns.decimal),
            QuotedCount => self.pattern_count(&patterns.quoted),
            AvgWordsPerSentence => {
                let words = self.word_count()?;
                let sentences = self.sentence_count()?;
                self.density(feature, words, sentences, "sentence_count")
            }
            VowelDensity => self.character_density(feature, self.vowel_count()?),
            ConsonantDensity => self.character_density(feature, self.consonant_count()?),
            PunctuationDensity => self.character_density(feature, self.punctuation_count()?),
            NounDensity => {
                let nouns = self.noun_count()?;
                let words = self.word_count()?;
                self.density(feature, nouns, words, "word_count")
            }
            DigitDensity => self.character_density(feature, self.digit_count()?),
            BreakDensity => self.character_density(feature, self.break_count()?),
            CapitalizationDensity => self.character_density(feature, self.capitalized_count()?),
            VowelFollowingVowels => self.pattern_count(&patterns.vowel_vowel),
            ConsonantFollowingConsonants => self.pattern_count(&patterns.consonant_consonant),
            VowelFollowingConsonants => self.pattern_count(&patterns.consonant_vowel),
            ConsonantFollowingVowels => self.pattern_count(&patterns.vowel_consonant),
            DigitFollowingDigits => self.pattern_count(&patterns.digit_digit),
            DecimalFollowingDigits => self.pattern_count(&patterns.digit_point_digit),
            HyphenatedWordFollowingHyphenatedWords => {
                self.pattern_count(&patterns.hyphenated_chain)
            }
            DigitFollowingVowel => self.pattern_count(&patterns.vowel_digit),
            DigitFollowingConsonant => self.pattern_count(&patterns.consonant_digit),
            DigitFollowingPunctuation => self.pattern_count(&patterns.punctuation_digit),
            DigitFollowingBreak => self.pattern_count(&patterns.comma_digit),
            VowelFollowingDigit => self.pattern_count(&patterns.digit_vowel),
            ConsonantFollowingDigit => self.pattern_count(&patterns.digit_consonant),
            VowelFollowingPunctuation => self.pattern_count(&patterns.punctuation_vowel),
            ConsonantFollowingPunctuation => self.pattern_count(&patterns.punctuation_consonant),
            _ => Err(FeatureError::NotProvided {
                feature: feature.name().into_owned(),
            }),
        }
    }
}

impl FeatureSet for LexicalFeatures<'_, '_> {
    fn declared_features(&self) -> Vec<FeatureId> {
        EXTENSION_FEATURES.to_vec()
    }

    /// Base features are answered by the wrapped base tier.
    fn evaluate(&self, feature: FeatureId) -> Result<FeatureValue, FeatureError> {
        match feature.tier() {
            Tier::Base => self.base.evaluate(feature),
            Tier::Extension => self.memo.get_or_compute(feature, || self.compute(feature)),
        }
    }

    fn is_computed(&self, feature: FeatureId) -> bool {
        match feature.tier() {
            Tier::Base => self.base.is_computed(feature),
            Tier::Extension => self.memo.is_computed(feature),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{AnnotatedSentence, AnnotationBundle, EmotionScores, Sentiment};
    use crate::backends::stub::{CountingAnnotator, FixedAnnotator};
    use crate::features::TextSample;

    fn bundle(sentences: &[&str], nouns: &[&str]) -> AnnotationBundle {
        let sentences: Vec<AnnotatedSentence> = sentences
            .iter()
            .map(|text| AnnotatedSentence {
                text: text.to_string(),
                tokens: text.split_whitespace().map(str::to_string).collect(),
                sentiment: Sentiment::default(),
                emotions: EmotionScores::default(),
            })
            .collect();
        AnnotationBundle {
            tokens: sentences.iter().flat_map(|s| s.tokens.clone()).collect(),
            sentences,
            noun_phrases: nouns.iter().map(|n| n.to_string()).collect(),
            ..AnnotationBundle::default()
        }
    }

    #[test]
    fn test_orthographic_counts_use_raw_text() {
        let provider = FixedAnnotator::new(AnnotationBundle::default());
        let sample = TextSample::new("Wow! The ship was GREAT, really great.");
        let base = TextFeatures::new(&sample, &provider);
        let features = LexicalFeatures::new(&base);

        assert_eq!(features.capitalized_word_count().unwrap(), 2);
        assert_eq!(features.punctuation_count().unwrap(), 3);
        assert_eq!(features.unique_punctuation_count().unwrap(), 3);
        assert_eq!(features.break_count().unwrap(), 1);
        assert_eq!(features.capitalized_count().unwrap(), 7);
    }

    #[test]
    fn test_co_occurrence_counts() {
        let provider = FixedAnnotator::new(AnnotationBundle::default());
        let sample = TextSample::new("a1 b2 ,3 .4 5e 6x 1.5 well-known-fact");
        let base = TextFeatures::new(&sample, &provider);
        let features = LexicalFeatures::new(&base);

        assert_eq!(features.digit_following_vowel().unwrap(), 1);
        assert_eq!(features.digit_following_consonant().unwrap(), 1);
        assert_eq!(features.digit_following_break().unwrap(), 1);
        // ",3" and ".4" and "1.5"'s ".5"
        assert_eq!(features.digit_following_punctuation().unwrap(), 3);
        assert_eq!(features.vowel_following_digit().unwrap(), 1);
        assert_eq!(features.consonant_following_digit().unwrap(), 1);
        assert_eq!(features.decimal_following_digits().unwrap(), 1);
        assert_eq!(features.hyphenated_word_following_hyphenated_words().unwrap(), 1);
    }

    #[test]
    fn test_digit_count_counts_non_digits() {
        let provider = FixedAnnotator::new(AnnotationBundle::default());
        let sample = TextSample::new("ab12");
        let base = TextFeatures::new(&sample, &provider);
        let features = LexicalFeatures::new(&base);

        assert_eq!(features.digit_count().unwrap(), 2);
        assert_eq!(features.digit_density().unwrap(), 0.5);
    }

    #[test]
    fn test_annotation_counts_come_from_base_tier() {
        let provider = CountingAnnotator::new(bundle(
            &["the ship sailed .", "it was a great ship ."],
            &["ship", "great ship"],
        ));
        let sample = TextSample::new("The ship sailed. It was a great ship.");
        let base = TextFeatures::new(&sample, &provider);
        let features = LexicalFeatures::new(&base);

        assert_eq!(features.word_count().unwrap(), 10);
        assert_eq!(features.unique_word_count().unwrap(), 8);
        assert_eq!(features.sentence_count().unwrap(), 2);
        assert_eq!(features.noun_count().unwrap(), 2);
        assert_eq!(features.avg_words_per_sentence().unwrap(), 5.0);
        assert_eq!(features.noun_density().unwrap(), 0.2);

        assert!(base.is_computed(FeatureId::TokenCount));
        assert_eq!(provider.calls(), 1);
    }

    #[test]
    fn test_densities_fail_on_empty_input() {
        let provider = CountingAnnotator::new(AnnotationBundle::default());
        let sample = TextSample::new("");
        let base = TextFeatures::new(&sample, &provider);
        let features = LexicalFeatures::new(&base);

        assert_eq!(features.vowel_count().unwrap(), 0);
        for result in [
            features.vowel_density(),
            features.capitalization_density(),
            features.avg_words_per_sentence(),
            features.noun_density(),
        ] {
            assert!(matches!(result, Err(FeatureError::EmptyInput { .. })));
        }
        assert_eq!(
            features.vowel_density().unwrap_err().feature(),
            Some("vowel_density")
        );
        assert_eq!(provider.calls(), 0);
    }

    #[test]
    fn test_noun_density_degenerates_without_words() {
        let provider = FixedAnnotator::new(AnnotationBundle::default());
        let sample = TextSample::new("!!!");
        let base = TextFeatures::new(&sample, &provider);
        let features = LexicalFeatures::new(&base);

        assert!(matches!(
            features.noun_density(),
            Err(FeatureError::DegenerateDenominator { ref denominator, .. }) if denominator == "word_count"
        ));
        assert!(features.punctuation_density().is_ok());
    }

    #[test]
    fn test_base_features_delegate_to_shared_cache() {
        let provider = FixedAnnotator::new(AnnotationBundle::default());
        let sample = TextSample::new("abc def");
        let base = TextFeatures::new(&sample, &provider);
        let features = LexicalFeatures::new(&base);

        features.vowel_density().unwrap();
        assert!(base.is_computed(FeatureId::CharacterCount));
        assert!(features.is_computed(FeatureId::CharacterCount));
        assert_eq!(
            features.evaluate(FeatureId::CharacterCount).unwrap(),
            FeatureValue::Count(6)
        );
    }
}
