// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Base feature tier.
//!
//! `TextFeatures` owns the shared state of one sample: the cleaned text, the
//! annotation bundle (requested from the provider at most once) and the
//! memo table of base features. Every accessor is lazy.

use std::cell::OnceCell;
use std::collections::{BTreeMap, HashSet};
use std::time::Instant;

use crate::annotation::{
    AnnotatedSentence, AnnotationBundle, EmotionScores, NamedEntity, Sentiment, TaggedToken,
};
use crate::errors::{AnnotationError, FeatureError};
use crate::features::catalog::base_features;
use crate::features::memo::MemoTable;
use crate::features::normalize::{clean_text, normalize_text};
use crate::features::stats::{first_differences, shannon_entropy};
use crate::features::{FeatureId, FeatureValue, TextSample, Tier};
use crate::observability::messages::features::{
    AnnotationCompleted, AnnotationFailed, AnnotationStarted,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{AnnotationProvider, FeatureSet};

pub struct TextFeatures<'a> {
    sample: &'a TextSample,
    provider: &'a dyn AnnotationProvider,
    cleaned: OnceCell<String>,
    normalized: OnceCell<String>,
    bundle: OnceCell<Result<AnnotationBundle, AnnotationError>>,
    tags: OnceCell<Vec<String>>,
    memo: MemoTable,
}

impl<'a> TextFeatures<'a> {
    pub fn new(sample: &'a TextSample, provider: &'a dyn AnnotationProvider) -> Self {
        Self {
            sample,
            provider,
            cleaned: OnceCell::new(),
            normalized: OnceCell::new(),
            bundle: OnceCell::new(),
            tags: OnceCell::new(),
            memo: MemoTable::new(),
        }
    }

    pub fn sample(&self) -> &'a TextSample {
        self.sample
    }

    /// The text handed to the annotation provider.
    pub fn clean_text(&self) -> &str {
        self.cleaned.get_or_init(|| clean_text(self.sample.raw_text()))
    }

    pub fn text_norm(&self) -> &str {
        self.normalized
            .get_or_init(|| normalize_text(self.sample.raw_text()))
    }

    /// True once the provider has been asked for this sample, whatever it answered.
    pub fn is_annotated(&self) -> bool {
        self.bundle.get().is_some()
    }

    /// The annotation bundle, requested from the provider on first use.
    pub fn annotation(&self) -> Result<&AnnotationBundle, FeatureError> {
        self.bundle_for("annotation")
    }

    pub fn words(&self) -> Result<&[String], FeatureError> {
        Ok(&self.bundle_for("words")?.tokens)
    }

    pub fn sentences(&self) -> Result<&[AnnotatedSentence], FeatureError> {
        Ok(&self.bundle_for("sentences")?.sentences)
    }

    pub fn nouns(&self) -> Result<&[String], FeatureError> {
        Ok(&self.bundle_for("nouns")?.noun_phrases)
    }

    pub fn tagged_tokens(&self) -> Result<&[TaggedToken], FeatureError> {
        Ok(&self.bundle_for("tagged_tokens")?.tagged_tokens)
    }

    /// Lower-cased part-of-speech tags, in token order.
    pub fn tags(&self) -> Result<&[String], FeatureError> {
        let tagged = self.bundle_for("tags")?;
        Ok(self.tags.get_or_init(|| {
            tagged
                .tagged_tokens
                .iter()
                .map(|token| token.tag.to_lowercase())
                .collect()
        }))
    }

    pub fn entities(&self) -> Result<&[NamedEntity], FeatureError> {
        Ok(&self.bundle_for("entities")?.named_entities)
    }

    /// Emotion scores of each sentence.
    pub fn emotions(&self) -> Result<Vec<&EmotionScores>, FeatureError> {
        Ok(self
            .bundle_for("emotions")?
            .sentences
            .iter()
            .map(|sentence| &sentence.emotions)
            .collect())
    }

    pub fn sentiment(&self) -> Result<Sentiment, FeatureError> {
        self.typed(FeatureId::Sentiment, FeatureValue::into_sentiment)
    }

    pub fn polarity(&self) -> Result<f64, FeatureError> {
        self.typed(FeatureId::Polarity, FeatureValue::into_ratio)
    }

    pub fn subjectivity(&self) -> Result<f64, FeatureError> {
        self.typed(FeatureId::Subjectivity, FeatureValue::into_ratio)
    }

    pub fn token_count(&self) -> Result<usize, FeatureError> {
        self.typed(FeatureId::TokenCount, FeatureValue::into_count)
    }

    pub fn character_count(&self) -> Result<usize, FeatureError> {
        self.typed(FeatureId::CharacterCount, FeatureValue::into_count)
    }

    /// Counts of each run of `n` consecutive tags, keyed by the tags joined with `_`.
    pub fn tag_grams(&self, n: usize) -> Result<BTreeMap<String, usize>, FeatureError> {
        self.typed(FeatureId::TagGrams(n), FeatureValue::into_tag_grams)
    }

    pub fn unitags(&self) -> Result<BTreeMap<String, usize>, FeatureError> {
        self.tag_grams(1)
    }

    pub fn bitags(&self) -> Result<BTreeMap<String, usize>, FeatureError> {
        self.tag_grams(2)
    }

    pub fn tritags(&self) -> Result<BTreeMap<String, usize>, FeatureError> {
        self.tag_grams(3)
    }

    pub fn entropy(&self) -> Result<f64, FeatureError> {
        self.typed(FeatureId::Entropy, FeatureValue::into_ratio)
    }

    pub fn avg_entropy_change(&self) -> Result<f64, FeatureError> {
        self.typed(FeatureId::AvgEntropyChange, FeatureValue::into_ratio)
    }

    pub fn avg_polarity_change(&self) -> Result<f64, FeatureError> {
        self.typed(FeatureId::AvgPolarityChange, FeatureValue::into_ratio)
    }

    pub fn avg_subjectivity_change(&self) -> Result<f64, FeatureError> {
        self.typed(FeatureId::AvgSubjectivityChange, FeatureValue::into_ratio)
    }

    pub fn unique_words_count(&self) -> Result<usize, FeatureError> {
        self.typed(FeatureId::UniqueWordsCount, FeatureValue::into_count)
    }

    pub fn avg_token_length(&self) -> Result<f64, FeatureError> {
        self.typed(FeatureId::AvgTokenLength, FeatureValue::into_ratio)
    }

    /// `numerator / denominator`, or the failure a zero denominator maps to.
    ///
    /// A blank sample reports `EmptyInput`; any other zero denominator is a
    /// `DegenerateDenominator` naming the feature it came from.
    pub(crate) fn ratio(
        &self,
        feature: FeatureId,
        numerator: f64,
        denominator: usize,
        denominator_name: &str,
    ) -> Result<f64, FeatureError> {
        if denominator == 0 {
            let feature = feature.name().into_owned();
            return Err(if self.sample.is_blank() {
                FeatureError::EmptyInput { feature }
            } else {
                FeatureError::DegenerateDenominator {
                    feature,
                    denominator: denominator_name.to_string(),
                }
            });
        }
        Ok(numerator / denominator as f64)
    }

    fn typed<T>(
        &self,
        feature: FeatureId,
        extract: fn(FeatureValue, FeatureId) -> T,
    ) -> Result<T, FeatureError> {
        self.evaluate(feature).map(|value| extract(value, feature))
    }

    fn bundle_for(&self, requested_by: &str) -> Result<&AnnotationBundle, FeatureError> {
        if self.sample.is_blank() {
            return Err(FeatureError::EmptyInput {
                feature: requested_by.to_string(),
            });
        }

        self.bundle
            .get_or_init(|| self.annotate())
            .as_ref()
            .map_err(|source| FeatureError::Annotation {
                feature: requested_by.to_string(),
                source: source.clone(),
            })
    }

    fn annotate(&self) -> Result<AnnotationBundle, AnnotationError> {
        let text = self.clean_text();
        let provider = self.provider.name();
        AnnotationStarted {
            provider,
            text_length: text.len(),
        }
        .log();

        let started = Instant::now();
        match self.provider.annotate(text) {
            Ok(bundle) => {
                AnnotationCompleted {
                    provider,
                    sentence_count: bundle.sentences.len(),
                    token_count: bundle.tokens.len(),
                    duration: started.elapsed(),
                }
                .log();
                Ok(bundle)
            }
            Err(error) => {
                AnnotationFailed {
                    provider,
                    error: &error,
                }
                .log();
                Err(error)
            }
        }
    }

    fn compute(&self, feature: FeatureId) -> Result<FeatureValue, FeatureError> {
        let raw_text = self.sample.raw_text();
        match feature {
            FeatureId::Sentiment => {
                let sentiment = self.bundle_for("sentiment")?.sentiment;
                Ok(FeatureValue::Pair {
                    polarity: sentiment.polarity,
                    subjectivity: sentiment.subjectivity,
                })
            }
            FeatureId::Polarity => Ok(FeatureValue::Ratio(self.sentiment()?.polarity)),
            FeatureId::Subjectivity => Ok(FeatureValue::Ratio(self.sentiment()?.subjectivity)),
            FeatureId::TokenCount => Ok(FeatureValue::Count(self.words()?.len())),
            FeatureId::CharacterCount => Ok(FeatureValue::Count(
                raw_text.chars().filter(|c| *c != ' ').count(),
            )),
            FeatureId::TagGrams(n) => Ok(FeatureValue::TagGrams(count_grams(self.tags()?, n))),
            FeatureId::Entropy => shannon_entropy(raw_text)
                .map(FeatureValue::Ratio)
                .ok_or_else(|| FeatureError::EmptyInput {
                    feature: feature.name().into_owned(),
                }),
            FeatureId::AvgEntropyChange => self.average_sentence_change(feature, |sentence| {
                shannon_entropy(&sentence.text).unwrap_or(0.0)
            }),
            FeatureId::AvgPolarityChange => {
                self.average_sentence_change(feature, |sentence| sentence.sentiment.polarity)
            }
            FeatureId::AvgSubjectivityChange => {
                self.average_sentence_change(feature, |sentence| sentence.sentiment.subjectivity)
            }
            FeatureId::UniqueWordsCount => Ok(FeatureValue::Count(
                self.text_norm()
                    .split_whitespace()
                    .map(str::to_lowercase)
                    .collect::<HashSet<_>>()
                    .len(),
            )),
            FeatureId::AvgTokenLength => {
                let total: usize = self.words()?.iter().map(|word| word.chars().count()).sum();
                let token_count = self.token_count()?;
                self.ratio(feature, total as f64, token_count, "token_count")
                    .map(FeatureValue::Ratio)
            }
            _ => Err(FeatureError::NotProvided {
                feature: feature.name().into_owned(),
            }),
        }
    }

    // Sum of consecutive differences over the sentence count, not over the
    // number of differences.
    fn average_sentence_change<F>(
        &self,
        feature: FeatureId,
        score: F,
    ) -> Result<FeatureValue, FeatureError>
    where
        F: Fn(&AnnotatedSentence) -> f64,
    {
        let sentences = self.sentences()?;
        let scores: Vec<f64> = sentences.iter().map(score).collect();
        let total: f64 = first_differences(&scores).iter().sum();
        self.ratio(feature, total, sentences.len(), "sentence_count")
            .map(FeatureValue::Ratio)
    }
}

fn count_grams(tags: &[String], n: usize) -> BTreeMap<String, usize> {
    let mut grams = BTreeMap::new();
    if n == 0 {
        return grams;
    }
    for window in tags.windows(n) {
        *grams.entry(window.join("_")).or_insert(0) += 1;
    }
    grams
}

impl FeatureSet for TextFeatures<'_> {
    fn declared_features(&self) -> Vec<FeatureId> {
        base_features(self.sample.tagram_order())
    }

    fn evaluate(&self, feature: FeatureId) -> Result<FeatureValue, FeatureError> {
        if feature.tier() != Tier::Base {
            return Err(FeatureError::NotProvided {
                feature: feature.name().into_owned(),
            });
        }
        self.memo.get_or_compute(feature, || self.compute(feature))
    }

    fn is_computed(&self, feature: FeatureId) -> bool {
        self.memo.is_computed(feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::stub::{CountingAnnotator, FailingAnnotator, FixedAnnotator};

    fn sentence(text: &str, polarity: f64, subjectivity: f64) -> AnnotatedSentence {
        AnnotatedSentence {
            text: text.to_string(),
            tokens: text.split_whitespace().map(str::to_string).collect(),
            sentiment: Sentiment::new(polarity, subjectivity),
            emotions: EmotionScores::default(),
        }
    }

    fn two_sentence_bundle() -> AnnotationBundle {
        AnnotationBundle {
            sentences: vec![
                sentence("the ship sailed .", 0.0, 0.0),
                sentence("it was great .", 0.8, 0.75),
            ],
            tokens: ["the", "ship", "sailed", ".", "it", "was", "great", "."]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            tagged_tokens: [
                ("the", "DT"),
                ("ship", "NN"),
                ("sailed", "VBD"),
                (".", "."),
                ("it", "PRP"),
                ("was", "VBD"),
                ("great", "JJ"),
                (".", "."),
            ]
            .iter()
            .map(|(token, tag)| TaggedToken::new(*token, *tag))
            .collect(),
            noun_phrases: vec![],
            named_entities: vec![],
            sentiment: Sentiment::new(0.4, 0.375),
        }
    }

    #[test]
    fn test_annotation_requested_once_across_features() {
        let provider = CountingAnnotator::new(two_sentence_bundle());
        let sample = TextSample::new("The ship sailed. It was great.");
        let features = TextFeatures::new(&sample, &provider);

        assert!(!features.is_annotated());
        features.token_count().unwrap();
        features.unitags().unwrap();
        features.avg_polarity_change().unwrap();
        features.sentiment().unwrap();

        assert!(features.is_annotated());
        assert_eq!(provider.calls(), 1);
    }

    #[test]
    fn test_annotator_receives_cleaned_text() {
        let provider = CountingAnnotator::new(two_sentence_bundle());
        let sample = TextSample::new("  The SHIP   sailed. ");
        let features = TextFeatures::new(&sample, &provider);

        features.words().unwrap();
        assert_eq!(provider.last_text().as_deref(), Some("the ship sailed."));
    }

    #[test]
    fn test_character_count_ignores_only_spaces() {
        let provider = FixedAnnotator::new(AnnotationBundle::default());
        let sample = TextSample::new("a b\tc");
        let features = TextFeatures::new(&sample, &provider);
        assert_eq!(features.character_count().unwrap(), 4);
    }

    #[test]
    fn test_tag_grams() {
        let provider = FixedAnnotator::new(two_sentence_bundle());
        let sample = TextSample::new("The ship sailed. It was great.");
        let features = TextFeatures::new(&sample, &provider);

        let unitags = features.unitags().unwrap();
        assert_eq!(unitags.get("vbd"), Some(&2));
        assert_eq!(unitags.values().sum::<usize>(), 8);

        let bitags = features.bitags().unwrap();
        assert_eq!(bitags.get("dt_nn"), Some(&1));
        assert_eq!(bitags.values().sum::<usize>(), 7);

        assert!(features.tag_grams(9).unwrap().is_empty());
    }

    #[test]
    fn test_average_changes_divide_by_sentence_count() {
        let provider = FixedAnnotator::new(two_sentence_bundle());
        let sample = TextSample::new("The ship sailed. It was great.");
        let features = TextFeatures::new(&sample, &provider);

        assert!((features.avg_polarity_change().unwrap() - 0.4).abs() < 1e-12);
        assert!((features.avg_subjectivity_change().unwrap() - 0.375).abs() < 1e-12);
    }

    #[test]
    fn test_single_sentence_change_is_zero() {
        let bundle = AnnotationBundle {
            sentences: vec![sentence("just one", 0.5, 0.5)],
            tokens: vec!["just".into(), "one".into()],
            ..AnnotationBundle::default()
        };
        let provider = FixedAnnotator::new(bundle);
        let sample = TextSample::new("Just one");
        let features = TextFeatures::new(&sample, &provider);

        assert_eq!(features.avg_entropy_change().unwrap(), 0.0);
        assert_eq!(features.avg_polarity_change().unwrap(), 0.0);
    }

    #[test]
    fn test_zero_sentences_on_non_blank_text_is_degenerate() {
        let provider = FixedAnnotator::new(AnnotationBundle::default());
        let sample = TextSample::new("something");
        let features = TextFeatures::new(&sample, &provider);

        match features.avg_polarity_change() {
            Err(FeatureError::DegenerateDenominator {
                feature,
                denominator,
            }) => {
                assert_eq!(feature, "avg_polarity_change");
                assert_eq!(denominator, "sentence_count");
            }
            other => panic!("Expected DegenerateDenominator, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_sample_skips_the_provider() {
        let provider = CountingAnnotator::new(two_sentence_bundle());
        let sample = TextSample::new("   ");
        let features = TextFeatures::new(&sample, &provider);

        assert!(matches!(
            features.token_count(),
            Err(FeatureError::EmptyInput { ref feature }) if feature == "token_count"
        ));
        assert!(matches!(
            features.avg_token_length(),
            Err(FeatureError::EmptyInput { ref feature }) if feature == "avg_token_length"
        ));
        assert_eq!(features.character_count().unwrap(), 0);
        assert_eq!(features.unique_words_count().unwrap(), 0);
        assert_eq!(provider.calls(), 0);
    }

    #[test]
    fn test_empty_text_entropy_fails() {
        let provider = FixedAnnotator::new(AnnotationBundle::default());
        let sample = TextSample::new("");
        let features = TextFeatures::new(&sample, &provider);
        assert!(matches!(
            features.entropy(),
            Err(FeatureError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_annotation_failure_is_attributed_and_cached() {
        let provider = FailingAnnotator::new(AnnotationError::BackendUnavailable(
            "offline".to_string(),
        ));
        let sample = TextSample::new("The ship sailed.");
        let features = TextFeatures::new(&sample, &provider);

        for _ in 0..2 {
            match features.polarity() {
                Err(FeatureError::Annotation { feature, .. }) => assert_eq!(feature, "polarity"),
                other => panic!("Expected Annotation error, got {:?}", other),
            }
        }
        assert_eq!(provider.calls(), 1);

        // Features without annotation still compute.
        assert_eq!(features.character_count().unwrap(), 14);
        assert!(features.entropy().is_ok());
    }

    #[test]
    fn test_unique_words_use_whitespace_split_of_text_norm() {
        let provider = FixedAnnotator::new(AnnotationBundle::default());
        let sample = TextSample::new("Hello hello HELLO, world!");
        let features = TextFeatures::new(&sample, &provider);
        // "hello", "hello," and "world" remain distinct.
        assert_eq!(features.unique_words_count().unwrap(), 3);
    }

    #[test]
    fn test_entities_are_projected_from_the_bundle() {
        let entity = NamedEntity {
            position: 3,
            label: "NE".to_string(),
            tokens: vec![
                TaggedToken::new("Port", "NNP"),
                TaggedToken::new("Royal", "NNP"),
            ],
        };
        let bundle = AnnotationBundle {
            named_entities: vec![entity.clone()],
            ..two_sentence_bundle()
        };
        let provider = CountingAnnotator::new(bundle);
        let sample = TextSample::new("The ship sailed to Port Royal. It was great.");
        let features = TextFeatures::new(&sample, &provider);

        assert_eq!(features.entities().unwrap(), &[entity]);
        assert_eq!(features.entities().unwrap()[0].tokens[1].token, "Royal");
        features.tags().unwrap();
        assert_eq!(provider.calls(), 1);
    }

    #[test]
    fn test_entities_fail_on_blank_text() {
        let provider = FixedAnnotator::new(AnnotationBundle::default());
        let sample = TextSample::new("   ");
        let features = TextFeatures::new(&sample, &provider);
        assert!(matches!(
            features.entities(),
            Err(FeatureError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_extension_features_are_not_provided() {
        let provider = FixedAnnotator::new(AnnotationBundle::default());
        let sample = TextSample::new("text");
        let features = TextFeatures::new(&sample, &provider);
        assert!(matches!(
            features.evaluate(FeatureId::VowelCount),
            Err(FeatureError::NotProvided { .. })
        ));
    }
}
