// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Linguistic annotation of a text sample.
//!
//! An `AnnotationBundle` is everything the feature graph needs from an
//! annotation backend, produced by a single pass over the normalized text:
//! sentences with their own tokens and scores, spelling-corrected word tokens,
//! part-of-speech tags, noun phrases, named entities and the whole-text
//! sentiment. Bundles are produced by an `AnnotationProvider` and are owned by
//! the feature tier that requested them.

use serde::Serialize;
use std::collections::BTreeMap;

/// Polarity in [-1, 1] and subjectivity in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl Sentiment {
    /// Build a sentiment pair, clamping both scores into their ranges.
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }
}

/// Full label -> score distribution produced by an emotion classifier.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EmotionScores(pub BTreeMap<String, f64>);

impl EmotionScores {
    pub fn score(&self, label: &str) -> Option<f64> {
        self.0.get(label).copied()
    }

    /// Highest-scoring label; ties resolve to the label that sorts first.
    pub fn top_label(&self) -> Option<&str> {
        self.0
            .iter()
            .fold(None, |best: Option<(&String, f64)>, (label, score)| match best {
                Some((_, best_score)) if best_score >= *score => best,
                _ => Some((label, *score)),
            })
            .map(|(label, _)| label.as_str())
    }
}

/// A token with its (lower-cased) part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedToken {
    pub token: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(token: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            tag: tag.into(),
        }
    }
}

/// A sentence span of the normalized text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedSentence {
    pub text: String,
    pub tokens: Vec<String>,
    pub sentiment: Sentiment,
    pub emotions: EmotionScores,
}

/// A hierarchical entity chunk found at `position` in the chunked token stream.
///
/// Flat (non-entity) tokens never appear here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedEntity {
    pub position: usize,
    pub label: String,
    pub tokens: Vec<TaggedToken>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AnnotationBundle {
    pub sentences: Vec<AnnotatedSentence>,
    pub tokens: Vec<String>,
    pub tagged_tokens: Vec<TaggedToken>,
    pub noun_phrases: Vec<String>,
    pub named_entities: Vec<NamedEntity>,
    pub sentiment: Sentiment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_is_clamped() {
        let sentiment = Sentiment::new(1.7, -0.2);
        assert_eq!(sentiment.polarity, 1.0);
        assert_eq!(sentiment.subjectivity, 0.0);
    }

    #[test]
    fn test_top_label() {
        let scores = EmotionScores(BTreeMap::from([
            ("joy".to_string(), 0.6),
            ("anger".to_string(), 0.1),
            ("neutral".to_string(), 0.3),
        ]));
        assert_eq!(scores.top_label(), Some("joy"));
        assert_eq!(scores.score("anger"), Some(0.1));
        assert_eq!(EmotionScores::default().top_label(), None);
    }

    #[test]
    fn test_top_label_ties_prefer_first_label() {
        let scores = EmotionScores(BTreeMap::from([
            ("sadness".to_string(), 0.5),
            ("fear".to_string(), 0.5),
        ]));
        assert_eq!(scores.top_label(), Some("fear"));
    }
}
