// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! In-process heuristic annotation provider.
//!
//! Sentences end at runs of `.`, `!` or `?`. Tokens are runs of word
//! characters and apostrophes, so punctuation never becomes a token. Tags,
//! sentiment and emotions come from the tables in `lexicon`. Spelling
//! correction is the identity.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::lexicon::{
    is_negation, EMOTION_LABELS, EMOTION_WORDS, NEUTRAL_LABEL, SENTIMENT_SCORES,
};
use super::tagger::{is_adjective, is_noun, is_proper_noun, tag_sentence};
use crate::annotation::{
    AnnotatedSentence, AnnotationBundle, EmotionScores, NamedEntity, Sentiment, TaggedToken,
};
use crate::errors::AnnotationError;
use crate::traits::AnnotationProvider;

static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]+(?:[.!?]+|$)").expect("sentence pattern is valid"));
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w']+").expect("token pattern is valid"));

const ENTITY_LABEL: &str = "NE";

#[derive(Debug, Default, Clone, Copy)]
pub struct RuleBasedAnnotator;

impl RuleBasedAnnotator {
    pub fn new() -> Self {
        Self
    }
}

impl AnnotationProvider for RuleBasedAnnotator {
    fn annotate(&self, text: &str) -> Result<AnnotationBundle, AnnotationError> {
        if let Some(position) = text.find(|c: char| c == '\0' || c == '\u{FFFD}') {
            return Err(AnnotationError::MalformedInput(format!(
                "invalid character at byte {}",
                position
            )));
        }

        let mut bundle = AnnotationBundle::default();
        for found in SENTENCE.find_iter(text) {
            let sentence_text = found.as_str().trim();
            let tokens: Vec<String> = TOKEN
                .find_iter(sentence_text)
                .map(|token| token.as_str().to_string())
                .collect();
            if tokens.is_empty() {
                continue;
            }

            let tagged = tag_sentence(&tokens);
            bundle.noun_phrases.extend(noun_phrases(&tagged));
            bundle
                .named_entities
                .extend(named_entities(&tagged, bundle.tokens.len()));

            bundle.sentences.push(AnnotatedSentence {
                text: sentence_text.to_string(),
                sentiment: score_sentiment(&tokens),
                emotions: score_emotions(&tokens),
                tokens: tokens.clone(),
            });
            bundle.tokens.extend(tokens);
            bundle.tagged_tokens.extend(tagged);
        }

        bundle.sentiment = score_sentiment(&bundle.tokens);
        Ok(bundle)
    }

    fn name(&self) -> &'static str {
        "rule_based"
    }
}

/// Runs of two or more adjectives and nouns, cut back to their last noun.
fn noun_phrases(tagged: &[TaggedToken]) -> Vec<String> {
    let mut phrases = Vec::new();
    let mut start = 0;
    while start < tagged.len() {
        if !is_nominal(&tagged[start].tag) {
            start += 1;
            continue;
        }
        let mut end = start;
        while end < tagged.len() && is_nominal(&tagged[end].tag) {
            end += 1;
        }
        if let Some(last_noun) = (start..end).rev().find(|&i| is_noun(&tagged[i].tag)) {
            if last_noun > start {
                let words: Vec<&str> = tagged[start..=last_noun]
                    .iter()
                    .map(|t| t.token.as_str())
                    .collect();
                phrases.push(words.join(" ").to_lowercase());
            }
        }
        start = end;
    }
    phrases
}

fn is_nominal(tag: &str) -> bool {
    is_noun(tag) || is_adjective(tag)
}

/// Runs of proper nouns; `offset` is the index of the sentence's first token.
fn named_entities(tagged: &[TaggedToken], offset: usize) -> Vec<NamedEntity> {
    let mut entities = Vec::new();
    let mut index = 0;
    while index < tagged.len() {
        if !is_proper_noun(&tagged[index].tag) {
            index += 1;
            continue;
        }
        let start = index;
        while index < tagged.len() && is_proper_noun(&tagged[index].tag) {
            index += 1;
        }
        entities.push(NamedEntity {
            position: offset + start,
            label: ENTITY_LABEL.to_string(),
            tokens: tagged[start..index].to_vec(),
        });
    }
    entities
}

/// Polarity is the mean score of opinion words, halved and flipped after a
/// negation. Subjectivity is the mean subjectivity of opinion words scaled
/// by their share of the tokens.
fn score_sentiment(tokens: &[String]) -> Sentiment {
    let mut polarity_total = 0.0;
    let mut subjectivity_total = 0.0;
    let mut matched = 0usize;

    for (index, token) in tokens.iter().enumerate() {
        let word = token.to_lowercase();
        let Some(&(polarity, subjectivity)) = SENTIMENT_SCORES.get(word.as_str()) else {
            continue;
        };
        let negated = index > 0 && is_negation(&tokens[index - 1].to_lowercase());
        polarity_total += if negated { polarity * -0.5 } else { polarity };
        subjectivity_total += subjectivity;
        matched += 1;
    }

    if matched == 0 {
        return Sentiment::default();
    }
    let share = matched as f64 / tokens.len() as f64;
    Sentiment::new(
        polarity_total / matched as f64,
        (subjectivity_total / matched as f64) * share.sqrt(),
    )
}

/// Share of emotion words per label; all mass on `neutral` when none match.
fn score_emotions(tokens: &[String]) -> EmotionScores {
    let mut counts: BTreeMap<String, f64> = EMOTION_LABELS
        .iter()
        .map(|label| (label.to_string(), 0.0))
        .collect();

    let mut matched = 0usize;
    for token in tokens {
        if let Some(label) = EMOTION_WORDS.get(token.to_lowercase().as_str()) {
            *counts.entry(label.to_string()).or_insert(0.0) += 1.0;
            matched += 1;
        }
    }

    if matched == 0 {
        counts.insert(NEUTRAL_LABEL.to_string(), 1.0);
    } else {
        for score in counts.values_mut() {
            *score /= matched as f64;
        }
    }
    EmotionScores(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotate(text: &str) -> AnnotationBundle {
        RuleBasedAnnotator::new().annotate(text).unwrap()
    }

    #[test]
    fn test_sentences_and_tokens() {
        let bundle = annotate("wow! the ship was great, really great.");

        assert_eq!(bundle.sentences.len(), 2);
        assert_eq!(bundle.sentences[0].text, "wow!");
        assert_eq!(bundle.sentences[1].text, "the ship was great, really great.");
        assert_eq!(
            bundle.tokens,
            vec!["wow", "the", "ship", "was", "great", "really", "great"]
        );
        assert_eq!(bundle.tagged_tokens.len(), bundle.tokens.len());
    }

    #[test]
    fn test_text_without_terminator_is_one_sentence() {
        let bundle = annotate("no full stop here");
        assert_eq!(bundle.sentences.len(), 1);
    }

    #[test]
    fn test_punctuation_only_has_no_sentences() {
        let bundle = annotate("...!?");
        assert!(bundle.sentences.is_empty());
        assert!(bundle.tokens.is_empty());
    }

    #[test]
    fn test_noun_phrases_need_two_words_ending_in_noun() {
        let bundle = annotate("a great adventure started near the old harbour.");
        assert_eq!(bundle.noun_phrases, vec!["great adventure", "old harbour"]);
    }

    #[test]
    fn test_named_entities_track_global_position() {
        let bundle = annotate("we met. then Alice Smith arrived.");
        assert_eq!(bundle.named_entities.len(), 1);
        let entity = &bundle.named_entities[0];
        assert_eq!(entity.position, 3);
        assert_eq!(entity.tokens.len(), 2);
        assert_eq!(entity.label, "NE");
    }

    #[test]
    fn test_sentiment_polarity_and_negation() {
        let positive = annotate("the food was great.").sentiment;
        assert!(positive.polarity > 0.0);
        assert!(positive.subjectivity > 0.0);

        let negated = annotate("the food was not great.").sentiment;
        assert!(negated.polarity < 0.0);

        let neutral = annotate("the ship sailed.").sentiment;
        assert_eq!(neutral, Sentiment::default());
    }

    #[test]
    fn test_emotions_are_a_distribution() {
        let bundle = annotate("i was happy and scared. the ship sailed.");

        let first = &bundle.sentences[0].emotions;
        assert_eq!(first.score("joy"), Some(0.5));
        assert_eq!(first.score("fear"), Some(0.5));
        assert_eq!(first.0.len(), 7);

        let second = &bundle.sentences[1].emotions;
        assert_eq!(second.top_label(), Some("neutral"));
        assert_eq!(second.score("neutral"), Some(1.0));
    }

    #[test]
    fn test_malformed_input() {
        let result = RuleBasedAnnotator::new().annotate("bad\u{FFFD}bytes");
        assert!(matches!(result, Err(AnnotationError::MalformedInput(_))));
    }
}
