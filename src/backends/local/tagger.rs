// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Lexicon and suffix based part-of-speech tagger producing Penn Treebank tags.

use regex::Regex;
use std::sync::LazyLock;

use super::lexicon::{is_common_adjective, CLOSED_CLASS_TAGS};
use crate::annotation::TaggedToken;

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:[.,]\d+)*$").expect("number pattern is valid"));

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "able", "ible", "ive", "less", "ic", "ish", "al"];
const NOUN_SUFFIXES: &[&str] = &["tion", "sion", "ment", "ness", "ity", "ship", "ism", "ance", "ence"];

pub fn is_noun(tag: &str) -> bool {
    tag.starts_with("NN")
}

pub fn is_adjective(tag: &str) -> bool {
    tag.starts_with("JJ")
}

pub fn is_proper_noun(tag: &str) -> bool {
    tag.starts_with("NNP")
}

/// Tag the tokens of one sentence.
pub fn tag_sentence(tokens: &[String]) -> Vec<TaggedToken> {
    let mut tagged: Vec<TaggedToken> = Vec::with_capacity(tokens.len());
    for (position, token) in tokens.iter().enumerate() {
        let previous = tagged.last().map(|t| t.tag.as_str());
        let tag = tag_word(token, position == 0, previous);
        tagged.push(TaggedToken::new(token.as_str(), tag));
    }
    tagged
}

fn tag_word(token: &str, sentence_start: bool, previous: Option<&str>) -> &'static str {
    let lower = token.to_lowercase();

    if let Some(tag) = CLOSED_CLASS_TAGS.get(lower.as_str()) {
        return *tag;
    }
    if NUMBER.is_match(token) {
        return "CD";
    }
    if !sentence_start && token.chars().next().is_some_and(char::is_uppercase) {
        return if lower.ends_with('s') && lower.len() > 3 { "NNPS" } else { "NNP" };
    }
    if is_common_adjective(&lower) {
        return "JJ";
    }

    let tag = suffix_tag(&lower);
    match (tag, previous) {
        ("NN", Some("MD" | "TO")) => "VB",
        _ => tag,
    }
}

fn suffix_tag(word: &str) -> &'static str {
    if word.ends_with("ly") {
        "RB"
    } else if word.ends_with("ing") && word.len() > 4 {
        "VBG"
    } else if word.ends_with("ed") && word.len() > 3 {
        "VBD"
    } else if word.ends_with("est") && word.len() > 4 {
        "JJS"
    } else if NOUN_SUFFIXES.iter().any(|suffix| word.ends_with(suffix)) {
        "NN"
    } else if ADJECTIVE_SUFFIXES.iter().any(|suffix| word.ends_with(suffix)) {
        "JJ"
    } else if word.ends_with('s') && !word.ends_with("ss") && word.len() > 3 {
        "NNS"
    } else {
        "NN"
    }
}
