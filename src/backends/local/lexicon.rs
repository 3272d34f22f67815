// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Word lists for the rule-based annotator.
//!
//! Closed-class words get fixed Penn Treebank tags. Sentiment entries carry
//! a polarity in [-1, 1] and a subjectivity in [0, 1]. Emotion entries map a
//! word to one of `EMOTION_LABELS`.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const EMOTION_LABELS: [&str; 7] = [
    "anger", "disgust", "fear", "joy", "neutral", "sadness", "surprise",
];

pub const NEUTRAL_LABEL: &str = "neutral";

const CLOSED_CLASS: &[(&str, &str)] = &[
    ("the", "DT"),
    ("a", "DT"),
    ("an", "DT"),
    ("this", "DT"),
    ("that", "DT"),
    ("these", "DT"),
    ("those", "DT"),
    ("each", "DT"),
    ("every", "DT"),
    ("some", "DT"),
    ("any", "DT"),
    ("no", "DT"),
    ("another", "DT"),
    ("all", "DT"),
    ("in", "IN"),
    ("on", "IN"),
    ("at", "IN"),
    ("of", "IN"),
    ("for", "IN"),
    ("with", "IN"),
    ("by", "IN"),
    ("from", "IN"),
    ("about", "IN"),
    ("into", "IN"),
    ("over", "IN"),
    ("under", "IN"),
    ("after", "IN"),
    ("before", "IN"),
    ("between", "IN"),
    ("through", "IN"),
    ("during", "IN"),
    ("without", "IN"),
    ("within", "IN"),
    ("since", "IN"),
    ("until", "IN"),
    ("upon", "IN"),
    ("against", "IN"),
    ("among", "IN"),
    ("because", "IN"),
    ("if", "IN"),
    ("than", "IN"),
    ("as", "IN"),
    ("like", "IN"),
    ("while", "IN"),
    ("although", "IN"),
    ("though", "IN"),
    ("whether", "IN"),
    ("to", "TO"),
    ("and", "CC"),
    ("or", "CC"),
    ("but", "CC"),
    ("nor", "CC"),
    ("yet", "CC"),
    ("i", "PRP"),
    ("you", "PRP"),
    ("he", "PRP"),
    ("she", "PRP"),
    ("it", "PRP"),
    ("we", "PRP"),
    ("they", "PRP"),
    ("me", "PRP"),
    ("him", "PRP"),
    ("us", "PRP"),
    ("them", "PRP"),
    ("my", "PRP$"),
    ("your", "PRP$"),
    ("his", "PRP$"),
    ("her", "PRP$"),
    ("its", "PRP$"),
    ("our", "PRP$"),
    ("their", "PRP$"),
    ("which", "WDT"),
    ("who", "WP"),
    ("whom", "WP"),
    ("what", "WP"),
    ("whose", "WP$"),
    ("when", "WRB"),
    ("where", "WRB"),
    ("why", "WRB"),
    ("how", "WRB"),
    ("can", "MD"),
    ("could", "MD"),
    ("will", "MD"),
    ("would", "MD"),
    ("shall", "MD"),
    ("should", "MD"),
    ("may", "MD"),
    ("might", "MD"),
    ("must", "MD"),
    ("is", "VBZ"),
    ("has", "VBZ"),
    ("does", "VBZ"),
    ("am", "VBP"),
    ("are", "VBP"),
    ("have", "VBP"),
    ("do", "VBP"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("had", "VBD"),
    ("did", "VBD"),
    ("be", "VB"),
    ("been", "VBN"),
    ("being", "VBG"),
    ("not", "RB"),
    ("very", "RB"),
    ("really", "RB"),
    ("too", "RB"),
    ("also", "RB"),
    ("just", "RB"),
    ("never", "RB"),
    ("always", "RB"),
    ("often", "RB"),
    ("here", "RB"),
    ("now", "RB"),
    ("then", "RB"),
    ("quite", "RB"),
    ("so", "RB"),
    ("there", "EX"),
    ("wow", "UH"),
    ("oh", "UH"),
    ("hey", "UH"),
    ("hello", "UH"),
    ("yes", "UH"),
    ("ouch", "UH"),
    ("alas", "UH"),
];

// Open-class words the suffix rules would get wrong.
const COMMON_ADJECTIVES: &[&str] = &[
    "good", "great", "bad", "new", "old", "big", "small", "large", "long", "short", "high",
    "low", "young", "little", "few", "many", "other", "same", "different", "important", "real",
    "happy", "sad", "angry", "calm", "nice", "fine", "poor", "rich", "dark", "bright", "red",
    "blue", "green", "white", "black", "cold", "hot", "warm", "free", "true", "false", "hard",
    "easy", "strong", "weak", "quick", "slow", "deep", "full", "empty", "clean", "dirty",
    "awful", "terrible", "horrible", "excellent", "amazing", "wonderful", "lovely", "ugly",
    "afraid", "scared", "glad", "proud", "sick", "tired", "best", "worst", "better", "worse",
];

const SENTIMENT: &[(&str, f64, f64)] = &[
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("wonderful", 1.0, 1.0),
    ("lovely", 0.5, 0.75),
    ("nice", 0.6, 1.0),
    ("fine", 0.4, 0.5),
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("proud", 0.8, 1.0),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("like", 0.2, 0.3),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("beautiful", 0.85, 1.0),
    ("fun", 0.3, 0.2),
    ("perfect", 1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("awful", -1.0, 1.0),
    ("terrible", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("worse", -0.4, 0.6),
    ("ugly", -0.7, 1.0),
    ("sad", -0.5, 1.0),
    ("angry", -0.5, 1.0),
    ("hate", -0.8, 0.9),
    ("hated", -0.9, 0.7),
    ("poor", -0.4, 0.6),
    ("sick", -0.7, 0.9),
    ("tired", -0.4, 0.7),
    ("boring", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
    ("dirty", -0.6, 0.8),
    ("afraid", -0.6, 0.9),
    ("scared", -0.5, 0.9),
];

const EMOTIONS: &[(&str, &str)] = &[
    ("angry", "anger"),
    ("anger", "anger"),
    ("furious", "anger"),
    ("rage", "anger"),
    ("hate", "anger"),
    ("hated", "anger"),
    ("annoyed", "anger"),
    ("disgusting", "disgust"),
    ("disgusted", "disgust"),
    ("gross", "disgust"),
    ("nasty", "disgust"),
    ("dirty", "disgust"),
    ("ugly", "disgust"),
    ("afraid", "fear"),
    ("scared", "fear"),
    ("fear", "fear"),
    ("terrified", "fear"),
    ("worried", "fear"),
    ("nervous", "fear"),
    ("danger", "fear"),
    ("happy", "joy"),
    ("glad", "joy"),
    ("joy", "joy"),
    ("love", "joy"),
    ("loved", "joy"),
    ("great", "joy"),
    ("wonderful", "joy"),
    ("excellent", "joy"),
    ("fun", "joy"),
    ("proud", "joy"),
    ("sad", "sadness"),
    ("unhappy", "sadness"),
    ("cry", "sadness"),
    ("cried", "sadness"),
    ("lonely", "sadness"),
    ("miss", "sadness"),
    ("lost", "sadness"),
    ("tired", "sadness"),
    ("wow", "surprise"),
    ("surprised", "surprise"),
    ("amazing", "surprise"),
    ("sudden", "surprise"),
    ("suddenly", "surprise"),
    ("unexpected", "surprise"),
    ("shocked", "surprise"),
];

pub const NEGATIONS: &[&str] = &["not", "never", "no", "nothing", "nobody", "neither"];

pub static CLOSED_CLASS_TAGS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| CLOSED_CLASS.iter().copied().collect());

pub fn is_common_adjective(word: &str) -> bool {
    COMMON_ADJECTIVES.contains(&word)
}

pub static SENTIMENT_SCORES: LazyLock<HashMap<&'static str, (f64, f64)>> = LazyLock::new(|| {
    SENTIMENT
        .iter()
        .map(|(word, polarity, subjectivity)| (*word, (*polarity, *subjectivity)))
        .collect()
});

pub static EMOTION_WORDS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| EMOTIONS.iter().copied().collect());

pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't")
}
