// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use crate::annotation::Sentiment;
use crate::errors::FeatureError;
use crate::features::FeatureId;

/// A computed feature value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Count(usize),
    Ratio(f64),
    Pair { polarity: f64, subjectivity: f64 },
    TagGrams(BTreeMap<String, usize>),
}

impl FeatureValue {
    pub fn as_count(&self) -> Option<usize> {
        match self {
            FeatureValue::Count(count) => Some(*count),
            _ => None,
        }
    }

    pub fn as_ratio(&self) -> Option<f64> {
        match self {
            FeatureValue::Ratio(ratio) => Some(*ratio),
            _ => None,
        }
    }

    pub fn as_tag_grams(&self) -> Option<&BTreeMap<String, usize>> {
        match self {
            FeatureValue::TagGrams(grams) => Some(grams),
            _ => None,
        }
    }

    // The catalog fixes the value kind of every feature, so a mismatch in the
    // extractors below is a bug in a tier's compute table.

    pub(crate) fn into_count(self, feature: FeatureId) -> usize {
        match self {
            FeatureValue::Count(count) => count,
            other => unreachable!("feature '{}' produced {:?} instead of a count", feature, other),
        }
    }

    pub(crate) fn into_ratio(self, feature: FeatureId) -> f64 {
        match self {
            FeatureValue::Ratio(ratio) => ratio,
            other => unreachable!("feature '{}' produced {:?} instead of a ratio", feature, other),
        }
    }

    pub(crate) fn into_sentiment(self, feature: FeatureId) -> Sentiment {
        match self {
            FeatureValue::Pair {
                polarity,
                subjectivity,
            } => Sentiment {
                polarity,
                subjectivity,
            },
            other => unreachable!("feature '{}' produced {:?} instead of a pair", feature, other),
        }
    }

    pub(crate) fn into_tag_grams(self, feature: FeatureId) -> BTreeMap<String, usize> {
        match self {
            FeatureValue::TagGrams(grams) => grams,
            other => unreachable!("feature '{}' produced {:?} instead of tag-grams", feature, other),
        }
    }
}

/// A named feature that could not be computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureFailure {
    pub feature: String,
    #[serde(serialize_with = "serialize_display")]
    pub error: FeatureError,
}

fn serialize_display<S: Serializer>(error: &FeatureError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureEntry {
    pub name: String,
    pub outcome: Result<FeatureValue, FeatureError>,
}

/// Flat, ordered mapping of feature names to values or failures.
///
/// Entries keep the order they were pushed in, which is declaration order
/// when the vector is built from a tier.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureVector {
    entries: Vec<FeatureEntry>,
}

impl FeatureVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, feature: FeatureId, outcome: Result<FeatureValue, FeatureError>) {
        self.entries.push(FeatureEntry {
            name: feature.name().into_owned(),
            outcome,
        });
    }

    pub fn extend(&mut self, other: FeatureVector) {
        self.entries.extend(other.entries);
    }

    /// Value of a feature, if it was computed successfully.
    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.entry(name).and_then(|entry| entry.outcome.as_ref().ok())
    }

    /// Error of a feature, if it failed.
    pub fn error(&self, name: &str) -> Option<&FeatureError> {
        self.entry(name).and_then(|entry| entry.outcome.as_ref().err())
    }

    pub fn entry(&self, name: &str) -> Option<&FeatureEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureEntry> {
        self.entries.iter()
    }

    pub fn failures(&self) -> Vec<FeatureFailure> {
        self.entries
            .iter()
            .filter_map(|entry| {
                entry.outcome.as_ref().err().map(|error| FeatureFailure {
                    feature: entry.name.clone(),
                    error: error.clone(),
                })
            })
            .collect()
    }

    /// True when every entry was computed successfully.
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|entry| entry.outcome.is_ok())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

struct OrderedValues<'a>(&'a [FeatureEntry]);

impl Serialize for OrderedValues<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let values: Vec<(&str, &FeatureValue)> = self
            .0
            .iter()
            .filter_map(|entry| entry.outcome.as_ref().ok().map(|value| (entry.name.as_str(), value)))
            .collect();

        let mut map = serializer.serialize_map(Some(values.len()))?;
        for (name, value) in values {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FeatureVector", 2)?;
        state.serialize_field("features", &OrderedValues(&self.entries))?;
        state.serialize_field("failures", &self.failures())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vector() -> FeatureVector {
        let mut vector = FeatureVector::new();
        vector.push(FeatureId::VowelCount, Ok(FeatureValue::Count(4)));
        vector.push(
            FeatureId::VowelDensity,
            Err(FeatureError::EmptyInput {
                feature: "vowel_density".to_string(),
            }),
        );
        vector.push(
            FeatureId::TagGrams(1),
            Ok(FeatureValue::TagGrams(BTreeMap::from([("nn".to_string(), 2)]))),
        );
        vector
    }

    #[test]
    fn test_lookup_and_failures() {
        let vector = sample_vector();

        assert_eq!(vector.len(), 3);
        assert_eq!(vector.get("vowel_count"), Some(&FeatureValue::Count(4)));
        assert_eq!(vector.get("vowel_density"), None);
        assert!(vector.error("vowel_density").is_some());
        assert!(!vector.is_complete());

        let failures = vector.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].feature, "vowel_density");
    }

    #[test]
    fn test_serializes_in_declaration_order() {
        let json = serde_json::to_string(&sample_vector()).unwrap();
        assert_eq!(
            json,
            r#"{"features":{"vowel_count":4,"unitags":{"nn":2}},"failures":[{"feature":"vowel_density","error":"Feature 'vowel_density' cannot be computed from empty input"}]}"#
        );
    }

    #[test]
    fn test_pair_serializes_as_object() {
        let value = FeatureValue::Pair {
            polarity: 0.5,
            subjectivity: 0.25,
        };
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"polarity":0.5,"subjectivity":0.25}"#
        );
    }
}
