// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Lazy, memoized feature computation over a single text sample.
//!
//! Two tiers compose: `TextFeatures` computes the base features from the raw
//! text and one shared annotation bundle, and `LexicalFeatures` wraps it with
//! orthographic counts. Every feature is computed at most once per instance.

pub mod catalog;
pub mod extractor;
pub mod lexical;
mod memo;
pub mod normalize;
pub mod patterns;
pub mod sample;
pub mod stats;
pub mod text;
pub mod value;

pub use catalog::{
    base_features, declarations, declared_features, FeatureDeclaration, FeatureId, Tier,
    EXTENSION_FEATURES,
};
pub use extractor::FeatureExtractor;
pub use lexical::LexicalFeatures;
pub use sample::TextSample;
pub use text::TextFeatures;
pub use value::{FeatureEntry, FeatureFailure, FeatureValue, FeatureVector};
