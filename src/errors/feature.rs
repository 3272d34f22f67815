// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors surfaced by feature accessors.
//!
//! Every variant except `CyclicDependency` names the feature whose accessor
//! failed. When a feature fails because one of its dependencies failed, the
//! error is re-attributed to the dependent feature while keeping the kind and
//! cause of the original failure.

use thiserror::Error;

use crate::errors::AnnotationError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeatureError {
    /// The sample is empty (or collapses to empty after normalization).
    #[error("Feature '{feature}' cannot be computed from empty input")]
    EmptyInput { feature: String },

    /// The annotation provider failed for this sample.
    #[error("Feature '{feature}' failed during annotation: {source}")]
    Annotation {
        feature: String,
        source: AnnotationError,
    },

    /// A ratio's denominator is zero although the input was not empty.
    #[error("Feature '{feature}' has a zero denominator: {denominator} = 0")]
    DegenerateDenominator { feature: String, denominator: String },

    /// The feature set the feature was requested from does not compute it.
    #[error("Feature '{feature}' is not provided by this feature set")]
    NotProvided { feature: String },

    /// A feature was requested while it was already being computed.
    #[error("Cyclic feature dependency detected: {}", cycle.join(" -> "))]
    CyclicDependency { cycle: Vec<String> },
}

impl FeatureError {
    /// Name of the feature this error is attributed to, if any.
    pub fn feature(&self) -> Option<&str> {
        match self {
            FeatureError::EmptyInput { feature }
            | FeatureError::Annotation { feature, .. }
            | FeatureError::DegenerateDenominator { feature, .. }
            | FeatureError::NotProvided { feature } => Some(feature),
            FeatureError::CyclicDependency { .. } => None,
        }
    }

    /// Re-attribute this error to `feature`, keeping its kind and cause.
    pub fn attributed_to(self, feature: &str) -> Self {
        match self {
            FeatureError::EmptyInput { .. } => FeatureError::EmptyInput {
                feature: feature.to_string(),
            },
            FeatureError::Annotation { source, .. } => FeatureError::Annotation {
                feature: feature.to_string(),
                source,
            },
            FeatureError::DegenerateDenominator { denominator, .. } => {
                FeatureError::DegenerateDenominator {
                    feature: feature.to_string(),
                    denominator,
                }
            }
            other @ (FeatureError::NotProvided { .. } | FeatureError::CyclicDependency { .. }) => other,
        }
    }
}
