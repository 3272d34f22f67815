// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::features::{declared_features, FeatureId, FeatureVector, LexicalFeatures, TextFeatures, TextSample};
use crate::traits::{AnnotationProvider, FeatureSet};

/// Builds the feature tiers for one sample at a time and flattens them.
///
/// Each call to `extract` starts from empty caches, so samples never share
/// computed values. The provider is shared.
#[derive(Clone)]
pub struct FeatureExtractor {
    provider: Arc<dyn AnnotationProvider>,
    selection: Option<Vec<FeatureId>>,
}

impl FeatureExtractor {
    pub fn new(provider: Arc<dyn AnnotationProvider>) -> Self {
        Self {
            provider,
            selection: None,
        }
    }

    /// Restrict extraction to `selection`, in the given order.
    pub fn with_selection(mut self, selection: Vec<FeatureId>) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn selection(&self) -> Option<&[FeatureId]> {
        self.selection.as_deref()
    }

    pub fn provider(&self) -> &Arc<dyn AnnotationProvider> {
        &self.provider
    }

    /// Features `extract` will emit for `sample`, in output order.
    pub fn features_for(&self, sample: &TextSample) -> Vec<FeatureId> {
        match &self.selection {
            Some(selection) => selection.clone(),
            None => declared_features(sample.tagram_order()),
        }
    }

    /// Base tier followed by the extension tier, or the selection if one is set.
    pub fn extract(&self, sample: &TextSample) -> FeatureVector {
        let base = TextFeatures::new(sample, self.provider.as_ref());
        let lexical = LexicalFeatures::new(&base);

        match &self.selection {
            None => {
                let mut vector = base.to_vector();
                vector.extend(lexical.to_vector());
                vector
            }
            Some(selection) => {
                let mut vector = FeatureVector::new();
                for feature in selection {
                    vector.push(*feature, lexical.evaluate(*feature));
                }
                vector
            }
        }
    }
}

impl std::fmt::Debug for FeatureExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureExtractor")
            .field("provider", &self.provider.name())
            .field("selection", &self.selection)
            .finish()
    }
}
