// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Per-instance memoization of feature values.
//!
//! Each tier owns one `MemoTable`. A slot holds the outcome of a feature,
//! success or failure, so a feature is computed at most once per instance.
//! The in-progress stack detects a feature that is requested again while it
//! is still being computed and reports the cycle instead of recursing.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Instant;

use crate::errors::FeatureError;
use crate::features::{FeatureId, FeatureValue};
use crate::observability::messages::features::{FeatureComputed, FeatureFailed};
use crate::observability::messages::StructuredLog;

#[derive(Debug, Default)]
pub(crate) struct MemoTable {
    slots: RefCell<HashMap<FeatureId, Result<FeatureValue, FeatureError>>>,
    in_progress: RefCell<Vec<FeatureId>>,
}

impl MemoTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Return the cached outcome of `feature`, computing it first if needed.
    ///
    /// No borrow of the table is held while `compute` runs, so `compute` may
    /// read other features through the same table.
    pub(crate) fn get_or_compute<F>(
        &self,
        feature: FeatureId,
        compute: F,
    ) -> Result<FeatureValue, FeatureError>
    where
        F: FnOnce() -> Result<FeatureValue, FeatureError>,
    {
        if let Some(cached) = self.slots.borrow().get(&feature) {
            return cached.clone();
        }

        {
            let mut in_progress = self.in_progress.borrow_mut();
            if let Some(start) = in_progress.iter().position(|active| *active == feature) {
                let mut cycle: Vec<String> = in_progress[start..]
                    .iter()
                    .map(|active| active.name().into_owned())
                    .collect();
                cycle.push(feature.name().into_owned());
                return Err(FeatureError::CyclicDependency { cycle });
            }
            in_progress.push(feature);
        }

        let started = Instant::now();
        let name = feature.name();
        let outcome = compute().map_err(|error| error.attributed_to(&name));
        self.in_progress.borrow_mut().pop();

        match &outcome {
            Ok(_) => FeatureComputed {
                feature: &name,
                duration: started.elapsed(),
            }
            .log(),
            Err(error) => FeatureFailed {
                feature: &name,
                error,
            }
            .log(),
        }

        self.slots.borrow_mut().insert(feature, outcome.clone());
        outcome
    }

    pub(crate) fn is_computed(&self, feature: FeatureId) -> bool {
        self.slots.borrow().contains_key(&feature)
    }

    pub(crate) fn computed_count(&self) -> usize {
        self.slots.borrow().len()
    }
}
