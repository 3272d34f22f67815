// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Batch execution errors and failure handling strategies.

use serde::Deserialize;
use thiserror::Error;

use crate::features::FeatureFailure;

/// How a batch run reacts to samples with failed features.
///
/// * `FailFast` - stop at the first sample with any failed feature
/// * `ContinueOnError` - run every sample; failed samples get an error slot
///   beside the complete vectors
/// * `BestEffort` - run every sample and return every vector, failures embedded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStrategy {
    FailFast,
    #[default]
    ContinueOnError,
    BestEffort,
}

impl FailureStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureStrategy::FailFast => "fail_fast",
            FailureStrategy::ContinueOnError => "continue_on_error",
            FailureStrategy::BestEffort => "best_effort",
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ExecutionError {
    /// One sample produced failed features.
    #[error("Sample {index} failed: {}", describe_failures(failures))]
    SampleFailed {
        index: usize,
        failures: Vec<FeatureFailure>,
    },

    /// Several failed slots folded together by `BatchOutcome::into_vectors`.
    #[error("{} samples failed", failures.len())]
    MultipleFailed { failures: Vec<ExecutionError> },

    /// A worker thread panicked while computing a sample.
    #[error("Worker for sample {index} panicked: {message}")]
    WorkerPanicked { index: usize, message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

fn describe_failures(failures: &[FeatureFailure]) -> String {
    failures
        .iter()
        .map(|failure| format!("{} ({})", failure.feature, failure.error))
        .collect::<Vec<_>>()
        .join(", ")
}
