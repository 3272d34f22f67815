// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for batch extraction events.
//!
//! This module contains message types for logging events related to:
//! * Batch lifecycle (start, completion)
//! * Per-sample outcomes
//! * Worker failures and fail-fast cancellation

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Batch extraction started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_lexigraph::observability::messages::engine::BatchStarted;
///
/// let msg = BatchStarted {
///     sample_count: 10,
///     feature_count: 54,
///     max_concurrency: 4,
///     strategy: "continue_on_error",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct BatchStarted<'a> {
    pub sample_count: usize,
    pub feature_count: usize,
    pub max_concurrency: usize,
    pub strategy: &'a str,
}

impl Display for BatchStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting batch extraction: {} samples, {} features, max_concurrency={}, strategy={}",
            self.sample_count, self.feature_count, self.max_concurrency, self.strategy
        )
    }
}

impl StructuredLog for BatchStarted<'_> {
    fn log(&self) {
        tracing::info!(
            sample_count = self.sample_count,
            feature_count = self.feature_count,
            max_concurrency = self.max_concurrency,
            strategy = self.strategy,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "batch",
            span_name = name,
            sample_count = self.sample_count,
            feature_count = self.feature_count,
            max_concurrency = self.max_concurrency,
            strategy = self.strategy,
        )
    }
}

/// Batch extraction finished, with or without failed samples.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_lexigraph::observability::messages::engine::BatchCompleted;
/// use std::time::Duration;
///
/// let msg = BatchCompleted {
///     sample_count: 10,
///     failed_count: 1,
///     duration: Duration::from_millis(40),
/// };
///
/// assert!(msg.to_string().contains("1 with failures"));
/// ```
pub struct BatchCompleted {
    pub sample_count: usize,
    pub failed_count: usize,
    pub duration: Duration,
}

impl Display for BatchCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.failed_count > 0 {
            write!(
                f,
                "Batch extraction completed: {} samples, {} with failures, in {:?}",
                self.sample_count, self.failed_count, self.duration
            )
        } else {
            write!(
                f,
                "Batch extraction completed: {} samples in {:?}",
                self.sample_count, self.duration
            )
        }
    }
}

impl StructuredLog for BatchCompleted {
    fn log(&self) {
        tracing::info!(
            sample_count = self.sample_count,
            failed_count = self.failed_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "batch_completed",
            span_name = name,
            sample_count = self.sample_count,
            failed_count = self.failed_count,
            duration = ?self.duration,
        )
    }
}

/// One sample was extracted.
///
/// # Log Level
/// `debug!` - Per-sample detail
pub struct SampleCompleted {
    pub index: usize,
    pub feature_count: usize,
    pub duration: Duration,
}

impl Display for SampleCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Sample {} extracted: {} features in {:?}",
            self.index, self.feature_count, self.duration
        )
    }
}

impl StructuredLog for SampleCompleted {
    fn log(&self) {
        tracing::debug!(
            index = self.index,
            feature_count = self.feature_count,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "sample",
            span_name = name,
            index = self.index,
            feature_count = self.feature_count,
        )
    }
}

/// A sample finished with failed features.
///
/// # Log Level
/// `warn!` - Partial result
pub struct SampleFailed<'a> {
    pub index: usize,
    pub failed_features: &'a [&'a str],
}

impl Display for SampleFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Sample {} has {} failed features: {}",
            self.index,
            self.failed_features.len(),
            self.failed_features.join(", ")
        )
    }
}

impl StructuredLog for SampleFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            index = self.index,
            failure_count = self.failed_features.len(),
            failed_features = self.failed_features.join(", "),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "sample_failed",
            span_name = name,
            index = self.index,
            failure_count = self.failed_features.len(),
        )
    }
}

/// A worker task panicked or was cancelled before returning its sample.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct WorkerPanicked<'a> {
    pub index: usize,
    pub message: &'a str,
}

impl Display for WorkerPanicked<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Worker for sample {} panicked: {}", self.index, self.message)
    }
}

impl StructuredLog for WorkerPanicked<'_> {
    fn log(&self) {
        tracing::error!(
            index = self.index,
            message = self.message,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "worker_panicked",
            span_name = name,
            index = self.index,
        )
    }
}

/// Fail-fast stopped the batch at the first failed sample.
///
/// # Log Level
/// `warn!` - Remaining samples are discarded
pub struct FailFastTriggered {
    pub index: usize,
    pub remaining: usize,
}

impl Display for FailFastTriggered {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Fail-fast triggered by sample {}, abandoning {} pending samples",
            self.index, self.remaining
        )
    }
}

impl StructuredLog for FailFastTriggered {
    fn log(&self) {
        tracing::warn!(
            index = self.index,
            remaining = self.remaining,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "fail_fast",
            span_name = name,
            index = self.index,
            remaining = self.remaining,
        )
    }
}
