// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for feature computation and annotation.
//!
//! These fire once per feature per sample, so they log at `debug!` or
//! lower. Failed annotation is the exception: it takes every annotation
//! dependent feature of the sample down with it.

use crate::errors::{AnnotationError, FeatureError};
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// A feature was computed and cached.
///
/// # Log Level
/// `trace!` - Per-feature detail
pub struct FeatureComputed<'a> {
    pub feature: &'a str,
    pub duration: Duration,
}

impl Display for FeatureComputed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Computed feature '{}' in {:?}", self.feature, self.duration)
    }
}

impl StructuredLog for FeatureComputed<'_> {
    fn log(&self) {
        tracing::trace!(
            feature = self.feature,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "feature_computed",
            span_name = name,
            feature = self.feature,
            duration = ?self.duration,
        )
    }
}

/// A feature failed; the failure is cached like a value.
///
/// # Log Level
/// `debug!` - Expected for empty or degenerate input
///
/// # Example
/// ```
/// use the_lexigraph::errors::FeatureError;
/// use the_lexigraph::observability::messages::features::FeatureFailed;
///
/// let error = FeatureError::EmptyInput {
///     feature: "vowel_density".to_string(),
/// };
/// let msg = FeatureFailed {
///     feature: "vowel_density",
///     error: &error,
/// };
///
/// assert!(msg.to_string().contains("vowel_density"));
/// ```
pub struct FeatureFailed<'a> {
    pub feature: &'a str,
    pub error: &'a FeatureError,
}

impl Display for FeatureFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Feature '{}' failed: {}", self.feature, self.error)
    }
}

impl StructuredLog for FeatureFailed<'_> {
    fn log(&self) {
        tracing::debug!(
            feature = self.feature,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "feature_failed",
            span_name = name,
            feature = self.feature,
            error = %self.error,
        )
    }
}

/// The annotation provider was called for a sample.
///
/// # Log Level
/// `debug!` - Once per sample
pub struct AnnotationStarted<'a> {
    pub provider: &'a str,
    pub text_length: usize,
}

impl Display for AnnotationStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Annotating {} bytes with provider '{}'",
            self.text_length, self.provider
        )
    }
}

impl StructuredLog for AnnotationStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            provider = self.provider,
            text_length = self.text_length,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "annotation",
            span_name = name,
            provider = self.provider,
            text_length = self.text_length,
        )
    }
}

/// The annotation provider returned a bundle.
///
/// # Log Level
/// `debug!` - Once per sample
pub struct AnnotationCompleted<'a> {
    pub provider: &'a str,
    pub sentence_count: usize,
    pub token_count: usize,
    pub duration: Duration,
}

impl Display for AnnotationCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Provider '{}' annotated {} sentences, {} tokens in {:?}",
            self.provider, self.sentence_count, self.token_count, self.duration
        )
    }
}

impl StructuredLog for AnnotationCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            provider = self.provider,
            sentence_count = self.sentence_count,
            token_count = self.token_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "annotation_completed",
            span_name = name,
            provider = self.provider,
            sentence_count = self.sentence_count,
            token_count = self.token_count,
            duration = ?self.duration,
        )
    }
}

/// The annotation provider failed for a sample.
///
/// # Log Level
/// `warn!` - Every annotation dependent feature of the sample will fail
pub struct AnnotationFailed<'a> {
    pub provider: &'a str,
    pub error: &'a AnnotationError,
}

impl Display for AnnotationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Provider '{}' failed: {}", self.provider, self.error)
    }
}

impl StructuredLog for AnnotationFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            provider = self.provider,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "annotation_failed",
            span_name = name,
            provider = self.provider,
            error = %self.error,
        )
    }
}
