// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for feature catalog and selection validation.
//!
//! This module contains message types for logging events related to:
//! * Feature dependency validation
//! * Cyclic dependency detection
//! * Unresolved and unknown feature names
//! * Duplicate features in a selection

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Cyclic dependency detected between feature declarations.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use the_lexigraph::observability::messages::validation::CyclicDependencyDetected;
///
/// let cycle = vec!["polarity", "sentiment", "polarity"];
/// let msg = CyclicDependencyDetected {
///     cycle: &cycle,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct CyclicDependencyDetected<'a> {
    pub cycle: &'a [&'a str],
}

impl Display for CyclicDependencyDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Cyclic dependency detected: {}", self.cycle.join(" -> "))
    }
}

impl StructuredLog for CyclicDependencyDetected<'_> {
    fn log(&self) {
        tracing::error!(
            cycle = self.cycle.join(" -> "),
            cycle_length = self.cycle.len(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "validation",
            span_name = name,
            cycle = self.cycle.join(" -> "),
            cycle_length = self.cycle.len(),
        )
    }
}

/// A feature declares a dependency on a feature that does not exist.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct UnresolvedDependency<'a> {
    pub feature_id: &'a str,
    pub missing_dependency: &'a str,
}

impl Display for UnresolvedDependency<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Feature '{}' depends on missing feature '{}'",
            self.feature_id, self.missing_dependency
        )
    }
}

impl StructuredLog for UnresolvedDependency<'_> {
    fn log(&self) {
        tracing::error!(
            feature_id = self.feature_id,
            missing_dependency = self.missing_dependency,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "validation",
            span_name = name,
            feature_id = self.feature_id,
            missing_dependency = self.missing_dependency,
        )
    }
}

/// A selection names a feature no tier provides.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct UnknownFeatureRequested<'a> {
    pub name: &'a str,
}

impl Display for UnknownFeatureRequested<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Unknown feature requested: '{}'", self.name)
    }
}

impl StructuredLog for UnknownFeatureRequested<'_> {
    fn log(&self) {
        tracing::error!(feature = self.name, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "validation",
            span_name = name,
            feature = self.name,
        )
    }
}

/// A selection names the same feature twice.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct DuplicateFeature<'a> {
    pub feature_id: &'a str,
}

impl Display for DuplicateFeature<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Duplicate feature in selection: '{}'", self.feature_id)
    }
}

impl StructuredLog for DuplicateFeature<'_> {
    fn log(&self) {
        tracing::error!(feature_id = self.feature_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "validation",
            span_name = name,
            feature_id = self.feature_id,
        )
    }
}

/// Validation started.
///
/// # Log Level
/// `debug!` - Runs on every config load
pub struct ValidationStarted {
    pub feature_count: usize,
}

impl Display for ValidationStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting validation of {} feature declarations",
            self.feature_count
        )
    }
}

impl StructuredLog for ValidationStarted {
    fn log(&self) {
        tracing::debug!(feature_count = self.feature_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "validation",
            span_name = name,
            feature_count = self.feature_count,
        )
    }
}

/// Validation completed without errors.
///
/// # Log Level
/// `debug!` - Runs on every config load
pub struct ValidationCompleted {
    pub feature_count: usize,
}

impl Display for ValidationCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Validation completed successfully for {} feature declarations",
            self.feature_count
        )
    }
}

impl StructuredLog for ValidationCompleted {
    fn log(&self) {
        tracing::debug!(feature_count = self.feature_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "validation",
            span_name = name,
            feature_count = self.feature_count,
        )
    }
}

/// Validation failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use the_lexigraph::observability::messages::validation::ValidationFailed;
///
/// let msg = ValidationFailed { error_count: 2 };
/// assert_eq!(msg.to_string(), "Validation failed with 2 errors");
/// ```
pub struct ValidationFailed {
    pub error_count: usize,
}

impl Display for ValidationFailed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Validation failed with {} errors", self.error_count)
    }
}

impl StructuredLog for ValidationFailed {
    fn log(&self) {
        tracing::error!(error_count = self.error_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "validation",
            span_name = name,
            error_count = self.error_count,
        )
    }
}
