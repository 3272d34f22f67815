// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading and runtime construction.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A configuration file was read and parsed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub format: &'a str,
    pub feature_count: Option<usize>,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.feature_count {
            Some(count) => write!(
                f,
                "Loaded {} config from '{}' selecting {} features",
                self.format, self.path, count
            ),
            None => write!(
                f,
                "Loaded {} config from '{}' selecting all features",
                self.format, self.path
            ),
        }
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            format = self.format,
            feature_count = self.feature_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "config",
            span_name = name,
            path = self.path,
            format = self.format,
        )
    }
}

/// An annotation provider was constructed.
///
/// # Log Level
/// `debug!` - Startup detail
///
/// # Example
/// ```
/// use the_lexigraph::observability::messages::config::AnnotatorCreated;
///
/// let msg = AnnotatorCreated { name: "rule_based" };
/// assert_eq!(msg.to_string(), "Created annotation provider 'rule_based'");
/// ```
pub struct AnnotatorCreated<'a> {
    pub name: &'a str,
}

impl Display for AnnotatorCreated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Created annotation provider '{}'", self.name)
    }
}

impl StructuredLog for AnnotatorCreated<'_> {
    fn log(&self) {
        tracing::debug!(annotator = self.name, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("annotator", span_name = name, annotator = self.name)
    }
}
