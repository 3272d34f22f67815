// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Errors that can occur while validating configuration and the feature catalog
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A circular dependency was detected in the feature graph
    CyclicDependency {
        /// The cycle path showing the circular dependency
        cycle: Vec<String>,
    },
    /// A feature references a dependency that isn't declared
    UnresolvedDependency {
        /// The feature that has the unresolved dependency
        feature: String,
        /// The dependency that couldn't be resolved
        missing_dependency: String,
    },
    /// A requested feature name is not part of the catalog
    UnknownFeature {
        /// The name as it was requested
        name: String,
    },
    /// A feature is listed more than once in a selection
    DuplicateFeature {
        /// The duplicated feature name
        name: String,
    },
    /// The tag-gram order must be at least 1
    InvalidTagramOrder {
        /// The rejected order
        order: usize,
    },
    /// The configured annotator is not available
    UnknownAnnotator {
        /// The configured annotator name
        name: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::CyclicDependency { cycle } => {
                write!(f, "Cyclic dependency detected: {}", cycle.join(" -> "))
            }
            ValidationError::UnresolvedDependency {
                feature,
                missing_dependency,
            } => {
                write!(
                    f,
                    "Feature '{}' depends on '{}' which does not exist",
                    feature, missing_dependency
                )
            }
            ValidationError::UnknownFeature { name } => {
                write!(f, "Unknown feature: '{}'", name)
            }
            ValidationError::DuplicateFeature { name } => {
                write!(f, "Duplicate feature in selection: '{}'", name)
            }
            ValidationError::InvalidTagramOrder { order } => {
                write!(f, "Tag-gram order must be at least 1, got {}", order)
            }
            ValidationError::UnknownAnnotator { name } => {
                write!(f, "Unknown annotator: '{}'", name)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
