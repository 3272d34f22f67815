// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use super::RuleBasedAnnotator;
use crate::errors::AnnotatorFactoryError;
use crate::observability::messages::config::AnnotatorCreated;
use crate::observability::messages::StructuredLog;
use crate::traits::AnnotationProvider;

/// Factory for creating local (in-process) annotation providers
pub struct LocalAnnotatorFactory;

impl LocalAnnotatorFactory {
    /// Create an annotation provider by name.
    ///
    /// - "rule_based" -> RuleBasedAnnotator
    pub fn create_annotator(
        name: &str,
    ) -> Result<Arc<dyn AnnotationProvider>, AnnotatorFactoryError> {
        let annotator: Arc<dyn AnnotationProvider> = match name {
            "rule_based" => Arc::new(RuleBasedAnnotator::new()),
            _ => {
                return Err(AnnotatorFactoryError::UnknownAnnotator {
                    name: name.to_string(),
                })
            }
        };

        AnnotatorCreated { name }.log();
        Ok(annotator)
    }

    /// List all available local annotator implementations
    pub fn list_available_implementations() -> Vec<&'static str> {
        vec!["rule_based"]
    }

    /// Check if an implementation is available
    pub fn is_implementation_available(name: &str) -> bool {
        Self::list_available_implementations().contains(&name)
    }
}
