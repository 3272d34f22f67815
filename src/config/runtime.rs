// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::backends::local::LocalAnnotatorFactory;
use crate::config::{resolve_selection, Config};
use crate::engine::BatchExtractor;
use crate::errors::FailureStrategy;
use crate::traits::AnnotationProvider;

/// Extraction runtime builder - creates the annotator and batch executor from configuration.
///
/// # Examples
///
/// ```
/// use the_lexigraph::config::{Config, RuntimeBuilder};
/// use the_lexigraph::errors::FailureStrategy;
///
/// let config = Config {
///     failure_strategy: FailureStrategy::BestEffort,
///     features: Some(vec!["entropy".to_string(), "vowel_count".to_string()]),
///     ..Config::default()
/// };
///
/// let (provider, batch, failure_strategy) = RuntimeBuilder::from_config(&config).unwrap();
///
/// assert_eq!(provider.name(), "rule_based");
/// assert_eq!(batch.feature_count(), 2);
/// assert_eq!(failure_strategy, FailureStrategy::BestEffort);
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build the extraction runtime from configuration.
    ///
    /// Creates and returns:
    /// - `Arc<dyn AnnotationProvider>`: the configured annotator, shared by every sample
    /// - `BatchExtractor`: bounded-concurrency executor over the configured features
    /// - `FailureStrategy`: how to handle samples with failed features
    ///
    /// # Arguments
    /// * `cfg` - Configuration naming the annotator, tag-gram order, selection and options
    pub fn from_config(
        cfg: &Config,
    ) -> Result<(Arc<dyn AnnotationProvider>, BatchExtractor, FailureStrategy), String> {
        let provider =
            LocalAnnotatorFactory::create_annotator(&cfg.annotator).map_err(|e| e.to_string())?;

        let selection = match &cfg.features {
            Some(names) => Some(resolve_selection(names).map_err(|errors| {
                errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("\n")
            })?),
            None => None,
        };

        let batch = BatchExtractor::new(
            provider.clone(),
            cfg.tagram_order,
            selection,
            cfg.executor_options.resolved_max_concurrency(),
        )
        .map_err(|e| e.to_string())?;

        Ok((provider, batch, cfg.failure_strategy))
    }
}
