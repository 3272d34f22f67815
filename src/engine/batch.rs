// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Bounded-concurrency batch extraction.
//!
//! Every sample gets its own tier instances, computed on a blocking worker
//! thread. A `tokio::sync::Semaphore` caps how many samples are in flight.
//! Samples share only the annotation provider, so results never depend on
//! scheduling, and they are returned in input order.
//!
//! # Failure Strategies
//!
//! - **FailFast**: the first sample (in input order) with a failed feature
//!   ends the run with `SampleFailed`; pending samples are abandoned
//! - **ContinueOnError**: every sample runs; complete vectors come back next
//!   to a `SampleFailed` entry for each failed sample
//! - **BestEffort**: every sample runs and every vector is returned with its
//!   failures embedded
//!
//! A panicking worker has no vector to return, so its slot holds
//! `WorkerPanicked` under every strategy, and `FailFast` stops on it.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use the_lexigraph::backends::local::RuleBasedAnnotator;
//! use the_lexigraph::engine::BatchExtractor;
//! use the_lexigraph::errors::FailureStrategy;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let batch = BatchExtractor::new(Arc::new(RuleBasedAnnotator::new()), 3, None, 2)?;
//! let texts = vec!["The ship sailed.".to_string(), "".to_string()];
//!
//! let outcome = batch.run(texts, FailureStrategy::ContinueOnError).await?;
//! assert_eq!(outcome.len(), 2);
//! assert_eq!(outcome.vectors().count(), 1);
//! assert_eq!(outcome.failures().count(), 1);
//! # Ok(())
//! # }
//! ```

use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;
use tokio::task::JoinError;

use crate::errors::{ExecutionError, FailureStrategy, ValidationError};
use crate::features::{declared_features, FeatureExtractor, FeatureId, FeatureVector, TextSample};
use crate::observability::messages::engine::{
    BatchCompleted, BatchStarted, FailFastTriggered, SampleCompleted, SampleFailed, WorkerPanicked,
};
use crate::observability::messages::StructuredLog;
use crate::traits::AnnotationProvider;

/// Per-sample results of a batch run, in input order.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    results: Vec<Result<FeatureVector, ExecutionError>>,
}

impl BatchOutcome {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn results(&self) -> &[Result<FeatureVector, ExecutionError>] {
        &self.results
    }

    pub fn get(&self, index: usize) -> Option<&Result<FeatureVector, ExecutionError>> {
        self.results.get(index)
    }

    /// Vectors that were produced, skipping failed slots.
    pub fn vectors(&self) -> impl Iterator<Item = &FeatureVector> {
        self.results.iter().filter_map(|result| result.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &ExecutionError> {
        self.results.iter().filter_map(|result| result.as_ref().err())
    }

    /// True when every slot holds a vector with no failed feature.
    pub fn is_complete(&self) -> bool {
        self.results
            .iter()
            .all(|result| matches!(result, Ok(vector) if vector.is_complete()))
    }

    pub fn into_results(self) -> Vec<Result<FeatureVector, ExecutionError>> {
        self.results
    }

    /// All vectors, or the failures folded into one error: a single failed
    /// slot is returned as is, several become `MultipleFailed`.
    pub fn into_vectors(self) -> Result<Vec<FeatureVector>, ExecutionError> {
        let mut vectors = Vec::with_capacity(self.results.len());
        let mut failures = Vec::new();
        for result in self.results {
            match result {
                Ok(vector) => vectors.push(vector),
                Err(error) => failures.push(error),
            }
        }

        match failures.len() {
            0 => Ok(vectors),
            1 => Err(failures.remove(0)),
            _ => Err(ExecutionError::MultipleFailed { failures }),
        }
    }
}

/// Runs a `FeatureExtractor` over many texts with bounded concurrency.
#[derive(Debug, Clone)]
pub struct BatchExtractor {
    extractor: FeatureExtractor,
    tagram_order: usize,
    max_concurrency: usize,
}

impl BatchExtractor {
    /// # Arguments
    /// * `provider` - Annotation provider shared by every sample
    /// * `tagram_order` - Largest tag-gram size (at least 1)
    /// * `selection` - Features to emit, in order; `None` emits every declared feature
    /// * `max_concurrency` - Samples computed at once; 0 is treated as 1
    pub fn new(
        provider: Arc<dyn AnnotationProvider>,
        tagram_order: usize,
        selection: Option<Vec<FeatureId>>,
        max_concurrency: usize,
    ) -> Result<Self, ValidationError> {
        if tagram_order == 0 {
            return Err(ValidationError::InvalidTagramOrder {
                order: tagram_order,
            });
        }

        let extractor = match selection {
            Some(selection) => FeatureExtractor::new(provider).with_selection(selection),
            None => FeatureExtractor::new(provider),
        };

        Ok(Self {
            extractor,
            tagram_order,
            max_concurrency: max_concurrency.max(1),
        })
    }

    pub fn extractor(&self) -> &FeatureExtractor {
        &self.extractor
    }

    pub fn tagram_order(&self) -> usize {
        self.tagram_order
    }

    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    /// Number of features each output vector holds.
    pub fn feature_count(&self) -> usize {
        self.extractor
            .selection()
            .map(<[FeatureId]>::len)
            .unwrap_or_else(|| declared_features(self.tagram_order).len())
    }

    /// Extract every text, returning one result per text in input order.
    ///
    /// Only `FailFast` returns `Err`; the other strategies report failed
    /// samples inside the `BatchOutcome`.
    pub async fn run(
        &self,
        texts: Vec<String>,
        strategy: FailureStrategy,
    ) -> Result<BatchOutcome, ExecutionError> {
        let started = Instant::now();
        let sample_count = texts.len();

        BatchStarted {
            sample_count,
            feature_count: self.feature_count(),
            max_concurrency: self.max_concurrency,
            strategy: strategy.as_str(),
        }
        .log();

        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));
        let cancelled = Arc::new(AtomicBool::new(false));
        let mut tasks = Vec::with_capacity(sample_count);

        for (index, text) in texts.into_iter().enumerate() {
            let sample = TextSample::with_tagram_order(text, self.tagram_order).map_err(|e| {
                ExecutionError::InternalError {
                    message: format!("Invalid sample {}: {}", index, e),
                }
            })?;
            let extractor = self.extractor.clone();
            let semaphore_clone = semaphore.clone();
            let cancelled_clone = cancelled.clone();

            let task = tokio::spawn(async move {
                let _permit =
                    semaphore_clone
                        .acquire_owned()
                        .await
                        .map_err(|e| ExecutionError::InternalError {
                            message: format!(
                                "Failed to acquire semaphore permit for sample {}: {}",
                                index, e
                            ),
                        })?;

                let sample_started = Instant::now();
                // Aborting this task does not stop the blocking worker, so an
                // abandoned sample checks the flag and skips extraction. One
                // that is already extracting runs to completion.
                let vector = tokio::task::spawn_blocking(move || {
                    (!cancelled_clone.load(Ordering::SeqCst)).then(|| extractor.extract(&sample))
                })
                .await
                .map_err(|join_error| {
                    let message = panic_message(join_error);
                    WorkerPanicked {
                        index,
                        message: &message,
                    }
                    .log();
                    ExecutionError::WorkerPanicked { index, message }
                })?
                .ok_or_else(|| ExecutionError::InternalError {
                    message: format!("Sample {} was cancelled", index),
                })?;

                SampleCompleted {
                    index,
                    feature_count: vector.len(),
                    duration: sample_started.elapsed(),
                }
                .log();
                Ok::<_, ExecutionError>(vector)
            });

            tasks.push(task);
        }

        let mut results = Vec::with_capacity(sample_count);
        let mut tasks = tasks.into_iter().enumerate();

        while let Some((index, task)) = tasks.next() {
            let outcome = match task.await {
                Ok(outcome) => outcome,
                Err(join_error) => Err(ExecutionError::InternalError {
                    message: format!("Task join error: {}", join_error),
                }),
            };

            let error = match outcome {
                Ok(vector) if vector.is_complete() => {
                    results.push(Ok(vector));
                    continue;
                }
                Ok(vector) => {
                    let sample_failures = vector.failures();
                    let names: Vec<&str> =
                        sample_failures.iter().map(|f| f.feature.as_str()).collect();
                    SampleFailed {
                        index,
                        failed_features: &names,
                    }
                    .log();

                    if strategy == FailureStrategy::BestEffort {
                        results.push(Ok(vector));
                        continue;
                    }
                    ExecutionError::SampleFailed {
                        index,
                        failures: sample_failures,
                    }
                }
                Err(error) => error,
            };

            if strategy == FailureStrategy::FailFast {
                cancelled.store(true, Ordering::SeqCst);
                let remaining: Vec<_> = tasks.by_ref().map(|(_, task)| task).collect();
                FailFastTriggered {
                    index,
                    remaining: remaining.len(),
                }
                .log();
                for task in remaining {
                    task.abort();
                }
                BatchCompleted {
                    sample_count,
                    failed_count: 1,
                    duration: started.elapsed(),
                }
                .log();
                return Err(error);
            }
            results.push(Err(error));
        }

        let outcome = BatchOutcome { results };
        BatchCompleted {
            sample_count,
            failed_count: outcome
                .results
                .iter()
                .filter(|result| !matches!(result, Ok(vector) if vector.is_complete()))
                .count(),
            duration: started.elapsed(),
        }
        .log();

        Ok(outcome)
    }
}

fn panic_message(join_error: JoinError) -> String {
    if join_error.is_cancelled() {
        return "worker was cancelled".to_string();
    }
    describe_panic(join_error.into_panic())
}

fn describe_panic(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
