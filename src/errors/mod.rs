// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod annotation;
mod annotator;
mod config;
mod execution;
mod feature;

pub use annotation::AnnotationError;
pub use annotator::AnnotatorFactoryError;
pub use config::ValidationError;
pub use execution::{ExecutionError, FailureStrategy};
pub use feature::FeatureError;
