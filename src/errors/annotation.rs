// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised by annotation providers.
//!
//! A provider either returns a complete `AnnotationBundle` or one of these
//! errors; partial bundles are never produced.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnnotationError {
    /// The input could not be decoded or contains characters the backend rejects.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Part-of-speech tagging failed.
    #[error("Tagging failed: {0}")]
    TaggingFailed(String),

    /// Spelling correction failed.
    #[error("Spelling correction failed: {0}")]
    CorrectionFailed(String),

    /// Sentiment or emotion scoring failed.
    #[error("Scoring failed: {0}")]
    ScoringFailed(String),

    /// The backend (model server, remote service) could not be reached.
    #[error("Annotation backend unavailable: {0}")]
    BackendUnavailable(String),
}
