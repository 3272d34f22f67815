// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for annotator instantiation.

use std::error::Error;
use std::fmt;

/// Errors that can occur while creating an annotation provider from configuration
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotatorFactoryError {
    /// No local annotator is registered under this name
    UnknownAnnotator { name: String },
}

impl fmt::Display for AnnotatorFactoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotatorFactoryError::UnknownAnnotator { name } => {
                write!(f, "Unknown local annotator implementation: '{}'", name)
            }
        }
    }
}

impl Error for AnnotatorFactoryError {}
