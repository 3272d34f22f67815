// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Annotation provider implementations.
//!
//! Feature tiers only see the `AnnotationProvider` trait; a backend is picked
//! by name from configuration and shared by every sample of a run.
//!
//! # Available Backends
//!
//! ## Local Backend
//! In-process providers:
//! - **RuleBasedAnnotator**: sentence splitting, tokenization, lexicon and
//!   suffix based tagging, noun phrase and entity chunking, lexicon sentiment
//!   and emotion scoring
//!
//! ## Stub Backend (Test-Only)
//! Providers for exercising the feature tiers (only available in test builds):
//! - **FixedAnnotator**: returns a canned bundle
//! - **CountingAnnotator**: records calls, to check annotation happens once
//! - **FailingAnnotator**: always fails with a given `AnnotationError`
//! - **PanickingAnnotator**: panics on marked input, for batch isolation tests
//!
//! # Examples
//!
//! ```rust
//! use the_lexigraph::backends::local::LocalAnnotatorFactory;
//!
//! let annotator = LocalAnnotatorFactory::create_annotator("rule_based")?;
//! let bundle = annotator.annotate("the ship sailed. it was great.")?;
//! assert_eq!(bundle.sentences.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod local;
#[cfg(test)]
pub mod stub;
