// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! `StructuredLog` to emit that line with its fields attached at the right
//! level.
//!
//! # Organization
//!
//! * `config` - configuration loading and annotator construction
//! * `engine` - batch extraction lifecycle and per-sample outcomes
//! * `features` - feature computation and annotation events
//! * `validation` - feature catalog and selection validation
//!
//! # Usage Pattern
//!
//! ```rust
//! use the_lexigraph::observability::messages::engine::BatchStarted;
//! use the_lexigraph::observability::messages::StructuredLog;
//!
//! let msg = BatchStarted {
//!     sample_count: 12,
//!     feature_count: 54,
//!     max_concurrency: 4,
//!     strategy: "continue_on_error",
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod config;
pub mod engine;
pub mod features;
pub mod validation;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event.
    fn log(&self);

    /// A span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
