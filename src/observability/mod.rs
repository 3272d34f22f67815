// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! All diagnostic output goes through message types in `messages`. Each is
//! a small struct with a `Display` implementation, so log text lives in one
//! place instead of being scattered through format strings.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::config` - config loading and annotator construction
//! * `messages::engine` - batch lifecycle and per-sample outcomes
//! * `messages::features` - feature computation and annotation
//! * `messages::validation` - feature catalog and selection validation
//!
//! # Usage
//!
//! ```rust
//! use the_lexigraph::errors::AnnotationError;
//! use the_lexigraph::observability::messages::features::AnnotationFailed;
//!
//! let error = AnnotationError::BackendUnavailable("timeout".to_string());
//! let msg = AnnotationFailed {
//!     provider: "rule_based",
//!     error: &error,
//! };
//!
//! tracing::warn!("{}", msg);
//! ```
//!
//! Subscribers are installed by the binary; the library only emits events.

pub mod messages;
