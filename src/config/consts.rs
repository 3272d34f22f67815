// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Default tag-gram order (unitags, bitags, tritags)
pub const DEFAULT_TAGRAM_ORDER: usize = 3;
/// Default local annotator implementation
pub const DEFAULT_ANNOTATOR: &str = "rule_based";
/// Batch worker count when available parallelism cannot be determined
pub const FALLBACK_MAX_CONCURRENCY: usize = 4;
