// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod annotation;    // annotation bundle types
pub mod backends;      // annotation providers
pub mod config;        // config + catalog validation
pub mod engine;        // batch extraction
pub mod errors;        // error handling
pub mod features;      // feature tiers
pub mod observability;
pub mod traits;        // unified abstractions
