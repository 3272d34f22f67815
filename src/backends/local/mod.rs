// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod factory;
mod lexicon;
pub mod rule_based;
mod tagger;

pub use factory::LocalAnnotatorFactory;
pub use rule_based::RuleBasedAnnotator;
