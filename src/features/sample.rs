// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::DEFAULT_TAGRAM_ORDER;
use crate::errors::ValidationError;

/// The immutable input of a feature computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSample {
    raw_text: String,
    tagram_order: usize,
}

impl TextSample {
    /// A sample with the default tag-gram order.
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            tagram_order: DEFAULT_TAGRAM_ORDER,
        }
    }

    /// A sample with an explicit tag-gram order, which must be at least 1.
    pub fn with_tagram_order(
        raw_text: impl Into<String>,
        tagram_order: usize,
    ) -> Result<Self, ValidationError> {
        if tagram_order == 0 {
            return Err(ValidationError::InvalidTagramOrder {
                order: tagram_order,
            });
        }
        Ok(Self {
            raw_text: raw_text.into(),
            tagram_order,
        })
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn tagram_order(&self) -> usize {
        self.tagram_order
    }

    /// True when the raw text holds nothing but whitespace, which is exactly
    /// when `clean` yields an empty string. Punctuation-only text such as
    /// `"!!!"` is not blank even though `text_norm` strips it to nothing.
    pub fn is_blank(&self) -> bool {
        self.raw_text.split_whitespace().next().is_none()
    }
}
