// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Text normalization applied before annotation.

/// Trim, split on whitespace, lower-case each token, and rejoin with single spaces.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `clean_text` applied after stripping leading and trailing ASCII punctuation.
pub fn normalize_text(text: &str) -> String {
    clean_text(text.trim_matches(|c: char| c.is_ascii_punctuation()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_collapses_whitespace_and_case() {
        assert_eq!(clean_text("  The  Ship\twas\nGREAT  "), "the ship was great");
        assert_eq!(clean_text("   "), "");
    }

    #[test]
    fn test_normalize_strips_edge_punctuation_only() {
        assert_eq!(normalize_text("\"Wow! It's great.\""), "wow! it's great");
        assert_eq!(normalize_text("...?!"), "");
    }

    #[test]
    fn test_normalize_keeps_inner_whitespace_rule() {
        assert_eq!(normalize_text("!!  Hello   World  !!"), "hello world");
    }
}
