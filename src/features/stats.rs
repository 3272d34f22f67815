// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Numeric helpers shared by the feature tiers.

use std::collections::HashMap;

/// Shannon entropy (base 2) of the character distribution of `text`, in bits.
///
/// Returns `None` for empty text, whose distribution is undefined.
pub fn shannon_entropy(text: &str) -> Option<f64> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut length = 0usize;
    for c in text.chars() {
        *counts.entry(c).or_insert(0) += 1;
        length += 1;
    }

    if length == 0 {
        return None;
    }

    let length = length as f64;
    let entropy = counts
        .values()
        .map(|&count| {
            let p = count as f64 / length;
            -p * p.log2()
        })
        .sum::<f64>();

    // A single repeated character sums to -0.0
    Some(entropy.max(0.0))
}

/// `values[i + 1] - values[i]` for each consecutive pair.
pub fn first_differences(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_of_repeated_character_is_zero() {
        assert_eq!(shannon_entropy("aaaa"), Some(0.0));
    }

    #[test]
    fn test_entropy_of_two_equal_symbols_is_one_bit() {
        let entropy = shannon_entropy("abab").unwrap();
        assert!((entropy - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_of_four_symbols() {
        let entropy = shannon_entropy("abcd").unwrap();
        assert!((entropy - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_of_empty_text_is_undefined() {
        assert_eq!(shannon_entropy(""), None);
    }

    #[test]
    fn test_first_differences() {
        assert_eq!(first_differences(&[1.0, 3.0, 2.0]), vec![2.0, -1.0]);
        assert!(first_differences(&[4.0]).is_empty());
        assert!(first_differences(&[]).is_empty());
    }
}
