// Copyright (c) 2025 Mauka Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Z-values, the shared building block of the Boyer-Moore good-suffix tables
//! and the Knuth-Morris-Pratt failure function.

/// Computes the Z-values of `symbols` in linear time.
///
/// `z[k]` is the length of the longest substring starting at `k` that is also
/// a prefix of `symbols`. By convention `z[0]` is the full length.
pub fn z_values(symbols: &[char]) -> Vec<usize> {
    let len = symbols.len();
    let mut z = vec![0; len];
    if len == 0 {
        return z;
    }
    z[0] = len;

    // [left, right) is the rightmost prefix-matching box seen so far
    let (mut left, mut right) = (0, 0);
    for k in 1..len {
        if k < right {
            z[k] = (right - k).min(z[k - left]);
        }
        while k + z[k] < len && symbols[z[k]] == symbols[k + z[k]] {
            z[k] += 1;
        }
        if k + z[k] > right {
            left = k;
            right = k + z[k];
        }
    }
    z
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_z_values_textbook() {
        assert_eq!(
            z_values(&chars("aabcaabxaaz")),
            vec![11, 1, 0, 0, 3, 1, 0, 0, 2, 1, 0]
        );
    }

    #[test]
    fn test_z_values_repetitive() {
        assert_eq!(z_values(&chars("aaaa")), vec![4, 3, 2, 1]);
        assert_eq!(z_values(&chars("abab")), vec![4, 0, 2, 0]);
    }

    #[test]
    fn test_z_values_empty() {
        assert!(z_values(&[]).is_empty());
    }
}
