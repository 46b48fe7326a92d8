// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance and normalized similarity.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! A similarity threshold is really an edit budget, so most non-matches in a
//! corpus scan are rejected before the DP, or a few rows into it.
//!
//! All lengths are in characters, not bytes.

/// Levenshtein distance between `a` and `b`.
///
/// Single-row dynamic programming: O(|a|·|b|) time, O(|b|) space.
pub fn distance(a: &str, b: &str) -> usize {
    // never abandoned, so always `Some`
    edit_rows(a, b, |_| true).unwrap_or_default()
}

/// Fill the DP one row per character of `a`, handing each finished row to
/// `keep_going`. Returns the final distance, or `None` if a row was rejected.
fn edit_rows(a: &str, b: &str, mut keep_going: impl FnMut(&[usize]) -> bool) -> Option<usize> {
    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let substitute = diagonal + usize::from(ac != *bc);
            row[j + 1] = substitute.min(above + 1).min(row[j] + 1);
            diagonal = above;
        }
        if !keep_going(&row) {
            return None;
        }
    }

    Some(row[b_chars.len()])
}

/// Normalized similarity: `1 - distance / max(len(a), len(b))`.
///
/// `1.0` for identical strings (including two empty strings), `0.0` when
/// nothing lines up.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - distance(a, b) as f64 / longest as f64
}

/// `similarity(a, b) >= threshold`, without always paying for the full DP.
///
/// The threshold is turned into the largest edit budget that still clears it,
/// then [`levenshtein_within`] answers with its early exits.
pub fn similar_enough(a: &str, b: &str, threshold: f64) -> bool {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0 >= threshold;
    }
    // Same expression as `similarity`, so the budget agrees with it exactly.
    let budget = (0..=longest)
        .rev()
        .find(|&d| 1.0 - d as f64 / longest as f64 >= threshold);
    match budget {
        Some(max) => levenshtein_within(a, b, max),
        None => false,
    }
}

/// Are these strings within `max` edits of each other?
///
/// Gives up before the DP when the length gap alone exceeds `max`, and
/// mid-DP as soon as a whole row is over budget (row minima never shrink).
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    if a.chars().count().abs_diff(b.chars().count()) > max {
        return false;
    }
    edit_rows(a, b, |row| row.iter().any(|&cell| cell <= max))
        .is_some_and(|d| d <= max)
}
