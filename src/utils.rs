//! Utility functions for string processing.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Tokens this short carry no signal ("a", "%", "-") and are dropped.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Normalize a string for comparison: trim, collapse whitespace, lowercase.
///
/// Accents are kept by default, so "Mérck" and "Merck" are different words.
/// The opt-in `unicode-normalization` feature folds diacritics as well:
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
/// 4. Collapse whitespace (which also trims)
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    let stripped: String = value.nfd().filter(|c| !is_combining_mark(*c)).collect();
    collapse_whitespace(&stripped.to_lowercase())
}

/// Lowercase and collapse whitespace. Accented characters are kept as-is.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    collapse_whitespace(&value.to_lowercase())
}

/// Trim and collapse internal whitespace runs to a single space, keeping case.
///
/// Used instead of [`normalize`] for case-sensitive queries.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split already-normalized text into tokens, dropping tokens shorter than
/// [`MIN_TOKEN_CHARS`] characters.
pub fn tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS)
}

/// Check if a character is a combining mark (diacritic).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
