//! Text normalization and tokenization.

use chemdex::normalize;
use chemdex::utils::{collapse_whitespace, tokens};

#[test]
fn test_trim_collapse_lowercase() {
    assert_eq!(normalize("  Glucose\t\tSTANDARD \n"), "glucose standard");
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   "), "");
}

#[test]
fn test_idempotent() {
    for s in ["  Sodium   Chloride ", "ÉTHANOL absolu", "2-8 C", ""] {
        let once = normalize(s);
        assert_eq!(normalize(&once), once);
    }
}

#[cfg(not(feature = "unicode-normalization"))]
#[test]
fn test_diacritics_kept_by_default() {
    assert_eq!(normalize("Mérck  KGaA"), "mérck kgaa");
    assert_ne!(normalize("Éthanol"), normalize("Ethanol"));
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_diacritics_stripped() {
    assert_eq!(normalize("Mérck KGaA"), "merck kgaa");
    assert_eq!(normalize("Éthanol"), "ethanol");
}

#[test]
fn test_collapse_keeps_case() {
    assert_eq!(collapse_whitespace("  NaCl   Solution "), "NaCl Solution");
}

#[test]
fn test_tokens_drop_single_chars() {
    let collected: Vec<&str> = tokens("vitamin b 12 - c2").collect();
    assert_eq!(collected, vec!["vitamin", "12", "c2"]);
}
