//! Basic folds shared by the municipality pipeline and general string
//! comparison (prefix filtering, select labels).

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Remove diacritics by NFD decomposition followed by dropping combining
/// marks (`Cuiabá` -> `Cuiaba`, `Poconé` -> `Pocone`).
pub fn strip_diacritics(raw: &str) -> String {
    raw.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Lowercase fold for case/diacritic-insensitive comparison.
///
/// Strips diacritics, lowercases, and trims. Punctuation and inner
/// whitespace are preserved; this is a comparison fold, not the canonical
/// municipality key.
pub fn normalize_lower(raw: &str) -> String {
    strip_diacritics(raw).to_lowercase().trim().to_string()
}

/// Uppercase sibling of [`normalize_lower`].
pub fn normalize_upper(raw: &str) -> String {
    strip_diacritics(raw).to_uppercase().trim().to_string()
}
