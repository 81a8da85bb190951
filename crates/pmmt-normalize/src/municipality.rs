//! The canonical municipality key.
//!
//! The personnel database stores city names unaccented, uppercase, and with
//! the word `DO` contracted to `D` (`MIRASSOL D OESTE`). The pipeline here
//! reproduces that form from any display spelling, so that keys computed
//! from the geographic dataset, the group table, and API payloads all line
//! up.

use std::sync::LazyLock;

use regex::Regex;

use crate::text::strip_diacritics;

/// Canonical-key corrections for names the backing database spells
/// differently from every public source. Keyed on the already-normalized
/// form; do not generalize.
const SPECIAL_CASES: &[(&str, &str)] = &[("CURVELANDIA", "CUVERLANDIA")];

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9\s]").expect("static pattern"));
static WORD_DO: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bDO\b").expect("static pattern"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static pattern"));

/// Produce the canonical key for a municipality display name.
///
/// Steps, in order: strip diacritics, sweep every non-alphanumeric
/// character to a space, uppercase, trim, rewrite whole-word `DO` to `D`,
/// collapse whitespace runs, and apply the [`SPECIAL_CASES`] table.
///
/// The function is total: empty input yields an empty key (validity is the
/// caller's concern, see [`is_valid_municipality_name`]), and the result is
/// stable under re-normalization.
pub fn normalize_municipality(raw: &str) -> String {
    let stripped = strip_diacritics(raw);
    let swept = NON_ALNUM.replace_all(&stripped, " ");
    let upper = swept.to_uppercase();
    let rewritten = WORD_DO.replace_all(upper.trim(), "D");
    let collapsed = WHITESPACE.replace_all(&rewritten, " ");
    apply_special_cases(&collapsed)
}

fn apply_special_cases(normalized: &str) -> String {
    for (from, to) in SPECIAL_CASES {
        if normalized == *from {
            return (*to).to_string();
        }
    }
    normalized.to_string()
}

/// Whether a raw name is displayable at all: non-empty after trimming and
/// at most 100 characters.
pub fn is_valid_municipality_name(raw: &str) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty() && trimmed.chars().count() <= 100
}

/// Whether two display names refer to the same municipality.
pub fn names_match(a: &str, b: &str) -> bool {
    normalize_municipality(a) == normalize_municipality(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_key_strips_accents_and_uppercases() {
        assert_eq!(normalize_municipality("Cuiabá"), "CUIABA");
        assert_eq!(normalize_municipality("Várzea Grande"), "VARZEA GRANDE");
        assert_eq!(normalize_municipality("Poconé"), "POCONE");
    }

    #[test]
    fn canonical_key_contracts_whole_word_do() {
        assert_eq!(
            normalize_municipality("Mirassol do Oeste"),
            "MIRASSOL D OESTE"
        );
        assert_eq!(normalize_municipality("Lambari do Oeste"), "LAMBARI D OESTE");
        // `DO` inside a word is left alone.
        assert_eq!(normalize_municipality("Pedroso"), "PEDROSO");
        assert_eq!(normalize_municipality("DOESTE"), "DOESTE");
    }

    #[test]
    fn canonical_key_sweeps_punctuation_to_spaces() {
        // The apostrophe becomes a space, then `D` stands alone already.
        assert_eq!(
            normalize_municipality("Mirassol d'Oeste"),
            "MIRASSOL D OESTE"
        );
        assert_eq!(
            normalize_municipality("Vila Bela da Santíssima Trindade"),
            "VILA BELA DA SANTISSIMA TRINDADE"
        );
    }

    #[test]
    fn canonical_key_collapses_whitespace() {
        assert_eq!(normalize_municipality("  Campo   Verde  "), "CAMPO VERDE");
    }

    #[test]
    fn special_case_table_applies_after_normalization() {
        assert_eq!(normalize_municipality("Curvelândia"), "CUVERLANDIA");
        assert_eq!(normalize_municipality("CURVELANDIA"), "CUVERLANDIA");
        // The corrected form is a fixed point.
        assert_eq!(normalize_municipality("CUVERLANDIA"), "CUVERLANDIA");
    }

    #[test]
    fn empty_input_yields_empty_key() {
        assert_eq!(normalize_municipality(""), "");
        assert_eq!(normalize_municipality("   "), "");
    }

    #[test]
    fn idempotent_on_known_names() {
        for name in ["Glória D'Oeste", "Cuiabá", "Mirassol do Oeste", "Nobres"] {
            let once = normalize_municipality(name);
            assert_eq!(normalize_municipality(&once), once);
        }
    }

    #[test]
    fn validity_bounds() {
        assert!(is_valid_municipality_name("Cuiabá"));
        assert!(!is_valid_municipality_name(""));
        assert!(!is_valid_municipality_name("   "));
        assert!(is_valid_municipality_name(&"a".repeat(100)));
        assert!(!is_valid_municipality_name(&"a".repeat(101)));
    }

    #[test]
    fn names_match_is_accent_and_case_insensitive() {
        assert!(names_match("Cuiabá", "CUIABA"));
        assert!(names_match("Glória D'Oeste", "Gloria do Oeste"));
        assert!(!names_match("Cuiabá", "Sinop"));
    }
}
