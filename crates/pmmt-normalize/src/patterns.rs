//! Flexible search-pattern generation.
//!
//! The upstream data service matches city names with a cascade of `LIKE`
//! patterns; this module produces the ordered candidate list for a given
//! display name. The variant families (the `D'OESTE` contraction forms, the
//! `POXORÉU`/`POXOREO` pair, the re-accented `CUIABÁ`/`VÁRZEA` forms)
//! mirror the spellings actually present in the backing database and are
//! kept literal rather than generalized.

use std::sync::LazyLock;

use regex::Regex;

use crate::text::strip_diacritics;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("static pattern"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static pattern"));

/// Substring contractions applied to the punctuation-free variants.
const CONTRACTIONS: &[(&str, &str)] = &[
    ("DO OESTE", "DOESTE"),
    ("D OESTE", "DOESTE"),
    ("DA PRAIA", "DAPRAIA"),
    ("D PRAIA", "DAPRAIA"),
    ("DE GOIAS", "DEGOIAS"),
    ("D GOIAS", "DEGOIAS"),
];

/// Re-accent quirks of the fully folded variant: the database stores these
/// few names with the accent the fold just removed.
const REACCENT: &[(&str, &str)] = &[
    ("POXOREU", "POXOREO"),
    ("CUIABA", "CUIABÁ"),
    ("VARZEA", "VÁRZEA"),
];

fn collapse(raw: &str) -> String {
    WHITESPACE.replace_all(raw, " ").trim().to_string()
}

/// Uppercase, accent-free, whitespace-collapsed; punctuation preserved.
fn without_accents(raw: &str) -> String {
    collapse(&strip_diacritics(&raw.to_uppercase()))
}

/// Uppercase, punctuation deleted (not swept to spaces), contractions
/// applied; accents preserved.
fn without_punctuation(raw: &str) -> String {
    let upper = raw.to_uppercase();
    let depunct = NON_WORD.replace_all(upper.trim(), "");
    apply_replacements(&collapse(&depunct), CONTRACTIONS)
}

/// Fully folded form: accents stripped, punctuation deleted, contractions
/// and re-accent quirks applied.
fn folded(raw: &str) -> String {
    let stripped = strip_diacritics(&raw.to_uppercase());
    let depunct = NON_WORD.replace_all(stripped.trim(), "");
    let contracted = apply_replacements(&collapse(&depunct), CONTRACTIONS);
    apply_replacements(&contracted, REACCENT)
}

fn apply_replacements(raw: &str, table: &[(&str, &str)]) -> String {
    let mut out = raw.to_string();
    for (from, to) in table {
        out = out.replace(from, to);
    }
    out
}

/// Generate the ordered, deduplicated pattern list for a city name.
///
/// Starts with the exact variants (original, accent-free, punctuation-free,
/// fully folded), expands the known contraction families, and ends with
/// `%`-wildcard forms of each exact variant. Empty input yields no
/// patterns.
pub fn search_patterns(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let original = raw.to_uppercase().trim().to_string();
    let sans_accents = without_accents(raw);
    let sans_punct = without_punctuation(raw);
    let full = folded(raw);

    let mut patterns = vec![
        original.clone(),
        sans_accents.clone(),
        sans_punct.clone(),
        full.clone(),
    ];

    if original.contains("D'OESTE") {
        let base = original.replace("D'OESTE", "").trim().to_string();
        patterns.extend([
            format!("{base} D'OESTE"),
            format!("{base} DO OESTE"),
            format!("{base} D OESTE"),
            format!("{base}%OESTE"),
        ]);
    } else if original.contains("DO OESTE") {
        let base = original.replace("DO OESTE", "").trim().to_string();
        patterns.extend([
            format!("{base} DO OESTE"),
            format!("{base} D'OESTE"),
            format!("{base} D OESTE"),
            format!("{base}%OESTE"),
        ]);
    } else if original.contains("DA PRAIA") {
        let base = original.replace("DA PRAIA", "").trim().to_string();
        patterns.extend([
            format!("{base} DA PRAIA"),
            format!("{base} D PRAIA"),
            format!("{base}%PRAIA"),
        ]);
    } else if original.contains("DE GOIAS") {
        let base = original.replace("DE GOIAS", "").trim().to_string();
        patterns.extend([
            format!("{base} DE GOIAS"),
            format!("{base} D GOIAS"),
            format!("{base}%GOIAS"),
        ]);
    } else if original.contains("POXORÉU") || original.contains("POXOREU") {
        patterns.extend([
            "POXOREO".to_string(),
            "POXORÉU".to_string(),
            "%POXOR%".to_string(),
        ]);
    }

    patterns.extend([
        format!("%{original}%"),
        format!("%{sans_accents}%"),
        format!("%{sans_punct}%"),
        format!("%{full}%"),
    ]);

    let mut unique = Vec::new();
    for pattern in patterns {
        if !unique.contains(&pattern) {
            unique.push(pattern);
        }
    }
    unique
}
