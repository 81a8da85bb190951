//! Pre-normalization display aliasing.
//!
//! The geographic dataset spells a handful of municipalities with the
//! apostrophe contraction (`Mirassol d'Oeste`); the group table and the
//! rest of the pipeline expect the expanded form. The alias table is keyed
//! on the exact raw feature name and is applied *before* normalization —
//! it is a different correction point from the canonical-key special cases
//! inside the normalizer.

/// Known alternate display spellings -> the form the group table uses.
pub const DISPLAY_ALIASES: &[(&str, &str)] = &[
    ("Mirassol d'Oeste", "Mirassol do Oeste"),
    ("Lambari D'Oeste", "Lambari do Oeste"),
    ("Glória D'Oeste", "Glória Do Oeste"),
    ("Figueirópolis D'Oeste", "Figueirópolis Do Oeste"),
    ("Conquista D'Oeste", "Conquista Do Oeste"),
];

/// Rewrite a known alternate spelling to its expected form; anything not
/// in the table passes through unchanged.
pub fn resolve_display_alias(raw: &str) -> &str {
    DISPLAY_ALIASES
        .iter()
        .find(|(from, _)| *from == raw)
        .map_or(raw, |(_, to)| *to)
}
