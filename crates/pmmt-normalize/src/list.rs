//! List utilities over municipality names.
//!
//! All comparisons go through the canonical key; the original display
//! spellings are preserved in every output.

use std::collections::HashSet;

use crate::municipality::normalize_municipality;
use crate::text::normalize_lower;

/// Canonical keys for a list of display names, in order.
pub fn normalize_all(names: &[String]) -> Vec<String> {
    names.iter().map(|name| normalize_municipality(name)).collect()
}

/// Remove entries whose canonical key was already seen, keeping the first
/// occurrence's spelling and the original order.
pub fn dedupe_names(names: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    for name in names {
        if seen.insert(normalize_municipality(name)) {
            kept.push(name.clone());
        }
    }
    kept
}

/// Case/diacritic-insensitive prefix filter.
pub fn filter_by_prefix(names: &[String], prefix: &str) -> Vec<String> {
    let prefix = normalize_lower(prefix);
    names
        .iter()
        .filter(|name| normalize_lower(name).starts_with(&prefix))
        .cloned()
        .collect()
}

/// Find the first entry whose canonical key matches `target`, returning the
/// entry's original spelling.
pub fn find_in_list<'a>(target: &str, list: &'a [String]) -> Option<&'a str> {
    let key = normalize_municipality(target);
    list.iter()
        .find(|name| normalize_municipality(name) == key)
        .map(String::as_str)
}

/// Whether `target` names a municipality present in `list`.
pub fn contains_name(target: &str, list: &[String]) -> bool {
    find_in_list(target, list).is_some()
}
