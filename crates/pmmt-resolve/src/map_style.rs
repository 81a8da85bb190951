//! Map-layer helpers: feature fill colors and click expansion.
//!
//! Geographic features carry display names that may use the apostrophe
//! spellings; both helpers run the display alias first, then resolve.

use pmmt_model::{GroupTable, UNCLASSIFIED_FILL};
use pmmt_normalize::normalize_all;
use pmmt_regions::resolve_display_alias;

use crate::resolver::find_group;

/// Fill color for a geographic feature: the owning command's palette
/// entry, or the neutral fill when no command owns the municipality.
pub fn feature_fill_color(feature_name: &str, table: &GroupTable) -> &'static str {
    let corrected = resolve_display_alias(feature_name);
    find_group(corrected, table).map_or(UNCLASSIFIED_FILL, |command| command.fill_color())
}

/// Selection produced by clicking a feature: the owning command's whole
/// member list, or just the (alias-corrected) clicked municipality when it
/// is unclassified.
pub fn feature_click_selection(feature_name: &str, table: &GroupTable) -> Vec<String> {
    let corrected = resolve_display_alias(feature_name);
    match find_group(corrected, table).and_then(|command| table.members(command)) {
        Some(members) => members.to_vec(),
        None => vec![corrected.to_string()],
    }
}

/// Canonical keys for a click selection, ready to hand to the data-fetch
/// layer's city-scoped queries.
pub fn feature_click_keys(feature_name: &str, table: &GroupTable) -> Vec<String> {
    normalize_all(&feature_click_selection(feature_name, table))
}
