//! String normalization for municipality names.
//!
//! Municipality names arrive in several spellings: the geographic dataset
//! carries accented display names, the personnel database stores an
//! unaccented uppercase form with `DO` contracted to `D`, and API payloads
//! sit somewhere in between. Everything that needs to decide "same city or
//! not" goes through [`normalize_municipality`] and compares the resulting
//! canonical keys.
//!
//! Normalization is idempotent: feeding a canonical key back through the
//! pipeline yields the same key.

pub mod list;
pub mod municipality;
pub mod patterns;
pub mod text;

pub use list::{contains_name, dedupe_names, filter_by_prefix, find_in_list, normalize_all};
pub use municipality::{is_valid_municipality_name, names_match, normalize_municipality};
pub use patterns::search_patterns;
pub use text::{normalize_lower, normalize_upper, strip_diacritics};
