//! Group resolution: which regional command owns a municipality, and the
//! map-layer helpers built on top of it.

pub mod index;
pub mod map_style;
pub mod resolver;

pub use index::GroupIndex;
pub use map_style::{feature_click_keys, feature_click_selection, feature_fill_color};
pub use resolver::{GroupSelection, expand_group, find_group};
