//! Precomputed reverse index over a group table.
//!
//! The map layer resolves every feature on every render; the index trades
//! the per-lookup scan for a one-time build. Lookup results are identical
//! to [`crate::find_group`] by construction: keys are inserted walking the
//! table in ascending command order and never overwritten, so duplicate
//! data keeps the scan's first-match winner.

use std::collections::HashMap;

use pmmt_model::{GroupTable, RegionalCommand};
use pmmt_normalize::normalize_municipality;

/// Canonical key -> owning command.
#[derive(Debug, Clone)]
pub struct GroupIndex {
    map: HashMap<String, RegionalCommand>,
}

impl GroupIndex {
    /// Build the index from a table. Duplicate keys are logged and keep
    /// their first owner.
    pub fn build(table: &GroupTable) -> Self {
        let mut map = HashMap::new();
        for entry in table.iter() {
            for member in &entry.members {
                let key = normalize_municipality(member);
                if key.is_empty() {
                    continue;
                }
                if let Some(first) = map.get(&key) {
                    tracing::warn!(
                        member = member.as_str(),
                        first = %first,
                        also = %entry.command,
                        "duplicate key while building group index"
                    );
                    continue;
                }
                map.insert(key, entry.command);
            }
        }
        Self { map }
    }

    /// Resolve a municipality name to its command.
    pub fn lookup(&self, name: &str) -> Option<RegionalCommand> {
        self.map.get(&normalize_municipality(name)).copied()
    }

    /// Number of distinct canonical keys indexed.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
