//! The group table: which municipalities each regional command owns.
//!
//! The table is configuration data, constructed once at startup and passed
//! by shared reference afterwards. Entries are held in ascending command
//! order regardless of construction order, because resolution walks the
//! table front to back and first match wins.

use serde::{Deserialize, Serialize};

use crate::command::RegionalCommand;

/// One command with its member municipality display names, in the order
/// the source data lists them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupEntry {
    pub command: RegionalCommand,
    pub members: Vec<String>,
}

/// Immutable mapping from regional command to member municipalities.
///
/// Deserialization routes through [`GroupTable::new`], so the ascending
/// order holds for tables read from JSON too.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "RawGroupTable")]
pub struct GroupTable {
    groups: Vec<GroupEntry>,
}

/// Wire shape of a table before the sort-and-merge pass.
#[derive(Deserialize)]
struct RawGroupTable {
    groups: Vec<GroupEntry>,
}

impl From<RawGroupTable> for GroupTable {
    fn from(raw: RawGroupTable) -> Self {
        Self::new(raw.groups.into_iter().map(|entry| (entry.command, entry.members)))
    }
}

impl GroupTable {
    /// Build a table from (command, members) pairs. Pairs for the same
    /// command are merged in the order given; the resulting entries are
    /// sorted ascending by command.
    pub fn new<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (RegionalCommand, Vec<String>)>,
    {
        let mut groups: Vec<GroupEntry> = Vec::new();
        for (command, members) in pairs {
            match groups.iter_mut().find(|entry| entry.command == command) {
                Some(entry) => entry.members.extend(members),
                None => groups.push(GroupEntry { command, members }),
            }
        }
        groups.sort_by_key(|entry| entry.command);
        Self { groups }
    }

    /// Entries in ascending command order.
    pub fn iter(&self) -> impl Iterator<Item = &GroupEntry> {
        self.groups.iter()
    }

    /// Member display names for one command, if it has any.
    pub fn members(&self, command: RegionalCommand) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|entry| entry.command == command)
            .map(|entry| entry.members.as_slice())
    }

    /// Number of commands with at least one listed municipality.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of listed municipality names, duplicates included.
    pub fn member_count(&self) -> usize {
        self.groups.iter().map(|entry| entry.members.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
