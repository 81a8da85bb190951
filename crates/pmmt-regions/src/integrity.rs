//! Load-time integrity checks over a group table.
//!
//! A municipality is expected to belong to exactly one command. When the
//! data violates that, resolution keeps its first-match-in-ascending-order
//! behavior; the finding is surfaced here instead of being silently
//! resolved.

use serde::Serialize;

use pmmt_model::{GroupTable, RegionalCommand};
use pmmt_normalize::{is_valid_municipality_name, normalize_municipality};

/// A data-quality finding in a group table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum IntegrityIssue {
    /// The same canonical key is listed under two commands (or twice under
    /// one). `first` is the command that wins resolution.
    DuplicateMembership {
        name: String,
        key: String,
        first: RegionalCommand,
        also: RegionalCommand,
    },
    /// A listed name fails the displayability check (blank or overlong).
    InvalidName {
        command: RegionalCommand,
        name: String,
    },
    /// A command with no listed municipalities.
    EmptyGroup { command: RegionalCommand },
}

/// Validate a table, returning every finding. An empty result means the
/// one-command-per-municipality assumption holds.
pub fn validate(table: &GroupTable) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();
    let mut seen: Vec<(String, RegionalCommand)> = Vec::new();

    for entry in table.iter() {
        if entry.members.is_empty() {
            issues.push(IntegrityIssue::EmptyGroup {
                command: entry.command,
            });
        }
        for name in &entry.members {
            if !is_valid_municipality_name(name) {
                issues.push(IntegrityIssue::InvalidName {
                    command: entry.command,
                    name: name.clone(),
                });
                continue;
            }
            let key = normalize_municipality(name);
            match seen.iter().find(|(existing, _)| *existing == key) {
                Some((_, first)) => issues.push(IntegrityIssue::DuplicateMembership {
                    name: name.clone(),
                    key,
                    first: *first,
                    also: entry.command,
                }),
                None => seen.push((key, entry.command)),
            }
        }
    }

    issues
}

/// Run [`validate`] and log each finding at `warn` level.
pub fn validate_and_log(table: &GroupTable) -> Vec<IntegrityIssue> {
    let issues = validate(table);
    for issue in &issues {
        match issue {
            IntegrityIssue::DuplicateMembership {
                name, first, also, ..
            } => {
                tracing::warn!(%name, first = %first, also = %also, "municipality listed under two commands");
            }
            IntegrityIssue::InvalidName { command, name } => {
                tracing::warn!(command = %command, name = name.as_str(), "invalid municipality name in member table");
            }
            IntegrityIssue::EmptyGroup { command } => {
                tracing::warn!(command = %command, "command has no listed municipalities");
            }
        }
    }
    issues
}
