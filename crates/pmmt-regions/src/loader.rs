//! Member-table loading.
//!
//! The builtin table ships as an embedded CSV (`cr,municipio`), parsed once
//! at startup; the same parser accepts externally supplied tables, since
//! the grouping is configuration data rather than code.

use serde::Deserialize;

use pmmt_model::{GroupTable, RegionalCommand};

use crate::error::{RegionsError, Result};
use crate::integrity::validate_and_log;

const BUILTIN_CSV: &str = include_str!("../data/municipios_por_cr.csv");

#[derive(Debug, Deserialize)]
struct MemberRow {
    cr: String,
    municipio: String,
}

/// Parse a `cr,municipio` CSV into a [`GroupTable`].
///
/// Rows must name a known command id (`CR_1`..`CR_15`). Integrity findings
/// (duplicate membership, blank names) are logged, not fatal: resolution
/// semantics already define the winner, and a blank member never matches a
/// lookup.
pub fn parse_members_csv(data: &str) -> Result<GroupTable> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let mut pairs: Vec<(RegionalCommand, Vec<String>)> = Vec::new();

    for (index, record) in reader.deserialize().enumerate() {
        // Header is line 1.
        let line = index + 2;
        let row: MemberRow = record.map_err(|source| RegionsError::Csv {
            line,
            message: source.to_string(),
        })?;
        let command =
            RegionalCommand::from_id(&row.cr).map_err(|_| RegionsError::UnknownCommand {
                line,
                value: row.cr.clone(),
            })?;
        // Blank names stay in so the integrity pass can report them.
        let trimmed = row.municipio.trim();
        let name = if trimmed.is_empty() {
            row.municipio.clone()
        } else {
            trimmed.to_string()
        };
        pairs.push((command, vec![name]));
    }

    if pairs.is_empty() {
        return Err(RegionsError::EmptyTable);
    }

    let table = GroupTable::new(pairs);
    validate_and_log(&table);
    Ok(table)
}

/// Load the builtin member table. Construct once at startup and pass the
/// table by reference; it never changes for the process lifetime.
pub fn load_builtin() -> Result<GroupTable> {
    parse_members_csv(BUILTIN_CSV)
}
