//! Municipality-to-command resolution.
//!
//! Both operations walk the table in ascending command order and compare
//! canonical keys. Resolution never fails: a name no command owns is a
//! normal outcome, reported as `None` and rendered with the neutral fill.

use pmmt_model::{GroupTable, RegionalCommand};
use pmmt_normalize::normalize_municipality;

/// A resolved command together with its full member list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSelection {
    pub command: RegionalCommand,
    pub members: Vec<String>,
}

/// Find the command that owns a municipality.
///
/// First command in ascending order whose member list contains the name's
/// canonical key wins; a name listed under two commands is a data-integrity
/// defect, not a conflict this function resolves.
pub fn find_group(name: &str, table: &GroupTable) -> Option<RegionalCommand> {
    let key = normalize_municipality(name);
    if key.is_empty() {
        return None;
    }
    for entry in table.iter() {
        if entry
            .members
            .iter()
            .any(|member| normalize_municipality(member) == key)
        {
            return Some(entry.command);
        }
    }
    tracing::debug!(name, "municipality resolves to no command");
    None
}

/// Expand an already-selected set of municipalities to its owning command.
///
/// Subset semantics: succeeds only when a single command's member set
/// contains *every* given name. An empty selection, or one spanning two
/// commands, resolves to nothing and the caller leaves its state alone.
pub fn expand_group(selected: &[String], table: &GroupTable) -> Option<GroupSelection> {
    if selected.is_empty() {
        return None;
    }
    let keys: Vec<String> = selected
        .iter()
        .map(|name| normalize_municipality(name))
        .collect();

    for entry in table.iter() {
        let member_keys: Vec<String> = entry
            .members
            .iter()
            .map(|member| normalize_municipality(member))
            .collect();
        if keys.iter().all(|key| member_keys.contains(key)) {
            return Some(GroupSelection {
                command: entry.command,
                members: entry.members.clone(),
            });
        }
    }
    tracing::debug!(count = selected.len(), "selection is not a subset of any command");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    fn table() -> GroupTable {
        GroupTable::new([
            (RegionalCommand::Cr1, names(&["Cuiabá", "Nobres"])),
            (RegionalCommand::Cr4, names(&["Rondonópolis", "Jaciara"])),
            (RegionalCommand::Cr6, names(&["Mirassol do Oeste"])),
        ])
    }

    #[test]
    fn find_group_matches_any_spelling() {
        let table = table();
        assert_eq!(find_group("Cuiabá", &table), Some(RegionalCommand::Cr1));
        assert_eq!(find_group("cuiabá", &table), Some(RegionalCommand::Cr1));
        assert_eq!(find_group("CUIABA", &table), Some(RegionalCommand::Cr1));
        assert_eq!(
            find_group("Mirassol d'Oeste", &table),
            Some(RegionalCommand::Cr6)
        );
    }

    #[test]
    fn find_group_rejects_unknown_and_empty() {
        let table = table();
        assert_eq!(find_group("Nonexistent City", &table), None);
        assert_eq!(find_group("", &table), None);
        assert_eq!(find_group("   ", &table), None);
    }

    #[test]
    fn find_group_is_deterministic() {
        let table = table();
        let first = find_group("Jaciara", &table);
        for _ in 0..10 {
            assert_eq!(find_group("Jaciara", &table), first);
        }
    }

    #[test]
    fn duplicate_data_resolves_to_first_command_in_order() {
        let dup = GroupTable::new([
            (RegionalCommand::Cr2, names(&["Cuiabá"])),
            (RegionalCommand::Cr9, names(&["Cuiabá"])),
        ]);
        assert_eq!(find_group("Cuiabá", &dup), Some(RegionalCommand::Cr2));
    }

    #[test]
    fn deserialized_out_of_order_table_keeps_ascending_winner() {
        let json = r#"{"groups":[
            {"command":"CR_9","members":["Cuiabá"]},
            {"command":"CR_2","members":["Cuiabá"]}
        ]}"#;
        let table: GroupTable = serde_json::from_str(json).expect("deserialize");
        assert_eq!(find_group("Cuiabá", &table), Some(RegionalCommand::Cr2));
    }

    #[test]
    fn expand_group_returns_full_member_list() {
        let table = table();
        let selection = expand_group(&names(&["Cuiabá"]), &table).expect("subset of CR_1");
        assert_eq!(selection.command, RegionalCommand::Cr1);
        assert_eq!(selection.members, names(&["Cuiabá", "Nobres"]));
    }

    #[test]
    fn expand_group_accepts_normalized_spellings() {
        let table = table();
        let selection = expand_group(&names(&["CUIABA", "nobres"]), &table).expect("subset");
        assert_eq!(selection.command, RegionalCommand::Cr1);
    }

    #[test]
    fn expand_group_rejects_mixed_commands() {
        let table = table();
        assert_eq!(expand_group(&names(&["Cuiabá", "Rondonópolis"]), &table), None);
    }

    #[test]
    fn expand_group_rejects_empty_and_unknown() {
        let table = table();
        assert_eq!(expand_group(&[], &table), None);
        assert_eq!(expand_group(&names(&["Nowhere"]), &table), None);
        assert_eq!(expand_group(&names(&["Cuiabá", "Nowhere"]), &table), None);
    }
}
