//! Personnel strength aggregation keyed by regional command.

use pmmt_model::{CommandStrength, RegionalCommand};
use tracing::debug;

/// Resolve a label-keyed strength map ("1º COMANDO REGIONAL" → total) into
/// per-command totals in command order. Labels that do not match a known
/// command are skipped.
pub fn command_strengths(strengths: &CommandStrength) -> Vec<(RegionalCommand, u64)> {
    let mut totals = Vec::with_capacity(strengths.len());
    for (label, total) in strengths {
        match RegionalCommand::from_label(label) {
            Some(command) => totals.push((command, *total)),
            None => debug!(label, "strength label did not match a regional command"),
        }
    }
    totals.sort_by_key(|(command, _)| command.number());
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_labels_in_command_order() {
        let mut strengths = CommandStrength::new();
        strengths.insert("4º COMANDO REGIONAL".to_string(), 310);
        strengths.insert("1º COMANDO REGIONAL".to_string(), 980);
        strengths.insert("15º COMANDO REGIONAL".to_string(), 120);

        let totals = command_strengths(&strengths);
        assert_eq!(
            totals,
            vec![
                (RegionalCommand::Cr1, 980),
                (RegionalCommand::Cr4, 310),
                (RegionalCommand::Cr15, 120),
            ]
        );
    }

    #[test]
    fn skips_unknown_labels() {
        let mut strengths = CommandStrength::new();
        strengths.insert("COMANDO GERAL".to_string(), 50);
        strengths.insert("2º COMANDO REGIONAL".to_string(), 400);

        let totals = command_strengths(&strengths);
        assert_eq!(totals, vec![(RegionalCommand::Cr2, 400)]);
    }
}
