//! The 15 regional commands (CRs) of the force.
//!
//! Each command owns a fixed set of municipalities (see the group table),
//! a choropleth fill color, and two display forms: the wire id (`CR_1`)
//! used by the map layer and the ordinal label (`1º COMANDO REGIONAL`) the
//! personnel API keys its strength figures on.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Fill color for municipalities that resolve to no command.
pub const UNCLASSIFIED_FILL: &str = "#D0D0D0";

/// A regional command, `CR_1` through `CR_15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RegionalCommand {
    #[serde(rename = "CR_1")]
    Cr1,
    #[serde(rename = "CR_2")]
    Cr2,
    #[serde(rename = "CR_3")]
    Cr3,
    #[serde(rename = "CR_4")]
    Cr4,
    #[serde(rename = "CR_5")]
    Cr5,
    #[serde(rename = "CR_6")]
    Cr6,
    #[serde(rename = "CR_7")]
    Cr7,
    #[serde(rename = "CR_8")]
    Cr8,
    #[serde(rename = "CR_9")]
    Cr9,
    #[serde(rename = "CR_10")]
    Cr10,
    #[serde(rename = "CR_11")]
    Cr11,
    #[serde(rename = "CR_12")]
    Cr12,
    #[serde(rename = "CR_13")]
    Cr13,
    #[serde(rename = "CR_14")]
    Cr14,
    #[serde(rename = "CR_15")]
    Cr15,
}

/// One entry of the map legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub color: &'static str,
    pub label: String,
}

impl RegionalCommand {
    /// Every command in ascending numeric order. This is also the fixed
    /// iteration order for group resolution.
    pub const ALL: [RegionalCommand; 15] = [
        RegionalCommand::Cr1,
        RegionalCommand::Cr2,
        RegionalCommand::Cr3,
        RegionalCommand::Cr4,
        RegionalCommand::Cr5,
        RegionalCommand::Cr6,
        RegionalCommand::Cr7,
        RegionalCommand::Cr8,
        RegionalCommand::Cr9,
        RegionalCommand::Cr10,
        RegionalCommand::Cr11,
        RegionalCommand::Cr12,
        RegionalCommand::Cr13,
        RegionalCommand::Cr14,
        RegionalCommand::Cr15,
    ];

    /// 1-based command number.
    pub fn number(self) -> u8 {
        match self {
            RegionalCommand::Cr1 => 1,
            RegionalCommand::Cr2 => 2,
            RegionalCommand::Cr3 => 3,
            RegionalCommand::Cr4 => 4,
            RegionalCommand::Cr5 => 5,
            RegionalCommand::Cr6 => 6,
            RegionalCommand::Cr7 => 7,
            RegionalCommand::Cr8 => 8,
            RegionalCommand::Cr9 => 9,
            RegionalCommand::Cr10 => 10,
            RegionalCommand::Cr11 => 11,
            RegionalCommand::Cr12 => 12,
            RegionalCommand::Cr13 => 13,
            RegionalCommand::Cr14 => 14,
            RegionalCommand::Cr15 => 15,
        }
    }

    /// Wire id, `CR_1`..`CR_15`.
    pub fn id(self) -> &'static str {
        match self {
            RegionalCommand::Cr1 => "CR_1",
            RegionalCommand::Cr2 => "CR_2",
            RegionalCommand::Cr3 => "CR_3",
            RegionalCommand::Cr4 => "CR_4",
            RegionalCommand::Cr5 => "CR_5",
            RegionalCommand::Cr6 => "CR_6",
            RegionalCommand::Cr7 => "CR_7",
            RegionalCommand::Cr8 => "CR_8",
            RegionalCommand::Cr9 => "CR_9",
            RegionalCommand::Cr10 => "CR_10",
            RegionalCommand::Cr11 => "CR_11",
            RegionalCommand::Cr12 => "CR_12",
            RegionalCommand::Cr13 => "CR_13",
            RegionalCommand::Cr14 => "CR_14",
            RegionalCommand::Cr15 => "CR_15",
        }
    }

    /// Ordinal label as the personnel API spells it.
    pub fn label(self) -> String {
        format!("{}º COMANDO REGIONAL", self.number())
    }

    /// Legend label, `CR 1`..`CR 15`.
    pub fn short_label(self) -> String {
        format!("CR {}", self.number())
    }

    /// Choropleth fill color. The palette is fixed; unclassified
    /// municipalities use [`UNCLASSIFIED_FILL`].
    pub fn fill_color(self) -> &'static str {
        match self {
            RegionalCommand::Cr1 => "#B8860B",
            RegionalCommand::Cr2 => "#483D8B",
            RegionalCommand::Cr3 => "#8B0000",
            RegionalCommand::Cr4 => "#BDB76B",
            RegionalCommand::Cr5 => "#00FFFF",
            RegionalCommand::Cr6 => "#8FBC8F",
            RegionalCommand::Cr7 => "#808000",
            RegionalCommand::Cr8 => "#CD5C5C",
            RegionalCommand::Cr9 => "#A9A9A9",
            RegionalCommand::Cr10 => "#FF8C00",
            RegionalCommand::Cr11 => "#008B8B",
            RegionalCommand::Cr12 => "#7B68EE",
            RegionalCommand::Cr13 => "#DA70D6",
            RegionalCommand::Cr14 => "#8B008B",
            RegionalCommand::Cr15 => "#006400",
        }
    }

    /// Parse a wire id (`CR_4`).
    pub fn from_id(id: &str) -> Result<Self, ModelError> {
        let trimmed = id.trim();
        Self::ALL
            .into_iter()
            .find(|command| command.id() == trimmed)
            .ok_or_else(|| ModelError::UnknownCommand(id.to_string()))
    }

    /// Parse an ordinal label (`4º COMANDO REGIONAL`). Unknown labels are a
    /// normal outcome for aggregate rows that do not name a command.
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        Self::ALL
            .into_iter()
            .find(|command| command.label() == trimmed)
    }

    /// The full map legend, in command order.
    pub fn legend() -> Vec<LegendEntry> {
        Self::ALL
            .into_iter()
            .map(|command| LegendEntry {
                color: command.fill_color(),
                label: command.short_label(),
            })
            .collect()
    }
}

impl std::fmt::Display for RegionalCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
