//! Personnel (SGPM) API payload types and count lookups.
//!
//! Field names keep the upstream API's Portuguese spelling on the wire;
//! the Rust side uses English names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Count of officers per service situation (`ATIVO`, `AGREGADO`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SituationCount {
    #[serde(rename = "situacao")]
    pub situation: String,
    #[serde(rename = "quantidade")]
    pub quantity: u64,
}

/// Count of officers per personnel type (`EFETIVO`, `REFORMA`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    #[serde(rename = "tipo")]
    pub personnel_type: String,
    #[serde(rename = "quantidade")]
    pub quantity: u64,
}

/// Count of officers per sex, optionally scoped to a city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SexCount {
    #[serde(rename = "sexo")]
    pub sex: String,
    #[serde(rename = "quantidade")]
    pub quantity: u64,
    #[serde(rename = "nome_cidade", default)]
    pub city: Option<String>,
}

/// Female/male split for one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSexCount {
    #[serde(rename = "unidade")]
    pub unit: String,
    #[serde(rename = "Feminino")]
    pub female: u64,
    #[serde(rename = "Masculino")]
    pub male: u64,
}

/// Female/male split for one city, with the units stationed there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SexByCity {
    #[serde(rename = "nome_cidade")]
    pub city: String,
    #[serde(rename = "Feminino")]
    pub female: u64,
    #[serde(rename = "Masculino")]
    pub male: u64,
    #[serde(rename = "unidades", default)]
    pub units: Option<Vec<String>>,
}

/// Count of officers per rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankCount {
    #[serde(rename = "posto_grad")]
    pub rank: String,
    #[serde(rename = "quantidade")]
    pub quantity: u64,
}

/// Rank totals with the display ordering the rank hierarchy imposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankTotal {
    #[serde(rename = "posto_grad")]
    pub rank: String,
    pub total: u64,
    #[serde(rename = "ordem")]
    pub order: u32,
}

/// A rank catalog entry for the filter dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankInfo {
    #[serde(rename = "cod_posto_grad")]
    pub code: i64,
    #[serde(rename = "posto_grad")]
    pub rank: String,
    #[serde(rename = "posto_grad_abrev", default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// An organizational unit (OPM) for the filter dropdowns; regional commands
/// come over the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    #[serde(rename = "cod_opm")]
    pub code: i64,
    pub opm: String,
}

/// Force strength keyed by ordinal command label
/// (`"1º COMANDO REGIONAL"` -> total).
pub type CommandStrength = BTreeMap<String, u64>;

/// Personnel types counted as inactive in the summary cards.
pub const INACTIVE_TYPES: [&str; 4] = [
    "REFORMA - INVALIDEZ",
    "REFORMA",
    "RESERVA - A PEDIDO",
    "RESERVA - EX OFFICIO",
];

/// Expand a sex code (`M`/`F`) to the database's full form.
pub fn sex_label(code: &str) -> Option<&'static str> {
    match code {
        "M" => Some("MASCULINO"),
        "F" => Some("FEMININO"),
        _ => None,
    }
}

/// Quantity for one situation, zero when absent.
pub fn quantity_for_situation(rows: &[SituationCount], situation: &str) -> u64 {
    rows.iter()
        .find(|row| row.situation == situation)
        .map_or(0, |row| row.quantity)
}

/// Quantity for one personnel type, zero when absent.
pub fn quantity_for_type(rows: &[TypeCount], personnel_type: &str) -> u64 {
    rows.iter()
        .find(|row| row.personnel_type == personnel_type)
        .map_or(0, |row| row.quantity)
}

/// Quantity for one sex, zero when absent.
pub fn quantity_for_sex(rows: &[SexCount], sex: &str) -> u64 {
    rows.iter()
        .find(|row| row.sex == sex)
        .map_or(0, |row| row.quantity)
}

/// Sum of the [`INACTIVE_TYPES`] counts.
pub fn inactive_total(rows: &[TypeCount]) -> u64 {
    INACTIVE_TYPES
        .iter()
        .map(|personnel_type| quantity_for_type(rows, personnel_type))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_rows() -> Vec<TypeCount> {
        [
            ("EFETIVO", 4200),
            ("REFORMA", 310),
            ("RESERVA - A PEDIDO", 120),
            ("REFORMA - INVALIDEZ", 45),
        ]
        .into_iter()
        .map(|(personnel_type, quantity)| TypeCount {
            personnel_type: personnel_type.to_string(),
            quantity,
        })
        .collect()
    }

    #[test]
    fn quantity_lookups_default_to_zero() {
        let rows = type_rows();
        assert_eq!(quantity_for_type(&rows, "EFETIVO"), 4200);
        assert_eq!(quantity_for_type(&rows, "AGREGADO"), 0);

        let situations = vec![SituationCount {
            situation: "ATIVO".to_string(),
            quantity: 9,
        }];
        assert_eq!(quantity_for_situation(&situations, "ATIVO"), 9);
        assert_eq!(quantity_for_situation(&situations, "INATIVO"), 0);
    }

    #[test]
    fn inactive_total_sums_only_inactive_types() {
        assert_eq!(inactive_total(&type_rows()), 310 + 120 + 45);
        assert_eq!(inactive_total(&[]), 0);
    }

    #[test]
    fn sex_codes_expand() {
        assert_eq!(sex_label("M"), Some("MASCULINO"));
        assert_eq!(sex_label("F"), Some("FEMININO"));
        assert_eq!(sex_label("X"), None);
    }

    #[test]
    fn sex_by_city_uses_wire_names() {
        let json = r#"{"nome_cidade":"Cuiabá","Feminino":12,"Masculino":88}"#;
        let row: SexByCity = serde_json::from_str(json).unwrap();
        assert_eq!(row.city, "Cuiabá");
        assert_eq!(row.female, 12);
        assert_eq!(row.male, 88);
        assert_eq!(row.units, None);
    }
}
