//! Data model for the PMMT dashboard core: the regional commands, the
//! municipality group table, and the serde types for the personnel (SGPM)
//! and equipment (CONEQ) API payloads.

pub mod command;
pub mod equipment;
pub mod error;
pub mod group;
pub mod personnel;

pub use command::{LegendEntry, RegionalCommand, UNCLASSIFIED_FILL};
pub use equipment::{
    CautelaResponse, CautelaStatusCount, CityCautelas, CityDeliveries, CityEquipment,
    EquipmentType, NamedValue, StockItem, StockResponse, StockStatusCount, cautela_status_label,
    stock_status_label,
};
pub use error::{ModelError, Result};
pub use group::{GroupEntry, GroupTable};
pub use personnel::{
    CommandStrength, INACTIVE_TYPES, RankCount, RankInfo, RankTotal, SexByCity, SexCount,
    SituationCount, TypeCount, Unit, UnitSexCount, inactive_total, quantity_for_sex,
    quantity_for_situation, quantity_for_type, sex_label,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_table_round_trips_through_json() {
        let table = GroupTable::new([(
            RegionalCommand::Cr1,
            vec!["Cuiabá".to_string(), "Nobres".to_string()],
        )]);
        let json = serde_json::to_string(&table).expect("serialize table");
        let round: GroupTable = serde_json::from_str(&json).expect("deserialize table");
        assert_eq!(
            round.members(RegionalCommand::Cr1).map(<[String]>::len),
            Some(2)
        );
    }
}
