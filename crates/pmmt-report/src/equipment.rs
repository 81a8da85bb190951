//! Equipment chart series: status breakdowns, per-city combination, and
//! the waterfall balance.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use pmmt_model::{
    CautelaResponse, CityCautelas, CityDeliveries, CityEquipment, NamedValue, StockResponse,
    cautela_status_label, stock_status_label,
};
use pmmt_normalize::normalize_municipality;

/// Stock pie series with display labels.
pub fn stock_breakdown(response: &StockResponse) -> Vec<NamedValue> {
    response
        .statuses
        .iter()
        .map(|row| NamedValue {
            name: stock_status_label(&row.status),
            value: row.quantity,
        })
        .collect()
}

/// Cautela pie series with workflow-code labels.
pub fn cautela_breakdown(response: &CautelaResponse) -> Vec<NamedValue> {
    response
        .statuses
        .iter()
        .map(|row| NamedValue {
            name: cautela_status_label(&row.status),
            value: row.quantity,
        })
        .collect()
}

/// Combine per-city cautela and delivery counts into one row per selected
/// city.
///
/// Both series are keyed by canonical municipality key before the join, so
/// spelling differences between the two endpoints (and the selection) do
/// not split a city. Cities absent from a series get zero; the selection's
/// spelling is what ends up on the chart axis.
pub fn combine_city_equipment(
    cautelas: &[CityCautelas],
    deliveries: &[CityDeliveries],
    cities: &[String],
) -> Vec<CityEquipment> {
    let cautelas_by_key: HashMap<String, u64> = cautelas
        .iter()
        .map(|row| (normalize_municipality(&row.city), row.cautelas))
        .collect();
    let deliveries_by_key: HashMap<String, u64> = deliveries
        .iter()
        .map(|row| (normalize_municipality(&row.city), row.deliveries))
        .collect();

    cities
        .iter()
        .map(|city| {
            let key = normalize_municipality(city);
            CityEquipment {
                city: city.clone(),
                cautelas: cautelas_by_key.get(&key).copied().unwrap_or(0),
                deliveries: deliveries_by_key.get(&key).copied().unwrap_or(0),
            }
        })
        .collect()
}

/// One city's running delivered-minus-cauteled balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterfallRow {
    #[serde(rename = "nome_cidade")]
    pub city: String,
    #[serde(rename = "entregues")]
    pub delivered: u64,
    #[serde(rename = "cautelados")]
    pub cauteled: u64,
    /// Cumulative balance up to and including this city.
    pub balance: i64,
    /// Whether this city's own contribution was non-negative.
    pub positive: bool,
}

fn signed(count: u64) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

/// Running balance across cities, in input order: each row adds its
/// delivered-minus-cauteled difference to the previous total. Counts
/// beyond `i64::MAX` saturate rather than wrap.
pub fn waterfall_balances(rows: &[CityEquipment]) -> Vec<WaterfallRow> {
    let mut total = 0i64;
    rows.iter()
        .map(|row| {
            let delta = signed(row.deliveries).saturating_sub(signed(row.cautelas));
            total = total.saturating_add(delta);
            WaterfallRow {
                city: row.city.clone(),
                delivered: row.deliveries,
                cauteled: row.cautelas,
                balance: total,
                positive: delta >= 0,
            }
        })
        .collect()
}
