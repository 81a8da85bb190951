//! Equipment (CONEQ) API payload types: stock, deliveries, and cautelas
//! (equipment custody terms).

use serde::{Deserialize, Serialize};

/// One stock status bucket as the API reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockStatusCount {
    pub status: String,
    #[serde(rename = "quantidade")]
    pub quantity: u64,
}

/// Stock breakdown response; `cauteled` is present on the general endpoint
/// only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockResponse {
    #[serde(rename = "estoque")]
    pub statuses: Vec<StockStatusCount>,
    #[serde(rename = "cautelas", default)]
    pub cauteled: Option<u64>,
}

/// One cautela status bucket; `status` carries the workflow code (`6`..`9`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CautelaStatusCount {
    pub status: String,
    #[serde(rename = "quantidade")]
    pub quantity: u64,
}

/// Cautela breakdown response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CautelaResponse {
    #[serde(rename = "cautela")]
    pub statuses: Vec<CautelaStatusCount>,
}

/// Per-equipment stock level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    #[serde(rename = "equipamento_nome")]
    pub equipment: String,
    #[serde(rename = "quantidade_em_estoque")]
    pub in_stock: u64,
}

/// Equipment type catalog entry for the filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentType {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
}

/// Cautela count for one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityCautelas {
    #[serde(rename = "nome_cidade")]
    pub city: String,
    #[serde(rename = "qtd_cautelas")]
    pub cautelas: u64,
}

/// Delivery count for one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityDeliveries {
    #[serde(rename = "nome_cidade")]
    pub city: String,
    #[serde(rename = "qtd_entregas")]
    pub deliveries: u64,
}

/// Combined cautelas/deliveries row for the per-city bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityEquipment {
    #[serde(rename = "nome_cidade")]
    pub city: String,
    #[serde(rename = "Cautelas")]
    pub cautelas: u64,
    #[serde(rename = "Entregas")]
    pub deliveries: u64,
}

/// A generic labeled value for pie/doughnut series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    pub value: u64,
}

/// Display label for a stock status; unknown statuses pass through.
pub fn stock_status_label(status: &str) -> String {
    match status {
        "EM ESTOQUE" => "Em Estoque".to_string(),
        "ENTREGUE" => "Entregue".to_string(),
        "SEPARADO PARA ENTREGA" => "Separado para Entrega".to_string(),
        other => other.to_string(),
    }
}

/// Display label for a cautela workflow code; unknown codes are surfaced
/// as `Status {code}` rather than dropped.
pub fn cautela_status_label(status: &str) -> String {
    match status.trim() {
        "7" => "Assinado".to_string(),
        "6" => "Aguardando Assinatura".to_string(),
        "9" => "Descautelado".to_string(),
        "8" => "Parcialmente Descautelado".to_string(),
        other => format!("Status {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_labels_map_known_statuses() {
        assert_eq!(stock_status_label("EM ESTOQUE"), "Em Estoque");
        assert_eq!(
            stock_status_label("SEPARADO PARA ENTREGA"),
            "Separado para Entrega"
        );
        assert_eq!(stock_status_label("EXTRAVIADO"), "EXTRAVIADO");
    }

    #[test]
    fn cautela_labels_map_workflow_codes() {
        assert_eq!(cautela_status_label("7"), "Assinado");
        assert_eq!(cautela_status_label("6"), "Aguardando Assinatura");
        assert_eq!(cautela_status_label("9"), "Descautelado");
        assert_eq!(cautela_status_label("8"), "Parcialmente Descautelado");
        assert_eq!(cautela_status_label("42"), "Status 42");
    }

    #[test]
    fn stock_response_parses_wire_names() {
        let json = r#"{"estoque":[{"status":"EM ESTOQUE","quantidade":120}],"cautelas":33}"#;
        let response: StockResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.statuses.len(), 1);
        assert_eq!(response.statuses[0].quantity, 120);
        assert_eq!(response.cauteled, Some(33));

        let bare = r#"{"estoque":[]}"#;
        let response: StockResponse = serde_json::from_str(bare).unwrap();
        assert_eq!(response.cauteled, None);
    }

    #[test]
    fn city_equipment_serializes_chart_field_names() {
        let row = CityEquipment {
            city: "Sinop".to_string(),
            cautelas: 4,
            deliveries: 9,
        };
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            r#"{"nome_cidade":"Sinop","Cautelas":4,"Entregas":9}"#
        );
    }
}
