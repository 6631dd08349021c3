use rust_decimal::Decimal;
use serde::Serialize;

// Estadísticas del dashboard admin. Se calculan en vivo en cada
// llamada; las claves camelCase son el contrato con el frontend.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_vehicles: i64,
    pub available_vehicles: i64,
    pub sold_vehicles: i64,
    pub pending_messages: i64,
    pub total_inventory_value: Decimal,
}
