use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Meter {
    pub id: i64,
    pub meter_number: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub meter_type: MeterType,
    pub unit_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "snake_case")]
pub enum MeterType {
    #[serde(rename = "Cold Water", alias = "cold_water")]
    ColdWater,
    #[serde(rename = "Hot Water", alias = "hot_water")]
    HotWater,
}
