use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Reading {
    pub id: i64,
    pub reading: f64,
    #[serde(rename = "Date")]
    pub date: Option<DateTime<Utc>>,
    pub meter_id: i64,
}
