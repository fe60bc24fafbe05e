use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Unit {
    pub id: i64,
    pub unit_number: String,
    pub property_id: i64,
}
