use sqlx::SqlitePool;

use crate::models::{Meter, MeterType};

pub async fn list_by_unit(pool: &SqlitePool, unit_id: i64) -> Result<Vec<Meter>, sqlx::Error> {
    sqlx::query_as::<_, Meter>("SELECT * FROM meters WHERE unit_id = ? ORDER BY id")
        .bind(unit_id)
        .fetch_all(pool)
        .await
}

pub async fn create(
    pool: &SqlitePool,
    unit_id: i64,
    meter_number: &str,
    meter_type: MeterType,
) -> Result<Meter, sqlx::Error> {
    sqlx::query_as::<_, Meter>(
        "INSERT INTO meters (meter_number, type, unit_id) VALUES (?, ?, ?) RETURNING *",
    )
    .bind(meter_number)
    .bind(meter_type)
    .bind(unit_id)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Meter>, sqlx::Error> {
    sqlx::query_as::<_, Meter>("SELECT * FROM meters WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}
