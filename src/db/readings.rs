use sqlx::SqlitePool;

use crate::models::Reading;

/// Insert a reading with no date; the column stays NULL.
pub async fn create(pool: &SqlitePool, meter_id: i64, reading: f64) -> Result<Reading, sqlx::Error> {
    sqlx::query_as::<_, Reading>(
        "INSERT INTO readings (reading, meter_id) VALUES (?, ?) RETURNING *",
    )
    .bind(reading)
    .bind(meter_id)
    .fetch_one(pool)
    .await
}
