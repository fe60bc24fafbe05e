use sqlx::SqlitePool;

use crate::models::Unit;

/// Units referencing `property_id`, whether or not that property still exists.
pub async fn list_by_property(
    pool: &SqlitePool,
    property_id: i64,
) -> Result<Vec<Unit>, sqlx::Error> {
    sqlx::query_as::<_, Unit>("SELECT * FROM units WHERE property_id = ? ORDER BY id")
        .bind(property_id)
        .fetch_all(pool)
        .await
}

pub async fn create(
    pool: &SqlitePool,
    property_id: i64,
    unit_number: &str,
) -> Result<Unit, sqlx::Error> {
    sqlx::query_as::<_, Unit>(
        "INSERT INTO units (unit_number, property_id) VALUES (?, ?) RETURNING *",
    )
    .bind(unit_number)
    .bind(property_id)
    .fetch_one(pool)
    .await
}

pub async fn find_scoped(
    pool: &SqlitePool,
    property_id: i64,
    id: i64,
) -> Result<Option<Unit>, sqlx::Error> {
    sqlx::query_as::<_, Unit>("SELECT * FROM units WHERE property_id = ? AND id = ?")
        .bind(property_id)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Partial update scoped to the current parent. A new `property_id` is
/// written as given, without checking that the property exists.
pub async fn update_scoped(
    pool: &SqlitePool,
    property_id: i64,
    id: i64,
    unit_number: Option<&str>,
    new_property_id: Option<i64>,
) -> Result<Option<Unit>, sqlx::Error> {
    sqlx::query_as::<_, Unit>(
        "UPDATE units
         SET unit_number = COALESCE(?, unit_number),
             property_id = COALESCE(?, property_id)
         WHERE property_id = ? AND id = ? RETURNING *",
    )
    .bind(unit_number)
    .bind(new_property_id)
    .bind(property_id)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_scoped(
    pool: &SqlitePool,
    property_id: i64,
    id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM units WHERE property_id = ? AND id = ?")
        .bind(property_id)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
