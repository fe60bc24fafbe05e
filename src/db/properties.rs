use sqlx::SqlitePool;

use crate::models::{Property, PropertyType};

pub async fn list(pool: &SqlitePool) -> Result<Vec<Property>, sqlx::Error> {
    sqlx::query_as::<_, Property>("SELECT * FROM properties ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn create(
    pool: &SqlitePool,
    name: &str,
    property_type: PropertyType,
) -> Result<Property, sqlx::Error> {
    sqlx::query_as::<_, Property>(
        "INSERT INTO properties (name, type) VALUES (?, ?) RETURNING *",
    )
    .bind(name)
    .bind(property_type)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Property>, sqlx::Error> {
    sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Partial update: a `None` name keeps the stored value.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    name: Option<&str>,
) -> Result<Option<Property>, sqlx::Error> {
    sqlx::query_as::<_, Property>(
        "UPDATE properties SET name = COALESCE(?, name) WHERE id = ? RETURNING *",
    )
    .bind(name)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Returns `false` when no row matched.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM properties WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
