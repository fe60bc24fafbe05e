use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::db;
use crate::error::AppError;
use crate::models::Unit;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateUnit {
    pub unit_number: String,
}

#[derive(Deserialize)]
pub struct UpdateUnit {
    pub unit_number: Option<String>,
    pub property_id: Option<i64>,
}

fn not_found() -> AppError {
    AppError::NotFound("Unit Not Found".to_string())
}

pub async fn list(
    State(state): State<SharedState>,
    Path(property_id): Path<i64>,
) -> Result<Json<Vec<Unit>>, AppError> {
    let units = db::units::list_by_property(&state.pool, property_id).await?;
    Ok(Json(units))
}

pub async fn create(
    State(state): State<SharedState>,
    Path(property_id): Path<i64>,
    Json(req): Json<CreateUnit>,
) -> Result<(StatusCode, Json<Unit>), AppError> {
    db::properties::find_by_id(&state.pool, property_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Property Not Found".to_string()))?;

    let unit = db::units::create(&state.pool, property_id, &req.unit_number).await?;
    tracing::info!(property_id, unit_id = unit.id, "Unit created");
    Ok((StatusCode::CREATED, Json(unit)))
}

pub async fn get(
    State(state): State<SharedState>,
    Path((property_id, unit_id)): Path<(i64, i64)>,
) -> Result<Json<Unit>, AppError> {
    let unit = db::units::find_scoped(&state.pool, property_id, unit_id)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(unit))
}

pub async fn update(
    State(state): State<SharedState>,
    Path((property_id, unit_id)): Path<(i64, i64)>,
    Json(req): Json<UpdateUnit>,
) -> Result<Json<Unit>, AppError> {
    let unit = db::units::update_scoped(
        &state.pool,
        property_id,
        unit_id,
        req.unit_number.as_deref(),
        req.property_id,
    )
    .await?
    .ok_or_else(not_found)?;

    if unit.property_id != property_id {
        tracing::info!(unit_id, from = property_id, to = unit.property_id, "Unit moved");
    } else {
        tracing::info!(property_id, unit_id, "Unit updated");
    }
    Ok(Json(unit))
}

/// Meters of the deleted unit are left in place.
pub async fn delete(
    State(state): State<SharedState>,
    Path((property_id, unit_id)): Path<(i64, i64)>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !db::units::delete_scoped(&state.pool, property_id, unit_id).await? {
        return Err(not_found());
    }
    tracing::info!(property_id, unit_id, "Unit deleted");
    Ok(Json(serde_json::json!({ "message": "Unit deleted successfully" })))
}
