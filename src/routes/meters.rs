use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::db;
use crate::error::AppError;
use crate::models::{Meter, MeterType};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateMeter {
    pub meter_number: String,
    #[serde(rename = "type")]
    pub meter_type: MeterType,
}

pub async fn create(
    State(state): State<SharedState>,
    Path((property_id, unit_id)): Path<(i64, i64)>,
    Json(req): Json<CreateMeter>,
) -> Result<Json<Meter>, AppError> {
    let unit = db::units::find_scoped(&state.pool, property_id, unit_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Unit Not Found".to_string()))?;

    let meter = db::meters::create(&state.pool, unit.id, &req.meter_number, req.meter_type).await?;
    tracing::info!(unit_id = unit.id, meter_id = meter.id, "Meter created");
    Ok(Json(meter))
}

/// A missing unit and a unit without meters both answer 404.
pub async fn list(
    State(state): State<SharedState>,
    Path((property_id, unit_id)): Path<(i64, i64)>,
) -> Result<Json<Vec<Meter>>, AppError> {
    let meters = match db::units::find_scoped(&state.pool, property_id, unit_id).await? {
        Some(unit) => db::meters::list_by_unit(&state.pool, unit.id).await?,
        None => Vec::new(),
    };

    if meters.is_empty() {
        return Err(AppError::NotFound("Meters Not Found".to_string()));
    }
    Ok(Json(meters))
}
