use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::db;
use crate::error::AppError;
use crate::models::Reading;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateReading {
    pub reading: f64,
}

pub async fn create(
    State(state): State<SharedState>,
    Path(meter_id): Path<i64>,
    Json(req): Json<CreateReading>,
) -> Result<Json<Reading>, AppError> {
    db::meters::find_by_id(&state.pool, meter_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Meter Not Found".to_string()))?;

    let reading = db::readings::create(&state.pool, meter_id, req.reading).await?;
    tracing::info!(meter_id, reading_id = reading.id, "Reading recorded");
    Ok(Json(reading))
}
