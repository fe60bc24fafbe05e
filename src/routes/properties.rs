use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::db;
use crate::error::AppError;
use crate::models::{Property, PropertyType};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateProperty {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "type", default)]
    pub property_type: PropertyType,
}

#[derive(Deserialize)]
pub struct UpdateProperty {
    #[serde(rename = "Name")]
    pub name: Option<String>,
}

fn not_found() -> AppError {
    AppError::NotFound("Property Not Found".to_string())
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Property>>, AppError> {
    let properties = db::properties::list(&state.pool).await?;
    Ok(Json(properties))
}

pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<CreateProperty>,
) -> Result<(StatusCode, Json<Property>), AppError> {
    let property = db::properties::create(&state.pool, &req.name, req.property_type).await?;
    tracing::info!(property_id = property.id, "Property created");
    Ok((StatusCode::CREATED, Json(property)))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Property>, AppError> {
    let property = db::properties::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(property))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateProperty>,
) -> Result<Json<Property>, AppError> {
    let property = db::properties::update(&state.pool, id, req.name.as_deref())
        .await?
        .ok_or_else(not_found)?;
    tracing::info!(property_id = id, "Property updated");
    Ok(Json(property))
}

/// Units of the deleted property are left in place.
pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !db::properties::delete(&state.pool, id).await? {
        return Err(not_found());
    }
    tracing::info!(property_id = id, "Property deleted");
    Ok(Json(serde_json::json!({ "message": "Property Deleted Successfully" })))
}
