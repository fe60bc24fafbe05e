pub mod meters;
pub mod properties;
pub mod readings;
pub mod units;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Properties
        .route("/properties", get(properties::list).post(properties::create))
        .route(
            "/properties/{id}",
            get(properties::get)
                .patch(properties::update)
                .delete(properties::delete),
        )
        // Units
        .route(
            "/properties/{property_id}/units",
            get(units::list).post(units::create),
        )
        .route(
            "/properties/{property_id}/units/{unit_id}",
            get(units::get).patch(units::update).delete(units::delete),
        )
        // Meters
        .route(
            "/properties/{property_id}/units/{unit_id}/meters",
            get(meters::list).post(meters::create),
        )
        // Readings
        .route("/meters/{meter_id}/readings", post(readings::create))
}
