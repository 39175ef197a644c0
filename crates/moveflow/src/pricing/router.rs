use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::catalog::VehicleCatalog;
use super::config::PricingConfig;
use super::engine::{calculate_price, quick_estimate};
use super::requests::{decimal_distance, CalculatePriceRequest, QuickEstimateRequest};

/// Shared read-only state for the pricing endpoints. A catalog reload swaps
/// the `Arc`, never mutates the catalog in place.
#[derive(Debug, Clone)]
pub struct PricingState {
    pub catalog: Arc<VehicleCatalog>,
    pub config: PricingConfig,
}

impl PricingState {
    pub fn new(catalog: Arc<VehicleCatalog>, config: PricingConfig) -> Self {
        Self { catalog, config }
    }
}

/// Router builder exposing the pricing endpoints.
pub fn pricing_router(state: Arc<PricingState>) -> Router {
    Router::new()
        .route("/api/v1/pricing/calculate", post(calculate_handler))
        .route("/api/v1/pricing/estimate", post(estimate_handler))
        .route("/api/v1/pricing/vehicle-classes", get(classes_handler))
        .with_state(state)
}

pub(crate) async fn calculate_handler(
    State(state): State<Arc<PricingState>>,
    axum::Json(body): axum::Json<CalculatePriceRequest>,
) -> Response {
    let request = match body.into_price_request() {
        Ok(request) => request,
        Err(error) => return validation_failure(error),
    };

    match calculate_price(&request, &state.catalog, &state.config) {
        Ok(breakdown) => {
            let payload = json!({ "success": true, "data": breakdown });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => validation_failure(error),
    }
}

pub(crate) async fn estimate_handler(
    State(state): State<Arc<PricingState>>,
    axum::Json(body): axum::Json<QuickEstimateRequest>,
) -> Response {
    let distance_km = match decimal_distance(body.distance_km) {
        Ok(distance_km) => distance_km,
        Err(error) => return validation_failure(error),
    };

    match quick_estimate(
        distance_km,
        &body.vehicle_class_id,
        &state.catalog,
        &state.config,
    ) {
        Ok(estimate) => {
            let payload = json!({ "success": true, "data": estimate });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => validation_failure(error),
    }
}

pub(crate) async fn classes_handler(State(state): State<Arc<PricingState>>) -> Response {
    let payload = json!({ "success": true, "data": state.catalog.views() });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

fn validation_failure(error: super::engine::PricingError) -> Response {
    let payload = json!({
        "success": false,
        "error": error.to_string(),
    });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}
