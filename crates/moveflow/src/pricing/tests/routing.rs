use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{json, Value};

use super::common::*;
use crate::pricing::requests::{CalculatePriceRequest, QuickEstimateRequest};
use crate::pricing::router::{calculate_handler, classes_handler, estimate_handler};

fn calculate_body(value: Value) -> CalculatePriceRequest {
    serde_json::from_value(value).expect("request body deserializes")
}

#[tokio::test]
async fn calculate_returns_an_itemized_breakdown() {
    let body = calculate_body(json!({
        "distance_km": 100,
        "vehicle_class_id": "small-van",
        "extra_services": {},
        "scheduled_at": OFF_PEAK,
    }));

    let response = calculate_handler(State(state()), axum::Json(body)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = response_json(response).await;
    assert_success_total(&payload, sample_total());
    let items = payload["data"]["line_items"]
        .as_array()
        .expect("line items");
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["item"], "Base fare");
    assert_eq!(items.last().expect("tax line")["item"], "VAT");
}

#[tokio::test]
async fn calculate_rejects_out_of_range_distance() {
    let body = calculate_body(json!({
        "distance_km": 0.5,
        "vehicle_class_id": "small-van",
        "extra_services": {},
    }));

    let response = calculate_handler(State(state()), axum::Json(body)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let payload = response_json(response).await;
    assert_eq!(payload["success"], Value::Bool(false));
    let message = payload["error"].as_str().expect("error message");
    assert!(message.contains("minimum booking distance"));
}

#[tokio::test]
async fn calculate_rejects_unknown_vehicle_class() {
    let body = calculate_body(json!({
        "distance_km": 100,
        "vehicle_class_id": "nonexistent",
        "extra_services": {},
    }));

    let response = calculate_handler(State(state()), axum::Json(body)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let payload = response_json(response).await;
    let message = payload["error"].as_str().expect("error message");
    assert!(message.contains("invalid vehicle class"));
}

#[tokio::test]
async fn calculate_rejects_a_missing_extras_object() {
    let body = calculate_body(json!({
        "distance_km": 100,
        "vehicle_class_id": "small-van",
    }));

    let response = calculate_handler(State(state()), axum::Json(body)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let payload = response_json(response).await;
    let message = payload["error"].as_str().expect("error message");
    assert!(message.contains("missing required field"));
}

#[tokio::test]
async fn estimate_agrees_with_the_full_calculation() {
    let body: QuickEstimateRequest = serde_json::from_value(json!({
        "distance_km": 100,
        "vehicle_class_id": "small-van",
    }))
    .expect("estimate body deserializes");

    let response = estimate_handler(State(state()), axum::Json(body)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = response_json(response).await;
    assert_success_total(&payload, sample_total());
}

#[tokio::test]
async fn vehicle_classes_lists_the_catalog_projection() {
    let response = classes_handler(State(state())).await;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = response_json(response).await;
    assert_eq!(payload["success"], Value::Bool(true));
    let classes = payload["data"].as_array().expect("catalog array");
    assert_eq!(classes.len(), 4);

    let small_van = classes
        .iter()
        .find(|class| class["id"] == "small-van")
        .expect("small van listed");
    assert_eq!(small_van["display_price"], "From 80 + 2.5/km");
}
