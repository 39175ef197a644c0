use std::sync::Arc;

use axum::response::Response;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use crate::pricing::catalog::VehicleCatalog;
use crate::pricing::config::PricingConfig;
use crate::pricing::domain::{ExtraServices, PriceRequest};
use crate::pricing::router::PricingState;

pub(super) fn catalog() -> VehicleCatalog {
    VehicleCatalog::standard()
}

pub(super) fn config() -> PricingConfig {
    PricingConfig::standard()
}

pub(super) fn state() -> Arc<PricingState> {
    Arc::new(PricingState::new(Arc::new(catalog()), config()))
}

/// Wednesday early afternoon: outside every surge window.
pub(super) const OFF_PEAK: &str = "2026-03-04T13:00:00";

pub(super) fn off_peak_request(distance_km: Decimal) -> PriceRequest {
    PriceRequest {
        distance_km,
        vehicle_class_id: "small-van".to_string(),
        extra_services: Some(ExtraServices::none()),
        scheduled_at: Some(OFF_PEAK.to_string()),
    }
}

pub(super) fn all_extras() -> ExtraServices {
    ExtraServices {
        loading: true,
        stairs_flights: 2,
        packing: true,
        cleaning: true,
        express: true,
        insurance: true,
    }
}

pub(super) async fn response_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects");
    serde_json::from_slice(&bytes).expect("body is json")
}

pub(super) fn total_of(body: &Value) -> Decimal {
    body["data"]["total"]
        .as_str()
        .expect("total serialized as string")
        .parse()
        .expect("total parses as decimal")
}

pub(super) fn assert_success_total(body: &Value, expected: Decimal) {
    assert_eq!(body["success"], Value::Bool(true));
    assert_eq!(total_of(body), expected);
}

pub(super) fn sample_total() -> Decimal {
    dec!(380)
}
