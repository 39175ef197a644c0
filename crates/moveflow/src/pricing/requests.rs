//! Request DTOs for the pricing API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::domain::{ExtraServices, PriceRequest};
use super::engine::PricingError;

/// Body of `POST /api/v1/pricing/calculate`.
///
/// `extra_services` is optional at the wire level so its absence reaches the
/// engine as a validation failure (a specific 400) instead of a generic
/// deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatePriceRequest {
    pub distance_km: f64,
    pub vehicle_class_id: String,
    #[serde(default)]
    pub extra_services: Option<ExtraServices>,
    #[serde(default)]
    pub scheduled_at: Option<String>,
}

impl CalculatePriceRequest {
    pub fn into_price_request(self) -> Result<PriceRequest, PricingError> {
        Ok(PriceRequest {
            distance_km: decimal_distance(self.distance_km)?,
            vehicle_class_id: self.vehicle_class_id,
            extra_services: self.extra_services,
            scheduled_at: self.scheduled_at,
        })
    }
}

/// Body of `POST /api/v1/pricing/estimate`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuickEstimateRequest {
    pub distance_km: f64,
    pub vehicle_class_id: String,
}

/// Convert a wire-level distance into the engine's decimal representation.
/// JSON cannot carry NaN or infinities, but the conversion failure still maps
/// to a validation error rather than a panic.
pub(crate) fn decimal_distance(value: f64) -> Result<Decimal, PricingError> {
    Decimal::try_from(value).map_err(|_| PricingError::DistanceNotANumber)
}
