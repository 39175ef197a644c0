//! Request-scoped value objects for the fare engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Optional add-on services for a booking.
///
/// One named field per service; the engine walks these in declaration order,
/// which fixes the line-item order at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraServices {
    /// Professional loading and unloading.
    pub loading: bool,
    /// Number of stair flights without elevator access.
    pub stairs_flights: u32,
    /// Packing materials supplied by the crew.
    pub packing: bool,
    /// Post-move cleaning of the vacated address.
    pub cleaning: bool,
    /// Priority scheduling and crew.
    pub express: bool,
    /// Cargo insurance on the declared load.
    pub insurance: bool,
}

impl ExtraServices {
    pub fn none() -> Self {
        Self::default()
    }
}

/// A priced booking request as the engine sees it.
///
/// `extra_services` stays optional here: the engine itself reports the
/// missing object as a validation failure rather than leaving that to the
/// transport layer. `scheduled_at` is the raw caller-supplied timestamp;
/// malformed values price without surge instead of failing the booking.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRequest {
    pub distance_km: Decimal,
    pub vehicle_class_id: String,
    pub extra_services: Option<ExtraServices>,
    pub scheduled_at: Option<String>,
}

/// One labeled amount within the itemized breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub item: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub description: String,
}

/// Fully itemized price for a booking.
///
/// `line_items` is in calculation order; `total` always equals the sum of
/// the aggregate fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub line_items: Vec<LineItem>,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_fare: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub distance_fare: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub extras_fees: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub insurance: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub tax: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub surge_factor: Decimal,
}

/// Simplified preview before the customer has picked extras: base fare,
/// distance fare, and tax only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickEstimate {
    pub line_items: Vec<LineItem>,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}
