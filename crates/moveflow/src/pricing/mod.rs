//! Fare calculation for the moveflow marketplace.
//!
//! The engine is pure: it prices a booking request against a read-only
//! vehicle-class catalog and an injected tariff configuration, returning an
//! itemized breakdown. The axum router in [`router`] is the only transport
//! surface; the API service mounts it next to its own health and metrics
//! endpoints.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod engine;
pub mod money;
pub mod requests;
pub mod router;
pub mod surge;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, VehicleCatalog, VehicleClass, VehicleClassView};
pub use config::PricingConfig;
pub use domain::{ExtraServices, LineItem, PriceBreakdown, PriceRequest, QuickEstimate};
pub use engine::{calculate_price, quick_estimate, PricingError};
pub use money::round_money;
pub use router::{pricing_router, PricingState};
