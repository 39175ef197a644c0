//! Pricing engine for the moveflow relocation marketplace.
//!
//! The crate hosts the fare calculation engine (distance fares, surge
//! multipliers, extra-service surcharges, insurance, and tax) together with
//! the vehicle-class catalog it prices against, and exposes the engine over
//! an axum router for the API service to mount.

pub mod config;
pub mod error;
pub mod pricing;
pub mod telemetry;
