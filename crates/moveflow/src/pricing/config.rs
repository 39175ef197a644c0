use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Tariff configuration for the fare engine.
///
/// Constructed explicitly and passed into every calculation; there is no
/// module-level tariff state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Inclusive lower bound for bookable trip distance, in km.
    pub min_distance_km: Decimal,
    /// Inclusive upper bound for bookable trip distance, in km.
    pub max_distance_km: Decimal,
    pub tax_rate: Decimal,
    pub insurance_rate: Decimal,
    /// Multiplier for weekday commuter windows (7-9 and 17-19 local).
    pub weekday_peak_surge: Decimal,
    /// Floor multiplier for Saturday and Sunday bookings.
    pub weekend_surge: Decimal,
    /// Hard ceiling; applicable multipliers are combined with `max`, then
    /// clamped here.
    pub max_surge: Decimal,
    pub loading_fee: Decimal,
    pub stairs_fee_per_flight: Decimal,
    pub packing_fee: Decimal,
    pub cleaning_fee: Decimal,
    /// Express handling charge as a fraction of the surged base+distance
    /// subtotal.
    pub express_rate: Decimal,
}

impl PricingConfig {
    /// The published marketplace tariff.
    pub fn standard() -> Self {
        Self {
            min_distance_km: dec!(1),
            max_distance_km: dec!(500),
            tax_rate: dec!(0.15),
            insurance_rate: dec!(0.05),
            weekday_peak_surge: dec!(1.20),
            weekend_surge: dec!(1.15),
            max_surge: dec!(1.20),
            loading_fee: dec!(50),
            stairs_fee_per_flight: dec!(25),
            packing_fee: dec!(100),
            cleaning_fee: dec!(150),
            express_rate: dec!(0.25),
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::standard()
    }
}
