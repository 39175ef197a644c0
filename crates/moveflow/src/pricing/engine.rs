//! The fare calculation engine.
//!
//! Pure functions over a booking request, a read-only catalog, and the
//! tariff configuration. Calculation order is also the line-item display
//! order: base fare, distance fare, each applied extra, insurance, tax.

use rust_decimal::Decimal;
use thiserror::Error;

use super::catalog::{VehicleCatalog, VehicleClass};
use super::config::PricingConfig;
use super::domain::{ExtraServices, LineItem, PriceBreakdown, PriceRequest, QuickEstimate};
use super::money::{rate_percent, round_money};
use super::surge;

/// Validation failures for a pricing call.
///
/// Deterministic input always yields the same outcome, so none of these are
/// ever worth retrying; the caller needs different input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("distance {distance_km} km is below the minimum booking distance of {min} km")]
    DistanceBelowMinimum { distance_km: Decimal, min: Decimal },
    #[error("distance {distance_km} km is above the maximum booking distance of {max} km")]
    DistanceAboveMaximum { distance_km: Decimal, max: Decimal },
    #[error("distance is not a representable number")]
    DistanceNotANumber,
    #[error("invalid vehicle class '{0}'")]
    UnknownVehicleClass(String),
    #[error("missing required field 'extra_services'")]
    MissingExtraServices,
}

fn validate_distance(distance_km: Decimal, config: &PricingConfig) -> Result<(), PricingError> {
    if distance_km < config.min_distance_km {
        return Err(PricingError::DistanceBelowMinimum {
            distance_km,
            min: config.min_distance_km,
        });
    }
    if distance_km > config.max_distance_km {
        return Err(PricingError::DistanceAboveMaximum {
            distance_km,
            max: config.max_distance_km,
        });
    }
    Ok(())
}

fn resolve_class<'a>(
    catalog: &'a VehicleCatalog,
    id: &str,
) -> Result<&'a VehicleClass, PricingError> {
    catalog
        .find(id)
        .ok_or_else(|| PricingError::UnknownVehicleClass(id.to_string()))
}

fn surge_note(surge_factor: Decimal) -> String {
    if surge_factor > Decimal::ONE {
        format!(" (surge x{})", surge_factor.normalize())
    } else {
        String::new()
    }
}

/// Price a booking request into an itemized breakdown.
pub fn calculate_price(
    request: &PriceRequest,
    catalog: &VehicleCatalog,
    config: &PricingConfig,
) -> Result<PriceBreakdown, PricingError> {
    validate_distance(request.distance_km, config)?;
    let class = resolve_class(catalog, &request.vehicle_class_id)?;
    let extras = request
        .extra_services
        .ok_or(PricingError::MissingExtraServices)?;

    let surge_factor = surge::surge_for(request.scheduled_at.as_deref(), config);
    let note = surge_note(surge_factor);

    // Surge multiplies base and distance only; rounding happens here, once,
    // per the tariff.
    let base_fare = round_money(class.base_price * surge_factor);
    let distance_fare = round_money(request.distance_km * class.price_per_km * surge_factor);

    let mut line_items = vec![
        LineItem {
            item: "Base fare".to_string(),
            amount: base_fare,
            description: format!("{} flat fee{}", class.name, note),
        },
        LineItem {
            item: "Distance".to_string(),
            amount: distance_fare,
            description: format!(
                "{} km x {}/km{}",
                request.distance_km.normalize(),
                class.price_per_km.normalize(),
                note
            ),
        },
    ];

    // Extras in declaration order, each appended only when selected.
    let mut extras_fees = Decimal::ZERO;
    let mut push_extra = |items: &mut Vec<LineItem>, item: &str, amount, description: String| {
        items.push(LineItem {
            item: item.to_string(),
            amount,
            description,
        });
        extras_fees += amount;
    };

    if extras.loading {
        push_extra(
            &mut line_items,
            "Loading & unloading",
            config.loading_fee,
            "Professional loading and unloading crew".to_string(),
        );
    }
    if extras.stairs_flights > 0 {
        let amount = Decimal::from(extras.stairs_flights) * config.stairs_fee_per_flight;
        push_extra(
            &mut line_items,
            "Stairs",
            amount,
            format!(
                "{} flight(s) x {} per flight",
                extras.stairs_flights,
                config.stairs_fee_per_flight.normalize()
            ),
        );
    }
    if extras.packing {
        push_extra(
            &mut line_items,
            "Packing materials",
            config.packing_fee,
            "Boxes, wrap, and tape supplied by the crew".to_string(),
        );
    }
    if extras.cleaning {
        push_extra(
            &mut line_items,
            "Post-move cleaning",
            config.cleaning_fee,
            "Cleaning of the vacated address".to_string(),
        );
    }
    if extras.express {
        // Express compounds with surge: it is a share of the surged fares.
        let amount = round_money((base_fare + distance_fare) * config.express_rate);
        push_extra(
            &mut line_items,
            "Express handling",
            amount,
            format!(
                "{} of base and distance fares",
                rate_percent(config.express_rate)
            ),
        );
    }

    // Insurance covers the whole job, extras included.
    let insurance = if extras.insurance {
        let amount = round_money((base_fare + distance_fare + extras_fees) * config.insurance_rate);
        line_items.push(LineItem {
            item: "Cargo insurance".to_string(),
            amount,
            description: format!(
                "{} of fares and extras",
                rate_percent(config.insurance_rate)
            ),
        });
        amount
    } else {
        Decimal::ZERO
    };

    let subtotal = base_fare + distance_fare + extras_fees + insurance;
    let tax = round_money(subtotal * config.tax_rate);
    line_items.push(LineItem {
        item: "VAT".to_string(),
        amount: tax,
        description: format!("{} on subtotal {}", rate_percent(config.tax_rate), subtotal),
    });

    Ok(PriceBreakdown {
        line_items,
        base_fare,
        distance_fare,
        extras_fees,
        insurance,
        tax,
        total: subtotal + tax,
        surge_factor,
    })
}

/// Fast preview: base fare, distance fare, and tax, with the same rounding
/// and tax rate as the full calculation. A booking with no extras, no
/// insurance, and no surge prices identically through either path.
pub fn quick_estimate(
    distance_km: Decimal,
    vehicle_class_id: &str,
    catalog: &VehicleCatalog,
    config: &PricingConfig,
) -> Result<QuickEstimate, PricingError> {
    validate_distance(distance_km, config)?;
    let class = resolve_class(catalog, vehicle_class_id)?;

    let base_fare = round_money(class.base_price);
    let distance_fare = round_money(distance_km * class.price_per_km);
    let tax = round_money((base_fare + distance_fare) * config.tax_rate);

    let line_items = vec![
        LineItem {
            item: "Base fare".to_string(),
            amount: base_fare,
            description: format!("{} flat fee", class.name),
        },
        LineItem {
            item: "Distance".to_string(),
            amount: distance_fare,
            description: format!(
                "{} km x {}/km",
                distance_km.normalize(),
                class.price_per_km.normalize()
            ),
        },
        LineItem {
            item: "VAT".to_string(),
            amount: tax,
            description: format!(
                "{} on subtotal {}",
                rate_percent(config.tax_rate),
                base_fare + distance_fare
            ),
        },
    ];

    Ok(QuickEstimate {
        line_items,
        total: base_fare + distance_fare + tax,
    })
}
