//! Offline pricing from the command line: the same engine the HTTP service
//! hosts, printed as a breakdown table for support staff and demos.

use std::path::PathBuf;

use clap::Args;
use moveflow::error::AppError;
use moveflow::pricing::{calculate_price, ExtraServices, PriceRequest};
use rust_decimal::Decimal;

use crate::infra::{load_catalog, parse_distance, pricing_config};

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Trip distance in km
    #[arg(long, value_parser = parse_distance)]
    pub(crate) distance_km: Decimal,
    /// Vehicle class id, e.g. small-van
    #[arg(long)]
    pub(crate) vehicle_class: String,
    /// Scheduled pickup time (RFC 3339 or "YYYY-MM-DD HH:MM"); unreadable
    /// values price without surge
    #[arg(long)]
    pub(crate) scheduled_at: Option<String>,
    /// Professional loading and unloading
    #[arg(long)]
    pub(crate) loading: bool,
    /// Number of stair flights without elevator access
    #[arg(long, default_value_t = 0)]
    pub(crate) stairs_flights: u32,
    /// Packing materials supplied by the crew
    #[arg(long)]
    pub(crate) packing: bool,
    /// Post-move cleaning of the vacated address
    #[arg(long)]
    pub(crate) cleaning: bool,
    /// Priority scheduling and crew
    #[arg(long)]
    pub(crate) express: bool,
    /// Cargo insurance on the declared load
    #[arg(long)]
    pub(crate) insurance: bool,
    /// Vehicle-class catalog CSV (defaults to the built-in fleet)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ClassesArgs {
    /// Vehicle-class catalog CSV (defaults to the built-in fleet)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let config = pricing_config();

    let request = PriceRequest {
        distance_km: args.distance_km,
        vehicle_class_id: args.vehicle_class.clone(),
        extra_services: Some(ExtraServices {
            loading: args.loading,
            stairs_flights: args.stairs_flights,
            packing: args.packing,
            cleaning: args.cleaning,
            express: args.express,
            insurance: args.insurance,
        }),
        scheduled_at: args.scheduled_at.clone(),
    };

    let breakdown = calculate_price(&request, &catalog, &config)?;

    println!(
        "Quote: {} km, {}{}",
        args.distance_km.normalize(),
        args.vehicle_class,
        args.scheduled_at
            .as_deref()
            .map(|at| format!(", scheduled {at}"))
            .unwrap_or_default()
    );
    println!();
    for item in &breakdown.line_items {
        println!(
            "  {:<20} {:>8}   {}",
            item.item, item.amount, item.description
        );
    }
    println!();
    println!("  {:<20} {:>8}", "Total", breakdown.total);

    Ok(())
}

pub(crate) fn run_classes(args: ClassesArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;

    if catalog.is_empty() {
        println!("The catalog is empty.");
        return Ok(());
    }

    for view in catalog.views() {
        println!(
            "  {:<14} {:<14} {:>4} m3   {}",
            view.id, view.name, view.capacity_m3, view.display_price
        );
    }

    Ok(())
}
