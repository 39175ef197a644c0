use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use moveflow::error::AppError;
use moveflow::pricing::{PricingConfig, VehicleCatalog};
use rust_decimal::Decimal;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the catalog from a CSV path when one is configured, otherwise the
/// built-in fleet.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<VehicleCatalog, AppError> {
    match path {
        Some(path) => Ok(VehicleCatalog::from_csv_path(path)?),
        None => Ok(VehicleCatalog::standard()),
    }
}

pub(crate) fn pricing_config() -> PricingConfig {
    PricingConfig::standard()
}

/// clap value parser for booking distances.
pub(crate) fn parse_distance(raw: &str) -> Result<Decimal, String> {
    raw.trim()
        .parse::<Decimal>()
        .map_err(|err| format!("failed to parse '{raw}' as a distance in km ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn falls_back_to_the_builtin_catalog() {
        let catalog = load_catalog(None).expect("builtin catalog loads");
        assert!(catalog.find("small-van").is_some());
    }

    #[test]
    fn parses_distances_with_whitespace() {
        assert_eq!(parse_distance(" 42.5 ").expect("parses"), dec!(42.5));
        assert!(parse_distance("forty").is_err());
    }
}
