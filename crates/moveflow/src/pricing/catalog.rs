//! Vehicle-class catalog the engine prices against.
//!
//! The catalog is built once at startup (from the built-in tariff or a CSV
//! file) and shared read-only for the life of the process. A reload is a new
//! catalog swapped in behind an `Arc`, never an in-place edit.

use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One bookable vehicle class with its pricing parameters.
///
/// `capacity_m3` and `description` are informational and never enter the
/// fare calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleClass {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_km: Decimal,
    pub capacity_m3: u32,
    #[serde(default)]
    pub description: String,
}

/// Catalog projection for listings: the class plus a ready-made price label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleClassView {
    pub id: String,
    pub name: String,
    pub capacity_m3: u32,
    pub description: String,
    pub display_price: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog row: {0}")]
    Csv(#[from] csv::Error),
    #[error("duplicate vehicle class id '{0}'")]
    DuplicateClassId(String),
    #[error("vehicle class '{id}' has a negative {field}")]
    NegativeAmount { id: String, field: &'static str },
}

/// Immutable set of vehicle classes with unique ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleCatalog {
    classes: Vec<VehicleClass>,
}

impl VehicleCatalog {
    /// Build a catalog, rejecting duplicate ids and negative pricing
    /// parameters. Order is preserved and is the listing order.
    pub fn new(classes: Vec<VehicleClass>) -> Result<Self, CatalogError> {
        for (index, class) in classes.iter().enumerate() {
            if classes[..index].iter().any(|other| other.id == class.id) {
                return Err(CatalogError::DuplicateClassId(class.id.clone()));
            }
            if class.base_price < Decimal::ZERO {
                return Err(CatalogError::NegativeAmount {
                    id: class.id.clone(),
                    field: "base_price",
                });
            }
            if class.price_per_km < Decimal::ZERO {
                return Err(CatalogError::NegativeAmount {
                    id: class.id.clone(),
                    field: "price_per_km",
                });
            }
        }
        Ok(Self { classes })
    }

    /// The built-in marketplace fleet.
    pub fn standard() -> Self {
        let classes = vec![
            VehicleClass {
                id: "pickup".to_string(),
                name: "Pickup".to_string(),
                base_price: dec!(50),
                price_per_km: dec!(1.8),
                capacity_m3: 6,
                description: "Single-room moves and bulky-item delivery".to_string(),
            },
            VehicleClass {
                id: "small-van".to_string(),
                name: "Small Van".to_string(),
                base_price: dec!(80),
                price_per_km: dec!(2.5),
                capacity_m3: 12,
                description: "Studio and one-bedroom moves".to_string(),
            },
            VehicleClass {
                id: "medium-truck".to_string(),
                name: "Medium Truck".to_string(),
                base_price: dec!(140),
                price_per_km: dec!(3.6),
                capacity_m3: 24,
                description: "Two- to three-bedroom moves".to_string(),
            },
            VehicleClass {
                id: "large-truck".to_string(),
                name: "Large Truck".to_string(),
                base_price: dec!(220),
                price_per_km: dec!(5.0),
                capacity_m3: 40,
                description: "Full households and small offices".to_string(),
            },
        ];

        Self::new(classes).expect("built-in catalog has unique ids")
    }

    /// Load classes from CSV with an
    /// `id,name,base_price,price_per_km,capacity_m3,description` header row.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut classes = Vec::new();
        for row in csv_reader.deserialize::<VehicleClass>() {
            classes.push(row?);
        }

        Self::new(classes)
    }

    pub fn from_csv_path(path: &Path) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Look up a class by id. The fleet is small and fixed, so a linear scan
    /// is the index.
    pub fn find(&self, id: &str) -> Option<&VehicleClass> {
        self.classes.iter().find(|class| class.id == id)
    }

    pub fn classes(&self) -> &[VehicleClass] {
        &self.classes
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Listing projection in catalog order; empty catalog yields an empty
    /// list.
    pub fn views(&self) -> Vec<VehicleClassView> {
        self.classes
            .iter()
            .map(|class| VehicleClassView {
                id: class.id.clone(),
                name: class.name.clone(),
                capacity_m3: class.capacity_m3,
                description: class.description.clone(),
                display_price: format!(
                    "From {} + {}/km",
                    class.base_price.normalize(),
                    class.price_per_km.normalize()
                ),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_resolves_known_ids() {
        let catalog = VehicleCatalog::standard();
        let small_van = catalog.find("small-van").expect("small van listed");
        assert_eq!(small_van.base_price, dec!(80));
        assert_eq!(small_van.price_per_km, dec!(2.5));
        assert!(catalog.find("hovercraft").is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let duplicate = VehicleClass {
            id: "pickup".to_string(),
            name: "Second Pickup".to_string(),
            base_price: dec!(55),
            price_per_km: dec!(2.0),
            capacity_m3: 6,
            description: String::new(),
        };
        let mut classes = VehicleCatalog::standard().classes().to_vec();
        classes.push(duplicate);

        let err = VehicleCatalog::new(classes).expect_err("duplicate id must fail");
        assert!(matches!(err, CatalogError::DuplicateClassId(id) if id == "pickup"));
    }

    #[test]
    fn loads_classes_from_csv() {
        let csv = "\
id,name,base_price,price_per_km,capacity_m3,description
cargo-bike,Cargo Bike,20,0.9,1,Documents and parcels
small-van,Small Van,80,2.5,12,Studio moves
";
        let catalog =
            VehicleCatalog::from_csv_reader(csv.as_bytes()).expect("csv catalog parses");
        assert_eq!(catalog.classes().len(), 2);
        let bike = catalog.find("cargo-bike").expect("bike listed");
        assert_eq!(bike.price_per_km, dec!(0.9));
        assert_eq!(bike.capacity_m3, 1);
    }

    #[test]
    fn csv_duplicate_ids_are_rejected() {
        let csv = "\
id,name,base_price,price_per_km,capacity_m3,description
small-van,Small Van,80,2.5,12,
small-van,Small Van Again,85,2.6,12,
";
        let err =
            VehicleCatalog::from_csv_reader(csv.as_bytes()).expect_err("duplicate must fail");
        assert!(matches!(err, CatalogError::DuplicateClassId(_)));
    }

    #[test]
    fn rejects_negative_pricing_parameters() {
        let mut classes = VehicleCatalog::standard().classes().to_vec();
        classes.push(VehicleClass {
            id: "bad-van".to_string(),
            name: "Bad Van".to_string(),
            base_price: dec!(-50),
            price_per_km: dec!(2.0),
            capacity_m3: 12,
            description: String::new(),
        });

        let err = VehicleCatalog::new(classes).expect_err("negative base price must fail");
        assert!(matches!(
            err,
            CatalogError::NegativeAmount { ref id, field: "base_price" } if id == "bad-van"
        ));
    }

    #[test]
    fn csv_negative_rate_is_rejected() {
        // A class with a negative per-km rate would price every booking
        // against it to a negative total.
        let csv = "\
id,name,base_price,price_per_km,capacity_m3,description
bad-van,Bad Van,50,-3.0,12,
";
        let err =
            VehicleCatalog::from_csv_reader(csv.as_bytes()).expect_err("negative rate must fail");
        assert!(matches!(
            err,
            CatalogError::NegativeAmount { ref id, field: "price_per_km" } if id == "bad-van"
        ));
    }

    #[test]
    fn views_carry_display_price_labels() {
        let catalog = VehicleCatalog::standard();
        let views = catalog.views();
        assert_eq!(views.len(), catalog.classes().len());

        let small_van = views
            .iter()
            .find(|view| view.id == "small-van")
            .expect("small van view");
        assert_eq!(small_van.display_price, "From 80 + 2.5/km");

        let large = views
            .iter()
            .find(|view| view.id == "large-truck")
            .expect("large truck view");
        assert_eq!(large.display_price, "From 220 + 5/km");
    }

    #[test]
    fn empty_catalog_lists_nothing() {
        let catalog = VehicleCatalog::new(Vec::new()).expect("empty catalog is valid");
        assert!(catalog.is_empty());
        assert!(catalog.views().is_empty());
    }
}
