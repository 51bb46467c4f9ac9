//! Import from a delivery-order dataset.
//!
//! Each row is one order with a drop location, a delivery time, and the
//! location of the store that shipped it. Orders become packages; the
//! stores of a random sample of orders become centers.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use rand::seq::index;
use serde::Deserialize;
use tracing::info;

use super::generator::{random_capacity, GeneratorConfig};
use crate::error::{AssignError, Result};
use crate::models::{Center, Instance, Package, Point};

const REQUIRED_COLUMNS: [&str; 6] = [
    "Order_ID",
    "Drop_Latitude",
    "Drop_Longitude",
    "Delivery_Time",
    "Store_Latitude",
    "Store_Longitude",
];

/// One order of a delivery dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeliveryRecord {
    /// Order identifier, used as the package id.
    #[serde(rename = "Order_ID")]
    pub order_id: String,
    #[serde(rename = "Drop_Latitude")]
    pub drop_latitude: f64,
    #[serde(rename = "Drop_Longitude")]
    pub drop_longitude: f64,
    /// Delivery time, used as the package weight.
    #[serde(rename = "Delivery_Time")]
    pub delivery_time: f64,
    #[serde(rename = "Store_Latitude")]
    pub store_latitude: f64,
    #[serde(rename = "Store_Longitude")]
    pub store_longitude: f64,
}

impl DeliveryRecord {
    /// Drop location as `(latitude, longitude)`.
    pub fn drop_point(&self) -> Point {
        Point::new(self.drop_latitude, self.drop_longitude)
    }

    /// Store location as `(latitude, longitude)`.
    pub fn store_point(&self) -> Point {
        Point::new(self.store_latitude, self.store_longitude)
    }
}

/// Reads delivery records. Columns beyond the required six are ignored.
pub fn read_delivery<R: Read>(reader: R) -> Result<Vec<DeliveryRecord>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(AssignError::MissingColumn(column));
        }
    }
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Builds an instance from delivery records.
///
/// Uses `config.packages` orders (a random sample when more are
/// available) and `min(config.centers, orders)` centers `C1..CM` placed at
/// the stores of a second random sample. Capacities come from
/// `config.capacity_range`. With a seed, the result is reproducible.
///
/// # Examples
///
/// ```
/// use u_assign::dataset::{instance_from_delivery, DeliveryRecord, GeneratorConfig};
///
/// let records: Vec<DeliveryRecord> = (0..10)
///     .map(|i| DeliveryRecord {
///         order_id: format!("o{i}"),
///         drop_latitude: 12.0 + i as f64 * 0.01,
///         drop_longitude: 77.0,
///         delivery_time: 30.0,
///         store_latitude: 12.0,
///         store_longitude: 77.0 + i as f64 * 0.01,
///     })
///     .collect();
/// let config = GeneratorConfig::default().with_packages(4).with_centers(2).with_seed(42);
/// let instance = instance_from_delivery(&records, &config).unwrap();
/// assert_eq!(instance.num_packages(), 4);
/// assert_eq!(instance.num_centers(), 2);
/// ```
pub fn instance_from_delivery(
    records: &[DeliveryRecord],
    config: &GeneratorConfig,
) -> Result<Instance> {
    config.validate()?;
    let mut rng = config.rng();

    let selected: Vec<&DeliveryRecord> = if records.len() > config.packages {
        index::sample(&mut rng, records.len(), config.packages)
            .iter()
            .map(|i| &records[i])
            .collect()
    } else {
        records.iter().collect()
    };

    let packages = selected
        .iter()
        .map(|r| {
            let drop = r.drop_point();
            Package::new(r.order_id.clone(), drop.x, drop.y, r.delivery_time)
        })
        .collect();

    let num_centers = config.centers.min(selected.len());
    let stores = index::sample(&mut rng, selected.len(), num_centers);
    let centers = stores
        .iter()
        .enumerate()
        .map(|(k, i)| {
            let store = selected[i].store_point();
            let capacity = random_capacity(&mut rng, config.capacity_range);
            Center::new(format!("C{}", k + 1), store.x, store.y, capacity)
        })
        .collect();

    Instance::new(packages, centers)
}

/// Loads a delivery CSV file and builds an instance from it.
///
/// Read and parse failures are returned to the caller.
pub fn load_delivery_csv(path: &Path, config: &GeneratorConfig) -> Result<Instance> {
    let records = read_delivery(File::open(path)?)?;
    let instance = instance_from_delivery(&records, config)?;
    info!(
        packages = instance.num_packages(),
        centers = instance.num_centers(),
        "loaded delivery data from {}",
        path.display()
    );
    Ok(instance)
}
