//! Flat CSV files for packages, centers, and assignments.
//!
//! Packages use the header `id,x,y,delivery_time`, centers
//! `id,x,y,capacity`, assignments `package_id,center_id,cost`.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Trim, Writer};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::evaluation::AssignmentEvaluator;
use crate::models::{Assignment, Center, Instance, Package};

/// File name of the packages table written by [`write_instance`].
pub const PACKAGES_FILE: &str = "packages.csv";

/// File name of the centers table written by [`write_instance`].
pub const CENTERS_FILE: &str = "centers.csv";

#[derive(Debug, Serialize, Deserialize)]
struct PackageRecord {
    id: String,
    x: f64,
    y: f64,
    delivery_time: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct CenterRecord {
    id: String,
    x: f64,
    y: f64,
    capacity: u32,
}

#[derive(Debug, Serialize)]
struct AssignmentRecord<'a> {
    package_id: &'a str,
    center_id: Option<&'a str>,
    cost: f64,
}

/// Reads packages from CSV.
pub fn read_packages<R: Read>(reader: R) -> Result<Vec<Package>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut packages = Vec::new();
    for row in reader.deserialize() {
        let r: PackageRecord = row?;
        packages.push(Package::new(r.id, r.x, r.y, r.delivery_time));
    }
    Ok(packages)
}

/// Reads centers from CSV.
pub fn read_centers<R: Read>(reader: R) -> Result<Vec<Center>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut centers = Vec::new();
    for row in reader.deserialize() {
        let r: CenterRecord = row?;
        centers.push(Center::new(r.id, r.x, r.y, r.capacity));
    }
    Ok(centers)
}

/// Writes packages as CSV.
pub fn write_packages<W: Write>(writer: W, packages: &[Package]) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    for p in packages {
        wtr.serialize(PackageRecord {
            id: p.id().to_string(),
            x: p.x(),
            y: p.y(),
            delivery_time: p.weight(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes centers as CSV.
pub fn write_centers<W: Write>(writer: W, centers: &[Center]) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    for c in centers {
        wtr.serialize(CenterRecord {
            id: c.id().to_string(),
            x: c.x(),
            y: c.y(),
            capacity: c.capacity(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes one row per package: its center (empty if unassigned) and its
/// weighted cost (zero if unassigned).
pub fn write_assignment<W: Write>(
    writer: W,
    instance: &Instance,
    assignment: &Assignment,
) -> Result<()> {
    let eval = AssignmentEvaluator::new(instance);
    let mut wtr = Writer::from_writer(writer);
    for (p, package) in instance.packages().iter().enumerate() {
        let center = assignment
            .center_of(p)
            .and_then(|c| instance.centers().get(c).map(|center| (c, center)));
        let record = match center {
            Some((c, center)) => AssignmentRecord {
                package_id: package.id(),
                center_id: Some(center.id()),
                cost: eval.package_cost(p, c).unwrap_or(0.0),
            },
            None => AssignmentRecord {
                package_id: package.id(),
                center_id: None,
                cost: 0.0,
            },
        };
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Reads `packages_path` and `centers_path` and validates them together.
pub fn read_instance(packages_path: &Path, centers_path: &Path) -> Result<Instance> {
    let packages = read_packages(File::open(packages_path)?)?;
    let centers = read_centers(File::open(centers_path)?)?;
    info!(
        packages = packages.len(),
        centers = centers.len(),
        "loaded instance from {} and {}",
        packages_path.display(),
        centers_path.display()
    );
    Instance::new(packages, centers)
}

/// Writes [`PACKAGES_FILE`] and [`CENTERS_FILE`] into `dir`, creating it if
/// needed.
pub fn write_instance(dir: &Path, instance: &Instance) -> Result<()> {
    fs::create_dir_all(dir)?;
    write_packages(File::create(dir.join(PACKAGES_FILE))?, instance.packages())?;
    write_centers(File::create(dir.join(CENTERS_FILE))?, instance.centers())?;
    Ok(())
}
