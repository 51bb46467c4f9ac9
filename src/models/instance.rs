//! Validated problem instance.

use std::collections::HashSet;

use super::{Center, Package};
use crate::error::{AssignError, Result};

/// Packages and centers of one assignment problem, in input order.
///
/// Construction validates the data, so every algorithm in this crate can
/// treat an `Instance` as well formed.
///
/// # Examples
///
/// ```
/// use u_assign::models::{Center, Instance, Package};
///
/// let instance = Instance::new(
///     vec![Package::new("P1", 0.0, 0.0, 10.0)],
///     vec![Center::new("C1", 0.0, 0.0, 1), Center::new("C2", 10.0, 10.0, 1)],
/// )
/// .unwrap();
/// assert_eq!(instance.num_packages(), 1);
/// assert_eq!(instance.num_centers(), 2);
///
/// let bad = Instance::new(vec![Package::new("P1", f64::NAN, 0.0, 1.0)], vec![]);
/// assert!(bad.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    packages: Vec<Package>,
    centers: Vec<Center>,
}

impl Instance {
    /// Validates and wraps the given packages and centers.
    ///
    /// Fails on empty or duplicate ids, non-finite coordinates, and
    /// non-finite or non-positive delivery weights.
    pub fn new(packages: Vec<Package>, centers: Vec<Center>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(packages.len());
        for (index, p) in packages.iter().enumerate() {
            if p.id().is_empty() {
                return Err(AssignError::EmptyId {
                    kind: "package",
                    index,
                });
            }
            if !seen.insert(p.id()) {
                return Err(AssignError::DuplicateId {
                    kind: "package",
                    id: p.id().to_string(),
                });
            }
            if !p.location().is_finite() {
                return Err(AssignError::NonFiniteLocation {
                    kind: "package",
                    id: p.id().to_string(),
                    x: p.x(),
                    y: p.y(),
                });
            }
            if !p.weight().is_finite() || p.weight() <= 0.0 {
                return Err(AssignError::InvalidWeight {
                    id: p.id().to_string(),
                    weight: p.weight(),
                });
            }
        }

        let mut seen = HashSet::with_capacity(centers.len());
        for (index, c) in centers.iter().enumerate() {
            if c.id().is_empty() {
                return Err(AssignError::EmptyId {
                    kind: "center",
                    index,
                });
            }
            if !seen.insert(c.id()) {
                return Err(AssignError::DuplicateId {
                    kind: "center",
                    id: c.id().to_string(),
                });
            }
            if !c.location().is_finite() {
                return Err(AssignError::NonFiniteLocation {
                    kind: "center",
                    id: c.id().to_string(),
                    x: c.x(),
                    y: c.y(),
                });
            }
        }

        Ok(Self { packages, centers })
    }

    /// All packages, in input order.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// All centers, in input order.
    pub fn centers(&self) -> &[Center] {
        &self.centers
    }

    /// Number of packages.
    pub fn num_packages(&self) -> usize {
        self.packages.len()
    }

    /// Number of centers.
    pub fn num_centers(&self) -> usize {
        self.centers.len()
    }

    /// Sum of declared center capacities.
    pub fn total_capacity(&self) -> u64 {
        self.centers.iter().map(|c| u64::from(c.capacity())).sum()
    }

    /// Index of the package with the given id.
    pub fn package_index(&self, id: &str) -> Option<usize> {
        self.packages.iter().position(|p| p.id() == id)
    }

    /// Index of the center with the given id.
    pub fn center_index(&self, id: &str) -> Option<usize> {
        self.centers.iter().position(|c| c.id() == id)
    }
}
