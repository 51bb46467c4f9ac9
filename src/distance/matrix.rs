//! Dense package × center cost matrix.

use crate::models::Instance;

/// A dense packages×centers matrix stored in row-major order.
///
/// Entry `(p, c)` holds the weighted cost of serving package `p` from
/// center `c`: `weight(p) * distance(p, c)`. Each row also keeps the plain
/// distances, which drive the greedy nearest-center choice.
///
/// # Examples
///
/// ```
/// use u_assign::models::{Center, Instance, Package};
/// use u_assign::distance::CostMatrix;
///
/// let instance = Instance::new(
///     vec![Package::new("P1", 0.0, 0.0, 2.0)],
///     vec![Center::new("C1", 3.0, 4.0, 1), Center::new("C2", 0.0, 1.0, 1)],
/// )
/// .unwrap();
/// let m = CostMatrix::from_instance(&instance);
/// assert!((m.distance(0, 0) - 5.0).abs() < 1e-10);
/// assert!((m.cost(0, 0) - 10.0).abs() < 1e-10);
/// assert_eq!(m.nearest_center(0, [0, 1]), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct CostMatrix {
    distances: Vec<f64>,
    costs: Vec<f64>,
    num_packages: usize,
    num_centers: usize,
}

impl CostMatrix {
    /// Computes distances and weighted costs for every package/center pair.
    pub fn from_instance(instance: &Instance) -> Self {
        let num_packages = instance.num_packages();
        let num_centers = instance.num_centers();
        let mut distances = Vec::with_capacity(num_packages * num_centers);
        let mut costs = Vec::with_capacity(num_packages * num_centers);
        for p in instance.packages() {
            for c in instance.centers() {
                let d = super::distance(p.location(), c.location());
                distances.push(d);
                costs.push(p.weight() * d);
            }
        }
        Self {
            distances,
            costs,
            num_packages,
            num_centers,
        }
    }

    /// Distance from package `package` to center `center`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn distance(&self, package: usize, center: usize) -> f64 {
        self.distances[self.index(package, center)]
    }

    /// Weighted cost of serving `package` from `center`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn cost(&self, package: usize, center: usize) -> f64 {
        self.costs[self.index(package, center)]
    }

    /// Number of package rows.
    pub fn num_packages(&self) -> usize {
        self.num_packages
    }

    /// Number of center columns.
    pub fn num_centers(&self) -> usize {
        self.num_centers
    }

    /// Returns the candidate center closest to `package`.
    ///
    /// Ties go to the candidate yielded first. Candidates at infinite
    /// distance are never chosen. Returns `None` if no candidate qualifies.
    pub fn nearest_center<I>(&self, package: usize, candidates: I) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut best = None;
        let mut best_d = f64::INFINITY;
        for c in candidates {
            let d = self.distance(package, c);
            if d < best_d {
                best = Some(c);
                best_d = d;
            }
        }
        best
    }

    fn index(&self, package: usize, center: usize) -> usize {
        assert!(
            package < self.num_packages && center < self.num_centers,
            "cost matrix index ({package}, {center}) out of bounds"
        );
        package * self.num_centers + center
    }
}
