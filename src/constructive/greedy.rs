//! Greedy nearest-center constructive heuristic.
//!
//! Visits packages in input order and gives each one to the closest center
//! that still has spare capacity. A package that finds every center full
//! stays unassigned.
//!
//! # Complexity
//!
//! O(n × m) for n packages and m centers.

use tracing::{debug, info};

use crate::distance::CostMatrix;
use crate::models::{Assignment, Instance};

/// Builds a capacity-respecting assignment with the nearest-center rule.
///
/// For each package in input order, picks the center with remaining
/// capacity that is closest to the package; ties go to the center that
/// comes first in input order. The chosen center's remaining capacity drops
/// by one. Packages processed after every center is full are left
/// unassigned and reported by [`Assignment::unassigned`].
///
/// Remaining capacities are local to this call; the instance is not
/// modified.
///
/// # Examples
///
/// ```
/// use u_assign::models::{Center, Instance, Package};
/// use u_assign::constructive::greedy_nearest_center;
///
/// let instance = Instance::new(
///     vec![Package::new("P1", 0.0, 0.0, 5.0), Package::new("P2", 1.0, 0.0, 5.0)],
///     vec![Center::new("C1", 0.0, 0.0, 1)],
/// )
/// .unwrap();
///
/// let assignment = greedy_nearest_center(&instance);
/// assert_eq!(assignment.center_of(0), Some(0));
/// assert_eq!(assignment.unassigned(), vec![1]);
/// ```
pub fn greedy_nearest_center(instance: &Instance) -> Assignment {
    let matrix = CostMatrix::from_instance(instance);
    greedy_with_matrix(instance, &matrix)
}

/// Same as [`greedy_nearest_center`], reusing a precomputed cost matrix.
///
/// # Panics
///
/// Panics if `matrix` was not built from `instance`.
pub fn greedy_with_matrix(instance: &Instance, matrix: &CostMatrix) -> Assignment {
    let n = instance.num_packages();
    let mut assignment = Assignment::new(n);
    if n == 0 {
        return assignment;
    }

    let mut remaining: Vec<u32> = instance.centers().iter().map(|c| c.capacity()).collect();

    for p in 0..n {
        let open = (0..remaining.len()).filter(|&c| remaining[c] > 0);
        match matrix.nearest_center(p, open) {
            Some(c) => {
                remaining[c] -= 1;
                assignment.assign(p, c);
            }
            None => {
                debug!(
                    package = instance.packages()[p].id(),
                    "no center with remaining capacity"
                );
            }
        }
    }

    info!(
        assigned = assignment.num_assigned(),
        unassigned = assignment.num_unassigned(),
        "greedy assignment built"
    );

    assignment
}
