//! Single-package reassignment with first-improvement acceptance.
//!
//! # Algorithm
//!
//! Scans assigned packages in package order and, for each, every other
//! center in center order. The first move that lowers the total cost is
//! applied at once and the scan restarts from the first package. A full
//! scan without an improving move is a local optimum.
//!
//! Moving package p from center a to center b only changes p's own term of
//! the total. A move is accepted only when `cost(p, b) < cost(p, a)` and
//! `total - cost(p, a) + cost(p, b)` is strictly below `total`, so a gain
//! lost to rounding in the total is not a move. The total is re-summed
//! after every accepted move.
//!
//! # Complexity
//!
//! O(n × m) per outer iteration for n packages and m centers.

use tracing::{debug, info, warn};

use super::config::{CapacityPolicy, ReassignConfig};
use crate::distance::CostMatrix;
use crate::evaluation::total_cost;
use crate::models::{Assignment, Instance};

/// A reassignment move: serve `package` from `to` instead of `from`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ReassignMove {
    package: usize,
    from: usize,
    to: usize,
    delta: f64,
}

/// Result of a reassignment local search run.
#[derive(Debug, Clone)]
pub struct ReassignResult {
    /// The improved assignment.
    pub assignment: Assignment,

    /// Total cost of `assignment`.
    pub cost: f64,

    /// Total cost of the input assignment.
    pub initial_cost: f64,

    /// Outer iterations consumed.
    pub iterations: usize,

    /// Number of accepted moves.
    pub moves: usize,

    /// `true` if the last scan found no improving move.
    pub converged: bool,
}

/// Improves an assignment by moving single packages between centers.
///
/// Packages without a center are never moved. The returned cost is never
/// higher than the input cost. See [`ReassignConfig`] for the iteration cap
/// and capacity handling.
///
/// # Examples
///
/// ```
/// use u_assign::models::{Assignment, Center, Instance, Package};
/// use u_assign::local_search::{reassign_improve, ReassignConfig};
///
/// let instance = Instance::new(
///     vec![Package::new("P1", 0.0, 0.0, 1.0)],
///     vec![Center::new("C1", 5.0, 0.0, 5), Center::new("C2", 1.0, 0.0, 5)],
/// )
/// .unwrap();
/// let mut start = Assignment::new(1);
/// start.assign(0, 0);
///
/// let result = reassign_improve(&start, &instance, &ReassignConfig::default());
/// assert_eq!(result.assignment.center_of(0), Some(1));
/// assert!((result.cost - 1.0).abs() < 1e-10);
/// assert!(result.converged);
/// ```
pub fn reassign_improve(
    assignment: &Assignment,
    instance: &Instance,
    config: &ReassignConfig,
) -> ReassignResult {
    let matrix = CostMatrix::from_instance(instance);
    reassign_with_matrix(assignment, instance, &matrix, config)
}

/// Same as [`reassign_improve`], reusing a precomputed cost matrix.
///
/// # Panics
///
/// Panics if `matrix` was not built from `instance`.
pub fn reassign_with_matrix(
    assignment: &Assignment,
    instance: &Instance,
    matrix: &CostMatrix,
    config: &ReassignConfig,
) -> ReassignResult {
    let initial_cost = total_cost(assignment, instance);
    let mut current = assignment.clone();

    if current.is_empty() {
        return ReassignResult {
            assignment: current,
            cost: initial_cost,
            initial_cost,
            iterations: 0,
            moves: 0,
            converged: true,
        };
    }

    let mut loads = current.loads(instance.num_centers());
    let mut current_total = initial_cost;
    let mut iterations = 0;
    let mut moves = 0;
    let mut converged = false;

    while iterations < config.max_iterations {
        iterations += 1;
        match find_first_improvement(
            &current,
            instance,
            matrix,
            &loads,
            current_total,
            config.capacity,
        ) {
            Some(mv) => {
                current.assign(mv.package, mv.to);
                current_total = total_cost(&current, instance);
                loads[mv.from] -= 1;
                loads[mv.to] += 1;
                moves += 1;
                debug!(
                    package = instance.packages()[mv.package].id(),
                    from = instance.centers()[mv.from].id(),
                    to = instance.centers()[mv.to].id(),
                    delta = mv.delta,
                    "accepted move"
                );
            }
            None => {
                converged = true;
                break;
            }
        }
    }

    if !converged && config.max_iterations > 0 {
        warn!(
            max_iterations = config.max_iterations,
            "local search stopped at the iteration cap"
        );
    }

    let cost = current_total;
    info!(initial_cost, cost, iterations, moves, converged, "local search finished");

    ReassignResult {
        assignment: current,
        cost,
        initial_cost,
        iterations,
        moves,
        converged,
    }
}

/// Returns the first move in scan order that lowers `total`.
fn find_first_improvement(
    assignment: &Assignment,
    instance: &Instance,
    matrix: &CostMatrix,
    loads: &[u32],
    total: f64,
    policy: CapacityPolicy,
) -> Option<ReassignMove> {
    let num_centers = matrix.num_centers();

    for (p, from) in assignment.iter() {
        if p >= matrix.num_packages() || from >= num_centers {
            continue;
        }
        let current_cost = matrix.cost(p, from);

        for to in 0..num_centers {
            if to == from {
                continue;
            }
            if policy == CapacityPolicy::Enforced && loads[to] >= instance.centers()[to].capacity() {
                continue;
            }
            let candidate_cost = matrix.cost(p, to);
            if candidate_cost >= current_cost {
                continue;
            }
            if total - current_cost + candidate_cost < total {
                return Some(ReassignMove {
                    package: p,
                    from,
                    to,
                    delta: candidate_cost - current_cost,
                });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::greedy_nearest_center;
    use crate::evaluation::AssignmentEvaluator;
    use crate::models::{Center, Package};

    fn tight_instance() -> Instance {
        // Greedy fills C1 with P1 and P2, leaving P3 (heavy) on far C2.
        Instance::new(
            vec![
                Package::new("P1", 0.0, 0.0, 1.0),
                Package::new("P2", 1.0, 0.0, 1.0),
                Package::new("P3", 2.0, 0.0, 50.0),
            ],
            vec![Center::new("C1", 1.0, 0.0, 2), Center::new("C2", 10.0, 0.0, 2)],
        )
        .expect("valid")
    }

    #[test]
    fn test_empty_assignment() {
        let instance = tight_instance();
        let result = reassign_improve(&Assignment::new(3), &instance, &ReassignConfig::default());
        assert_eq!(result.cost, 0.0);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.moves, 0);
        assert!(result.assignment.is_empty());
    }

    #[test]
    fn test_zero_iterations_returns_input() {
        let instance = tight_instance();
        let start = greedy_nearest_center(&instance);
        let config = ReassignConfig::default().with_max_iterations(0);
        let result = reassign_improve(&start, &instance, &config);
        assert_eq!(result.assignment, start);
        assert_eq!(result.cost, result.initial_cost);
        assert_eq!(result.iterations, 0);
        assert!(!result.converged);
    }

    #[test]
    fn test_single_center_one_empty_pass() {
        let instance = Instance::new(
            vec![
                Package::new("P1", 0.0, 0.0, 5.0),
                Package::new("P2", 1.0, 0.0, 5.0),
            ],
            vec![Center::new("C1", 0.0, 0.0, 1)],
        )
        .expect("valid");
        let start = greedy_nearest_center(&instance);
        let result = reassign_improve(&start, &instance, &ReassignConfig::default());
        assert_eq!(result.iterations, 1);
        assert_eq!(result.moves, 0);
        assert!(result.converged);
        assert_eq!(result.assignment.center_of(1), None);
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_enforced_keeps_capacity() {
        let instance = tight_instance();
        let start = greedy_nearest_center(&instance);
        assert_eq!(start.center_of(2), Some(1));

        let result = reassign_improve(&start, &instance, &ReassignConfig::default());
        // C1 is full, so no move is allowed
        assert_eq!(result.moves, 0);
        assert!(result.converged);
        assert!(AssignmentEvaluator::new(&instance)
            .violations(&result.assignment)
            .is_empty());
    }

    #[test]
    fn test_unchecked_overloads_center() {
        let instance = tight_instance();
        let start = greedy_nearest_center(&instance);
        let config = ReassignConfig::default().with_capacity(CapacityPolicy::Unchecked);
        let result = reassign_improve(&start, &instance, &config);
        assert_eq!(result.moves, 1);
        assert_eq!(result.assignment.center_of(2), Some(0));
        assert!((result.initial_cost - 401.0).abs() < 1e-10);
        assert!((result.cost - 51.0).abs() < 1e-10);
        let violations = AssignmentEvaluator::new(&instance).violations(&result.assignment);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_first_improvement_order() {
        // P1 sits on C1; both C2 and C3 are cheaper, C3 the cheapest.
        // First improvement takes C2 first, then moves on to C3.
        let instance = Instance::new(
            vec![Package::new("P1", 0.0, 0.0, 1.0)],
            vec![
                Center::new("C1", 10.0, 0.0, 1),
                Center::new("C2", 5.0, 0.0, 1),
                Center::new("C3", 1.0, 0.0, 1),
            ],
        )
        .expect("valid");
        let mut start = Assignment::new(1);
        start.assign(0, 0);

        let one_step = ReassignConfig::default().with_max_iterations(1);
        let result = reassign_improve(&start, &instance, &one_step);
        assert_eq!(result.assignment.center_of(0), Some(1));
        assert!(!result.converged);

        let result = reassign_improve(&start, &instance, &ReassignConfig::default());
        assert_eq!(result.assignment.center_of(0), Some(2));
        assert_eq!(result.moves, 2);
        assert_eq!(result.iterations, 3);
        assert!(result.converged);
    }

    #[test]
    fn test_enforced_blocks_full_centers() {
        let instance = Instance::new(
            vec![
                Package::new("P1", 9.0, 0.0, 1.0),
                Package::new("P2", 0.0, 0.0, 1.0),
            ],
            vec![Center::new("C1", 0.0, 0.0, 1), Center::new("C2", 10.0, 0.0, 1)],
        )
        .expect("valid");
        let mut start = Assignment::new(2);
        start.assign(0, 0);
        start.assign(1, 1);

        // Both centers are full, so neither package may switch.
        let result = reassign_improve(&start, &instance, &ReassignConfig::default());
        assert_eq!(result.moves, 0);

        // With P2 unassigned, C2 has room for P1.
        let mut start = Assignment::new(2);
        start.assign(0, 0);
        let result = reassign_improve(&start, &instance, &ReassignConfig::default());
        assert_eq!(result.assignment.center_of(0), Some(1));
        assert!((result.cost - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_idempotent_at_convergence() {
        let instance = tight_instance();
        let start = greedy_nearest_center(&instance);
        let config = ReassignConfig::default().with_capacity(CapacityPolicy::Unchecked);
        let first = reassign_improve(&start, &instance, &config);
        let second = reassign_improve(&first.assignment, &instance, &config);
        assert_eq!(second.assignment, first.assignment);
        assert_eq!(second.cost, first.cost);
        assert_eq!(second.moves, 0);
    }

    #[test]
    fn test_rejects_gain_lost_in_total() {
        // C1 is one ulp farther from P1 than C2; P2 makes the total ~1e9.
        let one_ulp_past_half = f64::from_bits(0.5f64.to_bits() + 1);
        let instance = Instance::new(
            vec![
                Package::new("P1", 0.0, 0.0, 1.0),
                Package::new("P2", -2000.0, 0.0, 1e6),
            ],
            vec![
                Center::new("C1", one_ulp_past_half, 0.0, 5),
                Center::new("C2", 0.5, 0.0, 5),
                Center::new("C3", -1000.0, 0.0, 5),
            ],
        )
        .expect("valid");
        let mut start = Assignment::new(2);
        start.assign(0, 0);
        start.assign(1, 2);

        for policy in [CapacityPolicy::Enforced, CapacityPolicy::Unchecked] {
            let config = ReassignConfig::default().with_capacity(policy);
            let result = reassign_improve(&start, &instance, &config);
            assert_eq!(result.assignment, start);
            assert_eq!(result.moves, 0);
            assert_eq!(result.iterations, 1);
            assert!(result.converged);
            assert_eq!(result.cost, result.initial_cost);
        }
    }
}
