//! Cost model and feasibility checking.
//!
//! The total cost of an assignment is the sum, over assigned packages, of
//! `delivery weight × distance to the assigned center`.

mod evaluator;

pub use evaluator::{AssignmentEvaluator, AssignmentSummary};

use crate::models::{Assignment, Instance};

/// Total weighted delivery cost of `assignment`.
///
/// Unassigned packages contribute zero; the empty assignment costs exactly
/// zero.
///
/// # Examples
///
/// ```
/// use u_assign::models::{Assignment, Center, Instance, Package};
/// use u_assign::evaluation::total_cost;
///
/// let instance = Instance::new(
///     vec![Package::new("P1", 0.0, 0.0, 3.0)],
///     vec![Center::new("C1", 0.0, 2.0, 1)],
/// )
/// .unwrap();
/// let mut a = Assignment::new(1);
/// assert_eq!(total_cost(&a, &instance), 0.0);
/// a.assign(0, 0);
/// assert!((total_cost(&a, &instance) - 6.0).abs() < 1e-10);
/// ```
pub fn total_cost(assignment: &Assignment, instance: &Instance) -> f64 {
    AssignmentEvaluator::new(instance).total_cost(assignment)
}
