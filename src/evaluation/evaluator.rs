//! Assignment evaluator that computes cost, center loads, and feasibility.

use crate::distance::distance;
use crate::models::{Assignment, Instance, Violation, ViolationType};

/// Aggregate figures for one assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentSummary {
    /// Total weighted delivery cost.
    pub total_cost: f64,
    /// Packages with a center.
    pub assigned: usize,
    /// Indices of packages without a center.
    pub unassigned: Vec<usize>,
    /// Constraint violations found.
    pub violations: Vec<Violation>,
}

impl AssignmentSummary {
    /// Returns `true` if there are no violations.
    pub fn is_feasible(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Evaluates assignments against an instance: weighted cost, per-center
/// load, and capacity feasibility.
///
/// # Examples
///
/// ```
/// use u_assign::models::{Assignment, Center, Instance, Package};
/// use u_assign::evaluation::AssignmentEvaluator;
///
/// let instance = Instance::new(
///     vec![Package::new("P1", 0.0, 0.0, 2.0), Package::new("P2", 3.0, 4.0, 1.0)],
///     vec![Center::new("C1", 0.0, 0.0, 1)],
/// )
/// .unwrap();
/// let mut a = Assignment::new(2);
/// a.assign(0, 0);
/// a.assign(1, 0);
///
/// let eval = AssignmentEvaluator::new(&instance);
/// assert!((eval.total_cost(&a) - 5.0).abs() < 1e-10);
/// assert_eq!(eval.center_loads(&a), vec![2]);
/// assert_eq!(eval.violations(&a).len(), 1);
/// ```
pub struct AssignmentEvaluator<'a> {
    instance: &'a Instance,
}

impl<'a> AssignmentEvaluator<'a> {
    /// Creates a new evaluator for the given instance.
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    /// Weighted cost of serving `package` from `center`.
    ///
    /// Returns `None` if either index is out of range.
    pub fn package_cost(&self, package: usize, center: usize) -> Option<f64> {
        let p = self.instance.packages().get(package)?;
        let c = self.instance.centers().get(center)?;
        Some(p.weight() * distance(p.location(), c.location()))
    }

    /// Sum of `weight * distance` over assigned packages, in package order.
    ///
    /// Unassigned packages and out-of-range pairs contribute zero.
    pub fn total_cost(&self, assignment: &Assignment) -> f64 {
        assignment
            .iter()
            .filter_map(|(p, c)| self.package_cost(p, c))
            .fold(0.0, |acc, cost| acc + cost)
    }

    /// Number of packages mapped to each center of the instance.
    pub fn center_loads(&self, assignment: &Assignment) -> Vec<u32> {
        assignment.loads(self.instance.num_centers())
    }

    /// Checks the assignment against the instance.
    pub fn violations(&self, assignment: &Assignment) -> Vec<Violation> {
        let mut violations = Vec::new();

        if assignment.num_packages() != self.instance.num_packages() {
            violations.push(Violation::new(ViolationType::PackageCountMismatch {
                expected: self.instance.num_packages(),
                actual: assignment.num_packages(),
            }));
        }

        let num_centers = self.instance.num_centers();
        for (p, c) in assignment.iter() {
            if c >= num_centers {
                violations.push(Violation::new(ViolationType::UnknownCenter {
                    package_index: p,
                    center_index: c,
                }));
            }
        }

        let loads = self.center_loads(assignment);
        for (idx, (center, &load)) in self.instance.centers().iter().zip(&loads).enumerate() {
            if load > center.capacity() {
                violations.push(Violation::new(ViolationType::CapacityExceeded {
                    center_index: idx,
                    load,
                    capacity: center.capacity(),
                }));
            }
        }

        violations
    }

    /// Cost, assigned count, unassigned packages, and violations in one pass.
    pub fn summary(&self, assignment: &Assignment) -> AssignmentSummary {
        AssignmentSummary {
            total_cost: self.total_cost(assignment),
            assigned: assignment.num_assigned(),
            unassigned: assignment.unassigned(),
            violations: self.violations(assignment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Center, Package};

    fn setup() -> Instance {
        Instance::new(
            vec![
                Package::new("P1", 0.0, 0.0, 10.0),
                Package::new("P2", 3.0, 4.0, 2.0),
                Package::new("P3", 6.0, 8.0, 1.0),
            ],
            vec![Center::new("C1", 0.0, 0.0, 2), Center::new("C2", 6.0, 8.0, 1)],
        )
        .expect("valid")
    }

    #[test]
    fn test_total_cost_empty() {
        let instance = setup();
        let eval = AssignmentEvaluator::new(&instance);
        assert_eq!(eval.total_cost(&Assignment::new(3)), 0.0);
    }

    #[test]
    fn test_total_cost_weighted() {
        let instance = setup();
        let eval = AssignmentEvaluator::new(&instance);
        let mut a = Assignment::new(3);
        a.assign(0, 1); // 10 * 10
        a.assign(1, 0); // 2 * 5
        // P3 unassigned contributes nothing
        assert!((eval.total_cost(&a) - 110.0).abs() < 1e-10);
    }

    #[test]
    fn test_package_cost_out_of_range() {
        let instance = setup();
        let eval = AssignmentEvaluator::new(&instance);
        assert!(eval.package_cost(0, 2).is_none());
        assert!(eval.package_cost(3, 0).is_none());
        assert!((eval.package_cost(1, 1).expect("in range") - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_feasible_assignment() {
        let instance = setup();
        let eval = AssignmentEvaluator::new(&instance);
        let mut a = Assignment::new(3);
        a.assign(0, 0);
        a.assign(1, 0);
        a.assign(2, 1);
        let summary = eval.summary(&a);
        assert!(summary.is_feasible());
        assert_eq!(summary.assigned, 3);
        assert!(summary.unassigned.is_empty());
        assert!((summary.total_cost - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_capacity_exceeded() {
        let instance = setup();
        let eval = AssignmentEvaluator::new(&instance);
        let mut a = Assignment::new(3);
        a.assign(0, 1);
        a.assign(1, 1);
        let violations = eval.violations(&a);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0].kind,
            ViolationType::CapacityExceeded {
                center_index: 1,
                load: 2,
                capacity: 1,
            }
        ));
    }

    #[test]
    fn test_unknown_center_and_size_mismatch() {
        let instance = setup();
        let eval = AssignmentEvaluator::new(&instance);
        let mut a = Assignment::new(2);
        a.assign(0, 5);
        let violations = eval.violations(&a);
        assert_eq!(violations.len(), 2);
        assert!(matches!(
            violations[0].kind,
            ViolationType::PackageCountMismatch {
                expected: 3,
                actual: 2,
            }
        ));
        assert!(matches!(
            violations[1].kind,
            ViolationType::UnknownCenter {
                package_index: 0,
                center_index: 5,
            }
        ));
        assert_eq!(eval.total_cost(&a), 0.0);
    }
}
