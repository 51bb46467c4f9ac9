//! Assignment and violation types.

use super::Instance;

/// A type of constraint violation in an assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// More packages mapped to a center than its declared capacity.
    CapacityExceeded {
        /// Center index in the instance.
        center_index: usize,
        /// Number of packages mapped to the center.
        load: u32,
        /// Declared capacity.
        capacity: u32,
    },
    /// A package is mapped to a center index the instance does not have.
    UnknownCenter {
        /// Package index in the instance.
        package_index: usize,
        /// Out-of-range center index.
        center_index: usize,
    },
    /// The assignment was built for a different number of packages.
    PackageCountMismatch {
        /// Packages in the instance.
        expected: usize,
        /// Slots in the assignment.
        actual: usize,
    },
}

/// A constraint violation in an assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// A mapping from packages to the centers that serve them.
///
/// Packages and centers are referred to by their index in the
/// [`Instance`]. Each package holds at most one center; a package without
/// one is unassigned. Iteration follows package order.
///
/// # Examples
///
/// ```
/// use u_assign::models::Assignment;
///
/// let mut a = Assignment::new(3);
/// a.assign(0, 1);
/// a.assign(2, 0);
/// assert_eq!(a.center_of(0), Some(1));
/// assert_eq!(a.num_assigned(), 2);
/// assert_eq!(a.unassigned(), vec![1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    slots: Vec<Option<usize>>,
}

impl Assignment {
    /// Creates an assignment for `num_packages` packages, all unassigned.
    pub fn new(num_packages: usize) -> Self {
        Self {
            slots: vec![None; num_packages],
        }
    }

    /// Number of packages covered, assigned or not.
    pub fn num_packages(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no package is assigned.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Center serving the given package, if any.
    ///
    /// # Panics
    ///
    /// Panics if `package` is out of bounds.
    pub fn center_of(&self, package: usize) -> Option<usize> {
        self.slots[package]
    }

    /// Maps `package` to `center`, replacing any previous center.
    ///
    /// # Panics
    ///
    /// Panics if `package` is out of bounds.
    pub fn assign(&mut self, package: usize, center: usize) {
        self.slots[package] = Some(center);
    }

    /// Removes the center of `package`, returning it.
    pub fn unassign(&mut self, package: usize) -> Option<usize> {
        self.slots[package].take()
    }

    /// Iterates `(package, center)` pairs in package order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(p, c)| c.map(|c| (p, c)))
    }

    /// Indices of packages without a center, in package order.
    pub fn unassigned(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(p, _)| p)
            .collect()
    }

    /// Number of packages with a center.
    pub fn num_assigned(&self) -> usize {
        self.slots.iter().filter(|c| c.is_some()).count()
    }

    /// Number of packages without a center.
    pub fn num_unassigned(&self) -> usize {
        self.slots.len() - self.num_assigned()
    }

    /// Number of packages mapped to each of `num_centers` centers.
    ///
    /// Out-of-range center indices are ignored.
    pub fn loads(&self, num_centers: usize) -> Vec<u32> {
        let mut loads = vec![0u32; num_centers];
        for (_, c) in self.iter() {
            if let Some(load) = loads.get_mut(c) {
                *load += 1;
            }
        }
        loads
    }

    /// Resolves the mapping to `(package_id, center_id)` pairs.
    ///
    /// Pairs whose indices fall outside `instance` are skipped.
    pub fn to_pairs<'a>(&self, instance: &'a Instance) -> Vec<(&'a str, &'a str)> {
        self.iter()
            .filter_map(|(p, c)| {
                let package = instance.packages().get(p)?;
                let center = instance.centers().get(c)?;
                Some((package.id(), center.id()))
            })
            .collect()
    }
}
