//! Local search configuration.

use serde::Deserialize;

/// How local search treats center capacity when evaluating a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityPolicy {
    /// A package may only move to a center whose load is below its
    /// declared capacity. Keeps the greedy capacity invariant intact.
    #[default]
    Enforced,

    /// Moves ignore capacity. Every assigned package drifts to its cheapest
    /// center, which may overload it.
    Unchecked,
}

/// Configuration for the reassignment local search.
///
/// # Examples
///
/// ```
/// use u_assign::local_search::{CapacityPolicy, ReassignConfig};
///
/// let config = ReassignConfig::default()
///     .with_max_iterations(200)
///     .with_capacity(CapacityPolicy::Unchecked);
/// assert_eq!(config.max_iterations, 200);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReassignConfig {
    /// Maximum number of outer iterations. Each iteration accepts at most
    /// one move. 0 returns the input unchanged.
    pub max_iterations: usize,

    /// Capacity handling for candidate moves.
    pub capacity: CapacityPolicy,
}

impl Default for ReassignConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            capacity: CapacityPolicy::default(),
        }
    }
}

impl ReassignConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_capacity(mut self, capacity: CapacityPolicy) -> Self {
        self.capacity = capacity;
        self
    }
}
