//! Constructive heuristics for building initial assignments.
//!
//! - [`greedy_nearest_center`]: nearest center with spare capacity, O(n·m)

mod greedy;

pub use greedy::{greedy_nearest_center, greedy_with_matrix};
