//! Local search for improving assignments.
//!
//! - [`reassign_improve`]: first-improvement single-package reassignment

mod config;
mod reassign;

pub use config::{CapacityPolicy, ReassignConfig};
pub use reassign::{reassign_improve, reassign_with_matrix, ReassignResult};
