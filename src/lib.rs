//! # u-assign
//!
//! Capacitated assignment of delivery packages to distribution centers,
//! minimizing the total weighted delivery cost (delivery-time weight ×
//! distance to the serving center).
//!
//! ## Modules
//!
//! - [`models`]: Domain model types (Package, Center, Instance, Assignment)
//! - [`distance`]: Euclidean distance and package×center cost matrix
//! - [`evaluation`]: Total cost and capacity feasibility checking
//! - [`constructive`]: Greedy nearest-center construction
//! - [`local_search`]: First-improvement single-package reassignment
//! - [`dataset`]: Synthetic generation, delivery-dataset import, CSV files
//! - [`experiment`]: Greedy vs. local search comparison over dataset sizes

pub mod constructive;
pub mod dataset;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod experiment;
pub mod local_search;
pub mod models;

pub use error::{AssignError, Result};
