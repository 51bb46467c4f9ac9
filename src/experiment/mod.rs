//! Experiment driver: compares the greedy assignment against its local
//! search refinement over a range of dataset sizes.

mod config;
mod runner;

pub use config::{DataSource, ExperimentConfig};
pub use runner::{
    improvement_pct, run_experiments, run_single, write_results, write_results_csv,
    ExperimentRecord,
};
