//! Experiment execution and result export.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use serde::Serialize;
use tracing::info;

use super::config::{DataSource, ExperimentConfig};
use crate::constructive::greedy_with_matrix;
use crate::dataset::{generate, instance_from_delivery, read_delivery};
use crate::distance::CostMatrix;
use crate::error::Result;
use crate::evaluation::total_cost;
use crate::local_search::{reassign_with_matrix, ReassignConfig};
use crate::models::Instance;

/// Outcome of one experiment run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentRecord {
    /// Number of packages.
    pub size: usize,
    /// Number of centers.
    pub centers: usize,
    /// Total cost of the greedy assignment.
    pub greedy_cost: f64,
    /// Total cost after local search.
    pub local_search_cost: f64,
    /// Relative improvement in percent, two decimals.
    pub improvement_pct: f64,
    /// Packages the greedy phase could not place.
    pub unassigned: usize,
    /// Local search outer iterations.
    pub iterations: usize,
    /// Local search accepted moves.
    pub moves: usize,
    /// Whether local search reached a local optimum.
    pub converged: bool,
}

/// Percentage improvement of `local` over `greedy`, rounded to two decimals.
///
/// Returns 0 when `greedy` is 0.
///
/// # Examples
///
/// ```
/// use u_assign::experiment::improvement_pct;
///
/// assert_eq!(improvement_pct(200.0, 150.0), 25.0);
/// assert_eq!(improvement_pct(3.0, 2.0), 33.33);
/// assert_eq!(improvement_pct(0.0, 0.0), 0.0);
/// ```
pub fn improvement_pct(greedy: f64, local: f64) -> f64 {
    if greedy == 0.0 {
        return 0.0;
    }
    let pct = (greedy - local) / greedy * 100.0;
    (pct * 100.0).round() / 100.0
}

/// Runs the greedy assigner and then local search on one instance.
pub fn run_single(instance: &Instance, config: &ReassignConfig) -> ExperimentRecord {
    let matrix = CostMatrix::from_instance(instance);
    let greedy = greedy_with_matrix(instance, &matrix);
    let greedy_cost = total_cost(&greedy, instance);
    let refined = reassign_with_matrix(&greedy, instance, &matrix, config);

    ExperimentRecord {
        size: instance.num_packages(),
        centers: instance.num_centers(),
        greedy_cost,
        local_search_cost: refined.cost,
        improvement_pct: improvement_pct(greedy_cost, refined.cost),
        unassigned: greedy.num_unassigned(),
        iterations: refined.iterations,
        moves: refined.moves,
        converged: refined.converged,
    }
}

/// Runs every size of the sweep, in order.
pub fn run_experiments(config: &ExperimentConfig) -> Result<Vec<ExperimentRecord>> {
    config.validate()?;

    let delivery = match &config.source {
        DataSource::Synthetic => None,
        DataSource::DeliveryCsv { path } => Some(read_delivery(File::open(path)?)?),
    };

    let mut records = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let generator = config.generator.clone().with_packages(size);
        let instance = match &delivery {
            Some(rows) => instance_from_delivery(rows, &generator)?,
            None => generate(&generator)?,
        };
        let record = run_single(&instance, &config.local_search);
        info!(
            size = record.size,
            greedy_cost = record.greedy_cost,
            local_search_cost = record.local_search_cost,
            improvement_pct = record.improvement_pct,
            "experiment finished"
        );
        records.push(record);
    }

    Ok(records)
}

/// Writes experiment records as CSV.
pub fn write_results<W: Write>(writer: W, records: &[ExperimentRecord]) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes experiment records to a CSV file.
pub fn write_results_csv(path: &Path, records: &[ExperimentRecord]) -> Result<()> {
    write_results(File::create(path)?, records)
}
