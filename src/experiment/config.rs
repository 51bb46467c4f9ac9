//! Experiment configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::dataset::GeneratorConfig;
use crate::error::{AssignError, Result};
use crate::local_search::ReassignConfig;

/// Where the instances of an experiment come from.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataSource {
    /// Synthetic data drawn with the experiment's generator settings.
    #[default]
    Synthetic,

    /// Orders sampled from a delivery dataset.
    DeliveryCsv {
        /// Path to the CSV file.
        path: PathBuf,
    },
}

/// Configuration of a size sweep.
///
/// For every entry of `sizes`, an instance with that many packages is built
/// from `source` using `generator` (its `packages` field is overridden),
/// then solved greedily and refined by local search.
///
/// # Examples
///
/// ```
/// use u_assign::experiment::ExperimentConfig;
///
/// let config: ExperimentConfig = serde_json::from_str(
///     r#"{ "sizes": [20, 40], "generator": { "centers": 3, "seed": 1 } }"#,
/// )
/// .unwrap();
/// assert_eq!(config.sizes, vec![20, 40]);
/// assert_eq!(config.generator.centers, 3);
/// assert_eq!(config.local_search.max_iterations, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Package counts to run.
    pub sizes: Vec<usize>,

    /// Instance source.
    pub source: DataSource,

    /// Center count, ranges, and seed for building instances.
    pub generator: GeneratorConfig,

    /// Local search settings.
    pub local_search: ReassignConfig,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            sizes: vec![50, 100, 500],
            source: DataSource::default(),
            generator: GeneratorConfig::default(),
            local_search: ReassignConfig::default(),
        }
    }
}

impl ExperimentConfig {
    /// Reads a JSON configuration file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_source(mut self, source: DataSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_local_search(mut self, local_search: ReassignConfig) -> Self {
        self.local_search = local_search;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(AssignError::InvalidConfig("sizes must not be empty".into()));
        }
        self.generator.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_search::CapacityPolicy;

    #[test]
    fn test_default() {
        let config = ExperimentConfig::default();
        assert_eq!(config.sizes, vec![50, 100, 500]);
        assert_eq!(config.source, DataSource::Synthetic);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_sizes_invalid() {
        let config = ExperimentConfig::default().with_sizes(vec![]);
        assert!(matches!(config.validate(), Err(AssignError::InvalidConfig(_))));
    }

    #[test]
    fn test_deserialize_delivery_source() {
        let config: ExperimentConfig = serde_json::from_str(
            r#"{
                "source": { "kind": "delivery_csv", "path": "amazon_delivery.csv" },
                "local_search": { "max_iterations": 10, "capacity": "unchecked" }
            }"#,
        )
        .expect("valid json");
        assert_eq!(
            config.source,
            DataSource::DeliveryCsv {
                path: PathBuf::from("amazon_delivery.csv")
            }
        );
        assert_eq!(config.local_search.max_iterations, 10);
        assert_eq!(config.local_search.capacity, CapacityPolicy::Unchecked);
        assert_eq!(config.sizes, vec![50, 100, 500]);
    }

    #[test]
    fn test_missing_file() {
        let err = ExperimentConfig::from_json_file(Path::new("/nonexistent/experiment.json"))
            .unwrap_err();
        assert!(matches!(err, AssignError::Io(_)));
    }
}
