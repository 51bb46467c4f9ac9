//! Synthetic instance generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::error::{AssignError, Result};
use crate::models::{Center, Instance, Package};

/// Configuration for synthetic data and for sampling delivery datasets.
///
/// Integer ranges are half-open: `(5, 20)` draws from 5 to 19.
///
/// # Examples
///
/// ```
/// use u_assign::dataset::GeneratorConfig;
///
/// let config = GeneratorConfig::default()
///     .with_packages(50)
///     .with_centers(3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of packages.
    pub packages: usize,

    /// Number of centers.
    pub centers: usize,

    /// Lower bound of both coordinates.
    pub min_coordinate: f64,

    /// Upper bound (exclusive) of both coordinates.
    pub max_coordinate: f64,

    /// Half-open range of integer delivery weights.
    pub weight_range: (u32, u32),

    /// Half-open range of integer center capacities.
    pub capacity_range: (u32, u32),

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            packages: 100,
            centers: 5,
            min_coordinate: 0.0,
            max_coordinate: 100.0,
            weight_range: (10, 60),
            capacity_range: (5, 20),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_packages(mut self, n: usize) -> Self {
        self.packages = n;
        self
    }

    pub fn with_centers(mut self, m: usize) -> Self {
        self.centers = m;
        self
    }

    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_coordinate = min;
        self.max_coordinate = max;
        self
    }

    pub fn with_weight_range(mut self, low: u32, high: u32) -> Self {
        self.weight_range = (low, high);
        self
    }

    pub fn with_capacity_range(mut self, low: u32, high: u32) -> Self {
        self.capacity_range = (low, high);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.min_coordinate.is_finite()
            || !self.max_coordinate.is_finite()
            || self.min_coordinate >= self.max_coordinate
        {
            return Err(AssignError::InvalidConfig(format!(
                "coordinate bounds must be finite with min < max, got [{}, {})",
                self.min_coordinate, self.max_coordinate
            )));
        }
        let (w_low, w_high) = self.weight_range;
        if w_low == 0 || w_low >= w_high {
            return Err(AssignError::InvalidConfig(format!(
                "weight range must satisfy 0 < low < high, got [{w_low}, {w_high})"
            )));
        }
        let (c_low, c_high) = self.capacity_range;
        if c_low >= c_high {
            return Err(AssignError::InvalidConfig(format!(
                "capacity range must satisfy low < high, got [{c_low}, {c_high})"
            )));
        }
        Ok(())
    }

    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Generates a synthetic instance.
///
/// Packages are named `P1..PN` and centers `C1..CM`. Coordinates are
/// uniform inside the configured bounds; weights and capacities are uniform
/// integers from their ranges.
///
/// # Examples
///
/// ```
/// use u_assign::dataset::{generate, GeneratorConfig};
///
/// let config = GeneratorConfig::default().with_packages(20).with_seed(7);
/// let a = generate(&config).unwrap();
/// let b = generate(&config).unwrap();
/// assert_eq!(a.num_packages(), 20);
/// assert_eq!(a.packages(), b.packages());
/// ```
pub fn generate(config: &GeneratorConfig) -> Result<Instance> {
    config.validate()?;
    let mut rng = config.rng();
    let coords = config.min_coordinate..config.max_coordinate;
    let weights = config.weight_range.0..config.weight_range.1;

    let packages = (1..=config.packages)
        .map(|i| {
            let x = rng.random_range(coords.clone());
            let y = rng.random_range(coords.clone());
            let w = rng.random_range(weights.clone());
            Package::new(format!("P{i}"), x, y, f64::from(w))
        })
        .collect();

    let centers = (1..=config.centers)
        .map(|i| {
            let x = rng.random_range(coords.clone());
            let y = rng.random_range(coords.clone());
            let capacity = random_capacity(&mut rng, config.capacity_range);
            Center::new(format!("C{i}"), x, y, capacity)
        })
        .collect();

    Instance::new(packages, centers)
}

pub(crate) fn random_capacity<R: Rng>(rng: &mut R, range: (u32, u32)) -> u32 {
    rng.random_range(range.0..range.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.packages, 100);
        assert_eq!(config.centers, 5);
        assert_eq!(config.weight_range, (10, 60));
        assert_eq!(config.capacity_range, (5, 20));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config() {
        assert!(GeneratorConfig::default().with_bounds(5.0, 5.0).validate().is_err());
        assert!(GeneratorConfig::default()
            .with_bounds(0.0, f64::INFINITY)
            .validate()
            .is_err());
        assert!(GeneratorConfig::default().with_weight_range(0, 10).validate().is_err());
        assert!(GeneratorConfig::default().with_weight_range(10, 10).validate().is_err());
        assert!(GeneratorConfig::default().with_capacity_range(5, 5).validate().is_err());
    }

    #[test]
    fn test_generate_ranges() {
        let config = GeneratorConfig::default()
            .with_packages(200)
            .with_centers(8)
            .with_seed(1);
        let instance = generate(&config).expect("valid");
        assert_eq!(instance.num_packages(), 200);
        assert_eq!(instance.num_centers(), 8);
        assert_eq!(instance.packages()[0].id(), "P1");
        assert_eq!(instance.centers()[7].id(), "C8");
        for p in instance.packages() {
            assert!((0.0..100.0).contains(&p.x()));
            assert!((0.0..100.0).contains(&p.y()));
            assert!((10.0..60.0).contains(&p.weight()));
            assert_eq!(p.weight().fract(), 0.0);
        }
        for c in instance.centers() {
            assert!((5..20).contains(&c.capacity()));
        }
    }

    #[test]
    fn test_generate_seeded_is_reproducible() {
        let config = GeneratorConfig::default().with_seed(99);
        let a = generate(&config).expect("valid");
        let b = generate(&config).expect("valid");
        assert_eq!(a.packages(), b.packages());
        assert_eq!(a.centers(), b.centers());
    }

    #[test]
    fn test_generate_empty() {
        let config = GeneratorConfig::default().with_packages(0).with_centers(0);
        let instance = generate(&config).expect("valid");
        assert_eq!(instance.num_packages(), 0);
        assert_eq!(instance.num_centers(), 0);
    }
}
