//! Parameter grid.

use crate::anneal::AnnealConfig;
use crate::error::{Result, SeriateError};

/// Cartesian grid of annealing parameters.
///
/// Configurations are enumerated with the initial temperature varying
/// slowest and the cutoff fastest.
///
/// # Examples
///
/// ```
/// use u_seriate::{AnnealConfig, SweepGrid};
///
/// let grid = SweepGrid::new(vec![0.1, 0.2], vec![0.5, 1.5], vec![0.9997]);
/// assert_eq!(grid.len(), 4);
///
/// let configs = grid.configs(&AnnealConfig::default()).unwrap();
/// assert_eq!(configs[1].cutoff, 0.2);
/// assert_eq!(configs[1].initial_temperature, 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepGrid {
    pub cutoffs: Vec<f64>,
    pub initial_temperatures: Vec<f64>,
    pub cooling_rates: Vec<f64>,
}

impl SweepGrid {
    pub fn new(cutoffs: Vec<f64>, initial_temperatures: Vec<f64>, cooling_rates: Vec<f64>) -> Self {
        Self {
            cutoffs,
            initial_temperatures,
            cooling_rates,
        }
    }

    /// Number of configurations in the grid.
    pub fn len(&self) -> usize {
        self.cutoffs.len() * self.initial_temperatures.len() * self.cooling_rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Expands the grid into full configurations derived from `base`.
    ///
    /// When `base` is seeded, configuration `k` gets seed `base + k`, so a
    /// sweep is replayable and its runs draw independent streams.
    ///
    /// Fails if any axis is empty or any derived configuration is invalid.
    pub fn configs(&self, base: &AnnealConfig) -> Result<Vec<AnnealConfig>> {
        for (name, axis) in [
            ("cutoffs", &self.cutoffs),
            ("initial_temperatures", &self.initial_temperatures),
            ("cooling_rates", &self.cooling_rates),
        ] {
            if axis.is_empty() {
                return Err(SeriateError::invalid(format!("sweep axis `{name}` is empty")));
            }
        }

        let mut configs = Vec::with_capacity(self.len());
        for &initial_temperature in &self.initial_temperatures {
            for &cooling_rate in &self.cooling_rates {
                for &cutoff in &self.cutoffs {
                    let index = configs.len() as u64;
                    let config = AnnealConfig {
                        cutoff,
                        initial_temperature,
                        cooling_rate,
                        seed: base.seed.map(|s| s.wrapping_add(index)),
                        ..base.clone()
                    };
                    config.validate()?;
                    configs.push(config);
                }
            }
        }
        Ok(configs)
    }
}
