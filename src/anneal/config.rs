//! Annealing configuration.

use crate::error::{Result, SeriateError};

/// Configuration for one annealing run.
///
/// Temperature follows geometric cooling, `T_{k+1} = cooling_rate * T_k`,
/// applied once per iteration.
///
/// # Examples
///
/// ```
/// use u_seriate::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_cutoff(0.1)
///     .with_initial_temperature(1.5)
///     .with_cooling_rate(0.9998)
///     .with_max_iterations(200_000)
///     .with_tolerance(10.0)
///     .with_patience(1000)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Correlations at or below this value are ignored by the energy.
    pub cutoff: f64,

    /// Starting temperature. Higher values accept more worsening moves early.
    pub initial_temperature: f64,

    /// Per-iteration multiplicative decay, in (0, 1).
    pub cooling_rate: f64,

    /// Iteration budget. 0 returns the identity ordering untouched.
    pub max_iterations: usize,

    /// Successive energies closer than this count as a stall.
    pub tolerance: f64,

    /// Consecutive stalls that end the run.
    pub patience: usize,

    /// Whether the result carries the full energy trajectory.
    pub record_history: bool,

    /// Random seed for reproducibility. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            cutoff: 0.1,
            initial_temperature: 1.0,
            cooling_rate: 0.9999,
            max_iterations: 500_000,
            tolerance: 5.0,
            patience: 1000,
            record_history: false,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_patience(mut self, patience: usize) -> Self {
        self.patience = patience;
        self
    }

    pub fn with_record_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.cutoff.is_finite() {
            return Err(SeriateError::invalid(format!(
                "cutoff must be finite, got {}",
                self.cutoff
            )));
        }
        self.validate_schedule()
    }

    /// Validates everything except the cutoff, which only matters when the
    /// energy is built from a matrix.
    pub fn validate_schedule(&self) -> Result<()> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(SeriateError::invalid(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(SeriateError::invalid(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        // Written as a negation so NaN is rejected too.
        if !(self.tolerance >= 0.0) {
            return Err(SeriateError::invalid(format!(
                "tolerance must be non-negative, got {}",
                self.tolerance
            )));
        }
        if self.patience == 0 {
            return Err(SeriateError::invalid("patience must be at least 1"));
        }
        Ok(())
    }
}
