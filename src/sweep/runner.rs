//! Sweep execution.

use super::grid::SweepGrid;
use crate::anneal::{AnnealConfig, AnnealRunner, RunResult};
use crate::error::Result;
use crate::matrix::CorrelationMatrix;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One point of a sweep and the run it produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepOutcome {
    /// Position in the grid's enumeration order.
    pub index: usize,
    pub cutoff: f64,
    pub initial_temperature: f64,
    pub cooling_rate: f64,
    pub result: RunResult,
}

/// Runs an annealing pass for every configuration of a [`SweepGrid`].
pub struct SweepRunner;

impl SweepRunner {
    /// Runs the sweep. All configurations are validated before the first
    /// run starts; outcomes are returned in grid order.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_seriate::{AnnealConfig, CorrelationMatrix, SweepGrid, SweepRunner};
    ///
    /// let c = CorrelationMatrix::from_rows(vec![
    ///     vec![1.0, 0.2, 0.8],
    ///     vec![0.2, 1.0, 0.3],
    ///     vec![0.8, 0.3, 1.0],
    /// ]).unwrap();
    /// let base = AnnealConfig::default().with_max_iterations(500).with_seed(1);
    /// let grid = SweepGrid::new(vec![0.1, 0.25], vec![1.0], vec![0.999]);
    ///
    /// let outcomes = SweepRunner::run(&c, &base, &grid).unwrap();
    /// assert_eq!(outcomes.len(), 2);
    /// ```
    pub fn run(
        matrix: &CorrelationMatrix,
        base: &AnnealConfig,
        grid: &SweepGrid,
    ) -> Result<Vec<SweepOutcome>> {
        let configs = grid.configs(base)?;
        debug!(
            "sweeping {} configurations over {} instruments",
            configs.len(),
            matrix.n()
        );

        #[cfg(feature = "parallel")]
        let outcomes = configs
            .into_par_iter()
            .enumerate()
            .map(|(index, config)| run_one(matrix, index, config))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let outcomes = configs
            .into_iter()
            .enumerate()
            .map(|(index, config)| run_one(matrix, index, config))
            .collect();

        outcomes
    }
}

fn run_one(matrix: &CorrelationMatrix, index: usize, config: AnnealConfig) -> Result<SweepOutcome> {
    let result = AnnealRunner::run(matrix, &config)?;
    debug!(
        "sweep run {}: cutoff={}, T0={}, rate={} -> energy {} in {} iterations",
        index,
        config.cutoff,
        config.initial_temperature,
        config.cooling_rate,
        result.best_energy,
        result.iterations
    );
    Ok(SweepOutcome {
        index,
        cutoff: config.cutoff,
        initial_temperature: config.initial_temperature,
        cooling_rate: config.cooling_rate,
        result,
    })
}

/// The outcome with the lowest best energy. Ties keep the earliest.
///
/// Energies are only comparable between runs sharing a cutoff; callers
/// comparing across cutoffs should filter first.
pub fn best_outcome(outcomes: &[SweepOutcome]) -> Option<&SweepOutcome> {
    outcomes.iter().reduce(|best, next| {
        if next.result.best_energy < best.result.best_energy {
            next
        } else {
            best
        }
    })
}
