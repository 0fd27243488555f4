//! Annealing loop.

use super::config::AnnealConfig;
use super::convergence::ConvergenceMonitor;
use super::moves::propose_into;
use super::types::{RunResult, Termination};
use crate::energy::{DenseEnergy, EnergyEvaluator};
use crate::error::{Result, SeriateError};
use crate::matrix::CorrelationMatrix;
use crate::permutation::Permutation;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Upper bound on history capacity reserved up front.
const HISTORY_RESERVE_LIMIT: usize = 1 << 20;

fn create_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}

/// Executes simulated annealing over orderings of a correlation matrix.
///
/// # Usage
///
/// ```
/// use u_seriate::{AnnealConfig, AnnealRunner, CorrelationMatrix};
///
/// let c = CorrelationMatrix::from_rows(vec![
///     vec![1.0, 0.1, 0.9],
///     vec![0.1, 1.0, 0.1],
///     vec![0.9, 0.1, 1.0],
/// ]).unwrap();
/// let config = AnnealConfig::default()
///     .with_cutoff(0.5)
///     .with_max_iterations(2_000)
///     .with_tolerance(0.0)
///     .with_seed(42);
///
/// let result = AnnealRunner::run(&c, &config).unwrap();
/// assert!(result.best_energy <= result.initial_energy);
/// assert!(result.best.is_valid());
/// ```
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs annealing with a random source seeded from `config.seed`.
    pub fn run(matrix: &CorrelationMatrix, config: &AnnealConfig) -> Result<RunResult> {
        Self::run_with_cancel(matrix, config, None)
    }

    /// Runs annealing with an optional cancellation token.
    ///
    /// The flag is polled once per iteration. When it is raised the run
    /// stops and returns the best ordering found so far.
    pub fn run_with_cancel(
        matrix: &CorrelationMatrix,
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RunResult> {
        config.validate()?;
        let mut rng = create_rng(config.seed);
        let evaluator = DenseEnergy::new(matrix, config.cutoff);
        Self::run_with_evaluator(&evaluator, config, &mut rng, cancel)
    }

    /// Runs annealing drawing all randomness from `rng`. `config.seed` is
    /// ignored.
    pub fn run_with_rng<R: Rng>(
        matrix: &CorrelationMatrix,
        config: &AnnealConfig,
        rng: &mut R,
    ) -> Result<RunResult> {
        config.validate()?;
        let evaluator = DenseEnergy::new(matrix, config.cutoff);
        Self::run_with_evaluator(&evaluator, config, rng, None)
    }

    /// Runs annealing from the identity ordering against an arbitrary
    /// evaluator. `config.cutoff` and `config.seed` are neither used nor
    /// validated; the evaluator and `rng` already carry them.
    pub fn run_with_evaluator<E, R>(
        evaluator: &E,
        config: &AnnealConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RunResult>
    where
        E: EnergyEvaluator + ?Sized,
        R: Rng,
    {
        let start = Permutation::identity(evaluator.size());
        Self::run_from(evaluator, start, config, rng, cancel)
    }

    /// Runs annealing starting from `start` instead of the identity.
    ///
    /// Useful to continue from the best ordering of an earlier run.
    pub fn run_from<E, R>(
        evaluator: &E,
        start: Permutation,
        config: &AnnealConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RunResult>
    where
        E: EnergyEvaluator + ?Sized,
        R: Rng,
    {
        config.validate_schedule()?;

        let n = evaluator.size();
        if start.len() != n {
            return Err(SeriateError::invalid(format!(
                "ordering has {} entries but the matrix has {n} instruments",
                start.len()
            )));
        }
        if !start.is_valid() {
            return Err(SeriateError::invalid(format!(
                "starting ordering is not a permutation of 0..{n}: {:?}",
                start.as_slice()
            )));
        }
        if n == 0 {
            debug!("empty matrix, nothing to anneal");
            return Ok(RunResult::empty(
                config.initial_temperature,
                config.record_history,
            ));
        }

        debug!(
            "annealing {} instruments: T0={}, rate={}, budget={}",
            n, config.initial_temperature, config.cooling_rate, config.max_iterations
        );

        // Initialize
        let mut current = start;
        let mut current_energy = evaluator.energy(current.as_slice());
        let initial_energy = current_energy;
        let mut best = current.clone();
        let mut best_energy = current_energy;
        let mut candidate = current.clone();

        let mut temperature = config.initial_temperature;
        let mut monitor = ConvergenceMonitor::new(config.tolerance, config.patience);
        monitor.observe(current_energy);

        let mut history = config.record_history.then(|| {
            let mut h = Vec::with_capacity(config.max_iterations.min(HISTORY_RESERVE_LIMIT) + 1);
            h.push(current_energy);
            h
        });

        let mut termination = Termination::Budget;
        let mut converged_at = None;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut frozen = false;

        for iteration in 0..config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    termination = Termination::Cancelled;
                    break;
                }
            }

            candidate.clone_from(&current);
            propose_into(&mut candidate, rng);
            let candidate_energy = evaluator.energy(candidate.as_slice());
            let delta = candidate_energy - current_energy;

            // Metropolis acceptance criterion
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else if temperature > 0.0 {
                let probability = (-delta / temperature).exp();
                rng.random::<f64>() < probability
            } else {
                // Temperature underflowed: greedy descent from here on.
                if !frozen {
                    warn!("temperature reached zero at iteration {iteration}, continuing greedily");
                    frozen = true;
                }
                delta <= 0.0
            };

            if accept {
                std::mem::swap(&mut current, &mut candidate);
                current_energy = candidate_energy;
                accepted_moves += 1;
            }

            if current_energy < best_energy {
                best.clone_from(&current);
                best_energy = current_energy;
            }

            if let Some(h) = history.as_mut() {
                h.push(current_energy);
            }

            // Cool down
            temperature *= config.cooling_rate;
            iterations = iteration + 1;

            monitor.observe(current_energy);
            if monitor.should_stop() {
                info!("converged at iteration {iteration}");
                termination = Termination::Converged;
                converged_at = Some(iteration);
                break;
            }
        }

        debug!(
            "annealing finished: {:?} after {} iterations, energy {} -> {}",
            termination, iterations, initial_energy, best_energy
        );

        Ok(RunResult {
            best,
            best_energy,
            initial_energy,
            iterations,
            termination,
            converged_at,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            energy_history: history,
        })
    }
}
