//! Outcome of an annealing run.

use crate::permutation::Permutation;

/// Why the annealing loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The iteration budget was exhausted.
    Budget,
    /// The convergence monitor ran out of patience.
    Converged,
    /// The cancellation flag was raised.
    Cancelled,
    /// The matrix had no instruments; nothing was searched.
    Empty,
}

/// Result of an annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// Lowest-energy ordering seen.
    pub best: Permutation,

    /// Energy of `best`.
    pub best_energy: f64,

    /// Energy of the starting ordering.
    pub initial_energy: f64,

    /// Iterations executed (candidate evaluations).
    pub iterations: usize,

    pub termination: Termination,

    /// Zero-based iteration at which convergence was declared.
    pub converged_at: Option<usize>,

    /// Temperature after the last cooling step.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Current energy after initialization and after every iteration.
    /// Present only when history recording was requested.
    pub energy_history: Option<Vec<f64>>,
}

impl RunResult {
    pub(crate) fn empty(initial_temperature: f64, record_history: bool) -> Self {
        Self {
            best: Permutation::identity(0),
            best_energy: 0.0,
            initial_energy: 0.0,
            iterations: 0,
            termination: Termination::Empty,
            converged_at: None,
            final_temperature: initial_temperature,
            accepted_moves: 0,
            improving_moves: 0,
            energy_history: record_history.then(Vec::new),
        }
    }

    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }

    /// Fraction of iterations whose candidate was accepted.
    pub fn acceptance_ratio(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.accepted_moves as f64 / self.iterations as f64
        }
    }
}
