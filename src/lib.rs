//! Block-diagonal seriation of correlation matrices.
//!
//! Given an n×n correlation matrix between financial instruments, finds
//! an ordering of the instruments that places strongly correlated ones
//! next to each other, so the reordered matrix shows sector-like blocks
//! along its diagonal.
//!
//! - **Energy**: the disorder score of an ordering. Every pair above a
//!   cutoff costs its correlation times the distance between the two
//!   instruments in the ordering.
//! - **Annealing**: simulated annealing over remove-and-reinsert moves
//!   with geometric cooling, Metropolis acceptance and a patience-based
//!   stopping rule.
//! - **Sweeps**: grids of annealing runs over cutoffs, temperatures and
//!   cooling rates, sharing one read-only matrix.
//!
//! The result is a heuristic local optimum, reproducible for a fixed seed.
//!
//! # Architecture
//!
//! Market data, correlation estimation, modal decomposition and plotting
//! live with the caller. This crate consumes only a square matrix and
//! returns an ordering plus its energy.
//!
//! # Features
//!
//! - `parallel`: rayon-backed energy evaluation for large matrices and
//!   concurrent sweep runs.
//! - `serde`: `Serialize`/`Deserialize` for configurations and results.

pub mod anneal;
pub mod energy;
pub mod error;
pub mod matrix;
pub mod permutation;
pub mod sweep;

pub use anneal::{
    propose, propose_into, AnnealConfig, AnnealRunner, ConvergenceMonitor, RemoveInsert,
    RunResult, Termination,
};
pub use energy::{energy, DenseEnergy, EnergyEvaluator};
pub use error::{Result, SeriateError};
pub use matrix::CorrelationMatrix;
pub use permutation::Permutation;
pub use sweep::{best_outcome, SweepGrid, SweepOutcome, SweepRunner};
