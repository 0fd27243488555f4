//! Simulated annealing over instrument orderings.
//!
//! Starting from the identity ordering, each iteration moves one
//! instrument to a random new position, scores the candidate, and accepts
//! it by the Metropolis criterion at the current temperature. The
//! temperature cools geometrically, the best ordering seen is kept, and
//! the run ends on its iteration budget or when successive energies stall.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod convergence;
mod moves;
mod runner;
mod types;

pub use config::AnnealConfig;
pub use convergence::ConvergenceMonitor;
pub use moves::{propose, propose_into, RemoveInsert};
pub use runner::AnnealRunner;
pub use types::{RunResult, Termination};
