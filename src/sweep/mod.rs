//! Parameter sweeps.
//!
//! Tuning the annealer means running it over a grid of cutoffs,
//! starting temperatures and cooling rates against one matrix and
//! comparing the best energies. Every run in a sweep reads the same
//! matrix and owns the rest of its state, so with the `parallel` feature
//! the runs execute concurrently on the rayon pool.

mod grid;
mod runner;

pub use grid::SweepGrid;
pub use runner::{best_outcome, SweepOutcome, SweepRunner};
