//! Pre-masked dense energy evaluator.

use super::EnergyEvaluator;
use crate::matrix::CorrelationMatrix;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Smallest instrument count for which row sums are reduced on the rayon
/// pool. Below this the fork/join overhead outweighs the work.
pub const PARALLEL_THRESHOLD: usize = 256;

/// Energy evaluator over a matrix with the cutoff already applied.
///
/// Entries at or below the cutoff are replaced by zero at construction,
/// so scoring an ordering is one gather and one weighted sum per position
/// pair with no data-dependent branches. The orientation of the matrix is
/// kept: the pair at positions `p < q` reads `C[o[p], o[q]]`.
///
/// With the `parallel` feature, orderings of at least
/// [`PARALLEL_THRESHOLD`] instruments are scored with one rayon task per
/// row. The reduction is a plain sum, so results agree with the sequential
/// path up to floating-point round-off.
///
/// # Examples
///
/// ```
/// use u_seriate::{CorrelationMatrix, DenseEnergy, EnergyEvaluator};
///
/// let c = CorrelationMatrix::from_rows(vec![
///     vec![0.0, 0.5, 0.05],
///     vec![0.5, 0.0, 0.2],
///     vec![0.05, 0.2, 0.0],
/// ]).unwrap();
/// let eval = DenseEnergy::new(&c, 0.1);
/// assert!((eval.energy(&[0, 1, 2]) - 0.7).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct DenseEnergy {
    n: usize,
    weights: Vec<f64>,
}

impl DenseEnergy {
    /// Masks `matrix` by `cutoff`. The matrix itself is not retained.
    pub fn new(matrix: &CorrelationMatrix, cutoff: f64) -> Self {
        let weights = matrix
            .as_slice()
            .iter()
            .map(|&v| if v > cutoff { v } else { 0.0 })
            .collect();
        Self {
            n: matrix.n(),
            weights,
        }
    }

    /// Contribution of every pair whose left member sits at position `p`.
    #[inline]
    fn row_energy(&self, ordering: &[usize], p: usize) -> f64 {
        let start = ordering[p] * self.n;
        let row = &self.weights[start..start + self.n];
        ordering[p + 1..]
            .iter()
            .zip(1usize..)
            .map(|(&j, distance)| row[j] * distance as f64)
            .sum()
    }

    fn sequential(&self, ordering: &[usize]) -> f64 {
        (0..ordering.len())
            .map(|p| self.row_energy(ordering, p))
            .sum()
    }

    #[cfg(feature = "parallel")]
    fn parallel(&self, ordering: &[usize]) -> f64 {
        (0..ordering.len())
            .into_par_iter()
            .map(|p| self.row_energy(ordering, p))
            .sum()
    }
}

impl EnergyEvaluator for DenseEnergy {
    fn size(&self) -> usize {
        self.n
    }

    fn energy(&self, ordering: &[usize]) -> f64 {
        debug_assert_eq!(ordering.len(), self.n, "ordering length mismatch");

        #[cfg(feature = "parallel")]
        if ordering.len() >= PARALLEL_THRESHOLD {
            return self.parallel(ordering);
        }

        self.sequential(ordering)
    }
}
