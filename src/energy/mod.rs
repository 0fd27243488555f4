//! Disorder energy of an ordering.
//!
//! For an ordering `o` and cutoff `c`, the energy is
//!
//! ```text
//! E(o) = sum over positions p < q of  C[o[p], o[q]] * (q - p)   if C[o[p], o[q]] > c
//! ```
//!
//! Strong correlations placed far apart are penalized in proportion to
//! their distance, so low-energy orderings pull correlated instruments
//! into contiguous blocks along the diagonal. Entries at or below the
//! cutoff contribute nothing.
//!
//! [`energy`] is the direct pairwise form. [`DenseEnergy`] is the form the
//! annealer uses: the cutoff mask is applied once up front, leaving a
//! branch-free gather and weighted sum per evaluation.

mod dense;

pub use dense::{DenseEnergy, PARALLEL_THRESHOLD};

use crate::matrix::CorrelationMatrix;

/// Scores orderings of a fixed set of instruments. Lower is better.
///
/// Implementations must be pure: the same ordering always yields the same
/// energy up to floating-point round-off.
pub trait EnergyEvaluator: Send + Sync {
    /// Number of instruments an ordering must contain.
    fn size(&self) -> usize;

    /// Energy of `ordering`, a permutation of `0..size()`.
    fn energy(&self, ordering: &[usize]) -> f64;
}

/// Direct pairwise energy of `ordering` against `matrix`.
///
/// Only entries strictly greater than `cutoff` are counted.
///
/// # Panics
/// Panics if `ordering` contains an index outside the matrix.
///
/// # Examples
///
/// ```
/// use u_seriate::{energy, CorrelationMatrix};
///
/// let c = CorrelationMatrix::from_rows(vec![
///     vec![0.0, 0.5, 0.05],
///     vec![0.5, 0.0, 0.2],
///     vec![0.05, 0.2, 0.0],
/// ]).unwrap();
/// assert!((energy(&[0, 1, 2], &c, 0.1) - 0.7).abs() < 1e-12);
/// assert!((energy(&[1, 0, 2], &c, 0.1) - 0.9).abs() < 1e-12);
/// ```
pub fn energy(ordering: &[usize], matrix: &CorrelationMatrix, cutoff: f64) -> f64 {
    let n = ordering.len();
    let mut total = 0.0;
    for p in 0..n {
        let i = ordering[p];
        for q in p + 1..n {
            let value = matrix.get(i, ordering[q]);
            if value > cutoff {
                total += value * (q - p) as f64;
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CorrelationMatrix {
        CorrelationMatrix::from_rows(vec![
            vec![0.0, 0.5, 0.05],
            vec![0.5, 0.0, 0.2],
            vec![0.05, 0.2, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_identity_ordering() {
        assert!((energy(&[0, 1, 2], &sample(), 0.1) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_ordering_sensitivity() {
        assert!((energy(&[1, 0, 2], &sample(), 0.1) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_zero_cutoff_counts_all_positive() {
        // 0.5*1 + 0.05*2 + 0.2*1
        assert!((energy(&[0, 1, 2], &sample(), 0.0) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_negative_entries_ignored() {
        let c = CorrelationMatrix::from_rows(vec![vec![0.0, -0.9], vec![-0.9, 0.0]]).unwrap();
        assert_eq!(energy(&[0, 1], &c, 0.0), 0.0);
        assert_eq!(energy(&[0, 1], &c, -1.0), -0.9);
    }

    #[test]
    fn test_entry_equal_to_cutoff_excluded() {
        let c = CorrelationMatrix::from_rows(vec![vec![0.0, 0.1], vec![0.1, 0.0]]).unwrap();
        assert_eq!(energy(&[0, 1], &c, 0.1), 0.0);
    }

    #[test]
    fn test_trivial_sizes() {
        assert_eq!(energy(&[], &CorrelationMatrix::zeros(0), 0.1), 0.0);
        let one = CorrelationMatrix::from_rows(vec![vec![1.0]]).unwrap();
        assert_eq!(energy(&[0], &one, 0.1), 0.0);
    }
}
