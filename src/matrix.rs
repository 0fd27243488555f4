//! Dense square correlation matrix.
//!
//! The optimizer only ever reads the matrix, so a single instance can be
//! shared by reference across any number of concurrent runs.

use crate::error::{Result, SeriateError};
use crate::permutation::Permutation;

/// Square, row-major matrix of pairwise correlations.
///
/// Symmetry is assumed by callers but not enforced; use
/// [`is_symmetric`](Self::is_symmetric) to check it explicitly.
///
/// # Examples
///
/// ```
/// use u_seriate::CorrelationMatrix;
///
/// let c = CorrelationMatrix::from_rows(vec![
///     vec![1.0, 0.5],
///     vec![0.5, 1.0],
/// ]).unwrap();
/// assert_eq!(c.n(), 2);
/// assert_eq!(c.get(0, 1), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    n: usize,
    data: Vec<f64>,
}

impl CorrelationMatrix {
    /// Builds a matrix from nested rows. Fails if any row length differs
    /// from the number of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(SeriateError::invalid(format!(
                    "matrix is not square: row {i} has {} columns, expected {n}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Ok(Self { n, data })
    }

    /// Builds an `n`×`n` matrix from row-major data.
    pub fn from_vec(n: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != n * n {
            return Err(SeriateError::invalid(format!(
                "matrix is not square: {} values for a {n}x{n} matrix",
                data.len()
            )));
        }
        Ok(Self { n, data })
    }

    /// An `n`×`n` matrix of zeros.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// Number of instruments (rows).
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Entry at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "index ({i}, {j}) out of range");
        self.data[i * self.n + j]
    }

    /// Row `i` as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Raw row-major storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns `true` if `|C[i,j] - C[j,i]| <= tol` for every pair.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        (0..self.n).all(|i| {
            (i + 1..self.n).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tol)
        })
    }

    /// Rearranges rows and columns so that entry `(p, q)` of the result is
    /// `C[ordering[p], ordering[q]]`.
    ///
    /// This is the view a heat-map renders after seriation.
    pub fn permuted(&self, ordering: &Permutation) -> Result<Self> {
        if ordering.len() != self.n {
            return Err(SeriateError::invalid(format!(
                "ordering has {} entries but matrix is {n}x{n}",
                ordering.len(),
                n = self.n
            )));
        }
        let order = ordering.as_slice();
        let mut data = Vec::with_capacity(self.n * self.n);
        for &i in order {
            let row = self.row(i);
            data.extend(order.iter().map(|&j| row[j]));
        }
        Ok(Self { n: self.n, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = CorrelationMatrix::from_rows(vec![vec![1.0, 0.0], vec![0.0]]).unwrap_err();
        assert!(matches!(err, SeriateError::InvalidInput(_)));
    }

    #[test]
    fn test_from_rows_rejects_rectangular() {
        let rows = vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0]];
        assert!(CorrelationMatrix::from_rows(rows).is_err());
    }

    #[test]
    fn test_from_vec_size_check() {
        assert!(CorrelationMatrix::from_vec(2, vec![0.0; 4]).is_ok());
        assert!(CorrelationMatrix::from_vec(2, vec![0.0; 3]).is_err());
    }

    #[test]
    fn test_empty_matrix() {
        let c = CorrelationMatrix::from_rows(vec![]).unwrap();
        assert!(c.is_empty());
        assert_eq!(c.n(), 0);
    }

    #[test]
    fn test_symmetry_check() {
        let sym = CorrelationMatrix::from_rows(vec![vec![1.0, 0.3], vec![0.3, 1.0]]).unwrap();
        assert!(sym.is_symmetric(0.0));

        let asym = CorrelationMatrix::from_rows(vec![vec![1.0, 0.3], vec![0.2, 1.0]]).unwrap();
        assert!(!asym.is_symmetric(1e-3));
        assert!(asym.is_symmetric(0.2));
    }

    #[test]
    fn test_permuted_moves_rows_and_columns() {
        let c = CorrelationMatrix::from_rows(vec![
            vec![1.0, 0.1, 0.2],
            vec![0.1, 1.0, 0.3],
            vec![0.2, 0.3, 1.0],
        ])
        .unwrap();
        let order = Permutation::try_from(vec![2, 0, 1]).unwrap();
        let p = c.permuted(&order).unwrap();

        assert_eq!(p.get(0, 0), 1.0);
        assert_eq!(p.get(0, 1), 0.2); // C[2, 0]
        assert_eq!(p.get(0, 2), 0.3); // C[2, 1]
        assert_eq!(p.get(1, 2), 0.1); // C[0, 1]
        assert!(p.is_symmetric(0.0));
    }

    #[test]
    fn test_permuted_size_mismatch() {
        let c = CorrelationMatrix::zeros(3);
        assert!(c.permuted(&Permutation::identity(2)).is_err());
    }
}
