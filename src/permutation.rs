//! Orderings of instrument indices.

use crate::error::{Result, SeriateError};

/// A permutation of `0..n`: position `p` holds the instrument shown at row
/// and column `p` of the reordered matrix.
///
/// Values can only be built through [`identity`](Self::identity) or the
/// validating `TryFrom<Vec<usize>>`, deserialization included. Mutation is
/// crate-private and always pairs a removal with a reinsertion, so every
/// `Permutation` is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>", into = "Vec<usize>"))]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// The ordering `[0, 1, ..., n-1]`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    /// Removes and returns the instrument at `position`, shifting later
    /// entries left.
    ///
    /// # Panics
    /// Panics if `position >= len()`.
    pub(crate) fn remove_at(&mut self, position: usize) -> usize {
        self.0.remove(position)
    }

    /// Inserts `instrument` at `position`, shifting later entries right.
    /// Only valid directly after [`remove_at`](Self::remove_at) of the same
    /// instrument.
    ///
    /// # Panics
    /// Panics if `position > len()`.
    pub(crate) fn insert_at(&mut self, position: usize, instrument: usize) {
        self.0.insert(position, instrument);
    }

    /// Returns `true` if every index in `0..len()` appears exactly once.
    pub fn is_valid(&self) -> bool {
        is_permutation(&self.0)
    }
}

fn is_permutation(values: &[usize]) -> bool {
    let mut seen = vec![false; values.len()];
    for &v in values {
        match seen.get_mut(v) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = SeriateError;

    fn try_from(values: Vec<usize>) -> Result<Self> {
        if !is_permutation(&values) {
            return Err(SeriateError::invalid(format!(
                "not a permutation of 0..{}: {values:?}",
                values.len()
            )));
        }
        Ok(Self(values))
    }
}

impl AsRef<[usize]> for Permutation {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(p: Permutation) -> Self {
        p.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let p = Permutation::identity(4);
        assert_eq!(p.as_slice(), &[0, 1, 2, 3]);
        assert!(p.is_valid());
        assert!(Permutation::identity(0).is_empty());
    }

    #[test]
    fn test_try_from_validates() {
        assert!(Permutation::try_from(vec![2, 0, 1]).is_ok());
        assert!(Permutation::try_from(vec![0, 0, 1]).is_err());
        assert!(Permutation::try_from(vec![0, 1, 3]).is_err());
        assert!(Permutation::try_from(vec![]).is_ok());
    }

    #[test]
    fn test_remove_then_insert_keeps_permutation() {
        let mut p = Permutation::identity(5);
        let v = p.remove_at(1);
        assert_eq!(v, 1);
        assert_eq!(p.len(), 4);
        p.insert_at(3, v);
        assert_eq!(p.as_slice(), &[0, 2, 3, 1, 4]);
        assert!(p.is_valid());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let p: Permutation = serde_json::from_str("[2, 0, 1]").unwrap();
        assert_eq!(p.as_slice(), &[2, 0, 1]);
        assert_eq!(serde_json::to_string(&p).unwrap(), "[2,0,1]");

        assert!(serde_json::from_str::<Permutation>("[0, 1, 0]").is_err());
        assert!(serde_json::from_str::<Permutation>("[0, 7]").is_err());
    }

    #[test]
    fn test_insert_at_end() {
        let mut p = Permutation::identity(3);
        let v = p.remove_at(0);
        p.insert_at(2, v);
        assert_eq!(p.as_slice(), &[1, 2, 0]);
    }
}
