//! Remove-and-reinsert neighborhood.

use crate::permutation::Permutation;
use rand::Rng;

/// A single remove-and-reinsert move: the instrument at position `from` is
/// taken out and put back at position `to` of the shortened sequence,
/// which is also its position in the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveInsert {
    pub from: usize,
    pub to: usize,
}

impl RemoveInsert {
    /// Draws a move for an ordering of `n >= 2` instruments: `from` uniform
    /// in `0..n`, `to` uniform in `0..n-1`.
    pub fn sample<R: Rng>(n: usize, rng: &mut R) -> Self {
        debug_assert!(n >= 2);
        let from = rng.random_range(0..n);
        let to = rng.random_range(0..n - 1);
        Self { from, to }
    }

    /// Applies the move in place.
    ///
    /// # Panics
    /// Panics, leaving `ordering` untouched, if either position is out of
    /// range for it.
    pub fn apply(&self, ordering: &mut Permutation) {
        let n = ordering.len();
        assert!(
            self.from < n && self.to < n,
            "move {self:?} out of range for {n} instruments"
        );
        let instrument = ordering.remove_at(self.from);
        ordering.insert_at(self.to, instrument);
    }
}

/// Proposes a neighbor of `ordering` by moving one instrument.
///
/// Orderings of fewer than two instruments have no neighbors and are
/// returned unchanged without touching `rng`. A drawn move may be a no-op;
/// it is still a legitimate candidate.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_seriate::{propose, Permutation};
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let next = propose(&Permutation::identity(5), &mut rng);
/// assert!(next.is_valid());
/// ```
pub fn propose<R: Rng>(ordering: &Permutation, rng: &mut R) -> Permutation {
    let mut candidate = ordering.clone();
    propose_into(&mut candidate, rng);
    candidate
}

/// In-place form of [`propose`]. Returns the move that was applied, or
/// `None` for orderings of fewer than two instruments.
pub fn propose_into<R: Rng>(ordering: &mut Permutation, rng: &mut R) -> Option<RemoveInsert> {
    if ordering.len() < 2 {
        return None;
    }
    let mv = RemoveInsert::sample(ordering.len(), rng);
    mv.apply(ordering);
    Some(mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_single_instrument_unchanged() {
        let mut rng = StdRng::seed_from_u64(0);
        let one = Permutation::identity(1);
        assert_eq!(propose(&one, &mut rng), one);
        assert!(propose_into(&mut Permutation::identity(0), &mut rng).is_none());
    }

    #[test]
    fn test_apply_forward_and_backward() {
        let mut p = Permutation::identity(5);
        RemoveInsert { from: 1, to: 3 }.apply(&mut p);
        assert_eq!(p.as_slice(), &[0, 2, 3, 1, 4]);

        RemoveInsert { from: 4, to: 0 }.apply(&mut p);
        assert_eq!(p.as_slice(), &[4, 0, 2, 3, 1]);
    }

    #[test]
    fn test_noop_move() {
        let mv = RemoveInsert { from: 2, to: 2 };
        let mut p = Permutation::identity(4);
        mv.apply(&mut p);
        assert_eq!(p, Permutation::identity(4));
    }

    #[test]
    fn test_out_of_range_move_leaves_ordering_intact() {
        let mut p = Permutation::identity(3);
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            RemoveInsert { from: 0, to: 3 }.apply(&mut p);
        }));
        assert!(outcome.is_err());
        assert_eq!(p, Permutation::identity(3));
    }

    #[test]
    fn test_sample_ranges() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..1000 {
            let mv = RemoveInsert::sample(6, &mut rng);
            assert!(mv.from < 6);
            assert!(mv.to < 5);
        }
    }

    #[test]
    fn test_every_position_reachable() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut from_seen = [false; 4];
        let mut to_seen = [false; 3];
        for _ in 0..500 {
            let mv = RemoveInsert::sample(4, &mut rng);
            from_seen[mv.from] = true;
            to_seen[mv.to] = true;
        }
        assert!(from_seen.iter().all(|&s| s));
        assert!(to_seen.iter().all(|&s| s));
    }

    #[test]
    fn test_same_seed_same_proposal() {
        let start = Permutation::identity(20);
        let a = propose(&start, &mut StdRng::seed_from_u64(42));
        let b = propose(&start, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_proposal_is_permutation(n in 1usize..64, seed in any::<u64>(), steps in 1usize..20) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut p = Permutation::identity(n);
            for _ in 0..steps {
                p = propose(&p, &mut rng);
                prop_assert_eq!(p.len(), n);
                prop_assert!(p.is_valid());
            }
        }
    }
}
