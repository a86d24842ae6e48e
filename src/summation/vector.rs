//! Vectorized accumulators: two `f64` lanes per 128-bit step.
//!
//! The KBN branch cannot be taken per-lane with scalar control flow, so
//! [`VectorKbnSum`] emulates it with a lane-wise compare and blend: both
//! correction orderings are computed and a mask selects, per lane, the
//! one whose subtraction is exact.

use wide::{CmpGe, f64x2};

use super::scalar::KbnSum;
use super::LANES;

/// Uncompensated two-lane running sum.
///
/// Same mathematics as plain scalar accumulation, reordered into two
/// independent lanes that are combined once at the end.
#[derive(Debug, Clone, Copy, Default)]
pub struct VectorSum {
    sum: f64x2,
}

impl VectorSum {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self {
            sum: f64x2::splat(0.0),
        }
    }

    /// Fold one lane pair into the running sum.
    #[inline]
    pub fn add(&mut self, terms: f64x2) {
        self.sum += terms;
    }

    /// Add both lanes into one scalar.
    #[inline]
    pub fn reduce(&self) -> f64 {
        self.sum.reduce_add()
    }
}

/// Kahan-Babuška-Neumaier running sum over two independent lanes.
///
/// Each lane performs exactly the scalar [`KbnSum`] update; the branch
/// on `|sum| >= |term|` becomes a compare mask selecting between the two
/// correction orderings. [`reduce`](Self::reduce) recombines the lanes
/// without discarding the corrections.
#[derive(Debug, Clone, Copy)]
pub struct VectorKbnSum {
    sum: f64x2,
    compensation: f64x2,
}

impl VectorKbnSum {
    /// Create an accumulator holding `first` with no accumulated error.
    ///
    /// Mirrors [`KbnSum::seeded`]: the vectorized one-pass loop seeds
    /// from the first lane pair and iterates from the second.
    pub fn seeded(first: f64x2) -> Self {
        Self {
            sum: first,
            compensation: f64x2::splat(0.0),
        }
    }

    /// Fold one lane pair into the running sum.
    #[inline]
    pub fn add(&mut self, terms: f64x2) {
        let t = self.sum + terms;
        let sum_dominates = self.sum.abs().cmp_ge(terms.abs());
        let by_sum = (self.sum - t) + terms;
        let by_term = (terms - t) + self.sum;
        self.compensation += sum_dominates.blend(by_sum, by_term);
        self.sum = t;
    }

    /// Per-lane `(sum, compensation)` state.
    pub fn lanes(&self) -> ([f64; LANES], [f64; LANES]) {
        (self.sum.to_array(), self.compensation.to_array())
    }

    /// Compensated horizontal reduction.
    ///
    /// Folds the lane totals, then the lane corrections, through a
    /// scalar [`KbnSum`], and returns the accumulator itself so trailing
    /// unpaired elements can be folded in with the same discipline.
    pub fn reduce(&self) -> KbnSum {
        let sums = self.sum.to_array();
        let corrections = self.compensation.to_array();
        let mut total = KbnSum::seeded(sums[0]);
        total.add(sums[1]);
        total.add(corrections[0]);
        total.add(corrections[1]);
        total
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_vector_sum_adds_lane_wise() {
        let mut acc = VectorSum::new();
        acc.add(f64x2::from([1.0, 2.0]));
        acc.add(f64x2::from([3.0, 4.0]));
        assert_eq!(acc.reduce(), 10.0);
    }

    #[test]
    fn test_lanes_compensate_independently() {
        // Lane 0 has the running sum dominating, lane 1 the incoming
        // term; both corrections must be recovered.
        let mut acc = VectorKbnSum::seeded(f64x2::from([1.0e16, 1.0]));
        acc.add(f64x2::from([1.0, 1.0e16]));

        let (sums, corrections) = acc.lanes();
        assert_eq!(sums, [1.0e16, 1.0e16]);
        assert_eq!(corrections, [1.0, 1.0]);
    }

    #[test]
    fn test_reduce_keeps_corrections_a_plain_sum_drops() {
        let acc = VectorKbnSum {
            sum: f64x2::from([1.0e16, 1.0]),
            compensation: f64x2::from([1.0, -0.5]),
        };

        let plain = 1.0e16 + 1.0 + 1.0 + (-0.5);
        assert_eq!(plain, 1.0e16);
        // True total is 1.0e16 + 1.5, which rounds to 1.0e16 + 2.0.
        assert_eq!(acc.reduce().value(), 1.0e16 + 2.0);
    }

    #[test]
    fn test_reduce_is_exact_on_benign_lanes() {
        let mut acc = VectorKbnSum::seeded(f64x2::from([1.5, 2.5]));
        acc.add(f64x2::from([3.25, 4.75]));
        assert_eq!(acc.reduce().value(), 12.0);
        assert_eq!(acc.reduce().compensation(), 0.0);
    }

    #[test]
    fn test_reduce_continues_as_kbn_accumulator() {
        let mut acc = VectorKbnSum::seeded(f64x2::from([1.0e16, 1.0]));
        acc.add(f64x2::from([1.0, 1.0e16]));

        // Fold a trailing element the way the odd-length variance path
        // does; the correction from the lanes must survive.
        let mut total = acc.reduce();
        total.add(1.0);
        assert_eq!(total.value(), 2.0e16 + 3.0);
    }

    proptest! {
        // Each lane of the vector accumulator must evolve exactly like a
        // scalar KBN accumulator fed that lane's terms.
        #[test]
        fn prop_lanes_match_scalar_kbn(
            terms in proptest::collection::vec(
                (-1.0e12..1.0e12f64, -1.0e12..1.0e12f64),
                1..64,
            )
        ) {
            let first = terms[0];
            let mut vector = VectorKbnSum::seeded(f64x2::from([first.0, first.1]));
            let mut lane0 = KbnSum::seeded(first.0);
            let mut lane1 = KbnSum::seeded(first.1);

            for &(a, b) in &terms[1..] {
                vector.add(f64x2::from([a, b]));
                lane0.add(a);
                lane1.add(b);
            }

            let (sums, corrections) = vector.lanes();
            prop_assert_eq!(corrections[0], lane0.compensation());
            prop_assert_eq!(corrections[1], lane1.compensation());
            prop_assert_eq!(sums[0] + corrections[0], lane0.value());
            prop_assert_eq!(sums[1] + corrections[1], lane1.value());
        }
    }
}
