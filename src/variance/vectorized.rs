//! Two-lane one-pass implementations over the aligned pair view.
//!
//! Both walk [`AlignedSamples::pairs`] and fold the trailing unpaired
//! element, if any, into the reduced totals before the finish step.

use crate::buffer::AlignedSamples;
use crate::summation::{VectorKbnSum, VectorSum};

/// Plain two-lane accumulation. Lane-reordered but otherwise identical
/// in error behavior to the scalar naive implementation.
pub(crate) fn uncompensated(samples: &AlignedSamples) -> f64 {
    let mut sum = VectorSum::new();
    let mut sum_sq = VectorSum::new();
    for &pair in samples.pairs() {
        sum.add(pair);
        sum_sq.add(pair * pair);
    }
    let mut total = sum.reduce();
    let mut total_sq = sum_sq.reduce();
    if let Some(x) = samples.remainder() {
        total += x;
        total_sq += x * x;
    }
    super::finish(total, total_sq, samples.len())
}

/// Two-lane KBN accumulation, seeded from the first pair.
///
/// The lane reduction returns a live [`crate::summation::KbnSum`], so
/// the trailing element of an odd-length buffer is folded in with the
/// same compensation discipline as every other term.
pub(crate) fn kbn(samples: &AlignedSamples) -> f64 {
    let pairs = samples.pairs();
    let Some((&first, rest)) = pairs.split_first() else {
        // A single element never fills a pair; the scalar path handles it.
        return super::onepass::kbn(samples.as_slice());
    };
    let mut sum = VectorKbnSum::seeded(first);
    let mut sum_sq = VectorKbnSum::seeded(first * first);
    for &pair in rest {
        sum.add(pair);
        sum_sq.add(pair * pair);
    }
    let mut total = sum.reduce();
    let mut total_sq = sum_sq.reduce();
    if let Some(x) = samples.remainder() {
        total.add(x);
        total_sq.add(x * x);
    }
    super::finish(total.value(), total_sq.value(), samples.len())
}
