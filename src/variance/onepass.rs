//! Scalar one-pass implementations: accumulate `sum` and `sum_sq` in a
//! single traversal, then apply `(sum_sq - sum^2 / n) / n`.

use crate::summation::{KahanSum, KbnSum};

/// Uncompensated running sums. The baseline every other implementation
/// is measured against.
pub(crate) fn naive(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    for &x in values {
        sum += x;
        sum_sq += x * x;
    }
    super::finish(sum, sum_sq, values.len())
}

/// Kahan-compensated running sums.
pub(crate) fn kahan(values: &[f64]) -> f64 {
    let mut sum = KahanSum::new();
    let mut sum_sq = KahanSum::new();
    for &x in values {
        sum.add(x);
        sum_sq.add(x * x);
    }
    super::finish(sum.value(), sum_sq.value(), values.len())
}

/// Kahan-Babuška-Neumaier running sums, seeded from the first element
/// so the loop body matches the vectorized variant term for term.
pub(crate) fn kbn(values: &[f64]) -> f64 {
    let first = values[0];
    let mut sum = KbnSum::seeded(first);
    let mut sum_sq = KbnSum::seeded(first * first);
    for &x in &values[1..] {
        sum.add(x);
        sum_sq.add(x * x);
    }
    super::finish(sum.value(), sum_sq.value(), values.len())
}
