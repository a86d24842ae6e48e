//! Two-pass implementation: compute the mean first, then sum squared
//! deviations from it.
//!
//! Subtracting the mean before squaring removes the large common offset
//! from every term, so no catastrophic cancellation happens in the final
//! division. This is the most accurate floating-point implementation in
//! the crate and the yardstick the one-pass variants are compared to.

use crate::summation::KahanSum;

pub(crate) fn variance(values: &[f64]) -> f64 {
    let mean = super::mean(values);
    let mut sum = KahanSum::new();
    for &x in values {
        let deviation = x - mean;
        sum.add(deviation * deviation);
    }
    sum.value() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_hand_computed_variance() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(variance(&values), 4.0);
    }

    #[test]
    fn test_constant_input_is_exactly_zero() {
        let values = [0.1; 1000];
        assert_eq!(variance(&values), 0.0);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(variance(&[1234.5]), 0.0);
    }
}
