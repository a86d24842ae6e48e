//! Exact reference results in arbitrary-precision rational arithmetic.
//!
//! Every finite `f64` is a rational number, so the population variance
//! of a buffer has an exact rational value. This module computes it
//! with [`BigRational`] and rounds once, at the very end, back to
//! `f64`. Accuracy reports measure each floating-point implementation
//! against this value.
//!
//! Requires the `oracle` cargo feature (enabled by default).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

/// Exact arithmetic mean, correctly rounded to `f64`.
///
/// # Panics
///
/// Panics if `values` is empty or contains a non-finite value.
///
/// # Examples
///
/// ```
/// use variance_lab::reference::mean_exact;
///
/// assert_eq!(mean_exact(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
/// ```
pub fn mean_exact(values: &[f64]) -> f64 {
    to_f64(&rational_mean(values))
}

/// Exact population variance, correctly rounded to `f64`.
///
/// The entire computation, mean, deviations, squares, and the final
/// division, happens in rational arithmetic. The single rounding step
/// is the conversion of the exact result to `f64`.
///
/// # Panics
///
/// Panics if `values` is empty or contains a non-finite value.
///
/// # Examples
///
/// ```
/// use variance_lab::reference::variance_exact;
///
/// let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(variance_exact(&values), 4.0);
/// ```
pub fn variance_exact(values: &[f64]) -> f64 {
    let mean = rational_mean(values);
    let mut sum = BigRational::zero();
    for &x in values {
        let deviation = rational(x) - &mean;
        sum += &deviation * &deviation;
    }
    to_f64(&(sum / BigInt::from(values.len())))
}

fn rational_mean(values: &[f64]) -> BigRational {
    assert!(
        !values.is_empty(),
        "Cannot compute mean of empty buffer"
    );
    let mut sum = BigRational::zero();
    for &x in values {
        sum += rational(x);
    }
    sum / BigInt::from(values.len())
}

fn rational(x: f64) -> BigRational {
    match BigRational::from_float(x) {
        Some(r) => r,
        None => panic!("Exact reference requires finite inputs, got {x}"),
    }
}

fn to_f64(r: &BigRational) -> f64 {
    r.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_integer_case_is_exact() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(variance_exact(&values), 4.0);
        assert_eq!(mean_exact(&values), 5.0);
    }

    #[test]
    fn test_identical_values_have_zero_variance() {
        // 0.1 is not exactly representable, but the deviations are
        // exactly zero as rationals, so the result is exact anyway.
        assert_eq!(variance_exact(&[0.1; 10]), 0.0);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(variance_exact(&[1234.5678]), 0.0);
        assert_eq!(mean_exact(&[1234.5678]), 1234.5678);
    }

    #[test]
    fn test_mean_of_consecutive_integers() {
        assert_eq!(mean_exact(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
    }

    #[test]
    #[should_panic(expected = "finite")]
    fn test_nan_input_panics() {
        variance_exact(&[1.0, f64::NAN]);
    }

    #[test]
    #[should_panic(expected = "finite")]
    fn test_infinite_input_panics() {
        mean_exact(&[f64::INFINITY]);
    }

    #[test]
    #[should_panic(expected = "empty")]
    fn test_empty_input_panics() {
        variance_exact(&[]);
    }
}
