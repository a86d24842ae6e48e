//! Population variance in seven numerical renditions.
//!
//! Every implementation computes the same quantity, the population
//! variance `sum((x - mean)^2) / n`, but they differ in how much of the
//! intermediate rounding error survives into the result:
//!
//! - [`Naive`](VarianceAlgorithm::Naive) accumulates `sum` and
//!   `sum_sq` with plain additions and is the cancellation baseline.
//! - [`KahanOnePass`](VarianceAlgorithm::KahanOnePass) and
//!   [`KbnOnePass`](VarianceAlgorithm::KbnOnePass) keep the one-pass
//!   shape but carry compensation terms.
//! - [`KbnOnePassVectorized`](VarianceAlgorithm::KbnOnePassVectorized)
//!   and [`UncompensatedVectorized`](VarianceAlgorithm::UncompensatedVectorized)
//!   process two lanes per step.
//! - [`TwoPass`](VarianceAlgorithm::TwoPass) subtracts the mean before
//!   squaring and is the accuracy reference among the floating-point
//!   implementations.
//! - [`Welford`](VarianceAlgorithm::Welford) updates the mean and the
//!   squared-deviation sum incrementally and never forms `sum_sq`.
//!
//! All of them share one hazard: the one-pass formula
//! `(sum_sq - sum^2 / n) / n` subtracts two nearly equal large numbers
//! when the data has a large mean and a small spread, so compensated
//! summation alone cannot rescue it. The two-pass and Welford variants
//! avoid the subtraction altogether.

mod onepass;
mod twopass;
mod vectorized;
mod welford;

use serde::{Deserialize, Serialize};

use crate::buffer::AlignedSamples;
use crate::summation::KahanSum;

/// Selects one of the variance implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VarianceAlgorithm {
    /// One pass, uncompensated running sums.
    Naive,
    /// One pass, Kahan-compensated running sums.
    KahanOnePass,
    /// One pass, Kahan-Babuška-Neumaier running sums.
    KbnOnePass,
    /// One pass, two-lane KBN running sums.
    KbnOnePassVectorized,
    /// One pass, two-lane uncompensated running sums.
    UncompensatedVectorized,
    /// Kahan mean first, then Kahan-summed squared deviations.
    TwoPass,
    /// Welford's incremental mean and squared-deviation update.
    Welford,
}

impl VarianceAlgorithm {
    /// Every implementation, in the order reports list them.
    pub const ALL: [Self; 7] = [
        Self::Naive,
        Self::KahanOnePass,
        Self::KbnOnePass,
        Self::KbnOnePassVectorized,
        Self::UncompensatedVectorized,
        Self::TwoPass,
        Self::Welford,
    ];

    /// Compute the population variance of `samples` with this
    /// implementation.
    ///
    /// # Panics
    ///
    /// Panics if `samples` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use variance_lab::{AlignedSamples, VarianceAlgorithm};
    ///
    /// let samples = AlignedSamples::from_slice(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    /// assert_eq!(VarianceAlgorithm::Welford.compute(&samples), 4.0);
    /// ```
    pub fn compute(self, samples: &AlignedSamples) -> f64 {
        assert!(
            !samples.is_empty(),
            "Cannot compute variance of empty buffer"
        );
        match self {
            Self::Naive => onepass::naive(samples.as_slice()),
            Self::KahanOnePass => onepass::kahan(samples.as_slice()),
            Self::KbnOnePass => onepass::kbn(samples.as_slice()),
            Self::KbnOnePassVectorized => vectorized::kbn(samples),
            Self::UncompensatedVectorized => vectorized::uncompensated(samples),
            Self::TwoPass => twopass::variance(samples.as_slice()),
            Self::Welford => welford::variance(samples.as_slice()),
        }
    }

    /// Short identifier used in reports and benchmark labels.
    pub fn name(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::KahanOnePass => "kahan_onepass",
            Self::KbnOnePass => "kbn_onepass",
            Self::KbnOnePassVectorized => "kbn_onepass_simd",
            Self::UncompensatedVectorized => "simd_uncompensated",
            Self::TwoPass => "twopass",
            Self::Welford => "welford",
        }
    }

    /// Whether the implementation walks the buffer two lanes at a time.
    pub fn is_vectorized(self) -> bool {
        matches!(self, Self::KbnOnePassVectorized | Self::UncompensatedVectorized)
    }

    /// Whether the implementation bounds accumulation error, either by
    /// compensated summation or by avoiding the `sum_sq` formula.
    pub fn is_compensated(self) -> bool {
        !matches!(self, Self::Naive | Self::UncompensatedVectorized)
    }
}

impl std::fmt::Display for VarianceAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Kahan-compensated arithmetic mean.
///
/// # Panics
///
/// Panics if `values` is empty.
///
/// # Examples
///
/// ```
/// assert_eq!(variance_lab::mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
/// ```
pub fn mean(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "Cannot compute mean of empty buffer");
    let mut sum = KahanSum::new();
    for &x in values {
        sum.add(x);
    }
    sum.value() / values.len() as f64
}

/// Final step shared by every one-pass implementation.
pub(crate) fn finish(sum: f64, sum_sq: f64, n: usize) -> f64 {
    let n = n as f64;
    (sum_sq - (sum * sum) / n) / n
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook() -> AlignedSamples {
        AlignedSamples::from_slice(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0])
    }

    #[test]
    fn test_every_algorithm_agrees_on_small_integers() {
        let samples = textbook();
        for algorithm in VarianceAlgorithm::ALL {
            assert_eq!(algorithm.compute(&samples), 4.0, "{algorithm}");
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: std::collections::HashSet<_> =
            VarianceAlgorithm::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names.len(), VarianceAlgorithm::ALL.len());
    }

    #[test]
    fn test_classification_flags() {
        use VarianceAlgorithm::*;
        assert!(KbnOnePassVectorized.is_vectorized());
        assert!(UncompensatedVectorized.is_vectorized());
        assert!(!Welford.is_vectorized());
        assert!(!Naive.is_compensated());
        assert!(!UncompensatedVectorized.is_compensated());
        assert!(TwoPass.is_compensated());
        assert!(KbnOnePassVectorized.is_compensated());
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(VarianceAlgorithm::KbnOnePass.to_string(), "kbn_onepass");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&VarianceAlgorithm::TwoPass).unwrap();
        let back: VarianceAlgorithm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, VarianceAlgorithm::TwoPass);
    }

    #[test]
    #[should_panic(expected = "empty")]
    fn test_empty_buffer_panics() {
        let samples = AlignedSamples::from_slice(&[]);
        VarianceAlgorithm::Naive.compute(&samples);
    }

    #[test]
    fn test_mean_is_exact_on_integers() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
    }

    #[test]
    #[should_panic(expected = "empty")]
    fn test_mean_of_empty_slice_panics() {
        mean(&[]);
    }
}
