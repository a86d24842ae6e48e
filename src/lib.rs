//! # variance-lab
//!
//! Seven population-variance algorithms with different numerical
//! contracts, one shared interface, and a harness for comparing their
//! accuracy and throughput against each other.
//!
//! Computing variance looks trivial and is not. The one-pass textbook
//! formula `(sum_sq - sum*sum/n) / n` subtracts two nearly equal totals,
//! and for large-magnitude data with small true variance that subtraction
//! cancels away most of the significant digits; plain accumulation loses
//! additional low-order bits on every addition. Each algorithm here
//! attacks the problem differently:
//!
//! - [`VarianceAlgorithm::Naive`]: plain one-pass accumulation, fastest.
//! - [`VarianceAlgorithm::KahanOnePass`]: Kahan-compensated totals.
//! - [`VarianceAlgorithm::KbnOnePass`]: Kahan-Babuška-Neumaier totals,
//!   seeded from the first sample.
//! - [`VarianceAlgorithm::KbnOnePassVectorized`]: KBN over two 128-bit
//!   SIMD lanes with a compensated horizontal reduction.
//! - [`VarianceAlgorithm::UncompensatedVectorized`]: plain SIMD lanes.
//! - [`VarianceAlgorithm::TwoPass`]: compensated mean first, then a
//!   second pass over squared deviations; avoids the cancellation.
//! - [`VarianceAlgorithm::Welford`]: incremental mean and deviation
//!   update, two-pass accuracy in a single pass.
//!
//! ## Quick start
//!
//! ```
//! use variance_lab::{AlignedSamples, VarianceAlgorithm};
//!
//! let samples = AlignedSamples::from_slice(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
//!
//! // Welford's update is the production default.
//! assert_eq!(variance_lab::variance(&samples), 4.0);
//!
//! // All seven algorithms satisfy the same contract.
//! for algorithm in VarianceAlgorithm::ALL {
//!     assert_eq!(algorithm.compute(&samples), 4.0);
//! }
//! ```
//!
//! ## Comparing algorithms
//!
//! ```
//! use variance_lab::{Dataset, VarianceBench};
//!
//! let report = VarianceBench::quick().run(Dataset::LargeOffset);
//! println!("{}", variance_lab::output::terminal::format_timing(&report));
//! ```
//!
//! ## Cargo features
//!
//! - `oracle` (default): arbitrary-precision rational reference
//!   statistics (the [`reference`] module), backing the accuracy reports
//!   and the test suite. Never used by the measured algorithms.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bench;
pub mod buffer;
pub mod config;
pub mod dataset;
pub mod measure;
pub mod output;
#[cfg(feature = "oracle")]
pub mod reference;
pub mod result;
pub mod summation;
pub mod variance;

pub use bench::VarianceBench;
pub use buffer::AlignedSamples;
pub use config::BenchConfig;
pub use dataset::Dataset;
pub use result::{AccuracyReport, AccuracyRow, AlgorithmTiming, Timing, TimingReport};
pub use variance::{mean, VarianceAlgorithm};

/// Population variance of `samples` using Welford's algorithm.
///
/// This is the accuracy/throughput default: single pass, no second
/// traversal, error comparable to the two-pass algorithm. Use
/// [`VarianceAlgorithm::compute`] to pick a specific algorithm instead.
///
/// # Panics
///
/// Panics if `samples` is empty.
///
/// # Examples
///
/// ```
/// use variance_lab::AlignedSamples;
///
/// let samples = AlignedSamples::from_slice(&[1.0, 3.0]);
/// assert_eq!(variance_lab::variance(&samples), 1.0);
/// ```
pub fn variance(samples: &AlignedSamples) -> f64 {
    VarianceAlgorithm::Welford.compute(samples)
}
