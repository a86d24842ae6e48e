//! Builder-style comparison runner.
//!
//! [`VarianceBench`] owns the whole comparison workflow: generate one
//! deterministic buffer, drive every selected algorithm over it with a
//! warmup pass and `runs` timed repetitions, and collect the outcomes
//! into a report. The same builder produces timing reports and, with
//! the `oracle` feature, accuracy reports against the exact rational
//! reference.

use crate::config::BenchConfig;
use crate::dataset::Dataset;
use crate::measure::timed_run;
use crate::result::{AlgorithmTiming, TimingReport};
#[cfg(feature = "oracle")]
use crate::result::{AccuracyReport, AccuracyRow};
use crate::variance::VarianceAlgorithm;

/// Entry point for comparing variance algorithms.
///
/// Use the builder pattern to configure and run comparisons.
///
/// # Example
///
/// ```
/// use variance_lab::{Dataset, VarianceAlgorithm, VarianceBench};
///
/// let report = VarianceBench::quick()
///     .algorithms(&[VarianceAlgorithm::Naive, VarianceAlgorithm::Welford])
///     .run(Dataset::LargeOffset);
///
/// assert_eq!(report.entries.len(), 2);
/// ```
pub struct VarianceBench {
    config: BenchConfig,
    algorithms: Vec<VarianceAlgorithm>,
}

impl Default for VarianceBench {
    fn default() -> Self {
        Self::new()
    }
}

impl VarianceBench {
    /// Create with default configuration.
    ///
    /// One mebisample per buffer and ten timed runs per algorithm, the
    /// regime where per-run noise is well under the differences between
    /// algorithms. All seven algorithms are selected.
    pub fn new() -> Self {
        Self {
            config: BenchConfig::default(),
            algorithms: VarianceAlgorithm::ALL.to_vec(),
        }
    }

    /// Create with reduced configuration for tests and doc examples.
    ///
    /// Settings:
    /// - 65,536 samples (vs 1,048,576 default)
    /// - 3 timed runs (vs 10 default)
    ///
    /// Timing numbers from this preset are noisy; use it where runtime
    /// matters more than measurement quality.
    pub fn quick() -> Self {
        Self {
            config: BenchConfig {
                samples: 1 << 16,
                runs: 3,
                ..BenchConfig::default()
            },
            algorithms: VarianceAlgorithm::ALL.to_vec(),
        }
    }

    /// Set elements per generated buffer.
    pub fn samples(mut self, n: usize) -> Self {
        self.config.samples = n;
        self
    }

    /// Set timed repetitions per algorithm.
    pub fn runs(mut self, n: usize) -> Self {
        self.config.runs = n;
        self
    }

    /// Set untimed repetitions before the timed runs.
    pub fn warmup(mut self, n: usize) -> Self {
        self.config.warmup = n;
        self
    }

    /// Set the data generation seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Restrict the comparison to `algorithms`, in the given order.
    pub fn algorithms(mut self, algorithms: &[VarianceAlgorithm]) -> Self {
        self.algorithms = algorithms.to_vec();
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Time every selected algorithm over one buffer from `dataset`.
    ///
    /// The buffer is generated once and shared; each algorithm gets
    /// `warmup` untimed passes, then `runs` timed passes. Entries keep
    /// the selection order.
    ///
    /// # Panics
    ///
    /// Panics if the configured sample count or run count is zero, or
    /// if no algorithms are selected.
    pub fn run(&self, dataset: Dataset) -> TimingReport {
        assert!(
            !self.algorithms.is_empty(),
            "At least one algorithm must be selected"
        );
        let samples = dataset.generate(self.config.samples, self.config.seed);

        let entries = self
            .algorithms
            .iter()
            .map(|&algorithm| {
                let (value, timing) =
                    timed_run(self.config.warmup, self.config.runs, || {
                        algorithm.compute(&samples)
                    });
                AlgorithmTiming {
                    algorithm,
                    value,
                    timing,
                }
            })
            .collect();

        TimingReport {
            dataset,
            samples: self.config.samples,
            runs: self.config.runs,
            entries,
        }
    }

    /// Measure every selected algorithm's deviation from the exact
    /// rational variance of one buffer from `dataset`.
    ///
    /// Nothing is timed here; the exact reference costs orders of
    /// magnitude more than any measured algorithm and runs once, outside
    /// all of them.
    ///
    /// # Panics
    ///
    /// Panics if the configured sample count is zero or no algorithms
    /// are selected.
    #[cfg(feature = "oracle")]
    pub fn accuracy(&self, dataset: Dataset) -> AccuracyReport {
        assert!(
            !self.algorithms.is_empty(),
            "At least one algorithm must be selected"
        );
        let samples = dataset.generate(self.config.samples, self.config.seed);
        let reference = crate::reference::variance_exact(samples.as_slice());

        let rows = self
            .algorithms
            .iter()
            .map(|&algorithm| {
                let value = algorithm.compute(&samples);
                let abs_error = (value - reference).abs();
                let rel_error = if reference == 0.0 {
                    abs_error
                } else {
                    abs_error / reference.abs()
                };
                AccuracyRow {
                    algorithm,
                    value,
                    abs_error,
                    rel_error,
                }
            })
            .collect();

        AccuracyReport {
            dataset,
            samples: self.config.samples,
            reference,
            rows,
        }
    }
}
