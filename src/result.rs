//! Report types produced by benchmark and accuracy runs.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::variance::VarianceAlgorithm;

/// Wall-clock statistics over the timed runs of one operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Timing {
    /// Number of timed runs the statistics cover.
    pub runs: usize,

    /// Mean duration per run in nanoseconds.
    pub mean_ns: f64,

    /// Fastest run in nanoseconds.
    pub min_ns: u64,

    /// Slowest run in nanoseconds.
    pub max_ns: u64,
}

impl Timing {
    /// Mean duration per run in milliseconds.
    pub fn mean_ms(&self) -> f64 {
        self.mean_ns / 1.0e6
    }
}

/// One algorithm's timing and computed value within a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmTiming {
    /// Which implementation ran.
    pub algorithm: VarianceAlgorithm,

    /// The variance it produced.
    pub value: f64,

    /// Wall-clock statistics for its runs.
    pub timing: Timing,
}

/// Timing comparison of the selected algorithms on one dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingReport {
    /// Dataset the buffer was generated from.
    pub dataset: Dataset,

    /// Elements in the generated buffer.
    pub samples: usize,

    /// Timed repetitions per algorithm.
    pub runs: usize,

    /// Per-algorithm results, in selection order.
    pub entries: Vec<AlgorithmTiming>,
}

impl TimingReport {
    /// The entry with the lowest mean run time, if any.
    pub fn fastest(&self) -> Option<&AlgorithmTiming> {
        self.entries
            .iter()
            .min_by(|a, b| a.timing.mean_ns.total_cmp(&b.timing.mean_ns))
    }
}

/// One algorithm's deviation from the exact rational result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccuracyRow {
    /// Which implementation ran.
    pub algorithm: VarianceAlgorithm,

    /// The variance it produced.
    pub value: f64,

    /// `|value - reference|`.
    pub abs_error: f64,

    /// `abs_error / |reference|`, or `abs_error` itself when the
    /// reference is zero.
    pub rel_error: f64,
}

/// Accuracy comparison of the selected algorithms on one dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccuracyReport {
    /// Dataset the buffer was generated from.
    pub dataset: Dataset,

    /// Elements in the generated buffer.
    pub samples: usize,

    /// Exact population variance, correctly rounded to `f64`.
    pub reference: f64,

    /// Per-algorithm deviations, in selection order.
    pub rows: Vec<AccuracyRow>,
}

impl AccuracyReport {
    /// The row with the largest absolute error, if any.
    pub fn worst(&self) -> Option<&AccuracyRow> {
        self.rows
            .iter()
            .max_by(|a, b| a.abs_error.total_cmp(&b.abs_error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(algorithm: VarianceAlgorithm, mean_ns: f64) -> AlgorithmTiming {
        AlgorithmTiming {
            algorithm,
            value: 1.0,
            timing: Timing {
                runs: 3,
                mean_ns,
                min_ns: mean_ns as u64,
                max_ns: mean_ns as u64 + 10,
            },
        }
    }

    #[test]
    fn test_fastest_picks_lowest_mean() {
        let report = TimingReport {
            dataset: Dataset::Ascending,
            samples: 100,
            runs: 3,
            entries: vec![
                entry(VarianceAlgorithm::Naive, 900.0),
                entry(VarianceAlgorithm::Welford, 250.0),
                entry(VarianceAlgorithm::TwoPass, 400.0),
            ],
        };
        let fastest = report.fastest().unwrap();
        assert_eq!(fastest.algorithm, VarianceAlgorithm::Welford);
    }

    #[test]
    fn test_worst_picks_largest_absolute_error() {
        let row = |algorithm, abs_error| AccuracyRow {
            algorithm,
            value: 0.0,
            abs_error,
            rel_error: abs_error,
        };
        let report = AccuracyReport {
            dataset: Dataset::LargeOffset,
            samples: 100,
            reference: 830.0,
            rows: vec![
                row(VarianceAlgorithm::TwoPass, 1.0e-13),
                row(VarianceAlgorithm::Naive, 0.5),
            ],
        };
        assert_eq!(
            report.worst().unwrap().algorithm,
            VarianceAlgorithm::Naive
        );
    }

    #[test]
    fn test_mean_ms_conversion() {
        let timing = Timing {
            runs: 1,
            mean_ns: 2_500_000.0,
            min_ns: 0,
            max_ns: 0,
        };
        assert_eq!(timing.mean_ms(), 2.5);
    }
}
