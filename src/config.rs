//! Configuration for benchmark runs.

/// Configuration options for [`VarianceBench`](crate::VarianceBench).
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Elements per generated buffer (default: 1,048,576).
    pub samples: usize,

    /// Timed repetitions per algorithm (default: 10).
    pub runs: usize,

    /// Untimed repetitions before the timed runs (default: 1).
    ///
    /// One pass is enough to fault the buffer in and warm the cache;
    /// raise it when measuring very small buffers.
    pub warmup: usize,

    /// Seed for deterministic data generation (default: 42).
    ///
    /// The same seed and dataset always produce bit-identical buffers,
    /// so accuracy numbers are reproducible across runs and machines.
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            samples: 1 << 20,
            runs: 10,
            warmup: 1,
            seed: 42,
        }
    }
}
