//! Seeded input generators with known numerical hazards.
//!
//! Each dataset targets a specific failure mode of the one-pass
//! formula. [`LargeOffset`](Dataset::LargeOffset) is the canonical
//! cancellation trigger: a large shared mean with a tiny spread makes
//! `sum_sq` and `sum^2 / n` agree in most of their leading digits.
//! [`Ascending`](Dataset::Ascending) and
//! [`Descending`](Dataset::Descending) probe order sensitivity of the
//! accumulators, [`Alternating`](Dataset::Alternating) forces the
//! magnitude comparison inside KBN to flip on every step, and
//! [`Constant`](Dataset::Constant) has an exactly-zero true variance
//! that any accumulation noise shows up against.
//!
//! Generation is deterministic: the same variant, length, and seed
//! always produce a bit-identical buffer.

use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

use crate::buffer::AlignedSamples;

/// Shared mean of the large-offset datasets.
const LARGE_VALUE: f64 = 1.0e7;

/// Width of the jitter subtracted from the offset.
const SPREAD: u64 = 100;

/// The value [`Dataset::Constant`] repeats.
const CONSTANT_VALUE: f64 = 1234.5678;

/// Selects one of the input generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dataset {
    /// Uniform random integers in `[0, 2^31)`, stored as `f64`.
    UniformRandom,
    /// `1e7` minus a jitter below 100. Large mean, tiny spread: the
    /// worst case for the one-pass formula.
    LargeOffset,
    /// The ramp `0, 1, 2, ...`. Monotonically growing running sums.
    Ascending,
    /// The same ramp reversed, so accumulation starts from the largest
    /// values.
    Descending,
    /// Jittered values alternating between `1e7` and `100`, flipping
    /// which operand dominates on every KBN step.
    Alternating,
    /// Standard normal draws. A benign, well-conditioned baseline.
    Gaussian,
    /// One repeated value. True variance exactly zero.
    Constant,
}

impl Dataset {
    /// Every generator, in the order reports list them.
    pub const ALL: [Self; 7] = [
        Self::UniformRandom,
        Self::LargeOffset,
        Self::Ascending,
        Self::Descending,
        Self::Alternating,
        Self::Gaussian,
        Self::Constant,
    ];

    /// Short identifier used in reports and benchmark labels.
    pub fn name(self) -> &'static str {
        match self {
            Self::UniformRandom => "uniform_random",
            Self::LargeOffset => "large_offset",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::Alternating => "alternating",
            Self::Gaussian => "gaussian",
            Self::Constant => "constant",
        }
    }

    /// Generate `len` elements from `seed`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use variance_lab::Dataset;
    ///
    /// let samples = Dataset::Ascending.generate(4, 0);
    /// assert_eq!(samples.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
    /// ```
    pub fn generate(self, len: usize, seed: u64) -> AlignedSamples {
        assert!(len > 0, "Dataset length must be positive");
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        match self {
            Self::UniformRandom => {
                AlignedSamples::from_fn(len, |_| rng.random_range(0..(1u64 << 31)) as f64)
            }
            Self::LargeOffset => AlignedSamples::from_fn(len, |_| {
                LARGE_VALUE - rng.random_range(0..SPREAD) as f64
            }),
            Self::Ascending => AlignedSamples::from_fn(len, |i| i as f64),
            Self::Descending => AlignedSamples::from_fn(len, |i| (len - 1 - i) as f64),
            Self::Alternating => AlignedSamples::from_fn(len, |i| {
                let jitter = rng.random_range(0..SPREAD) as f64;
                if i % 2 == 0 {
                    LARGE_VALUE - jitter
                } else {
                    100.0 - jitter
                }
            }),
            Self::Gaussian => AlignedSamples::from_fn(len, |_| StandardNormal.sample(&mut rng)),
            Self::Constant => AlignedSamples::from_fn(len, |_| CONSTANT_VALUE),
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
