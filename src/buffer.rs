//! Caller-owned sample buffers with SIMD-friendly alignment.
//!
//! Every algorithm in this crate borrows its input from an
//! [`AlignedSamples`] buffer. The backing storage is a vector of 128-bit
//! lanes, so the base address is always 16-byte aligned and the
//! vectorized algorithms consume whole lanes directly; scalar algorithms
//! read the same memory through [`AlignedSamples::as_slice`].

use wide::f64x2;

use crate::summation::LANES;

/// An immutable, contiguous, 16-byte-aligned buffer of `f64` samples.
///
/// Allocated by callers (the benchmark harness or a test driver) and
/// borrowed read-only by the algorithms, which never allocate, mutate,
/// or retain it beyond the duration of a call. When the length is odd
/// the trailing lane is zero-padded; the pad is invisible through every
/// accessor.
///
/// # Examples
///
/// ```
/// use variance_lab::AlignedSamples;
///
/// let samples = AlignedSamples::from_slice(&[1.0, 2.0, 3.0]);
/// assert_eq!(samples.len(), 3);
/// assert_eq!(samples.as_slice(), &[1.0, 2.0, 3.0]);
/// assert_eq!(samples.pairs().len(), 1);
/// assert_eq!(samples.remainder(), Some(3.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedSamples {
    lanes: Vec<f64x2>,
    len: usize,
}

impl AlignedSamples {
    /// Copy `values` into a new aligned buffer.
    pub fn from_slice(values: &[f64]) -> Self {
        Self::from_fn(values.len(), |i| values[i])
    }

    /// Build a buffer of length `len` by evaluating `fill` at each index,
    /// in order.
    pub fn from_fn(len: usize, mut fill: impl FnMut(usize) -> f64) -> Self {
        let mut lanes = Vec::with_capacity(len.div_ceil(LANES));
        let mut i = 0;
        while i + LANES <= len {
            lanes.push(f64x2::from([fill(i), fill(i + 1)]));
            i += LANES;
        }
        if i < len {
            lanes.push(f64x2::from([fill(i), 0.0]));
        }
        Self { lanes, len }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` when the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Scalar view of the samples.
    pub fn as_slice(&self) -> &[f64] {
        &bytemuck::cast_slice(&self.lanes)[..self.len]
    }

    /// All complete two-sample lanes, excluding any zero-padded tail.
    pub fn pairs(&self) -> &[f64x2] {
        &self.lanes[..self.len / LANES]
    }

    /// The final unpaired sample when the length is odd.
    pub fn remainder(&self) -> Option<f64> {
        if self.len % LANES == 1 {
            Some(self.as_slice()[self.len - 1])
        } else {
            None
        }
    }
}
