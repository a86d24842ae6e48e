//! Compensated summation accumulators, scalar and vectorized.
//!
//! Floating-point addition rounds away the low-order bits of whichever
//! operand is smaller; over a long accumulation the loss grows with the
//! sequence length. The accumulators here carry a second `compensation`
//! float that captures the rounding error of each step, keeping the
//! total error O(ε) instead of O(nε).

mod scalar;
mod vector;

pub use scalar::{KahanSum, KbnSum};
pub use vector::{VectorKbnSum, VectorSum};

/// Number of `f64` lanes processed per 128-bit vector step.
pub const LANES: usize = 2;
