//! What catastrophic cancellation does to the one-pass formula.
//!
//! Builds a buffer of values near 1e7 whose true population variance is
//! exactly 2500, then prints every algorithm's result next to the exact
//! rational one. The naive sum of squares accumulates against a ~1e19
//! total and the lost low-order bits show up directly in the variance.

use variance_lab::reference::variance_exact;
use variance_lab::{AlignedSamples, VarianceAlgorithm};

fn main() {
    // Alternating 1e7 + 50 / 1e7 - 50: mean 1e7, variance exactly 50^2.
    let samples = AlignedSamples::from_fn(1 << 17, |i| {
        if i % 2 == 0 {
            1.0e7 + 50.0
        } else {
            1.0e7 - 50.0
        }
    });
    let exact = variance_exact(samples.as_slice());
    println!("exact variance: {exact}\n");

    for algorithm in VarianceAlgorithm::ALL {
        let value = algorithm.compute(&samples);
        println!(
            "{:<20} {:>24.16e}  error {:>10.3e}",
            algorithm.name(),
            value,
            (value - exact).abs()
        );
    }
}
