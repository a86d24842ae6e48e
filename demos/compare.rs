//! Compensated vs uncompensated summation, benign vs adversarial data.
//!
//! On well-conditioned input every algorithm agrees to machine
//! precision and the accuracy report is a wall of green. On the
//! large-offset distribution the uncompensated one-pass variants lose
//! most of their digits while the compensated ones hold. Running both
//! reports back to back makes the difference visible.

use variance_lab::output::terminal;
use variance_lab::{Dataset, VarianceBench};

fn main() {
    let bench = VarianceBench::quick().samples(100_000);

    println!("{}", terminal::format_timing(&bench.run(Dataset::Gaussian)));
    println!("{}", terminal::format_timing(&bench.run(Dataset::LargeOffset)));

    #[cfg(feature = "oracle")]
    {
        println!("{}", terminal::format_accuracy(&bench.accuracy(Dataset::Gaussian)));
        println!("{}", terminal::format_accuracy(&bench.accuracy(Dataset::LargeOffset)));
    }
}
