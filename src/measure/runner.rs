//! Warmup-then-measure loop shared by all benchmark entry points.

use std::hint::black_box;

use super::timer::Stopwatch;
use crate::result::Timing;

/// Run `op` untimed `warmup` times, then timed `runs` times.
///
/// Returns the value from the first timed run together with the timing
/// statistics. Both the operation and its result pass through
/// [`black_box`] so the optimizer cannot hoist or discard the work.
///
/// # Panics
///
/// Panics if `runs` is zero.
///
/// # Examples
///
/// ```
/// use variance_lab::measure::timed_run;
///
/// let (value, timing) = timed_run(1, 3, || (0..100).map(f64::from).sum::<f64>());
/// assert_eq!(value, 4950.0);
/// assert_eq!(timing.runs, 3);
/// assert!(timing.min_ns <= timing.max_ns);
/// ```
pub fn timed_run<T>(warmup: usize, runs: usize, mut op: impl FnMut() -> T) -> (T, Timing) {
    assert!(runs > 0, "At least one timed run is required");

    for _ in 0..warmup {
        black_box(op());
    }

    let mut durations = Vec::with_capacity(runs);
    let watch = Stopwatch::start();
    let value = black_box(op());
    durations.push(watch.elapsed_ns());
    for _ in 1..runs {
        let watch = Stopwatch::start();
        black_box(op());
        durations.push(watch.elapsed_ns());
    }

    let total: u64 = durations.iter().sum();
    let timing = Timing {
        runs,
        mean_ns: total as f64 / runs as f64,
        min_ns: durations.iter().copied().min().unwrap_or(0),
        max_ns: durations.iter().copied().max().unwrap_or(0),
    };
    (value, timing)
}
