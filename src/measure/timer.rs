//! Monotonic nanosecond stopwatch over `std::time::Instant`.

use std::time::Instant;

/// A started monotonic clock.
///
/// # Examples
///
/// ```
/// use variance_lab::measure::Stopwatch;
///
/// let watch = Stopwatch::start();
/// let first = watch.elapsed_ns();
/// let second = watch.elapsed_ns();
/// assert!(second >= first);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    /// Start the clock.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Nanoseconds since [`start`](Self::start), saturating at
    /// `u64::MAX` (an interval of roughly 584 years).
    pub fn elapsed_ns(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}
