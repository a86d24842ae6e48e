//! Wall-clock measurement utilities.
//!
//! Timing here is deliberately simple: one [`Stopwatch`] per run around
//! the whole computation. Per-element costs are in the nanosecond range
//! only in aggregate, so the buffers are sized large enough (millions of
//! elements) that `Instant` resolution is never the limiting factor.

mod runner;
mod timer;

pub use runner::timed_run;
pub use timer::Stopwatch;
