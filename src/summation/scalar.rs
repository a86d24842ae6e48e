//! Scalar compensated accumulators.

/// Kahan-compensated running sum.
///
/// The classic branch-free formulation: the correction is subtracted
/// from the next incoming term, so the running `sum` already carries
/// every recovered bit and [`value`](Self::value) is the `sum` field
/// alone. Fast, but the correction can be truncated when term
/// magnitudes swing wildly; [`KbnSum`] is the branched variant without
/// that weakness.
///
/// # Examples
///
/// ```
/// use variance_lab::summation::KahanSum;
///
/// let mut acc = KahanSum::new();
/// for term in [1.0e16, 1.0, 1.0] {
///     acc.add(term);
/// }
/// // Plain addition would return 1.0e16; both units survive here.
/// assert_eq!(acc.value(), 1.0e16 + 2.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KahanSum {
    sum: f64,
    compensation: f64,
}

impl KahanSum {
    /// Create an empty accumulator.
    pub const fn new() -> Self {
        Self {
            sum: 0.0,
            compensation: 0.0,
        }
    }

    /// Fold one term into the running sum.
    #[inline]
    pub fn add(&mut self, term: f64) {
        let y = term - self.compensation;
        let t = self.sum + y;
        self.compensation = (t - self.sum) - y;
        self.sum = t;
    }

    /// Current compensated total.
    #[inline]
    pub fn value(&self) -> f64 {
        self.sum
    }
}

/// Kahan-Babuška-Neumaier running sum.
///
/// Branches on `|sum| >= |term|` so the subtraction that recovers the
/// rounding error is exact regardless of which operand dominates. The
/// recovered bits accumulate separately and are recombined once in
/// [`value`](Self::value). Strictly more accurate than [`KahanSum`] at
/// the cost of one branch per term.
#[derive(Debug, Clone, Copy, Default)]
pub struct KbnSum {
    sum: f64,
    compensation: f64,
}

impl KbnSum {
    /// Create an empty accumulator.
    pub const fn new() -> Self {
        Self {
            sum: 0.0,
            compensation: 0.0,
        }
    }

    /// Create an accumulator holding `first` with no accumulated error.
    ///
    /// The one-pass KBN variance loop seeds its accumulators with the
    /// first sample and iterates from the second.
    pub const fn seeded(first: f64) -> Self {
        Self {
            sum: first,
            compensation: 0.0,
        }
    }

    /// Fold one term into the running sum.
    #[inline]
    pub fn add(&mut self, term: f64) {
        let t = self.sum + term;
        if self.sum.abs() >= term.abs() {
            self.compensation += (self.sum - t) + term;
        } else {
            self.compensation += (term - t) + self.sum;
        }
        self.sum = t;
    }

    /// Current compensated total, `sum + compensation`.
    #[inline]
    pub fn value(&self) -> f64 {
        self.sum + self.compensation
    }

    /// The correction term accumulated so far.
    pub fn compensation(&self) -> f64 {
        self.compensation
    }
}
