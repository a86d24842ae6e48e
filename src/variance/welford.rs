//! Welford's single-pass incremental update.
//!
//! Maintains the running mean and the running sum of squared deviations
//! directly, so nothing like `sum_sq` is ever formed and the final
//! subtraction of the one-pass formula never happens. One pass, no
//! large intermediates, at the cost of a division per element.

pub(crate) fn variance(values: &[f64]) -> f64 {
    let mut mean = 0.0;
    let mut sum = 0.0;
    for (i, &x) in values.iter().enumerate() {
        let delta = x - mean;
        mean += delta / (i + 1) as f64;
        sum += delta * (x - mean);
    }
    sum / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_hand_computed_variance() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(variance(&values), 4.0);
    }

    #[test]
    fn test_constant_input_is_exactly_zero() {
        // delta is identically zero after the first element, so the
        // deviation sum never moves off zero.
        assert_eq!(variance(&[0.1; 1000]), 0.0);
        assert_eq!(variance(&[12345.678; 4097]), 0.0);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(variance(&[-7.5]), 0.0);
    }
}
