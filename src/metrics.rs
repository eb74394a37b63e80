//! Evaluation metrics.

/// Share of predictions matching the labels, as a percentage in `[0, 100]`.
///
/// `y` and `yhat` must have the same non-zero length.
pub fn accuracy(y: &[i64], yhat: &[i64]) -> f64 {
    let correct = y.iter().zip(yhat).filter(|(a, b)| a == b).count();
    100.0 * correct as f64 / y.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy() {
        assert_eq!(accuracy(&[0, 1, 1, 0], &[0, 1, 1, 0]), 100.0);
        assert_eq!(accuracy(&[0, 1, 1, 0], &[1, 0, 0, 1]), 0.0);
        assert_eq!(accuracy(&[0, 1, 1, 0], &[0, 1, 0, 1]), 50.0);
        assert_eq!(accuracy(&[0, 0, 1, 1], &[0, 0, 1, 0]), 75.0);
    }
}
