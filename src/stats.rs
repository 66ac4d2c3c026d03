//! Small statistical helpers shared by the models
//!
//! All helpers use naive double-precision arithmetic. Degenerate inputs
//! (empty or single-element slices) propagate NaN/inf rather than erroring;
//! callers that need stricter behavior validate before calling.

/// Arithmetic mean. An empty slice yields NaN.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance (denominator n - 1).
pub fn sample_variance(values: &[f64]) -> f64 {
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() as f64 - 1.0)
}

/// Sample covariance of paired values (denominator n - 1).
///
/// Callers are responsible for passing slices of equal length.
pub fn sample_covariance(x: &[f64], y: &[f64]) -> f64 {
    let mx = mean(x);
    let my = mean(y);
    let cross: f64 = x.iter().zip(y).map(|(xi, yi)| (xi - mx) * (yi - my)).sum();
    cross / (x.len() as f64 - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert!((mean(&[2.0, 4.0, 6.0]) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_mean_empty_is_nan() {
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_sample_variance() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((sample_variance(&x) - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_sample_covariance() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 6.0, 8.0, 10.0];
        // y = 2x, so cov(x, y) = 2 * var(x) = 5
        assert!((sample_covariance(&x, &y) - 5.0).abs() < 1e-10);
    }
}
