//! Method-of-moments Beta estimate, used as the optimizer's starting point.

use credible_core::errors::FitError;

/// Match the sample mean and variance of `ratios` to a Beta distribution.
///
/// Returns `(shape1, shape2)`. Fails with `Degenerate` when all ratios are
/// equal, or when the sample is more dispersed than any Beta can be
/// (variance ≥ mean·(1 − mean)).
pub fn method_of_moments(ratios: &[f64]) -> Result<(f64, f64), FitError> {
    if ratios.len() < 2 {
        return Err(FitError::InsufficientData {
            count: ratios.len(),
        });
    }

    let n = ratios.len() as f64;
    let mean = ratios.iter().sum::<f64>() / n;
    let variance = ratios.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);

    if !mean.is_finite() || !variance.is_finite() {
        return Err(FitError::NonFinite {
            stage: "method of moments",
        });
    }
    if variance <= 0.0 {
        return Err(FitError::Degenerate {
            reason: format!("all {} ratios are identical ({mean})", ratios.len()),
        });
    }

    let common = mean * (1.0 - mean) / variance - 1.0;
    if common <= 0.0 {
        return Err(FitError::Degenerate {
            reason: format!(
                "sample variance {variance} exceeds the Beta maximum {} for mean {mean}",
                mean * (1.0 - mean)
            ),
        });
    }

    Ok((mean * common, (1.0 - mean) * common))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recovers_mean() {
        let ratios = [0.2, 0.25, 0.3, 0.35, 0.4];
        let (a, b) = method_of_moments(&ratios).unwrap();
        assert!((a / (a + b) - 0.3).abs() < 1e-12);
        // var = 0.00625 → common = 0.21 / 0.00625 - 1 = 32.6
        assert!((a + b - 32.6).abs() < 1e-9);
    }

    #[test]
    fn test_identical_ratios_are_degenerate() {
        let err = method_of_moments(&[0.3, 0.3, 0.3]).unwrap_err();
        assert!(matches!(err, FitError::Degenerate { .. }));
    }

    #[test]
    fn test_overdispersed_sample_is_degenerate() {
        let err = method_of_moments(&[0.01, 0.99, 0.01, 0.99]).unwrap_err();
        assert!(matches!(err, FitError::Degenerate { .. }));
    }

    #[test]
    fn test_needs_two_points() {
        assert_eq!(
            method_of_moments(&[0.5]),
            Err(FitError::InsufficientData { count: 1 })
        );
    }
}
