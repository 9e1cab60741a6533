//! Maximum-likelihood Beta fit via Newton-Raphson.
//!
//! The Beta log-likelihood is concave in (shape1, shape2), so Newton steps
//! from the method-of-moments start converge quadratically. Each step is
//! halved until both shapes stay positive and the likelihood does not drop.

use credible_core::errors::{EstimateError, FitError};
use statrs::function::beta::ln_beta;
use statrs::function::gamma::digamma;

use super::moments::method_of_moments;
use super::special::trigamma;
use super::types::{BetaPrior, FitDiagnostics, FitOptions, FittedPrior};
use crate::records::EntityRecord;

/// Maximum number of step halvings per Newton iteration.
const MAX_HALVINGS: u32 = 60;

/// Fit the empirical-Bayes prior from entity records.
///
/// Every record is validated first. Only entities with at least
/// `min_trials` trials contribute their ratio to the fit.
pub fn fit_prior(
    records: &[EntityRecord],
    min_trials: u64,
    options: &FitOptions,
) -> Result<FittedPrior, EstimateError> {
    for record in records {
        record.validate()?;
    }

    let ratios: Vec<f64> = records
        .iter()
        .filter(|r| r.trials >= min_trials)
        .filter_map(EntityRecord::ratio)
        .collect();

    tracing::debug!(
        total = records.len(),
        kept = ratios.len(),
        min_trials,
        "filtered entities for prior fit"
    );

    if ratios.is_empty() {
        return Err(FitError::EmptyInput { min_trials }.into());
    }

    Ok(fit_beta(&ratios, options)?)
}

/// Fit Beta(shape1, shape2) to `ratios` by maximum likelihood.
///
/// Every ratio must lie strictly inside (0, 1).
pub fn fit_beta(ratios: &[f64], options: &FitOptions) -> Result<FittedPrior, FitError> {
    for (index, &value) in ratios.iter().enumerate() {
        if !(value > 0.0 && value < 1.0) {
            return Err(FitError::RatioOutOfRange { index, value });
        }
    }

    let start = method_of_moments(ratios)?;

    let n = ratios.len() as f64;
    let stats = SufficientStats {
        mean_ln: ratios.iter().map(|x| x.ln()).sum::<f64>() / n,
        mean_ln1m: ratios.iter().map(|x| (-x).ln_1p()).sum::<f64>() / n,
    };

    let (mut a, mut b) = start;
    let mut ll = stats.log_likelihood(a, b);
    if !ll.is_finite() {
        return Err(FitError::NonFinite {
            stage: "initial log-likelihood",
        });
    }

    let mut step = f64::INFINITY;
    for iteration in 1..=options.max_iterations {
        let (da, db) = stats.newton_direction(a, b)?;

        let mut scale = 1.0;
        let mut accepted = None;
        for _ in 0..MAX_HALVINGS {
            let (na, nb) = (a + scale * da, b + scale * db);
            if na > 0.0 && nb > 0.0 {
                let nll = stats.log_likelihood(na, nb);
                if nll.is_finite() && nll >= ll - 1e-12 * (1.0 + ll.abs()) {
                    accepted = Some((na, nb, nll));
                    break;
                }
            }
            scale *= 0.5;
        }

        let Some((na, nb, nll)) = accepted else {
            tracing::warn!(iteration, a, b, "line search failed to find an ascent step");
            return Err(FitError::NotConverged {
                iterations: iteration,
                step,
            });
        };

        step = ((na - a) / a).abs().max(((nb - b) / b).abs());
        a = na;
        b = nb;
        ll = nll;

        if step < options.tolerance {
            let prior = BetaPrior::new(a, b).map_err(|_| FitError::NonFinite {
                stage: "fitted shapes",
            })?;
            tracing::info!(
                shape1 = a,
                shape2 = b,
                iterations = iteration,
                sample_size = ratios.len(),
                "fitted beta prior"
            );
            return Ok(FittedPrior {
                prior,
                diagnostics: FitDiagnostics {
                    sample_size: ratios.len(),
                    iterations: iteration,
                    log_likelihood: ll * n,
                    start,
                },
            });
        }
    }

    tracing::warn!(
        max_iterations = options.max_iterations,
        step,
        "beta prior fit did not converge"
    );
    Err(FitError::NotConverged {
        iterations: options.max_iterations,
        step,
    })
}

/// Mean log-ratio and mean log-complement, all the likelihood depends on.
struct SufficientStats {
    mean_ln: f64,
    mean_ln1m: f64,
}

impl SufficientStats {
    /// Per-observation log-likelihood of Beta(a, b).
    fn log_likelihood(&self, a: f64, b: f64) -> f64 {
        -ln_beta(a, b) + (a - 1.0) * self.mean_ln + (b - 1.0) * self.mean_ln1m
    }

    /// Newton direction −H⁻¹g for the per-observation log-likelihood.
    fn newton_direction(&self, a: f64, b: f64) -> Result<(f64, f64), FitError> {
        let psi_ab = digamma(a + b);
        let ga = psi_ab - digamma(a) + self.mean_ln;
        let gb = psi_ab - digamma(b) + self.mean_ln1m;

        let t_ab = trigamma(a + b);
        let h11 = t_ab - trigamma(a);
        let h22 = t_ab - trigamma(b);
        let h12 = t_ab;

        let det = h11 * h22 - h12 * h12;
        if !det.is_finite() || det <= 0.0 {
            return Err(FitError::Degenerate {
                reason: format!("Hessian is not negative definite at ({a}, {b})"),
            });
        }

        let da = -(h22 * ga - h12 * gb) / det;
        let db = -(h11 * gb - h12 * ga) / det;
        if !da.is_finite() || !db.is_finite() {
            return Err(FitError::NonFinite {
                stage: "newton step",
            });
        }
        Ok((da, db))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statrs::distribution::{Beta, ContinuousCDF};

    /// Evenly spaced quantiles of Beta(a, b): a noise-free sample.
    fn quantile_sample(a: f64, b: f64, n: usize) -> Vec<f64> {
        let dist = Beta::new(a, b).unwrap();
        (0..n)
            .map(|i| dist.inverse_cdf((i as f64 + 0.5) / n as f64))
            .collect()
    }

    #[test]
    fn test_recovers_known_shapes() {
        let ratios = quantile_sample(78.66, 224.2, 2000);
        let fitted = fit_beta(&ratios, &FitOptions::default()).unwrap();
        let prior = fitted.prior;
        assert!((prior.shape1() - 78.66).abs() / 78.66 < 0.1, "shape1 = {}", prior.shape1());
        assert!((prior.shape2() - 224.2).abs() / 224.2 < 0.1, "shape2 = {}", prior.shape2());
        assert!((prior.mean() - 78.66 / 302.86).abs() < 1e-3);
        assert_eq!(fitted.diagnostics.sample_size, 2000);
        assert!(fitted.diagnostics.iterations >= 1);
    }

    #[test]
    fn test_recovers_u_shaped_prior() {
        let ratios = quantile_sample(0.7, 0.9, 1000);
        let prior = fit_beta(&ratios, &FitOptions::default()).unwrap().prior;
        assert!((prior.shape1() - 0.7).abs() < 0.15, "shape1 = {}", prior.shape1());
        assert!((prior.shape2() - 0.9).abs() < 0.15, "shape2 = {}", prior.shape2());
    }

    #[test]
    fn test_likelihood_improves_over_start() {
        let ratios = quantile_sample(5.0, 12.0, 500);
        let fitted = fit_beta(&ratios, &FitOptions::default()).unwrap();
        let n = ratios.len() as f64;
        let stats = SufficientStats {
            mean_ln: ratios.iter().map(|x| x.ln()).sum::<f64>() / n,
            mean_ln1m: ratios.iter().map(|x| (-x).ln_1p()).sum::<f64>() / n,
        };
        let (a0, b0) = fitted.diagnostics.start;
        assert!(fitted.diagnostics.log_likelihood >= stats.log_likelihood(a0, b0) * n);
    }

    #[test]
    fn test_boundary_ratios_are_rejected() {
        let err = fit_beta(&[0.2, 0.0, 0.4], &FitOptions::default()).unwrap_err();
        assert_eq!(err, FitError::RatioOutOfRange { index: 1, value: 0.0 });

        let err = fit_beta(&[0.2, 0.3, 1.0], &FitOptions::default()).unwrap_err();
        assert!(matches!(err, FitError::RatioOutOfRange { index: 2, .. }));

        let err = fit_beta(&[f64::NAN, 0.3], &FitOptions::default()).unwrap_err();
        assert!(matches!(err, FitError::RatioOutOfRange { index: 0, .. }));
    }

    #[test]
    fn test_identical_ratios_fail_explicitly() {
        let err = fit_beta(&[0.25; 40], &FitOptions::default()).unwrap_err();
        assert!(matches!(err, FitError::Degenerate { .. }));
    }

    #[test]
    fn test_empty_input_fails() {
        let err = fit_beta(&[], &FitOptions::default()).unwrap_err();
        assert_eq!(err, FitError::InsufficientData { count: 0 });
    }

    #[test]
    fn test_iteration_cap_is_reported() {
        let ratios = quantile_sample(3.0, 9.0, 300);
        let options = FitOptions {
            max_iterations: 1,
            tolerance: 1e-15,
        };
        let err = fit_beta(&ratios, &options).unwrap_err();
        assert!(matches!(err, FitError::NotConverged { iterations: 1, .. }));
    }

    #[test]
    fn test_fit_prior_filters_by_trials() {
        let mut records: Vec<EntityRecord> = quantile_sample(20.0, 60.0, 200)
            .into_iter()
            .enumerate()
            .map(|(i, r)| EntityRecord::new(format!("p{i}"), (r * 1000.0).round() as u64, 1000))
            .collect();
        // Small-sample extremes that would wreck the fit if not filtered.
        records.push(EntityRecord::new("lucky", 3, 3));
        records.push(EntityRecord::new("unlucky", 0, 2));

        let fitted = fit_prior(&records, 500, &FitOptions::default()).unwrap();
        assert_eq!(fitted.diagnostics.sample_size, 200);
        assert!((fitted.prior.mean() - 0.25).abs() < 0.01);
    }

    #[test]
    fn test_fit_prior_with_nothing_left_is_empty_input() {
        let records = vec![EntityRecord::new("a", 1, 10), EntityRecord::new("b", 2, 10)];
        let err = fit_prior(&records, 500, &FitOptions::default()).unwrap_err();
        assert!(matches!(err, EstimateError::Fit(FitError::EmptyInput { min_trials: 500 })));
    }

    #[test]
    fn test_fit_prior_rejects_invalid_records() {
        let records = vec![EntityRecord::new("a", 600, 1000), EntityRecord::new("bad", 11, 10)];
        let err = fit_prior(&records, 500, &FitOptions::default()).unwrap_err();
        assert!(matches!(err, EstimateError::Input(_)));
    }
}
