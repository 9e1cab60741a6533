//! End-to-end: fit a prior from a population, then estimate everyone.

use credible_analysis::{EmpiricalBayes, EntityRecord};
use credible_core::config::CredibleConfig;
use credible_core::errors::{CredibleErrorCode, EstimateError, FitError};
use statrs::distribution::{Beta, ContinuousCDF};

/// Deterministic population: true rates spread like Beta(78.66, 224.2),
/// at-bat counts cycling between 50 and ~6000.
fn population(size: usize) -> Vec<EntityRecord> {
    let rates = Beta::new(78.66, 224.2).unwrap();
    (0..size)
        .map(|i| {
            // Interleave quantiles so rate and at-bats are not correlated.
            let q = ((i * 7919) % size) as f64 + 0.5;
            let rate = rates.inverse_cdf(q / size as f64);
            let trials = 50 + ((i as u64 * 2_654_435_761) % 6_000);
            let successes = (rate * trials as f64).round() as u64;
            EntityRecord::new(format!("player{i:04}"), successes, trials)
        })
        .collect()
}

#[test]
fn test_fits_prior_and_estimates_population() {
    let records = population(1500);
    let config = CredibleConfig::from_toml("[prior]\nmin_trials = 500\n").unwrap();

    let model = EmpiricalBayes::fit(&records, &config).unwrap();
    let prior = model.prior();
    assert!((prior.mean() - 0.2597).abs() < 0.01, "prior mean {}", prior.mean());

    let diagnostics = model.diagnostics().unwrap();
    let eligible = records.iter().filter(|r| r.trials >= 500).count();
    assert_eq!(diagnostics.sample_size, eligible);
    assert!(diagnostics.sample_size < records.len());

    let report = model.estimate_all(&records);
    assert!(report.is_clean());
    assert_eq!(report.estimates.len(), records.len());
    for est in &report.estimates {
        assert!(est.interval.low <= est.posterior.point_estimate);
        assert!(est.posterior.point_estimate <= est.interval.high);
    }

    // Low-volume entities are pulled furthest toward the prior mean.
    let mean_prior_weight = |min_trials: u64, max_trials: u64| {
        let weights: Vec<f64> = report
            .estimates
            .iter()
            .filter(|e| e.trials >= min_trials && e.trials < max_trials)
            .map(|e| e.posterior.prior_weight)
            .collect();
        weights.iter().sum::<f64>() / weights.len() as f64
    };
    assert!(mean_prior_weight(0, 100) > mean_prior_weight(5_000, u64::MAX));
}

#[test]
fn test_custom_tails_flow_through_config() {
    let records = population(400);
    let config = CredibleConfig::from_toml(
        "[prior]\nmin_trials = 500\n\n[interval]\nlower_tail = 0.1\nupper_tail = 0.9\n",
    )
    .unwrap();
    let narrow = EmpiricalBayes::fit(&records, &config).unwrap();
    let default_tails = CredibleConfig::from_toml("[prior]\nmin_trials = 500").unwrap();
    let wide = EmpiricalBayes::fit(&records, &default_tails).unwrap();

    let record = EntityRecord::new("probe", 45, 150);
    let narrow_ci = narrow.estimate(&record).unwrap().interval;
    let wide_ci = wide.estimate(&record).unwrap().interval;
    assert!(narrow_ci.width() < wide_ci.width());
}

#[test]
fn test_identical_population_fails_to_fit() {
    let records: Vec<EntityRecord> = (0..50)
        .map(|i| EntityRecord::new(format!("clone{i}"), 250, 1000))
        .collect();
    let err = EmpiricalBayes::fit(&records, &CredibleConfig::default()).unwrap_err();
    assert!(matches!(err, EstimateError::Fit(FitError::Degenerate { .. })));
    assert_eq!(err.error_code(), "FIT_DIVERGENCE");
}

#[test]
fn test_threshold_above_every_entity_fails_to_fit() {
    let records = population(100);
    let config = CredibleConfig::from_toml("[prior]\nmin_trials = 1000000").unwrap();
    let err = EmpiricalBayes::fit(&records, &config).unwrap_err();
    assert!(matches!(
        err,
        EstimateError::Fit(FitError::EmptyInput { min_trials: 1_000_000 })
    ));
}
