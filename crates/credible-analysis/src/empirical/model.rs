//! The fitted model and per-entity estimates.

use credible_core::config::CredibleConfig;
use credible_core::errors::EstimateError;
use serde::Serialize;

use crate::interval::{IntervalBounds, TailProbabilities};
use crate::posterior::{posterior_for, PosteriorEstimate};
use crate::prior::{fit_prior, BetaPrior, FitDiagnostics, FitOptions};
use crate::records::EntityRecord;

/// Everything known about one entity after the update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityEstimate {
    pub id: String,
    pub successes: u64,
    pub trials: u64,
    /// Unshrunken successes / trials.
    pub raw_ratio: f64,
    pub posterior: PosteriorEstimate,
    pub interval: IntervalBounds,
}

/// A prior plus the interval tails to report. Immutable once built, so it
/// can be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct EmpiricalBayes {
    prior: BetaPrior,
    tails: TailProbabilities,
    diagnostics: Option<FitDiagnostics>,
    parallel: bool,
}

impl EmpiricalBayes {
    /// Fit the prior from `records` using `config`.
    ///
    /// The config is validated first, so one built in code gets the same
    /// checks as one loaded from disk.
    pub fn fit(records: &[EntityRecord], config: &CredibleConfig) -> Result<Self, EstimateError> {
        CredibleConfig::validate(config)?;
        let (lower, upper) = config.interval.effective_tails();
        let tails = TailProbabilities::new(lower, upper)?;

        let fitted = fit_prior(
            records,
            config.prior.effective_min_trials(),
            &FitOptions::from(&config.prior),
        )?;

        Ok(Self {
            prior: fitted.prior,
            tails,
            diagnostics: Some(fitted.diagnostics),
            parallel: config.batch.effective_parallel(),
        })
    }

    /// Use a known prior instead of fitting one.
    pub fn with_prior(prior: BetaPrior, tails: TailProbabilities) -> Self {
        Self {
            prior,
            tails,
            diagnostics: None,
            parallel: true,
        }
    }

    /// Toggle rayon for `estimate_all`.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn prior(&self) -> &BetaPrior {
        &self.prior
    }

    pub fn tails(&self) -> TailProbabilities {
        self.tails
    }

    /// `None` when the prior was supplied rather than fit.
    pub fn diagnostics(&self) -> Option<&FitDiagnostics> {
        self.diagnostics.as_ref()
    }

    pub(crate) fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Posterior and credible interval for one entity.
    pub fn estimate(&self, record: &EntityRecord) -> Result<EntityEstimate, EstimateError> {
        let posterior = posterior_for(record, &self.prior)?;
        let interval = posterior.interval(self.tails)?;
        Ok(EntityEstimate {
            id: record.id.clone(),
            successes: record.successes,
            trials: record.trials,
            raw_ratio: record.successes as f64 / record.trials as f64,
            posterior,
            interval,
        })
    }
}
