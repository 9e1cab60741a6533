//! Batch estimation across many entities.
//!
//! Entities are independent given the prior, so the map is embarrassingly
//! parallel. A failing entity is recorded and never affects the others.

use credible_core::errors::CredibleErrorCode;
use rayon::prelude::*;
use serde::Serialize;

use super::model::{EmpiricalBayes, EntityEstimate};
use crate::interval::TailProbabilities;
use crate::prior::BetaPrior;
use crate::records::EntityRecord;

/// An entity that could not be estimated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityFailure {
    /// Position in the input slice.
    pub index: usize,
    pub entity: String,
    pub code: &'static str,
    pub message: String,
}

/// Estimates for a batch, in input order, plus per-entity failures.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub prior: BetaPrior,
    pub tails: TailProbabilities,
    pub estimates: Vec<EntityEstimate>,
    pub failures: Vec<EntityFailure>,
}

impl BatchReport {
    /// True when every entity was estimated.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// The `n` highest point estimates, best first.
    pub fn top_n(&self, n: usize) -> Vec<&EntityEstimate> {
        let mut ranked: Vec<&EntityEstimate> = self.estimates.iter().collect();
        ranked.sort_by(|a, b| {
            b.posterior
                .point_estimate
                .total_cmp(&a.posterior.point_estimate)
        });
        ranked.truncate(n);
        ranked
    }

    /// The `n` lowest point estimates, worst first.
    pub fn bottom_n(&self, n: usize) -> Vec<&EntityEstimate> {
        let mut ranked: Vec<&EntityEstimate> = self.estimates.iter().collect();
        ranked.sort_by(|a, b| {
            a.posterior
                .point_estimate
                .total_cmp(&b.posterior.point_estimate)
        });
        ranked.truncate(n);
        ranked
    }

    /// Look up an estimate by entity id.
    pub fn get(&self, id: &str) -> Option<&EntityEstimate> {
        self.estimates.iter().find(|e| e.id == id)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl EmpiricalBayes {
    /// Estimate every record against the shared prior.
    pub fn estimate_all(&self, records: &[EntityRecord]) -> BatchReport {
        let evaluate = |(index, record): (usize, &EntityRecord)| {
            self.estimate(record).map_err(|e| {
                tracing::debug!(index, entity = %record.id, error = %e, "entity estimate failed");
                EntityFailure {
                    index,
                    entity: record.id.clone(),
                    code: e.error_code(),
                    message: e.to_string(),
                }
            })
        };

        let results: Vec<Result<EntityEstimate, EntityFailure>> = if self.is_parallel() {
            records.par_iter().enumerate().map(evaluate).collect()
        } else {
            records.iter().enumerate().map(evaluate).collect()
        };

        let mut estimates = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(estimate) => estimates.push(estimate),
                Err(failure) => failures.push(failure),
            }
        }

        tracing::info!(
            entities = records.len(),
            estimated = estimates.len(),
            failed = failures.len(),
            parallel = self.is_parallel(),
            "batch estimation complete"
        );

        BatchReport {
            prior: *self.prior(),
            tails: self.tails(),
            estimates,
            failures,
        }
    }
}
