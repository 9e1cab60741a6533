//! Equal-tailed credible intervals via the Beta inverse CDF.
//!
//! Moderate shapes use the `statrs` Beta quantile directly. Once either
//! shape reaches `LARGE_SHAPE` that solver is not guaranteed to terminate,
//! so extreme shapes go through closed-form limits instead:
//! - both shapes large: normal with the Beta mean and variance;
//! - one shape huge: the log-odds ln(G_a) − ln(G_b) of the Gamma
//!   representation, taking the quantile of ln(G_a) exactly and widening it
//!   by the variance of ln(G_b). The Gamma quantile comes from a bounded
//!   bisection.

use credible_core::errors::ParameterError;
use statrs::distribution::{Beta, ContinuousCDF};
use statrs::function::erf::erf_inv;
use statrs::function::gamma::{digamma, gamma_lr};

use super::types::{IntervalBounds, TailProbabilities};
use crate::prior::special::trigamma;
use crate::prior::types::check_shape;

/// From here on the `statrs` Beta quantile is not used.
const LARGE_SHAPE: f64 = 1e6;

/// Smaller shape at or above which a large-shape Beta is treated as normal.
const NORMAL_MIN_SHAPE: f64 = 1e5;

/// Gamma shape at or above which Wilson-Hilferty replaces bisection.
const WILSON_HILFERTY_MIN_SHAPE: f64 = 1e3;

const MAX_BRACKET_DOUBLINGS: u32 = 64;
const MAX_BISECTIONS: u32 = 200;

/// Quantiles of Beta(shape1, shape2) at `lower_tail` and `upper_tail`.
///
/// Fails with `NonPositiveShape` if a shape is not finite and > 0, and with
/// `InvalidTails` unless `0 < lower_tail < upper_tail < 1`.
pub fn credible_interval(
    shape1: f64,
    shape2: f64,
    lower_tail: f64,
    upper_tail: f64,
) -> Result<IntervalBounds, ParameterError> {
    check_shape("shape1", shape1)?;
    check_shape("shape2", shape2)?;
    let tails = TailProbabilities::new(lower_tail, upper_tail)?;

    Ok(IntervalBounds {
        low: beta_quantile(shape1, shape2, tails.lower())?,
        high: beta_quantile(shape1, shape2, tails.upper())?,
    })
}

/// Inverse CDF of Beta(a, b) at `p`, with `p` in (0, 1). Always terminates.
pub(crate) fn beta_quantile(a: f64, b: f64, p: f64) -> Result<f64, ParameterError> {
    check_shape("shape1", a)?;
    check_shape("shape2", b)?;

    let (small, large) = if a < b { (a, b) } else { (b, a) };
    if large >= LARGE_SHAPE {
        return Ok(if small >= NORMAL_MIN_SHAPE {
            normal_quantile(a, b, p)
        } else {
            gamma_limit_quantile(a, b, p)
        });
    }

    let dist = Beta::new(a, b).map_err(|e| ParameterError::Distribution {
        shape1: a,
        shape2: b,
        message: e.to_string(),
    })?;
    Ok(dist.inverse_cdf(p))
}

/// Standard normal quantile.
fn z(p: f64) -> f64 {
    std::f64::consts::SQRT_2 * erf_inv(2.0 * p - 1.0)
}

fn normal_quantile(a: f64, b: f64, p: f64) -> f64 {
    let sum = a + b;
    let mean = a / sum;
    let sd = ((a / sum) * (b / sum) / (sum + 1.0)).sqrt();
    mean + z(p) * sd
}

/// Beta(a, b) quantile when one shape dwarfs the other.
fn gamma_limit_quantile(a: f64, b: f64, p: f64) -> f64 {
    if a <= b {
        logistic(log_odds_quantile(a, b, p))
    } else {
        // X = 1 − Y with Y ~ Beta(b, a).
        logistic(-log_odds_quantile(b, a, 1.0 - p))
    }
}

/// Quantile of ln(G_small) − ln(G_large) for independent unit-scale Gammas.
fn log_odds_quantile(small: f64, large: f64, p: f64) -> f64 {
    let center = digamma(small);
    let spread = (1.0 + trigamma(large) / trigamma(small)).sqrt();
    let deviation = gamma_quantile(small, p).ln() - center;
    center + spread * deviation - digamma(large)
}

fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Quantile of Gamma(shape, 1).
fn gamma_quantile(shape: f64, p: f64) -> f64 {
    if shape >= WILSON_HILFERTY_MIN_SHAPE {
        let c = 1.0 / (9.0 * shape);
        return shape * (1.0 - c + z(p) * c.sqrt()).powi(3);
    }

    let mut lo = 0.0;
    let mut hi = shape.max(1.0);
    for _ in 0..MAX_BRACKET_DOUBLINGS {
        if gamma_lr(shape, hi) >= p {
            break;
        }
        lo = hi;
        hi *= 2.0;
    }
    for _ in 0..MAX_BISECTIONS {
        let mid = 0.5 * (lo + hi);
        if mid <= lo || mid >= hi {
            break;
        }
        if gamma_lr(shape, mid) < p {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}
