//! Property tests for posterior and interval invariants.

use credible_analysis::{credible_interval, posterior_estimate, BetaPrior, TailProbabilities};
use proptest::prelude::*;

fn counts() -> impl Strategy<Value = (u64, u64)> {
    (1_u64..5_000).prop_flat_map(|n| (0..=n, Just(n)))
}

proptest! {
    #[test]
    fn test_point_estimate_lies_inside_interval(
        (k, n) in counts(),
        a in 0.5_f64..500.0,
        b in 0.5_f64..500.0,
    ) {
        let prior = BetaPrior::new(a, b).unwrap();
        let post = posterior_estimate(k, n, &prior).unwrap();
        let ci = post.interval(TailProbabilities::default()).unwrap();

        prop_assert!(post.shape1 > 0.0 && post.shape2 > 0.0);
        prop_assert!(ci.low <= post.point_estimate, "{:?} vs {}", ci, post.point_estimate);
        prop_assert!(post.point_estimate <= ci.high, "{:?} vs {}", ci, post.point_estimate);
        prop_assert!((0.0..=1.0).contains(&ci.low));
        prop_assert!((0.0..=1.0).contains(&ci.high));
    }

    #[test]
    fn test_posterior_is_deterministic((k, n) in counts(), a in 0.1_f64..1000.0, b in 0.1_f64..1000.0) {
        let prior = BetaPrior::new(a, b).unwrap();
        let first = posterior_estimate(k, n, &prior).unwrap();
        let second = posterior_estimate(k, n, &prior).unwrap();
        prop_assert_eq!(first.shape1.to_bits(), second.shape1.to_bits());
        prop_assert_eq!(first.shape2.to_bits(), second.shape2.to_bits());
        prop_assert_eq!(first.point_estimate.to_bits(), second.point_estimate.to_bits());
    }

    #[test]
    fn test_estimate_lies_between_prior_mean_and_raw_ratio(
        (k, n) in counts(),
        a in 0.1_f64..1000.0,
        b in 0.1_f64..1000.0,
    ) {
        let prior = BetaPrior::new(a, b).unwrap();
        let post = posterior_estimate(k, n, &prior).unwrap();
        let raw = k as f64 / n as f64;
        let (lo, hi) = if raw < prior.mean() { (raw, prior.mean()) } else { (prior.mean(), raw) };
        prop_assert!(post.point_estimate >= lo - 1e-12 && post.point_estimate <= hi + 1e-12);
    }

    #[test]
    fn test_successes_beyond_trials_are_rejected(n in 1_u64..1000, extra in 1_u64..100) {
        prop_assert!(posterior_estimate(n + extra, n, &BetaPrior::uniform()).is_err());
    }

    #[test]
    fn test_lopsided_shapes_give_ordered_intervals(
        small in 0.5_f64..5e4,
        large in 1e6_f64..1e9,
        flip in any::<bool>(),
    ) {
        let (a, b) = if flip { (large, small) } else { (small, large) };
        let ci = credible_interval(a, b, 0.025, 0.975).unwrap();
        let mean = a / (a + b);
        prop_assert!(ci.low.is_finite() && ci.high.is_finite());
        prop_assert!(ci.low <= mean && mean <= ci.high, "({}, {}) -> {:?}", a, b, ci);
        prop_assert!((0.0..=1.0).contains(&ci.low) && (0.0..=1.0).contains(&ci.high));
    }
}
