//! Special functions not provided by `statrs`.

/// Trigamma function ψ₁(x), the derivative of digamma, for x > 0.
///
/// Shifts x upward with ψ₁(x) = ψ₁(x + 1) + 1/x² and then applies the
/// asymptotic expansion, accurate to ~1e-13 once x ≥ 10.
pub fn trigamma(x: f64) -> f64 {
    if x.is_nan() || x <= 0.0 || x.is_infinite() {
        return f64::NAN;
    }

    let mut x = x;
    let mut acc = 0.0;
    while x < 10.0 {
        acc += 1.0 / (x * x);
        x += 1.0;
    }

    let inv = 1.0 / x;
    let inv2 = inv * inv;
    // 1/x + 1/2x² + 1/6x³ − 1/30x⁵ + 1/42x⁷ − 1/30x⁹ + 5/66x¹¹
    let series = inv
        + inv2 / 2.0
        + inv
            * inv2
            * (1.0 / 6.0
                - inv2 * (1.0 / 30.0 - inv2 * (1.0 / 42.0 - inv2 * (1.0 / 30.0 - inv2 * 5.0 / 66.0))));
    acc + series
}
