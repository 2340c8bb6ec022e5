//! Standard normal distribution approximations.
//!
//! The asymptotic Mann-Whitney p-value is an upper-tail probability of the
//! standard normal distribution, computed here without external crates.

/// 1/√(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Approximation of the standard normal CDF Φ(x) = P(Z ≤ x) for Z ~ N(0,1).
///
/// Uses the Abramowitz & Stegun 26.2.17 polynomial approximation with
/// Horner evaluation; maximum absolute error is below 7.5e-8.
///
/// # Examples
///
/// ```
/// use goalrank_stats::normal::standard_normal_cdf;
///
/// assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-7);
/// assert!((standard_normal_cdf(1.96) - 0.975).abs() < 1e-3);
/// ```
#[must_use]
pub fn standard_normal_cdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x == f64::INFINITY {
        return 1.0;
    }
    if x == f64::NEG_INFINITY {
        return 0.0;
    }

    // Symmetry: Φ(-x) = 1 - Φ(x)
    let abs_x = x.abs();
    let k = 1.0 / (1.0 + 0.2316419 * abs_x);

    let phi = FRAC_1_SQRT_2PI * (-0.5 * abs_x * abs_x).exp();
    let poly = k
        * (0.319381530
            + k * (-0.356563782 + k * (1.781477937 + k * (-1.821255978 + k * 1.330274429))));

    let cdf_abs = 1.0 - phi * poly;

    if x >= 0.0 { cdf_abs } else { 1.0 - cdf_abs }
}

/// Survival function of the standard normal distribution, P(Z > x).
///
/// # Examples
///
/// ```
/// use goalrank_stats::normal::standard_normal_sf;
///
/// assert!((standard_normal_sf(0.0) - 0.5).abs() < 1e-7);
/// assert!(standard_normal_sf(4.0) < 1e-4);
/// ```
#[must_use]
pub fn standard_normal_sf(x: f64) -> f64 {
    standard_normal_cdf(-x)
}
