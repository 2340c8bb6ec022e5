//! Raw Mann-Whitney U computation.
//!
//! Low-level counterpart to [`crate::mwu`]: returns a bare
//! `(statistic, p-value)` pair, in the spirit of
//! `scipy.stats.mannwhitneyu`. The U statistic is accumulated by direct
//! pairwise comparison rather than from rank sums, so agreement with the
//! structured implementation is a genuine cross-check and not a tautology.

use crate::{
    normal::{standard_normal_cdf, standard_normal_sf},
    ranks,
};

/// Alternative hypothesis for the rank-sum test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alternative {
    /// The two distributions differ in either direction.
    TwoSided,
    /// The first sample is stochastically less than the second.
    Less,
    /// The first sample is stochastically greater than the second.
    Greater,
}

/// Runs a Mann-Whitney U test, returning `(u_statistic, p_value)`.
///
/// U counts, over all pairs `(xi, yj)`, the pairs with `xi > yj` plus half
/// the tied pairs. The p-value uses the tie-corrected normal approximation
/// with continuity correction.
///
/// # Returns
///
/// * `Some((u, p))` - for two non-empty samples with at least two distinct
///   values between them
/// * `None` - if either sample is empty, or every value is tied
///
/// # Examples
///
/// ```
/// use goalrank_stats::ranksum::{Alternative, mann_whitney_u};
///
/// let x = [4.0, 5.0, 6.0, 5.0];
/// let y = [1.0, 2.0, 1.0, 3.0];
/// let (u, p) = mann_whitney_u(&x, &y, Alternative::Greater).unwrap();
/// assert_eq!(u, 16.0);
/// assert!(p < 0.05);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mann_whitney_u(x: &[f64], y: &[f64], alternative: Alternative) -> Option<(f64, f64)> {
    if x.is_empty() || y.is_empty() {
        return None;
    }

    let mut u = 0.0;
    for &xi in x {
        for &yj in y {
            if xi > yj {
                u += 1.0;
            } else if xi == yj {
                u += 0.5;
            }
        }
    }

    let n1 = x.len() as f64;
    let n2 = y.len() as f64;
    let n = n1 + n2;
    let mean = n1 * n2 / 2.0;

    let combined = x.iter().chain(y.iter()).copied().collect::<Vec<_>>();
    let tie_term = ranks::tie_correction_term(&combined);
    let variance = n1 * n2 / 12.0 * ((n + 1.0) - tie_term / (n * (n - 1.0)));
    if variance <= 0.0 {
        return None;
    }
    let std_dev = variance.sqrt();

    let p_value = match alternative {
        Alternative::Greater => standard_normal_sf((u - mean - 0.5) / std_dev),
        Alternative::Less => standard_normal_cdf((u - mean + 0.5) / std_dev),
        Alternative::TwoSided => {
            let z = ((u - mean).abs() - 0.5) / std_dev;
            (2.0 * standard_normal_sf(z)).min(1.0)
        }
    };

    Some((u, p_value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mwu::MannWhitneyTest;

    #[test]
    fn test_empty_sample_is_rejected() {
        assert!(mann_whitney_u(&[], &[1.0], Alternative::Greater).is_none());
        assert!(mann_whitney_u(&[1.0], &[], Alternative::Greater).is_none());
    }

    #[test]
    fn test_all_tied_values_degenerate() {
        assert!(mann_whitney_u(&[2.0, 2.0], &[2.0, 2.0], Alternative::Greater).is_none());
    }

    #[test]
    fn test_pairwise_u_with_ties() {
        // x=[3,3], y=[1,3]: pairs greater = 2, tied = 2 -> U = 3
        let (u, _) = mann_whitney_u(&[3.0, 3.0], &[1.0, 3.0], Alternative::Greater).unwrap();
        assert_eq!(u, 3.0);
    }

    #[test]
    fn test_agrees_with_structured_implementation() {
        let cases: [(&[f64], &[f64]); 4] = [
            (&[4.0, 5.0, 6.0, 5.0], &[1.0, 2.0, 1.0, 3.0]),
            (&[2.0, 2.0, 3.0, 3.0, 2.0, 3.0], &[2.0, 2.0, 3.0, 3.0, 2.0, 3.0]),
            (&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 2.0, 2.0]),
            (&[7.0], &[1.0, 2.0, 9.0]),
        ];
        for (x, y) in cases {
            let test = MannWhitneyTest::greater(x, y).unwrap();
            let (u, p) = mann_whitney_u(x, y, Alternative::Greater).unwrap();
            assert_eq!(test.u_statistic, u);
            assert!(
                (test.p_value - p).abs() < 1e-6,
                "p-values diverge: {} vs {p}",
                test.p_value
            );
        }
    }

    #[test]
    fn test_one_sided_directions_complement() {
        let x = [4.0, 6.0, 8.0];
        let y = [1.0, 3.0, 5.0];
        let (u_g, p_greater) = mann_whitney_u(&x, &y, Alternative::Greater).unwrap();
        let (u_l, p_less) = mann_whitney_u(&x, &y, Alternative::Less).unwrap();
        assert_eq!(u_g, u_l);
        // With continuity correction applied toward the null on both
        // sides, the two tails overlap slightly rather than sum to one.
        assert!(p_greater < 0.5);
        assert!(p_less > 0.5);
    }

    #[test]
    fn test_two_sided_is_doubled_tail() {
        let x = [4.0, 5.0, 6.0, 5.0];
        let y = [1.0, 2.0, 1.0, 3.0];
        let (_, p_one) = mann_whitney_u(&x, &y, Alternative::Greater).unwrap();
        let (_, p_two) = mann_whitney_u(&x, &y, Alternative::TwoSided).unwrap();
        assert!((p_two - 2.0 * p_one).abs() < 1e-12);
    }
}
