//! Structured Mann-Whitney U test.
//!
//! High-level entry point for the one-sided rank-sum comparison. The U
//! statistic is derived from midrank sums, and the p-value uses the
//! tie-corrected normal approximation with continuity correction. A second,
//! independently coded implementation lives in [`crate::ranksum`]; the two
//! cross-validate each other.

use crate::{normal::standard_normal_sf, ranks};

/// Result of a one-sided Mann-Whitney U test with alternative
/// "x is stochastically greater than y".
#[derive(Debug, Clone)]
pub struct MannWhitneyTest {
    /// Size of the first sample.
    pub n_x: usize,
    /// Size of the second sample.
    pub n_y: usize,
    /// The U statistic of the first sample.
    pub u_statistic: f64,
    /// The standardized test statistic after tie and continuity correction.
    pub z_score: f64,
    /// One-sided p-value (upper tail).
    pub p_value: f64,
    /// Common-language effect size: P(x > y) + 0.5 * P(x == y).
    pub cles: f64,
    /// Rank-biserial correlation, `2 * cles - 1`.
    pub rank_biserial: f64,
}

impl MannWhitneyTest {
    /// Runs the test with alternative hypothesis "x stochastically greater
    /// than y".
    ///
    /// # Returns
    ///
    /// * `Some(MannWhitneyTest)` - for two non-empty samples with at least
    ///   two distinct values between them
    /// * `None` - if either sample is empty, or every value is tied (the
    ///   asymptotic variance degenerates to zero)
    ///
    /// # Examples
    ///
    /// ```
    /// use goalrank_stats::mwu::MannWhitneyTest;
    ///
    /// let x = [4.0, 5.0, 6.0, 5.0];
    /// let y = [1.0, 2.0, 1.0, 3.0];
    /// let test = MannWhitneyTest::greater(&x, &y).unwrap();
    /// assert_eq!(test.u_statistic, 16.0);
    /// assert!(test.p_value < 0.05);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn greater(x: &[f64], y: &[f64]) -> Option<Self> {
        if x.is_empty() || y.is_empty() {
            return None;
        }

        let n_x = x.len();
        let n_y = y.len();
        let n1 = n_x as f64;
        let n2 = n_y as f64;
        let n = n1 + n2;

        let combined = x.iter().chain(y.iter()).copied().collect::<Vec<_>>();
        let ranks = ranks::midranks(&combined);

        let rank_sum_x = ranks[..n_x].iter().sum::<f64>();
        let u = rank_sum_x - n1 * (n1 + 1.0) / 2.0;

        let mean = n1 * n2 / 2.0;
        let tie_term = ranks::tie_correction_term(&combined);
        let variance = n1 * n2 / 12.0 * ((n + 1.0) - tie_term / (n * (n - 1.0)));
        if variance <= 0.0 {
            return None;
        }

        // Continuity correction of 0.5 toward the null, as in the
        // asymptotic method of scipy.stats.mannwhitneyu
        let z_score = (u - mean - 0.5) / variance.sqrt();
        let p_value = standard_normal_sf(z_score);

        let cles = u / (n1 * n2);
        let rank_biserial = 2.0 * cles - 1.0;

        Some(Self {
            n_x,
            n_y,
            u_statistic: u,
            z_score,
            p_value,
            cles,
            rank_biserial,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample_is_rejected() {
        assert!(MannWhitneyTest::greater(&[], &[1.0]).is_none());
        assert!(MannWhitneyTest::greater(&[1.0], &[]).is_none());
    }

    #[test]
    fn test_all_tied_values_degenerate() {
        assert!(MannWhitneyTest::greater(&[3.0, 3.0], &[3.0, 3.0, 3.0]).is_none());
    }

    #[test]
    fn test_small_separated_samples_match_scipy() {
        // scipy.stats.mannwhitneyu([4,5,6,5], [1,2,1,3],
        //     alternative="greater", method="asymptotic") -> U=16, p=0.014215
        let test = MannWhitneyTest::greater(&[4.0, 5.0, 6.0, 5.0], &[1.0, 2.0, 1.0, 3.0]).unwrap();
        assert_eq!(test.u_statistic, 16.0);
        assert!((test.z_score - 2.191_31).abs() < 1e-4);
        assert!((test.p_value - 0.014_215).abs() < 1e-4);
    }

    #[test]
    fn test_clear_separation_rejects_at_one_percent() {
        // Same shape repeated threefold so the asymptotic tail is deep
        // enough to cross the 0.01 significance level.
        let x = [4.0, 5.0, 6.0, 5.0].repeat(3);
        let y = [1.0, 2.0, 1.0, 3.0].repeat(3);
        let test = MannWhitneyTest::greater(&x, &y).unwrap();
        assert_eq!(test.u_statistic, 144.0);
        assert!(test.p_value > 0.0);
        assert!(test.p_value < 1e-4);
    }

    #[test]
    fn test_identical_distributions_do_not_reject() {
        let sample = [2.0, 2.0, 3.0, 3.0, 2.0, 3.0];
        let test = MannWhitneyTest::greater(&sample, &sample).unwrap();
        assert!(test.p_value > 0.5);
    }

    #[test]
    fn test_effect_sizes_under_complete_dominance() {
        let test = MannWhitneyTest::greater(&[10.0, 11.0, 12.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(test.u_statistic, 9.0);
        assert_eq!(test.cles, 1.0);
        assert_eq!(test.rank_biserial, 1.0);
    }

    #[test]
    fn test_reversed_direction_has_large_p() {
        let test = MannWhitneyTest::greater(&[1.0, 2.0, 1.0, 3.0], &[4.0, 5.0, 6.0, 5.0]).unwrap();
        assert_eq!(test.u_statistic, 0.0);
        assert!(test.p_value > 0.95);
    }
}
