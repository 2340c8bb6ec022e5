//! Midrank assignment for rank-based tests.
//!
//! Tied values receive the average of the ranks they would occupy, the
//! convention the Mann-Whitney U statistic is defined over. Goal totals are
//! heavily tied (small integers), so the tie-correction term matters for
//! the asymptotic variance.

/// Assigns midranks (1-based) to `values`, in input order.
///
/// Ties receive the average of the ranks they span.
///
/// # Examples
///
/// ```
/// use goalrank_stats::ranks::midranks;
///
/// let ranks = midranks(&[3.0, 1.0, 1.0, 2.0]);
/// assert_eq!(ranks, vec![4.0, 1.5, 1.5, 3.0]);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn midranks(values: &[f64]) -> Vec<f64> {
    let mut order = (0..values.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        // Extend the run over all indices tied with `order[start]`
        let mut end = start + 1;
        while end < order.len() && values[order[end]] == values[order[start]] {
            end += 1;
        }
        // Average of 1-based ranks start+1 ..= end
        let rank = (start + 1 + end) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = rank;
        }
        start = end;
    }

    ranks
}

/// Computes the tie-correction term Σ(t³ − t) over all tie groups.
///
/// Used in the tie-corrected variance of the asymptotic Mann-Whitney
/// statistic. Returns 0.0 when all values are distinct.
///
/// # Examples
///
/// ```
/// use goalrank_stats::ranks::tie_correction_term;
///
/// // Two groups of two ties: (2³ − 2) + (2³ − 2) = 12
/// assert_eq!(tie_correction_term(&[1.0, 1.0, 2.0, 5.0, 5.0]), 12.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn tie_correction_term(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut term = 0.0;
    let mut start = 0;
    while start < sorted.len() {
        let mut end = start + 1;
        while end < sorted.len() && sorted[end] == sorted[start] {
            end += 1;
        }
        let t = (end - start) as f64;
        term += t * t * t - t;
        start = end;
    }

    term
}
