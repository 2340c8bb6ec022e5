/// A frequency distribution of integer goal totals.
///
/// Goal totals are small non-negative integers, so the histogram uses one
/// unit-width bin per goal value from zero up to the observed maximum.
/// Every input value lands in exactly one bin.
#[derive(Debug, Clone)]
pub struct GoalHistogram {
    /// The bins comprising the histogram, ordered by goal value.
    pub bins: Vec<GoalBin>,
}

/// A single bin in a goal histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalBin {
    /// The goal total covered by this bin.
    pub goals: u32,
    /// The number of matches with exactly this goal total.
    pub count: u64,
}

impl GoalHistogram {
    /// Creates a histogram from goal totals.
    ///
    /// Produces one bin for each goal value in `0..=max`, including values
    /// that never occur (their count is zero), so the rendered chart shows
    /// gaps in the distribution.
    ///
    /// # Examples
    ///
    /// ```
    /// use goalrank_stats::histogram::GoalHistogram;
    ///
    /// let histogram = GoalHistogram::from_goals(&[2, 3, 2, 5]);
    /// assert_eq!(histogram.bins.len(), 6);
    /// assert_eq!(histogram.bins[2].count, 2);
    /// assert_eq!(histogram.bins[4].count, 0);
    /// ```
    #[must_use]
    pub fn from_goals(goals: &[u32]) -> Self {
        let Some(max) = goals.iter().copied().max() else {
            return Self { bins: vec![] };
        };

        let mut bins = (0..=max)
            .map(|goals| GoalBin { goals, count: 0 })
            .collect::<Vec<_>>();
        for &value in goals {
            bins[value as usize].count += 1;
        }

        Self { bins }
    }

    /// Total number of values across all bins.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// The largest bin count, used for scaling rendered bars.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let histogram = GoalHistogram::from_goals(&[]);
        assert!(histogram.bins.is_empty());
        assert_eq!(histogram.total_count(), 0);
        assert_eq!(histogram.max_count(), 0);
    }

    #[test]
    fn test_counts_sum_to_sample_size() {
        let goals = [0, 1, 1, 2, 2, 2, 3, 7];
        let histogram = GoalHistogram::from_goals(&goals);
        assert_eq!(histogram.total_count(), goals.len() as u64);
    }

    #[test]
    fn test_every_value_in_own_bin() {
        let histogram = GoalHistogram::from_goals(&[0, 1, 1, 4]);
        assert_eq!(histogram.bins[0].count, 1);
        assert_eq!(histogram.bins[1].count, 2);
        assert_eq!(histogram.bins[4].count, 1);
    }

    #[test]
    fn test_unseen_values_get_empty_bins() {
        let histogram = GoalHistogram::from_goals(&[5]);
        assert_eq!(histogram.bins.len(), 6);
        assert!(histogram.bins[..5].iter().all(|bin| bin.count == 0));
        assert_eq!(histogram.max_count(), 1);
    }
}
