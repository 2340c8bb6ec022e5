//! Wide reshape of the combined goals table.

use crate::subset::{GoalRow, Group};

/// The combined goals table pivoted by group: one column of goal totals per
/// group. Column lengths may differ; the rank-sum test only needs two
/// independent samples.
#[derive(Debug, Clone, Default)]
pub struct GoalColumns {
    /// Goal totals of the men's subset, as floats for the rank machinery.
    pub men: Vec<f64>,
    /// Goal totals of the women's subset.
    pub women: Vec<f64>,
}

impl GoalColumns {
    /// Distributes every combined row into its group's column.
    #[must_use]
    pub fn from_rows(rows: &[GoalRow]) -> Self {
        let mut columns = Self::default();
        for row in rows {
            let column = match row.group {
                Group::Men => &mut columns.men,
                Group::Women => &mut columns.women,
            };
            column.push(f64::from(row.goals_scored));
        }
        columns
    }

    /// Total number of rows across both columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.men.len() + self.women.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.men.is_empty() && self.women.is_empty()
    }
}
