//! Filtering and derived goal columns.

use std::fmt;

use chrono::NaiveDate;

use crate::dataset::MatchRecord;

/// Criteria selecting the matches entering the comparison.
#[derive(Debug, Clone)]
pub struct MatchFilter {
    /// Keep only matches strictly after this date.
    pub after: NaiveDate,
    /// Keep only matches in this tournament.
    pub tournament: String,
}

impl MatchFilter {
    /// Returns the matches satisfying both criteria, in input order.
    #[must_use]
    pub fn apply(&self, matches: &[MatchRecord]) -> Vec<MatchRecord> {
        matches
            .iter()
            .filter(|m| m.date > self.after && m.tournament == self.tournament)
            .cloned()
            .collect()
    }
}

/// Which dataset a derived row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Group {
    Men,
    Women,
}

impl Group {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Group::Men => "men",
            Group::Women => "women",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

/// One row of the combined goals table: a group label and the combined
/// goal total of a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalRow {
    pub group: Group,
    pub goals_scored: u32,
}

impl GoalRow {
    /// Derives one row per match, labeling every row with `group`.
    #[must_use]
    pub fn from_matches(group: Group, matches: &[MatchRecord]) -> Vec<Self> {
        matches
            .iter()
            .map(|m| GoalRow {
                group,
                goals_scored: m.goals_scored(),
            })
            .collect()
    }
}
