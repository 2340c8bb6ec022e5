//! Match-result records and CSV loading.

use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use serde::Deserialize;

/// A single international match result.
///
/// Deserialized by header name, so extra columns in the source file (such
/// as the leading unnamed index column the published datasets carry) are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRecord {
    /// Kick-off date, `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Home team name.
    pub home_team: String,
    /// Away team name.
    pub away_team: String,
    /// Full-time home goals.
    pub home_score: u32,
    /// Full-time away goals.
    pub away_score: u32,
    /// Tournament the match was played in.
    pub tournament: String,
}

impl MatchRecord {
    /// Combined goal total of the match.
    #[must_use]
    pub fn goals_scored(&self) -> u32 {
        self.home_score + self.away_score
    }
}

/// Reads all match records from a results CSV file.
///
/// Any failure (missing file, malformed row, unparseable date) is fatal and
/// propagates with context; no rows are skipped.
pub fn read_matches<P>(path: P) -> anyhow::Result<Vec<MatchRecord>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open results file: {}", path.display()))?;

    let matches = reader
        .deserialize()
        .collect::<Result<Vec<MatchRecord>, _>>()
        .with_context(|| format!("Failed to parse results file: {}", path.display()))?;

    Ok(matches)
}
