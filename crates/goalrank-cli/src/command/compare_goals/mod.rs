//! Goal-total comparison command
//!
//! Loads the men's and women's match-result datasets, restricts both to
//! FIFA World Cup matches played after the 2002 cutoff, and tests whether
//! women's matches have stochastically higher combined goal totals. The
//! one-sided Mann-Whitney U test runs through two independent
//! implementations as a cross-check before the decision is printed.

mod chart;
mod report;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Args;
use goalrank_analysis::{
    dataset,
    pivot::GoalColumns,
    subset::{GoalRow, Group, MatchFilter},
};
use goalrank_stats::{
    descriptive::DescriptiveStats,
    histogram::GoalHistogram,
    mwu::MannWhitneyTest,
    ranksum::{self, Alternative},
};

/// Fixed significance level of the one-sided test.
const SIGNIFICANCE_LEVEL: f64 = 0.01;

/// Only this tournament enters the comparison.
const TOURNAMENT: &str = "FIFA World Cup";

/// Matches on or before this date are excluded.
fn cutoff_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2002, 1, 1).unwrap()
}

#[derive(Debug, Clone, Args)]
pub(crate) struct CompareGoalsArg {
    /// Path to the men's results CSV
    #[arg(long, default_value = "men_results.csv")]
    pub men: PathBuf,

    /// Path to the women's results CSV
    #[arg(long, default_value = "women_results.csv")]
    pub women: PathBuf,
}

impl Default for CompareGoalsArg {
    fn default() -> Self {
        Self {
            men: PathBuf::from("men_results.csv"),
            women: PathBuf::from("women_results.csv"),
        }
    }
}

pub(crate) fn run(arg: &CompareGoalsArg) -> anyhow::Result<()> {
    let men_rows = load_goal_rows(&arg.men, Group::Men)?;
    let women_rows = load_goal_rows(&arg.women, Group::Women)?;

    // Informal normality check on the men's distribution, matching the
    // exploratory step of the analysis. Side effect only.
    let men_goals = men_rows.iter().map(|r| r.goals_scored).collect::<Vec<_>>();
    chart::print_goal_histogram(
        "Distribution of Goals Scored - Men",
        &GoalHistogram::from_goals(&men_goals),
    );
    if let Some(stats) = DescriptiveStats::new(men_goals.iter().map(|&g| f64::from(g))) {
        println!(
            "  mean {:.2}, median {:.1}, std dev {:.2}, range {:.0}-{:.0}",
            stats.mean, stats.median, stats.std_dev, stats.min, stats.max
        );
    }
    println!();

    // Combine both subsets and pivot the goal totals by group
    let mut combined = women_rows;
    combined.extend(men_rows);
    let columns = GoalColumns::from_rows(&combined);

    let test = MannWhitneyTest::greater(&columns.women, &columns.men)
        .ok_or_else(|| anyhow::anyhow!("Mann-Whitney test is undefined for these samples"))?;
    let (u_statistic, p_value) =
        ranksum::mann_whitney_u(&columns.women, &columns.men, Alternative::Greater)
            .ok_or_else(|| anyhow::anyhow!("Mann-Whitney test is undefined for these samples"))?;

    report::print_structured_report(&test);
    println!();
    report::print_raw_report(u_statistic, p_value);
    println!();
    report::print_conclusion(&report::conclude(test.p_value, SIGNIFICANCE_LEVEL))?;

    Ok(())
}

/// Loads one results file and reduces it to labeled goal totals.
fn load_goal_rows(path: &Path, group: Group) -> anyhow::Result<Vec<GoalRow>> {
    let filter = MatchFilter {
        after: cutoff_date(),
        tournament: TOURNAMENT.to_string(),
    };

    eprintln!("Loading {group} results from {}...", path.display());
    let matches = dataset::read_matches(path)?;
    let subset = filter.apply(&matches);
    eprintln!(
        "Kept {} of {} {group} matches ({TOURNAMENT} after {})",
        subset.len(),
        matches.len(),
        filter.after
    );

    if subset.is_empty() {
        anyhow::bail!(
            "No {group} matches remain after filtering {}",
            path.display()
        );
    }

    Ok(GoalRow::from_matches(group, &subset))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write_results(dir: &Path, name: &str, rows: &[(&str, u32, u32, &str)]) -> PathBuf {
        let mut data =
            String::from("date,home_team,away_team,home_score,away_score,tournament\n");
        for (date, home, away, tournament) in rows {
            data.push_str(&format!("{date},Home,Away,{home},{away},{tournament}\n"));
        }
        let path = dir.join(name);
        fs::write(&path, data).unwrap();
        path
    }

    #[test]
    fn test_load_goal_rows_filters_and_derives() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_results(
            dir.path(),
            "men_results.csv",
            &[
                ("1998-07-12", 3, 0, "FIFA World Cup"), // before cutoff
                ("2010-07-11", 0, 1, "Friendly"),       // wrong tournament
                ("2014-07-08", 1, 7, "FIFA World Cup"),
                ("2014-07-13", 1, 0, "FIFA World Cup"),
            ],
        );

        let rows = load_goal_rows(&path, Group::Men).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].goals_scored, 8);
        assert_eq!(rows[1].goals_scored, 1);
    }

    #[test]
    fn test_load_goal_rows_fails_on_empty_subset() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_results(
            dir.path(),
            "men_results.csv",
            &[("1998-07-12", 3, 0, "FIFA World Cup")],
        );
        assert!(load_goal_rows(&path, Group::Men).is_err());
    }

    #[test]
    fn test_run_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let low_scoring = [
            ("2006-06-09", 1, 0, "FIFA World Cup"),
            ("2006-06-10", 0, 1, "FIFA World Cup"),
            ("2010-06-11", 1, 1, "FIFA World Cup"),
            ("2010-06-12", 2, 0, "FIFA World Cup"),
            ("2014-06-13", 0, 1, "FIFA World Cup"),
            ("2014-06-14", 1, 1, "FIFA World Cup"),
            ("2018-06-15", 0, 2, "FIFA World Cup"),
            ("2018-06-16", 1, 0, "FIFA World Cup"),
        ];
        let high_scoring = [
            ("2007-09-11", 4, 2, "FIFA World Cup"),
            ("2007-09-12", 3, 2, "FIFA World Cup"),
            ("2011-06-26", 5, 1, "FIFA World Cup"),
            ("2011-06-27", 4, 3, "FIFA World Cup"),
            ("2015-06-06", 6, 0, "FIFA World Cup"),
            ("2015-06-07", 3, 3, "FIFA World Cup"),
            ("2019-06-11", 13, 0, "FIFA World Cup"),
            ("2019-06-12", 4, 1, "FIFA World Cup"),
        ];

        let arg = CompareGoalsArg {
            men: write_results(dir.path(), "men_results.csv", &low_scoring),
            women: write_results(dir.path(), "women_results.csv", &high_scoring),
        };
        run(&arg).unwrap();
    }
}
