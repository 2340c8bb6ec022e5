//! Match-result data layer for the goalrank analysis.
//!
//! This crate loads international match results from CSV files and reshapes
//! them into the two goal-count samples the statistical comparison runs on.
//!
//! # Workflow
//!
//! 1. **Load** ([`dataset::read_matches`]): parse a results CSV into
//!    [`dataset::MatchRecord`] rows
//! 2. **Filter** ([`subset::MatchFilter`]): keep matches after a cutoff date
//!    in a given tournament
//! 3. **Derive** ([`subset::GoalRow`]): label each match with its group and
//!    its combined goal total
//! 4. **Pivot** ([`pivot::GoalColumns`]): reshape the combined rows into one
//!    column of goal totals per group
//!
//! ```text
//! men_results.csv ──┐                      ┌─ GoalRow{men, ...}  ──┐
//!                   ├─ MatchFilter::apply ─┤                       ├─ GoalColumns
//! women_results.csv ┘                      └─ GoalRow{women, ...} ─┘
//! ```

pub mod dataset;
pub mod pivot;
pub mod subset;
