//! Test reports and the final conclusion.

use goalrank_stats::mwu::MannWhitneyTest;
use serde::Serialize;

/// The decision derived from the p-value, printed as a JSON object with
/// keys `p_val` and `result`.
#[derive(Debug, Clone, Serialize)]
pub(super) struct Conclusion {
    pub p_val: f64,
    pub result: &'static str,
}

/// Applies the fixed-threshold decision rule. The boundary case
/// `p_val == significance_level` rejects.
pub(super) fn conclude(p_val: f64, significance_level: f64) -> Conclusion {
    let result = if p_val <= significance_level {
        "reject"
    } else {
        "fail to reject"
    };
    Conclusion { p_val, result }
}

/// Prints the structured test result with effect sizes.
pub(super) fn print_structured_report(test: &MannWhitneyTest) {
    println!("Mann-Whitney U Test Results (alternative: women > men):");
    println!("  {:<22} {:>12}", "n (women)", test.n_x);
    println!("  {:<22} {:>12}", "n (men)", test.n_y);
    println!("  {:<22} {:>12.1}", "U statistic", test.u_statistic);
    println!("  {:<22} {:>12.4}", "z score", test.z_score);
    println!("  {:<22} {:>12.6}", "p-value", test.p_value);
    println!("  {:<22} {:>12.4}", "CLES", test.cles);
    println!("  {:<22} {:>12.4}", "rank-biserial r", test.rank_biserial);
}

/// Prints the raw `(statistic, p-value)` pair from the second
/// implementation.
pub(super) fn print_raw_report(u_statistic: f64, p_value: f64) {
    println!("Raw Mann-Whitney U Test Results (pairwise cross-check):");
    println!("  {:<22} {:>12.1}", "statistic", u_statistic);
    println!("  {:<22} {:>12.6}", "p-value", p_value);
}

/// Prints the conclusion dictionary.
pub(super) fn print_conclusion(conclusion: &Conclusion) -> anyhow::Result<()> {
    let json = serde_json::to_string(conclusion)?;
    println!("Conclusion: {json}");
    Ok(())
}
