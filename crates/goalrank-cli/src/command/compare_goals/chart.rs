//! Text rendering of the goals histogram.
//!
//! One row per goal total, with a bar scaled to the most frequent bin.

use goalrank_stats::histogram::GoalHistogram;

const MAX_BAR_WIDTH: u64 = 40;

/// Prints a histogram of goal totals to stdout.
pub(super) fn print_goal_histogram(title: &str, histogram: &GoalHistogram) {
    println!("{title}");
    println!("  {:>5} {:>6}  {}", "Goals", "Count", "Frequency");
    println!("  {}", "-".repeat(55));

    let max_count = histogram.max_count();
    for bin in &histogram.bins {
        println!(
            "  {:>5} {:>6}  {}",
            bin.goals,
            bin.count,
            bar(bin.count, max_count)
        );
    }

    println!("  {} matches total", histogram.total_count());
}

/// Builds a bar proportional to `count`, at least one mark wide for any
/// non-empty bin.
fn bar(count: u64, max_count: u64) -> String {
    if count == 0 || max_count == 0 {
        return String::new();
    }
    let width = (count * MAX_BAR_WIDTH / max_count).max(1);
    (0..width).map(|_| '#').collect()
}
