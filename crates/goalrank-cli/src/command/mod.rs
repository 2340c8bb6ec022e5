use clap::{Parser, Subcommand};

use self::compare_goals::CompareGoalsArg;

mod compare_goals;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Compare men's and women's FIFA World Cup goal totals
    CompareGoals(#[clap(flatten)] CompareGoalsArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args
        .mode
        .unwrap_or(Mode::CompareGoals(CompareGoalsArg::default()))
    {
        Mode::CompareGoals(arg) => compare_goals::run(&arg)?,
    }
    Ok(())
}
