use clap::{Parser, Subcommand};

use self::{describe::DescribeArg, moment::MomentArg, series::SeriesArg};

mod describe;
mod moment;
mod series;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Enable debug logging (overridden by `RUST_LOG`)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print descriptive statistics per row or column
    Describe(#[clap(flatten)] DescribeArg),
    /// Print the k-th central moment per row or column
    Moment(#[clap(flatten)] MomentArg),
    /// Print one row as an indexed series
    Series(#[clap(flatten)] SeriesArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logger(args.verbose);
    match args.mode {
        Mode::Describe(arg) => describe::run(&arg)?,
        Mode::Moment(arg) => moment::run(&arg)?,
        Mode::Series(arg) => series::run(&arg)?,
    }
    Ok(())
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
