use numkit_stats::moment;

use crate::util::{Axis, InputArg, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct MomentArg {
    #[clap(flatten)]
    input: InputArg,

    /// Order of the central moment
    #[arg(short = 'k', long)]
    order: u32,

    /// Compute one moment per `row` or per `column`
    #[arg(long, default_value = "column")]
    axis: Axis,
}

fn moment_line(name: &str, values: &[f64], order: u32) -> String {
    match moment(values, order) {
        Ok(m) => format!("{name}\t{m}"),
        Err(e) => format!("{name}\terror: {e}"),
    }
}

pub(crate) fn run(arg: &MomentArg) -> anyhow::Result<()> {
    let MomentArg {
        input,
        order,
        axis,
    } = arg;

    let data = input.load()?;
    let lines = axis
        .sequences(&data)
        .into_iter()
        .map(|(name, values)| moment_line(&name, &values, *order));
    Output::stdout().write_lines(lines)
}
