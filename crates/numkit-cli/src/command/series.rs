use anyhow::Context;
use numkit_series::Series;

use crate::util::{InputArg, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SeriesArg {
    #[clap(flatten)]
    input: InputArg,

    /// Zero-based row to print
    #[arg(long, default_value_t = 0)]
    row: usize,

    /// Sort entries by value before printing
    #[arg(long)]
    sort: bool,
}

fn build_series(arg: &SeriesArg) -> anyhow::Result<Series<f64>> {
    let SeriesArg { input, row, sort } = arg;

    let data = input.load()?;
    let values = data.row(*row).with_context(|| {
        format!(
            "Row {row} out of range: {} has {} rows",
            input.path.display(),
            data.num_rows()
        )
    })?;

    let mut series = Series::from_values(values.to_vec());
    if *sort {
        series.sort_by_value();
    }
    Ok(series)
}

pub(crate) fn run(arg: &SeriesArg) -> anyhow::Result<()> {
    let series = build_series(arg)?;
    let mut output = Output::stdout();
    series
        .write_to(&mut output)
        .context("Failed to write series to stdout")?;
    output.finish()
}
