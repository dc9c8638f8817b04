use std::{fmt, path::PathBuf};

use numkit_stats::DescriptiveStats;

use crate::util::{Axis, InputArg, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DescribeArg {
    #[clap(flatten)]
    input: InputArg,

    /// Summarize each `row` or each `column`
    #[arg(long, default_value = "column")]
    axis: Axis,

    /// Emit JSON instead of tab-separated text
    #[arg(long)]
    json: bool,

    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, serde::Serialize)]
struct SequenceSummary {
    name: String,
    #[serde(flatten)]
    result: SummaryResult,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "snake_case")]
enum SummaryResult {
    Stats(DescriptiveStats),
    Error(String),
}

impl SequenceSummary {
    fn new(name: String, values: &[f64]) -> Self {
        let result = match DescriptiveStats::new(values) {
            Ok(stats) => SummaryResult::Stats(stats),
            Err(e) => SummaryResult::Error(e.to_string()),
        };
        Self { name, result }
    }
}

const HEADER: &str = "name\tcount\tmin\tmax\tmean\tvariance\tstd_dev\tskew\texcess_kurtosis";

impl fmt::Display for SequenceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            SummaryResult::Stats(s) => write!(
                f,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                self.name,
                s.count,
                s.min,
                s.max,
                s.mean,
                s.variance,
                s.std_dev,
                s.skew,
                s.excess_kurtosis
            ),
            SummaryResult::Error(msg) => write!(f, "{}\terror: {msg}", self.name),
        }
    }
}

pub(crate) fn run(arg: &DescribeArg) -> anyhow::Result<()> {
    let DescribeArg {
        input,
        axis,
        json,
        output,
    } = arg;

    let data = input.load()?;
    let summaries = axis
        .sequences(&data)
        .into_iter()
        .map(|(name, values)| SequenceSummary::new(name, &values))
        .collect::<Vec<_>>();

    let mut output = Output::from_output_path(output.clone())?;
    if *json {
        output.write_json(&summaries)
    } else {
        output.write_lines(
            std::iter::once(HEADER.to_owned()).chain(summaries.iter().map(ToString::to_string)),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn test_summary_line() {
        let summary = SequenceSummary::new("row 0".to_owned(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
        let line = summary.to_string();
        let fields = line.split('\t').collect::<Vec<_>>();
        assert_eq!(fields.len(), HEADER.split('\t').count());
        assert_eq!(&fields[..6], ["row 0", "5", "1", "5", "3", "2"]);
    }

    #[test]
    fn test_empty_sequence_reports_error() {
        let summary = SequenceSummary::new("column 3".to_owned(), &[]);
        assert_eq!(
            summary.to_string(),
            "column 3\terror: input sequence must not be empty"
        );
    }

    #[test]
    fn test_run_writes_output_file() {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        writeln!(input, "a,1.0,10.0").unwrap();
        writeln!(input, "b,3.0").unwrap();
        input.flush().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("summary.tsv");

        let arg = DescribeArg {
            input: InputArg {
                path: input.path().to_path_buf(),
                keep_first_field: false,
            },
            axis: Axis::Column,
            json: false,
            output: Some(output.clone()),
        };
        run(&arg).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert!(lines[1].starts_with("column 0\t2\t1\t3\t2\t1\t1\t"));
        assert!(lines[2].starts_with("column 1\t1\t10\t10\t10\t0\t0\t"));
    }

    #[test]
    fn test_run_writes_json_file() {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        writeln!(input, "1.0,2.0").unwrap();
        input.flush().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("summary.json");

        let arg = DescribeArg {
            input: InputArg {
                path: input.path().to_path_buf(),
                keep_first_field: true,
            },
            axis: Axis::Row,
            json: true,
            output: Some(output.clone()),
        };
        run(&arg).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value[0]["name"], "row 0");
        assert_eq!(value[0]["stats"]["mean"], 1.5);
    }

    #[test]
    fn test_json_shape() {
        let summaries = [
            SequenceSummary::new("a".to_owned(), &[2.0, 4.0]),
            SequenceSummary::new("b".to_owned(), &[]),
        ];
        let value = serde_json::to_value(&summaries).unwrap();
        assert_eq!(value[0]["name"], "a");
        assert_eq!(value[0]["stats"]["mean"], 3.0);
        assert_eq!(value[1]["error"], "input sequence must not be empty");
    }
}
