use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::PathBuf,
};

use anyhow::Context;
use numkit_io::TabularData;

/// Input file options shared by every command.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct InputArg {
    /// Path to the comma-separated input file
    pub path: PathBuf,

    /// Parse the first field of every line as a number instead of dropping it as a label
    #[arg(long)]
    pub keep_first_field: bool,
}

impl InputArg {
    pub fn load(&self) -> anyhow::Result<TabularData> {
        let data = numkit_io::load_tabular(&self.path, !self.keep_first_field)
            .with_context(|| format!("Failed to load input file: {}", self.path.display()))?;
        log::info!(
            "loaded {} rows (longest {}) from {}",
            data.num_rows(),
            data.max_row_len(),
            self.path.display()
        );
        Ok(data)
    }
}

/// Direction in which sequences are taken from tabular data.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr, derive_more::Display)]
pub enum Axis {
    #[display("row")]
    Row,
    #[default]
    #[display("column")]
    Column,
}

impl Axis {
    /// Splits `data` into named sequences along this axis.
    pub fn sequences(self, data: &TabularData) -> Vec<(String, Vec<f64>)> {
        let sequences = match self {
            Axis::Row => data.rows().to_vec(),
            Axis::Column => data.columns(),
        };
        sequences
            .into_iter()
            .enumerate()
            .map(|(i, values)| (format!("{self} {i}"), values))
            .collect()
    }
}

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, &value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.finish()
    }

    pub fn write_lines<I>(&mut self, lines: I) -> anyhow::Result<()>
    where
        I: IntoIterator,
        I::Item: std::fmt::Display,
    {
        for line in lines {
            writeln!(&mut *self, "{line}")
                .with_context(|| format!("Failed to write to {}", self.display_path()))?;
        }
        self.finish()
    }

    pub fn finish(&mut self) -> anyhow::Result<()> {
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        if let Output::File { path, .. } = self {
            log::info!("output written to {}", path.display());
        }
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn test_input_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "label,1.0,2.0").unwrap();
        file.flush().unwrap();

        let mut input = InputArg {
            path: file.path().to_path_buf(),
            keep_first_field: false,
        };
        assert_eq!(input.load().unwrap().into_rows(), [[1.0, 2.0]]);

        input.keep_first_field = true;
        let err = input.load().unwrap_err();
        assert!(err.to_string().starts_with("Failed to load input file"));
        assert!(err.chain().any(|e| e.to_string().contains("invalid number \"label\"")));
    }

    #[test]
    fn test_input_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = InputArg {
            path: dir.path().join("missing.csv"),
            keep_first_field: false,
        };
        assert!(input.load().is_err());
    }

    #[test]
    fn test_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let mut output = Output::open(path.clone()).unwrap();
        assert_eq!(output.display_path(), path.display().to_string());
        output.write_lines(["a\t1", "b\t2"]).unwrap();
        drop(output);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\t1\nb\t2\n");
    }

    #[test]
    fn test_output_in_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Output::open(dir.path().join("no/such/dir/out.txt")).is_err());
    }

    #[test]
    fn test_axis_from_str() {
        assert_eq!("row".parse::<Axis>().unwrap(), Axis::Row);
        assert_eq!("column".parse::<Axis>().unwrap(), Axis::Column);
        assert!("diagonal".parse::<Axis>().is_err());
    }

    #[test]
    fn test_sequences() {
        let data = TabularData::new(vec![vec![1.0, 2.0], vec![3.0]]);
        assert_eq!(
            Axis::Row.sequences(&data),
            [
                ("row 0".to_owned(), vec![1.0, 2.0]),
                ("row 1".to_owned(), vec![3.0]),
            ]
        );
        assert_eq!(
            Axis::Column.sequences(&data),
            [
                ("column 0".to_owned(), vec![1.0, 3.0]),
                ("column 1".to_owned(), vec![2.0]),
            ]
        );
    }
}
