//! Delimited-text loading for numkit.
//!
//! [`load_tabular`] reads a comma-separated text file into [`TabularData`]:
//! one row of `f64` values per input line. The format is deliberately
//! minimal:
//!
//! - no header handling, quoting or escaping
//! - rows may have different lengths
//! - with `skip_first_field`, field 0 of every line is dropped unparsed
//!
//! Loading is fail-fast: the first unparsable field aborts the whole load
//! and no rows are returned, including the ones parsed before it.
//!
//! # Examples
//!
//! ```
//! use numkit_io::read_tabular;
//!
//! let text = "label1,1.0,2.0\nlabel2,3.0,4.0\n";
//! let data = read_tabular(text.as_bytes(), "inline", true).unwrap();
//! assert_eq!(data.into_rows(), [[1.0, 2.0], [3.0, 4.0]]);
//! ```

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    num::ParseFloatError,
    path::Path,
    str::Utf8Error,
};

pub use self::tabular::TabularData;

mod tabular;

/// Field delimiter of the input format.
pub const DELIMITER: u8 = b',';

/// Failure to load tabular data.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    /// The source could not be opened or read.
    #[display("unable to read {origin}")]
    Unavailable { origin: String, source: io::Error },
    /// A field could not be parsed as a floating-point number.
    ///
    /// `line` and `field` are 1-based; a skipped label counts as field 1.
    #[display("invalid number {text:?} in {origin} at line {line}, field {field}")]
    MalformedData {
        origin: String,
        line: usize,
        field: usize,
        text: String,
        source: FieldError,
    },
}

/// Why a single field was rejected.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum FieldError {
    #[display("field is not valid UTF-8")]
    Encoding(#[error(source)] Utf8Error),
    #[display("field is not a number")]
    Number(#[error(source)] ParseFloatError),
}

/// Loads tabular data from the comma-separated file at `path`.
///
/// The file is closed before returning, on success and on failure.
///
/// # Errors
///
/// * [`LoadError::Unavailable`] if the file cannot be opened or read
/// * [`LoadError::MalformedData`] on the first field that is not a number
pub fn load_tabular<P>(path: P, skip_first_field: bool) -> Result<TabularData, LoadError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|source| LoadError::Unavailable {
        origin: origin.clone(),
        source,
    })?;
    log::debug!("loading tabular data from {origin}");
    read_tabular(BufReader::new(file), &origin, skip_first_field)
}

/// Reads tabular data from any buffered reader.
///
/// `origin` names the source in error messages. Lines are split as raw
/// bytes, so a skipped label field may hold any bytes at all; only the
/// fields that get parsed must be UTF-8.
///
/// # Errors
///
/// * [`LoadError::Unavailable`] if reading from `reader` fails
/// * [`LoadError::MalformedData`] on the first field that is not a number
pub fn read_tabular<R>(
    mut reader: R,
    origin: &str,
    skip_first_field: bool,
) -> Result<TabularData, LoadError>
where
    R: BufRead,
{
    let mut rows = Vec::new();
    let mut buf = Vec::new();
    for line_idx in 0.. {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| LoadError::Unavailable {
                origin: origin.to_owned(),
                source,
            })?;
        if read == 0 {
            break;
        }
        let row = parse_line(strip_line_ending(&buf), skip_first_field).map_err(
            |(field_idx, text, source)| LoadError::MalformedData {
                origin: origin.to_owned(),
                line: line_idx + 1,
                field: field_idx + 1,
                text,
                source,
            },
        )?;
        rows.push(row);
    }
    log::debug!("loaded {} rows from {origin}", rows.len());
    Ok(TabularData::new(rows))
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

// A trailing delimiter does not start an extra field, and an empty line has
// no fields at all.
fn parse_line(
    line: &[u8],
    skip_first_field: bool,
) -> Result<Vec<f64>, (usize, String, FieldError)> {
    if line.is_empty() {
        return Ok(Vec::new());
    }
    let line = line.strip_suffix(&[DELIMITER]).unwrap_or(line);
    line.split(|&b| b == DELIMITER)
        .enumerate()
        .skip(usize::from(skip_first_field))
        .map(|(i, field)| {
            parse_field(field).map_err(|e| (i, String::from_utf8_lossy(field).into_owned(), e))
        })
        .collect()
}

fn parse_field(field: &[u8]) -> Result<f64, FieldError> {
    Ok(std::str::from_utf8(field)?.trim().parse::<f64>()?)
}
