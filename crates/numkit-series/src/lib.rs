//! Indexed series for numkit.
//!
//! A [`Series`] pairs every value with an arbitrary index label. Labels need
//! not be unique or ordered; the number of entries is fixed at construction
//! and sorting reorders entries in place while keeping each label attached
//! to its value.
//!
//! # Examples
//!
//! ```
//! use numkit_series::Series;
//!
//! let mut series = Series::new(vec![3.0, 1.0, 2.0], vec!["c", "a", "b"]).unwrap();
//! series.sort_by_value();
//! assert_eq!(series.to_string(), "a\t1\nb\t2\nc\t3\n");
//! ```
//!
//! Without explicit labels, entries are labelled by position:
//!
//! ```
//! use numkit_series::Series;
//!
//! let series = Series::from_values(vec![10, 20, 30]);
//! assert_eq!(series.indices().collect::<Vec<_>>(), [&0, &1, &2]);
//! ```

pub use self::{numeric::Numeric, series::*};

mod numeric;
mod series;

/// Failure to build a [`Series`] from parallel value and index collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConstructionError {
    #[display("values and indices must be equal-sized (got {values} values and {indices} indices)")]
    LengthMismatch { values: usize, indices: usize },
}
