//! Moment-based descriptive statistics for numkit.
//!
//! Every statistic in this crate reduces to the k-th central moment of a
//! numeric sequence:
//!
//! - **Moment engine**: [`mean`], [`moment`], [`variance`] and [`std_dev`]
//! - **Shape statistics**: [`skew`], [`kurtosis`] and [`excess_kurtosis`],
//!   expressed purely in terms of central moments
//! - **Descriptive summary**: [`DescriptiveStats`] gathers all of the above
//!   for a single sequence
//!
//! All functions operate on fully materialized `f64` slices and reject empty
//! input with [`DomainError::EmptyInput`]. Sums are accumulated naively, left
//! to right, so results are reproducible for a given input order.
//!
//! # Examples
//!
//! ```
//! use numkit_stats::{kurtosis, mean, moment, skew, std_dev};
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! assert_eq!(mean(&values).unwrap(), 3.0);
//! assert_eq!(moment(&values, 2).unwrap(), 2.0);
//! assert!((std_dev(&values).unwrap() - 2.0_f64.sqrt()).abs() < 1e-12);
//! assert!(skew(&values).unwrap().abs() < 1e-12);
//! assert!((kurtosis(&values, true).unwrap() + 1.3).abs() < 1e-12);
//! ```
//!
//! Invalid input is reported, never clamped:
//!
//! ```
//! use numkit_stats::{DomainError, moment};
//!
//! assert!(matches!(moment(&[], 2), Err(DomainError::EmptyInput)));
//! assert!(matches!(moment(&[1.0], 0), Err(DomainError::InvalidOrder)));
//! ```

pub use self::{descriptive::DescriptiveStats, moment::*, shape::*};

pub mod descriptive;
pub mod moment;
pub mod shape;

/// A precondition of a statistics function was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DomainError {
    /// The input sequence contains no values.
    #[display("input sequence must not be empty")]
    EmptyInput,
    /// A central moment of order zero was requested.
    #[display("moment order must be greater than zero")]
    InvalidOrder,
}
