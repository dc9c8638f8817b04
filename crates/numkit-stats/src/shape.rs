//! Shape statistics derived from central moments.
//!
//! No guard is placed on `m_2 == 0`: a constant sequence yields an infinite
//! or NaN result following IEEE 754 division.

use crate::{DomainError, moment::moment};

/// Kurtosis of the normal distribution, subtracted to obtain excess kurtosis.
pub const NORMAL_KURTOSIS: f64 = 3.0;

/// Computes the sample skewness `m_3 / m_2^(3/2)`.
///
/// # Errors
///
/// Returns [`DomainError::EmptyInput`] if `values` is empty.
///
/// # Examples
///
/// ```
/// # use numkit_stats::skew;
/// let values = [2.0, 8.0, 0.0, 4.0, 1.0, 9.0, 9.0, 0.0];
/// assert!((skew(&values).unwrap() - 0.265_055_412_269_857_3).abs() < 1e-12);
/// ```
pub fn skew(values: &[f64]) -> Result<f64, DomainError> {
    if values.is_empty() {
        return Err(DomainError::EmptyInput);
    }
    let m2 = moment(values, 2)?;
    let m3 = moment(values, 3)?;
    Ok(m3 / (m2 * m2 * m2).sqrt())
}

/// Computes the sample kurtosis `m_4 / m_2^2`.
///
/// With `excess` set, [`NORMAL_KURTOSIS`] is subtracted so that a normal
/// distribution scores zero. Otherwise the raw (Pearson) kurtosis is
/// returned.
///
/// # Errors
///
/// Returns [`DomainError::EmptyInput`] if `values` is empty.
///
/// # Examples
///
/// ```
/// # use numkit_stats::kurtosis;
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!((kurtosis(&values, false).unwrap() - 1.7).abs() < 1e-12);
/// assert!((kurtosis(&values, true).unwrap() + 1.3).abs() < 1e-12);
/// ```
pub fn kurtosis(values: &[f64], excess: bool) -> Result<f64, DomainError> {
    if values.is_empty() {
        return Err(DomainError::EmptyInput);
    }
    let m2 = moment(values, 2)?;
    let m4 = moment(values, 4)?;
    let kurtosis = m4 / (m2 * m2);
    Ok(if excess {
        kurtosis - NORMAL_KURTOSIS
    } else {
        kurtosis
    })
}

/// Computes the excess kurtosis, same as `kurtosis(values, true)`.
///
/// # Errors
///
/// Returns [`DomainError::EmptyInput`] if `values` is empty.
pub fn excess_kurtosis(values: &[f64]) -> Result<f64, DomainError> {
    kurtosis(values, true)
}
