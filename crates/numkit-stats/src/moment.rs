//! Mean and central moments.
//!
//! The k-th central moment of a sample `x` of length `n` is
//!
//! ```text
//! m_k = (1/n) * Σ (x_i - x̄)^k
//! ```
//!
//! [`variance`] and [`std_dev`] are the population (biased) forms derived
//! from `m_2`.

use crate::DomainError;

/// Computes the arithmetic mean of `values`.
///
/// # Errors
///
/// Returns [`DomainError::EmptyInput`] if `values` is empty.
///
/// # Examples
///
/// ```
/// # use numkit_stats::mean;
/// assert_eq!(mean(&[2.0, 4.0, 9.0]).unwrap(), 5.0);
/// ```
pub fn mean(values: &[f64]) -> Result<f64, DomainError> {
    if values.is_empty() {
        return Err(DomainError::EmptyInput);
    }
    Ok(sum(values) / len_f64(values))
}

/// Computes the `k`-th central moment of `values`.
///
/// `k` has no upper bound; orders larger than the sample size are
/// well-defined.
///
/// # Errors
///
/// * [`DomainError::EmptyInput`] if `values` is empty
/// * [`DomainError::InvalidOrder`] if `k` is zero
///
/// # Examples
///
/// ```
/// # use numkit_stats::moment;
/// let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(moment(&values, 1).unwrap(), 0.0);
/// assert_eq!(moment(&values, 2).unwrap(), 4.0);
/// ```
pub fn moment(values: &[f64], k: u32) -> Result<f64, DomainError> {
    if values.is_empty() {
        return Err(DomainError::EmptyInput);
    }
    if k == 0 {
        return Err(DomainError::InvalidOrder);
    }

    let x_bar = mean(values)?;
    let sum = values.iter().map(|&x| powu(x - x_bar, k)).sum::<f64>();
    Ok(sum / len_f64(values))
}

/// Computes the population variance of `values`, i.e. the 2nd central moment.
///
/// # Errors
///
/// Returns [`DomainError::EmptyInput`] if `values` is empty.
pub fn variance(values: &[f64]) -> Result<f64, DomainError> {
    moment(values, 2)
}

/// Computes the population standard deviation of `values`.
///
/// # Errors
///
/// Returns [`DomainError::EmptyInput`] if `values` is empty.
///
/// # Examples
///
/// ```
/// # use numkit_stats::std_dev;
/// let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(std_dev(&values).unwrap(), 2.0);
/// ```
pub fn std_dev(values: &[f64]) -> Result<f64, DomainError> {
    Ok(variance(values)?.sqrt())
}

fn sum(values: &[f64]) -> f64 {
    values.iter().copied().sum()
}

#[expect(clippy::cast_precision_loss)]
fn len_f64(values: &[f64]) -> f64 {
    values.len() as f64
}

// `powi` takes an `i32`; orders beyond that fall back to `powf`.
fn powu(base: f64, k: u32) -> f64 {
    i32::try_from(k).map_or_else(|_| base.powf(f64::from(k)), |k| base.powi(k))
}

#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    const EPS: f64 = 1e-9;

    fn random_samples(seed: u64) -> impl Iterator<Item = Vec<f64>> {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        (0..200).map(move |_| {
            let len = rng.random_range(1..64);
            (0..len).map(|_| rng.random_range(-100.0..100.0)).collect()
        })
    }

    #[test]
    fn test_mean_matches_reference() {
        for values in random_samples(1) {
            let mut reference = 0.0;
            for v in &values {
                reference += v;
            }
            #[expect(clippy::cast_precision_loss)]
            let reference = reference / values.len() as f64;
            assert!((mean(&values).unwrap() - reference).abs() < EPS);
        }
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), Err(DomainError::EmptyInput));
    }

    #[test]
    fn test_moment_empty_for_any_order() {
        for k in [0, 1, 2, 3, 100] {
            assert_eq!(moment(&[], k), Err(DomainError::EmptyInput));
        }
    }

    #[test]
    fn test_moment_zero_order() {
        for values in random_samples(2) {
            assert_eq!(moment(&values, 0), Err(DomainError::InvalidOrder));
        }
    }

    #[test]
    fn test_first_moment_is_zero() {
        for values in random_samples(3) {
            assert!(moment(&values, 1).unwrap().abs() < 1e-9);
        }
    }

    #[test]
    fn test_second_moment_is_squared_std_dev() {
        for values in random_samples(4) {
            let m2 = moment(&values, 2).unwrap();
            let sd = std_dev(&values).unwrap();
            assert!((m2 - sd * sd).abs() <= EPS * m2.max(1.0));
        }
    }

    #[test]
    fn test_known_moments() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(moment(&values, 2).unwrap(), 2.0);
        assert_eq!(moment(&values, 3).unwrap(), 0.0);
        assert!((moment(&values, 4).unwrap() - 6.8).abs() < EPS);
    }

    #[test]
    fn test_order_larger_than_sample() {
        let values = [-1.0, 1.0];
        assert_eq!(moment(&values, 10).unwrap(), 1.0);
        assert_eq!(moment(&values, 11).unwrap(), 0.0);
    }

    #[test]
    fn test_single_value() {
        let values = [42.0];
        assert_eq!(mean(&values).unwrap(), 42.0);
        assert_eq!(variance(&values).unwrap(), 0.0);
        assert_eq!(std_dev(&values).unwrap(), 0.0);
    }

    #[test]
    fn test_huge_order_uses_powf() {
        assert_eq!(powu(1.0, u32::MAX), 1.0);
        assert_eq!(powu(0.5, u32::MAX), 0.0);
        assert_eq!(powu(2.0, 3), 8.0);
    }
}
