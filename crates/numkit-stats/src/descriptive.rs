use crate::{DomainError, moment, shape};

/// Descriptive statistics summarizing a numeric sequence.
///
/// This structure gathers the extremes together with every moment-based
/// statistic of the sequence. Dispersion and shape follow the population
/// (biased) definitions used throughout this crate.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DescriptiveStats {
    /// The number of values in the sequence.
    pub count: usize,
    /// The minimum value in the sequence.
    pub min: f64,
    /// The maximum value in the sequence.
    pub max: f64,
    /// The arithmetic mean of the sequence.
    pub mean: f64,
    /// The population variance (2nd central moment).
    pub variance: f64,
    /// The population standard deviation.
    pub std_dev: f64,
    /// The skewness `m_3 / m_2^(3/2)`.
    pub skew: f64,
    /// The excess kurtosis `m_4 / m_2^2 - 3`.
    pub excess_kurtosis: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics of `values`.
    ///
    /// Values are read in the given order; no sorting takes place.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyInput`] if `values` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit_stats::DescriptiveStats;
    /// let stats = DescriptiveStats::new(&[5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// assert_eq!(stats.count, 5);
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.variance, 2.0);
    /// ```
    pub fn new(values: &[f64]) -> Result<Self, DomainError> {
        let mean = moment::mean(values)?;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let variance = moment::variance(values)?;

        Ok(Self {
            count: values.len(),
            min,
            max,
            mean,
            variance,
            std_dev: variance.sqrt(),
            skew: shape::skew(values)?,
            excess_kurtosis: shape::excess_kurtosis(values)?,
        })
    }

    /// The distance between the largest and smallest value.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}
