use std::{
    fmt,
    io::{self, Write as _},
};

use crate::{ConstructionError, Numeric};

/// A value paired with its index label.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<D, I> {
    /// The label attached to `value`.
    pub index: I,
    /// The stored value.
    pub value: D,
}

impl<D, I> fmt::Display for Entry<D, I>
where
    D: fmt::Display,
    I: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.index, self.value)
    }
}

/// An ordered collection of values, each tagged with an index label.
///
/// The entry count never changes after construction. The only mutation is
/// [`sort_by_value`](Self::sort_by_value), which permanently replaces the
/// construction order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<D, I = usize> {
    entries: Vec<Entry<D, I>>,
}

impl<D> Series<D>
where
    D: Numeric,
{
    /// Creates a series whose index labels enumerate `0..n` in order.
    #[must_use]
    pub fn from_values(values: Vec<D>) -> Self {
        values.into_iter().enumerate().collect()
    }
}

impl<D, I> Series<D, I>
where
    D: Numeric,
{
    /// Creates a series by pairing `values` and `indices` element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::LengthMismatch`] if the two collections
    /// differ in length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit_series::{ConstructionError, Series};
    /// let series = Series::new(vec![1.5, 2.5], vec!['x', 'y']).unwrap();
    /// assert_eq!(series.len(), 2);
    ///
    /// let err = Series::new(vec![1.5, 2.5], vec!['x']).unwrap_err();
    /// assert_eq!(err, ConstructionError::LengthMismatch { values: 2, indices: 1 });
    /// ```
    pub fn new(values: Vec<D>, indices: Vec<I>) -> Result<Self, ConstructionError> {
        if values.len() != indices.len() {
            return Err(ConstructionError::LengthMismatch {
                values: values.len(),
                indices: indices.len(),
            });
        }
        Ok(indices.into_iter().zip(values).collect())
    }

    /// Reorders entries by ascending value, carrying index labels along.
    ///
    /// The sort is stable: entries with equal values keep their relative
    /// order. Sorting an already sorted series is a no-op.
    pub fn sort_by_value(&mut self) {
        self.entries.sort_by(|a, b| Numeric::total_cmp(&a.value, &b.value));
    }

    /// Returns `true` if values are non-decreasing from first to last entry.
    #[must_use]
    pub fn is_sorted_by_value(&self) -> bool {
        self.entries
            .is_sorted_by(|a, b| Numeric::total_cmp(&a.value, &b.value).is_le())
    }
}

impl<D, I> Series<D, I> {
    /// The number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the series holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in current order.
    #[must_use]
    pub fn entries(&self) -> &[Entry<D, I>] {
        &self.entries
    }

    /// Iterates over entries in current order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<D, I>> {
        self.entries.iter()
    }

    /// Iterates over values in current order.
    pub fn values(&self) -> impl Iterator<Item = &D> + '_ {
        self.entries.iter().map(|e| &e.value)
    }

    /// Iterates over index labels in current order.
    pub fn indices(&self) -> impl Iterator<Item = &I> + '_ {
        self.entries.iter().map(|e| &e.index)
    }

    /// Consumes the series, returning its entries in current order.
    #[must_use]
    pub fn into_entries(self) -> Vec<Entry<D, I>> {
        self.entries
    }
}

impl<D, I> Series<D, I>
where
    D: fmt::Display,
    I: fmt::Display,
{
    /// Writes every entry as `index<TAB>value`, one per line, in current order.
    pub fn write_to<W>(&self, mut writer: W) -> io::Result<()>
    where
        W: io::Write,
    {
        for entry in &self.entries {
            writeln!(writer, "{entry}")?;
        }
        Ok(())
    }

    /// Prints the series to standard output.
    pub fn print(&self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout)?;
        stdout.flush()
    }
}

impl<D, I> fmt::Display for Series<D, I>
where
    D: fmt::Display,
    I: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl<D, I> FromIterator<(I, D)> for Series<D, I> {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (I, D)>,
    {
        let entries = iter
            .into_iter()
            .map(|(index, value)| Entry { index, value })
            .collect();
        Self { entries }
    }
}

impl<D> From<Vec<D>> for Series<D>
where
    D: Numeric,
{
    fn from(values: Vec<D>) -> Self {
        Self::from_values(values)
    }
}

impl<'a, D, I> IntoIterator for &'a Series<D, I> {
    type Item = &'a Entry<D, I>;
    type IntoIter = std::slice::Iter<'a, Entry<D, I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
