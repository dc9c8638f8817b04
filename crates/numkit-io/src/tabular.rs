/// Rows of floating-point values, one per input line.
///
/// Rows keep the order of the lines they were parsed from and may differ in
/// length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabularData {
    rows: Vec<Vec<f64>>,
}

impl TabularData {
    #[must_use]
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Length of the longest row, or 0 when there are no rows.
    #[must_use]
    pub fn max_row_len(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Collects the `index`-th value of every row long enough to have one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit_io::TabularData;
    /// let data = TabularData::new(vec![vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0]]);
    /// assert_eq!(data.column(0), [1.0, 3.0, 4.0]);
    /// assert_eq!(data.column(1), [2.0, 5.0]);
    /// assert!(data.column(2).is_empty());
    /// ```
    #[must_use]
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.rows
            .iter()
            .filter_map(|row| row.get(index).copied())
            .collect()
    }

    /// All columns up to [`max_row_len`](Self::max_row_len).
    #[must_use]
    pub fn columns(&self) -> Vec<Vec<f64>> {
        (0..self.max_row_len()).map(|i| self.column(i)).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<f64>> {
        self.rows.iter()
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }
}

impl From<Vec<Vec<f64>>> for TabularData {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self::new(rows)
    }
}

impl<'a> IntoIterator for &'a TabularData {
    type Item = &'a Vec<f64>;
    type IntoIter = std::slice::Iter<'a, Vec<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
