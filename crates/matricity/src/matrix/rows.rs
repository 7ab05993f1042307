//! Row-wise view of a tabulated function matrix.
//!
//! A total function has exactly one `1` per column, so the whole matrix is
//! determined by the row index of each column. [`Rows`] stores only that
//! column-to-row table and expands rows into dense `0`/`1` entries on demand.

use core::fmt;
use core::iter::FusedIterator;

use crate::core::onehot::OneHot;

/// The rows of a function matrix.
///
/// Row `r`, column `c` is `1` when the function maps input element `c` to
/// output element `r`, and `0` otherwise.
///
/// # Example
///
/// ```
/// use matricity::{Domain, FunctionMatrix};
///
/// let bit = Domain::new([false, true]);
/// let not = FunctionMatrix::new(|x: bool| !x, bit.clone(), bit);
/// let rows = not.rows().unwrap();
///
/// assert_eq!(rows.to_dense(), vec![vec![0, 1], vec![1, 0]]);
/// assert_eq!(rows.to_string(), "[0, 1]\n[1, 0]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rows {
    table: Vec<usize>,
    height: usize,
}

impl Rows {
    /// Creates the view from each column's row index.
    ///
    /// Every entry of `table` must be below `height`.
    #[inline]
    #[must_use]
    pub(crate) fn new(table: Vec<usize>, height: usize) -> Self {
        debug_assert!(table.iter().all(|&row| row < height));
        Self { table, height }
    }

    /// Number of rows (output domain size).
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns (input domain size).
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.table.len()
    }

    /// Entry at (`row`, `column`); `0` outside the matrix.
    #[inline]
    #[must_use]
    pub fn entry(&self, row: usize, column: usize) -> u64 {
        u64::from(self.table.get(column) == Some(&row))
    }

    /// Row `index`, or `None` past the last row.
    #[inline]
    #[must_use]
    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        (index < self.height).then(|| Row {
            table: &self.table,
            row: index,
            front: 0,
            back: self.table.len(),
        })
    }

    /// Column `index` as a one-hot vector over the rows.
    #[inline]
    #[must_use]
    pub fn column(&self, index: usize) -> Option<OneHot> {
        self.table.get(index).map(|&row| OneHot::new(row, self.height))
    }

    /// Sum of each column, computed across the expanded rows.
    #[must_use]
    pub fn column_sums(&self) -> Vec<u64> {
        let mut sums = vec![0; self.width()];
        for row in self {
            for (sum, entry) in sums.iter_mut().zip(row) {
                *sum += entry;
            }
        }
        sums
    }

    /// `true` if every column sums to exactly one.
    #[must_use]
    pub fn is_total(&self) -> bool {
        self.column_sums().iter().all(|&sum| sum == 1)
    }

    /// Iterates the rows in output-index order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> RowsIter<'_> {
        RowsIter {
            rows: self,
            next: 0,
        }
    }

    /// Expands every row into a dense vector.
    #[must_use]
    pub fn to_dense(&self) -> Vec<Vec<u64>> {
        self.iter().map(Iterator::collect).collect()
    }
}

impl<'a> IntoIterator for &'a Rows {
    type Item = Row<'a>;
    type IntoIter = RowsIter<'a>;

    #[inline]
    fn into_iter(self) -> RowsIter<'a> {
        self.iter()
    }
}

impl fmt::Display for Rows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, entry) in row.enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{entry}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

/// Iterator over the rows of a [`Rows`] view.
#[derive(Debug, Clone)]
pub struct RowsIter<'a> {
    rows: &'a Rows,
    next: usize,
}

impl<'a> Iterator for RowsIter<'a> {
    type Item = Row<'a>;

    #[inline]
    fn next(&mut self) -> Option<Row<'a>> {
        let row = self.rows.row(self.next)?;
        self.next += 1;
        Some(row)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.rows.height.saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for RowsIter<'_> {}

impl FusedIterator for RowsIter<'_> {}

/// Dense entries of one matrix row, generated lazily.
#[derive(Debug, Clone)]
pub struct Row<'a> {
    table: &'a [usize],
    row: usize,
    front: usize,
    back: usize,
}

impl Row<'_> {
    /// Output index of this row.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.row
    }

    #[inline]
    fn entry(&self, column: usize) -> u64 {
        u64::from(self.table[column] == self.row)
    }
}

impl Iterator for Row<'_> {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        if self.front >= self.back {
            return None;
        }
        let entry = self.entry(self.front);
        self.front += 1;
        Some(entry)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Row<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<u64> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.entry(self.back))
    }
}

impl ExactSizeIterator for Row<'_> {}

impl FusedIterator for Row<'_> {}
