//! Finite functions as matrices over one-hot vectors.
//!
//! A [`FunctionMatrix`] pairs a total function with an input domain and an
//! output domain. Its conceptual shape is `output.size()` rows by
//! `input.size()` columns, where column `c` is the one-hot encoding of the
//! function's result on input element `c`. Multiplying the matrix by the
//! one-hot encoding of an input therefore yields the one-hot encoding of the
//! output.
//!
//! Nothing is cached: every [`apply`](FunctionMatrix::apply) and
//! [`rows`](FunctionMatrix::rows) call evaluates the function once per input
//! element, in index order.
//!
//! # Example
//!
//! ```
//! use matricity::{Domain, FiniteDomain, FunctionMatrix};
//!
//! let uint2 = Domain::new(0..4u8);
//! let enum3 = Domain::new(["less", "same", "more"]);
//!
//! let compare = FunctionMatrix::new(
//!     |(x, y): (u8, u8)| match x.cmp(&y) {
//!         std::cmp::Ordering::Less => "less",
//!         std::cmp::Ordering::Equal => "same",
//!         std::cmp::Ordering::Greater => "more",
//!     },
//!     &uint2 * &uint2,
//!     enum3.clone(),
//! );
//!
//! let v = compare.input().encode(&(3, 2)).unwrap();
//! let out = compare.apply(&v).unwrap();
//! assert_eq!(out, vec![0, 0, 1]);
//! assert_eq!(enum3.decode_dense(out), Some("more"));
//! ```

mod macros;
mod rows;

pub use rows::{Row, Rows, RowsIter};

use tracing::{debug, trace};

use crate::core::onehot::OneHot;
use crate::domain::FiniteDomain;
use crate::error::LookupError;

/// A total function between two finite domains, viewed as a matrix.
///
/// The function receives input elements by value: a base input domain passes
/// its element, a product input domain passes the element tuple. The
/// [`function_matrix!`](crate::function_matrix) macro accepts separately named
/// parameters instead and destructures the tuple.
pub struct FunctionMatrix<F, I, O> {
    function: F,
    input: I,
    output: O,
}

impl<F, I, O> FunctionMatrix<F, I, O>
where
    I: FiniteDomain,
    O: FiniteDomain,
    F: Fn(I::Element) -> O::Element,
{
    /// Encodes `function` from `input` to `output`.
    ///
    /// # Example
    ///
    /// ```
    /// use matricity::{Domain, FunctionMatrix};
    ///
    /// let uint2 = Domain::new(0..4u8);
    /// let m = FunctionMatrix::new(|(x, y): (u8, u8)| x.max(y), &uint2 * &uint2, uint2.clone());
    /// assert_eq!(m.shape(), (4, 16));
    /// ```
    #[inline]
    #[must_use]
    pub fn new(function: F, input: I, output: O) -> Self {
        Self {
            function,
            input,
            output,
        }
    }

    /// `(rows, columns)`: the output and input domain sizes.
    #[inline]
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.output.size(), self.input.size())
    }

    /// Evaluates the function on `argument` and encodes the result.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if the result is not a member of the output
    /// domain.
    #[inline]
    pub fn evaluate(&self, argument: I::Element) -> Result<OneHot, LookupError> {
        self.output.encode(&(self.function)(argument))
    }

    /// Multiplies the matrix by a one-hot input vector.
    ///
    /// For a function this is the one-hot encoding of its output, as a dense
    /// vector of length `output.size()`. An `input` whose index is past the
    /// last column selects nothing and yields all zeros.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if the function maps any input element outside
    /// the output domain.
    ///
    /// # Example
    ///
    /// ```
    /// use matricity::{Domain, FiniteDomain, FunctionMatrix};
    ///
    /// let uint2 = Domain::new(0..4u8);
    /// let maximum = FunctionMatrix::new(|(x, y): (u8, u8)| x.max(y), &uint2 * &uint2, uint2.clone());
    /// let v = maximum.input().encode(&(3, 2)).unwrap();
    /// assert_eq!(maximum.apply(&v).unwrap(), vec![0, 0, 0, 1]);
    /// ```
    pub fn apply(&self, input: &OneHot) -> Result<Vec<u64>, LookupError> {
        let table = self.tabulate()?;
        let mut result = vec![0; self.output.size()];
        if let Some(&row) = table.get(input.index()) {
            result[row] = 1;
        }
        Ok(result)
    }

    /// Multiplies the matrix by an arbitrary count vector.
    ///
    /// The result is the linear combination of the matrix columns weighted by
    /// `weights`: output entry `r` is the total weight of the input elements
    /// mapped to `r`. Missing trailing weights count as `0`; extra ones are
    /// ignored. Entries saturate at `u64::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if the function maps any input element outside
    /// the output domain.
    ///
    /// # Example
    ///
    /// ```
    /// use matricity::{Domain, FunctionMatrix};
    ///
    /// let uint2 = Domain::new(0..4u8);
    /// let parity = Domain::new([false, true]);
    /// let odd = FunctionMatrix::new(|x: u8| x % 2 == 1, uint2, parity);
    ///
    /// // two 0s, one 1, one 2, three 3s
    /// assert_eq!(odd.apply_weighted([2, 1, 1, 3]).unwrap(), vec![3, 4]);
    /// ```
    pub fn apply_weighted<W>(&self, weights: W) -> Result<Vec<u64>, LookupError>
    where
        W: IntoIterator<Item = u64>,
    {
        let (height, width) = self.shape();
        trace!(height, width, "applying function matrix to weights");

        let table = self.tabulate()?;
        let mut result: Vec<u64> = vec![0; height];
        for (&row, weight) in table.iter().zip(weights) {
            result[row] = result[row].saturating_add(weight);
        }
        Ok(result)
    }

    /// Materializes the matrix row by row.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if the function maps any input element outside
    /// the output domain.
    ///
    /// # Example
    ///
    /// ```
    /// use matricity::{Domain, FunctionMatrix};
    ///
    /// let uint2 = Domain::new(0..4u8);
    /// let maximum = FunctionMatrix::new(|(x, y): (u8, u8)| x.max(y), &uint2 * &uint2, uint2.clone());
    /// let rows = maximum.rows().unwrap();
    /// assert_eq!(
    ///     rows.to_string(),
    ///     "[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]\n\
    ///      [0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]\n\
    ///      [0, 0, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0]\n\
    ///      [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 1, 1]"
    /// );
    /// ```
    pub fn rows(&self) -> Result<Rows, LookupError> {
        let table = self.tabulate()?;
        Ok(Rows::new(table, self.output.size()))
    }

    /// Output row index of every input column, in column order.
    fn tabulate(&self) -> Result<Vec<usize>, LookupError> {
        let (height, width) = self.shape();
        debug!(height, width, "tabulating function matrix");
        self.input
            .elements()
            .enumerate()
            .map(|(column, argument)| {
                let result = (self.function)(argument);
                self.output.index_of(&result).inspect_err(|e| {
                    debug!(
                        column,
                        error = %e,
                        "function result outside output domain"
                    );
                })
            })
            .collect()
    }
}

impl<F, I, O> FunctionMatrix<F, I, O> {
    /// The input domain (columns).
    #[inline]
    #[must_use]
    pub fn input(&self) -> &I {
        &self.input
    }

    /// The output domain (rows).
    #[inline]
    #[must_use]
    pub fn output(&self) -> &O {
        &self.output
    }

    /// The encoded function.
    #[inline]
    #[must_use]
    pub fn function(&self) -> &F {
        &self.function
    }
}

impl<F, I: Clone, O: Clone> Clone for FunctionMatrix<F, I, O>
where
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            input: self.input.clone(),
            output: self.output.clone(),
        }
    }
}

impl<F, I: core::fmt::Debug, O: core::fmt::Debug> core::fmt::Debug for FunctionMatrix<F, I, O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FunctionMatrix")
            .field("input", &self.input)
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}
