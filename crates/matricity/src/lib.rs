//! Matricity - finite functions as matrices over one-hot vectors
//!
//! Any function whose arguments and result range over finite, enumerable
//! sets can be written down as an explicit matrix. Number the inputs
//! `0..n` and the outputs `0..m`; column `c` of the `m × n` matrix is the
//! one-hot vector of the output for input `c`. Applying the matrix to the
//! one-hot vector of an input then reproduces the function.
//!
//! # Building Blocks
//!
//! | Type | Role |
//! |------|------|
//! | [`OneHot`] | Unit vector `(index, size)`, dense form generated lazily |
//! | [`Domain<T>`] | Ordered finite set of `T` with value ↔ index bijection |
//! | [`Product<C>`] | Cartesian product of base domains, mixed-radix indexed |
//! | [`FunctionMatrix`] | A total function `input → output` as a matrix |
//!
//! # Indexing
//!
//! A product of components with sizes `[r0, r1, ..., rk]` indexes its tuples
//! in mixed radix, last component fastest:
//!
//! ```text
//! (a, b) over sizes [3, 4]:   index = 4·a + b
//! ('a',0) ('a',1) ('a',2) ('a',3) ('b',0) ('b',1) ...
//!    0       1       2       3       4       5    ...
//! ```
//!
//! Products are stored as a flat list of base components, so
//! `(A × B) × C` and `A × (B × C)` are the same domain.
//!
//! # Example
//!
//! ```
//! use matricity::{Domain, FiniteDomain, FunctionMatrix, OneHot};
//!
//! let uint2 = Domain::new(0..4u8);
//! let maximum = FunctionMatrix::new(|(x, y): (u8, u8)| x.max(y), &uint2 * &uint2, uint2.clone());
//!
//! // (3, 2) is input column 14
//! let v = maximum.input().encode(&(3, 2)).unwrap();
//! assert_eq!(v, OneHot::new(14, 16));
//!
//! // max(3, 2) = 3
//! let out = maximum.apply(&v).unwrap();
//! assert_eq!(out, vec![0, 0, 0, 1]);
//! assert_eq!(uint2.decode_dense(out), Some(3));
//! ```
//!
//! # Design Principles
//!
//! - **Explicit domains**: a matrix is always built from a function and two
//!   domains; [`function_matrix!`] is sugar over the same constructor
//! - **No caching**: every application re-evaluates the function over the
//!   input domain in index order
//! - **Lazy vectors**: dense one-hot vectors and matrix rows are generated on
//!   demand and never stored
//! - **Immutable values**: domains and matrices are read-only after
//!   construction and share freely across threads

// Core vector arithmetic (one-hot vectors, mixed radix)
mod core;

// Base and product domains
pub mod domain;

// Function matrices
pub mod matrix;

// Lookup errors
pub mod error;

// Re-export submodules for external access
pub use core::onehot;
pub use core::radix;

// Re-export core types at crate root
pub use core::onehot::{Dense, OneHot};
pub use core::radix::MixedRadix;
pub use domain::{Components, Concat, Domain, Elements, Factors, FiniteDomain, Member, Product};
pub use error::LookupError;
pub use matrix::{FunctionMatrix, Row, Rows, RowsIter};

/// Prelude module for convenient imports.
///
/// ```
/// use matricity::prelude::*;
///
/// let bit = Domain::new([false, true]);
/// let pair = bit.product(&bit);
/// assert_eq!(pair.size(), 4);
/// ```
pub mod prelude {
    pub use crate::core::onehot::OneHot;
    pub use crate::domain::{Domain, Factors, FiniteDomain, Product};
    pub use crate::error::LookupError;
    pub use crate::function_matrix;
    pub use crate::matrix::{FunctionMatrix, Rows};
}
