//! Lookup failures.
//!
//! A well-formed caller can observe two failures when translating a value
//! into a position:
//!
//! - the value has no index in a domain: [`FiniteDomain::encode`] was given a
//!   non-member, or a function encoded by a [`FunctionMatrix`] produced a
//!   result outside its output domain;
//! - the value is a member of a product with more than `usize::MAX`
//!   elements, and its position cannot be represented.
//!
//! [`FiniteDomain::encode`]: crate::domain::FiniteDomain::encode
//! [`FunctionMatrix`]: crate::matrix::FunctionMatrix

use thiserror::Error;

/// A value could not be translated into a domain position.
///
/// # Example
///
/// ```
/// use matricity::{Domain, FiniteDomain, LookupError};
///
/// let d = Domain::new([10, 20, 30]);
/// let err = d.encode(&40).unwrap_err();
/// assert_eq!(err, LookupError::in_component(0));
/// assert_eq!(err.component(), Some(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LookupError {
    /// The base component at `component` has no entry for the value (or for
    /// the value's tuple field at that position). Base domains report `0`.
    #[error("value is not a member of domain component {component}")]
    NotMember {
        /// Position of the component that rejected the value.
        component: usize,
    },

    /// The value is a member, but its index or the domain size exceeds
    /// `usize::MAX`.
    #[error("domain position exceeds usize::MAX")]
    Overflow,
}

impl LookupError {
    /// Creates a membership error for the component at `component`.
    #[inline]
    #[must_use]
    pub const fn in_component(component: usize) -> Self {
        Self::NotMember { component }
    }

    /// Position of the component that rejected the value, if the value was
    /// not a member.
    #[inline]
    #[must_use]
    pub const fn component(&self) -> Option<usize> {
        match self {
            Self::NotMember { component } => Some(*component),
            Self::Overflow => None,
        }
    }
}
