//! Finite enumerable domains.
//!
//! A domain is an ordered finite set with a bijection to the indices
//! `0..size`. Every index names one basis vector of a one-hot space, so a
//! domain is also the translation between values and [`OneHot`] vectors.
//!
//! There are two shapes of domain, sharing the [`FiniteDomain`] contract:
//!
//! - [`Domain<T>`]: a base domain over values of one type, in the order the
//!   values were supplied.
//! - [`Product<C>`]: the Cartesian product of base domains, over tuples,
//!   indexed in mixed radix with the last component varying fastest.
//!
//! # Example
//!
//! ```
//! use matricity::{Domain, FiniteDomain};
//!
//! let a = Domain::new(['a', 'b']);
//! let b = Domain::new(0..2u8);
//! let c = &a * &b;
//!
//! let all: Vec<(char, u8)> = c.elements().collect();
//! assert_eq!(all, vec![('a', 0), ('a', 1), ('b', 0), ('b', 1)]);
//! assert_eq!(c.size(), 4);
//! ```

mod product;

pub use product::{Components, Concat, Digits, Factors, Joined, Product, MAX_ARITY};

use core::fmt;
use core::hash::Hash;
use core::iter::FusedIterator;
use std::sync::Arc;

use indexmap::IndexSet;

use crate::core::onehot::OneHot;
use crate::error::LookupError;

/// Values that can populate a domain.
///
/// The inverse map is a hash index, so members need equality and hashing;
/// decoding hands out owned copies, so they need `Clone`.
pub trait Member: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Member for T {}

/// The contract shared by base and composite domains.
pub trait FiniteDomain {
    /// The values this domain enumerates.
    type Element;

    /// Number of elements.
    ///
    /// A product with more than `usize::MAX` elements reports `usize::MAX`;
    /// [`checked_size`](Self::checked_size) tells the two apart.
    fn size(&self) -> usize;

    /// Number of elements, or `None` if it exceeds `usize::MAX`.
    #[inline]
    fn checked_size(&self) -> Option<usize> {
        Some(self.size())
    }

    /// Index of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotMember`] if `value` (or, for a composite
    /// domain, one of its tuple fields) is not a member, and
    /// [`LookupError::Overflow`] if its index exceeds `usize::MAX`.
    fn index_of(&self, value: &Self::Element) -> Result<usize, LookupError>;

    /// Element at `index`, or `None` if `index >= size()`.
    fn element_at(&self, index: usize) -> Option<Self::Element>;

    /// `true` if the domain has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// One-hot vector representing `value`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotMember`] if `value` is not a member, and
    /// [`LookupError::Overflow`] if the domain has more than `usize::MAX`
    /// elements.
    ///
    /// # Example
    ///
    /// ```
    /// use matricity::{Domain, FiniteDomain};
    ///
    /// let d = Domain::new([10, 20, 30]);
    /// assert_eq!(d.encode(&30).unwrap().index(), 2);
    /// ```
    #[inline]
    fn encode(&self, value: &Self::Element) -> Result<OneHot, LookupError> {
        let index = self.index_of(value)?;
        let size = self.checked_size().ok_or(LookupError::Overflow)?;
        Ok(OneHot::new(index, size))
    }

    /// Element at a position given as a raw index or a [`OneHot`].
    ///
    /// Returns `None` if the position is past the end.
    ///
    /// # Example
    ///
    /// ```
    /// use matricity::{Domain, FiniteDomain, OneHot};
    ///
    /// let d = Domain::new([10, 20, 30]);
    /// assert_eq!(d.decode(1usize), Some(20));
    /// assert_eq!(d.decode(OneHot::new(2, 3)), Some(30));
    /// assert_eq!(d.decode(3usize), None);
    /// ```
    #[inline]
    fn decode<P: Into<usize>>(&self, position: P) -> Option<Self::Element> {
        self.element_at(position.into())
    }

    /// Element at the position marked by a dense one-hot vector.
    ///
    /// Returns `None` if `vector` is not one-hot or is longer than the
    /// domain.
    ///
    /// # Example
    ///
    /// ```
    /// use matricity::{Domain, FiniteDomain};
    ///
    /// let d = Domain::new(["less", "same", "more"]);
    /// assert_eq!(d.decode_dense([0, 0, 1]), Some("more"));
    /// assert_eq!(d.decode_dense([1, 1, 0]), None);
    /// ```
    fn decode_dense<I>(&self, vector: I) -> Option<Self::Element>
    where
        I: IntoIterator<Item = u64>,
    {
        let v = OneHot::from_dense(vector)?;
        if v.size() > self.size() {
            return None;
        }
        self.element_at(v.index())
    }

    /// Iterates every element in index order.
    ///
    /// Each call starts a fresh traversal; nothing is cached. For a product
    /// with more than `usize::MAX` elements this yields the first
    /// `usize::MAX` of them.
    #[inline]
    fn elements(&self) -> Elements<'_, Self>
    where
        Self: Sized,
    {
        Elements {
            domain: self,
            front: 0,
            back: self.size(),
        }
    }
}

/// A base domain: an ordered set of values of one type.
///
/// Values keep the order in which they were supplied. A repeated value keeps
/// its first position; later repeats are dropped.
///
/// Clones share storage, so building products from a domain is cheap.
///
/// # Example
///
/// ```
/// use matricity::{Domain, FiniteDomain};
///
/// let d = Domain::new([10, 20, 30]);
/// assert_eq!(d.size(), 3);
/// assert_eq!(d.decode(1usize), Some(20));
/// assert_eq!(d.index_of(&30), Ok(2));
/// ```
#[derive(Clone)]
pub struct Domain<T> {
    values: Arc<IndexSet<T>>,
}

impl<T: Member> Domain<T> {
    /// Creates a domain enumerating `values` in order.
    #[must_use]
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            values: Arc::new(values.into_iter().collect()),
        }
    }

    /// Position of `value`, if it is a member.
    #[inline]
    #[must_use]
    pub fn position(&self, value: &T) -> Option<usize> {
        self.values.get_index_of(value)
    }

    /// `true` if `value` is a member.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.values.contains(value)
    }
}

impl<T> Domain<T> {
    /// Number of values.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` if there are no values.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`, borrowed.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get_index(index)
    }

    /// Borrowing iterator over the values in order.
    #[inline]
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.values.iter()
    }
}

impl<T: Member> FiniteDomain for Domain<T> {
    type Element = T;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn index_of(&self, value: &T) -> Result<usize, LookupError> {
        self.position(value).ok_or(LookupError::in_component(0))
    }

    #[inline]
    fn element_at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Member> FromIterator<T> for Domain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a, T: Member> IntoIterator for &'a Domain<T> {
    type Item = T;
    type IntoIter = Elements<'a, Domain<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements()
    }
}

impl<T: PartialEq> PartialEq for Domain<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.values, &other.values) || self.values.iter().eq(other.values.iter())
    }
}

impl<T: Eq> Eq for Domain<T> {}

impl<T: fmt::Debug> fmt::Debug for Domain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Domain")
            .field(&self.values.iter().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Domain<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.values.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Domain<T>
where
    T: Member + serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Vec<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::new)
    }
}

/// Iterator over the elements of a domain in index order.
///
/// Produced by [`FiniteDomain::elements`]. Yields the same sequence as
/// calling [`FiniteDomain::element_at`] for `0..size()`.
pub struct Elements<'a, D> {
    domain: &'a D,
    front: usize,
    back: usize,
}

impl<D> Clone for Elements<'_, D> {
    fn clone(&self) -> Self {
        Self {
            domain: self.domain,
            front: self.front,
            back: self.back,
        }
    }
}

impl<D> fmt::Debug for Elements<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Elements")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

impl<D: FiniteDomain> Iterator for Elements<'_, D> {
    type Item = D::Element;

    #[inline]
    fn next(&mut self) -> Option<D::Element> {
        if self.front >= self.back {
            return None;
        }
        let item = self.domain.element_at(self.front)?;
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<D: FiniteDomain> DoubleEndedIterator for Elements<'_, D> {
    #[inline]
    fn next_back(&mut self) -> Option<D::Element> {
        if self.front >= self.back {
            return None;
        }
        let item = self.domain.element_at(self.back - 1)?;
        self.back -= 1;
        Some(item)
    }
}

impl<D: FiniteDomain> ExactSizeIterator for Elements<'_, D> {}

impl<D: FiniteDomain> FusedIterator for Elements<'_, D> {}
