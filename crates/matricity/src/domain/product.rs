//! Cartesian products of base domains.
//!
//! A product is stored as a flat tuple of base domains rather than nested
//! pairs. Multiplying a product by a domain (on either side) or by another
//! product concatenates the component tuples, so `(a * b) * c` and
//! `a * (b * c)` are the same type and enumerate the same tuples at the same
//! indices.
//!
//! Products support up to [`MAX_ARITY`] components.
//!
//! # Example
//!
//! ```
//! use matricity::{Domain, Factors, FiniteDomain};
//!
//! let a = Domain::new(['a', 'b', 'c']);
//! let b = Domain::new(0..4u8);
//! let c = a.product(&b);
//!
//! assert_eq!(c.size(), 12);
//! assert_eq!(c.decode(6usize), Some(('b', 2)));
//! assert_eq!(c.encode(&('b', 2)).unwrap().index(), 6);
//! ```

use core::ops::Mul;

use super::{Domain, FiniteDomain, Member};
use crate::core::radix::MixedRadix;
use crate::error::LookupError;

/// Most components a product can have.
pub const MAX_ARITY: usize = 6;

/// Per-component positions of a product element, first component first.
///
/// Only the first [`Components::ARITY`] entries are meaningful.
pub type Digits = [usize; MAX_ARITY];

/// A tuple of base domains that can index a product.
///
/// Implemented for tuples of one to six [`Domain`]s.
pub trait Components: Clone {
    /// Tuple of the component element types.
    type Element;

    /// Number of components.
    const ARITY: usize;

    /// Component sizes, first component first.
    fn radices(&self) -> Vec<usize>;

    /// Per-component positions of the fields of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotMember`] naming the first field that is not
    /// a member of its component.
    fn digits(&self, value: &Self::Element) -> Result<Digits, LookupError>;

    /// Tuple whose fields sit at `digits` in their components.
    fn assemble(&self, digits: &Digits) -> Option<Self::Element>;
}

macro_rules! impl_components {
    ($arity:literal => $($T:ident . $idx:tt),+) => {
        impl<$($T: Member),+> Components for ($(Domain<$T>,)+) {
            type Element = ($($T,)+);

            const ARITY: usize = $arity;

            fn radices(&self) -> Vec<usize> {
                vec![$(self.$idx.len()),+]
            }

            fn digits(&self, value: &Self::Element) -> Result<Digits, LookupError> {
                let mut digits = [0; MAX_ARITY];
                $(
                    digits[$idx] = self.$idx
                        .position(&value.$idx)
                        .ok_or(LookupError::in_component($idx))?;
                )+
                Ok(digits)
            }

            fn assemble(&self, digits: &Digits) -> Option<Self::Element> {
                Some(($(self.$idx.get(digits[$idx])?.clone(),)+))
            }
        }
    };
}

impl_components!(1 => T0.0);
impl_components!(2 => T0.0, T1.1);
impl_components!(3 => T0.0, T1.1, T2.2);
impl_components!(4 => T0.0, T1.1, T2.2, T3.3);
impl_components!(5 => T0.0, T1.1, T2.2, T3.3, T4.4);
impl_components!(6 => T0.0, T1.1, T2.2, T3.3, T4.4, T5.5);

/// Flat concatenation of two tuples.
pub trait Concat<Rhs> {
    /// The concatenated tuple.
    type Output;

    /// Appends the fields of `rhs` after the fields of `self`.
    fn concat(self, rhs: Rhs) -> Self::Output;
}

macro_rules! impl_concat {
    ([$($L:ident . $l:tt),+] [$($R:ident . $r:tt),+]) => {
        impl<$($L,)+ $($R,)+> Concat<($($R,)+)> for ($($L,)+) {
            type Output = ($($L,)+ $($R,)+);

            #[inline]
            fn concat(self, rhs: ($($R,)+)) -> Self::Output {
                ($(self.$l,)+ $(rhs.$r,)+)
            }
        }
    };
}

impl_concat!([L0.0] [R0.0]);
impl_concat!([L0.0] [R0.0, R1.1]);
impl_concat!([L0.0] [R0.0, R1.1, R2.2]);
impl_concat!([L0.0] [R0.0, R1.1, R2.2, R3.3]);
impl_concat!([L0.0] [R0.0, R1.1, R2.2, R3.3, R4.4]);
impl_concat!([L0.0, L1.1] [R0.0]);
impl_concat!([L0.0, L1.1] [R0.0, R1.1]);
impl_concat!([L0.0, L1.1] [R0.0, R1.1, R2.2]);
impl_concat!([L0.0, L1.1] [R0.0, R1.1, R2.2, R3.3]);
impl_concat!([L0.0, L1.1, L2.2] [R0.0]);
impl_concat!([L0.0, L1.1, L2.2] [R0.0, R1.1]);
impl_concat!([L0.0, L1.1, L2.2] [R0.0, R1.1, R2.2]);
impl_concat!([L0.0, L1.1, L2.2, L3.3] [R0.0]);
impl_concat!([L0.0, L1.1, L2.2, L3.3] [R0.0, R1.1]);
impl_concat!([L0.0, L1.1, L2.2, L3.3, L4.4] [R0.0]);

/// Component tuple of the product of `A` and `B`.
pub type Joined<A, B> = <<A as Factors>::Factors as Concat<<B as Factors>::Factors>>::Output;

/// Domains that flatten into a tuple of base domains.
///
/// A base domain flattens to a one-tuple of itself; a product flattens to
/// its component tuple. [`product`](Self::product) concatenates the two
/// flattenings, which is what makes the product associative.
pub trait Factors {
    /// The flattened component tuple.
    type Factors;

    /// The component tuple. Components share storage with `self`.
    fn factors(&self) -> Self::Factors;

    /// Cartesian product of `self` and `other`, leaving both untouched.
    ///
    /// The result may have more than `usize::MAX` elements; see
    /// [`Product`] for how such a product behaves, and
    /// [`try_product`](Self::try_product) to reject it instead.
    ///
    /// # Example
    ///
    /// ```
    /// use matricity::{Domain, Factors, FiniteDomain};
    ///
    /// let bit = Domain::new([false, true]);
    /// let left = bit.product(&bit).product(&bit);
    /// let right = bit.product(&bit.product(&bit));
    /// assert_eq!(left, right);
    /// assert_eq!(left.decode(5usize), Some((true, false, true)));
    /// ```
    #[must_use]
    fn product<R>(&self, other: &R) -> Product<Joined<Self, R>>
    where
        R: Factors,
        Self::Factors: Concat<R::Factors>,
        Joined<Self, R>: Components,
    {
        Product::new(self.factors().concat(other.factors()))
    }

    /// Cartesian product of `self` and `other`, or `None` if it would have
    /// more than `usize::MAX` elements.
    ///
    /// # Example
    ///
    /// ```
    /// use matricity::{Domain, Factors};
    ///
    /// let bit = Domain::new([false, true]);
    /// let wide = Domain::new(0..=u16::MAX);
    /// assert!(bit.try_product(&wide).is_some());
    ///
    /// // 2^80 elements
    /// let quad = wide.product(&wide).product(&wide).product(&wide);
    /// assert!(quad.try_product(&wide).is_none());
    /// ```
    #[must_use]
    fn try_product<R>(&self, other: &R) -> Option<Product<Joined<Self, R>>>
    where
        R: Factors,
        Self::Factors: Concat<R::Factors>,
        Joined<Self, R>: Components,
    {
        Product::try_new(self.factors().concat(other.factors()))
    }
}

impl<T: Member> Factors for Domain<T> {
    type Factors = (Domain<T>,);

    #[inline]
    fn factors(&self) -> Self::Factors {
        (self.clone(),)
    }
}

impl<C: Components> Factors for Product<C> {
    type Factors = C;

    #[inline]
    fn factors(&self) -> C {
        self.components.clone()
    }
}

/// A composite domain: the Cartesian product of a tuple of base domains.
///
/// Elements are tuples with one field per component. Index `i` decodes by
/// reading `i` as a mixed-radix number whose place radices are the component
/// sizes, last component least significant.
///
/// # Capacity
///
/// Positions are `usize`. A product whose element count exceeds `usize::MAX`
/// can still be built with [`Product::new`], [`Factors::product`] or `*`:
///
/// - [`size`](FiniteDomain::size) saturates at `usize::MAX` and
///   [`checked_size`](FiniteDomain::checked_size) returns `None`;
/// - [`decode`](FiniteDomain::decode) and [`elements`](FiniteDomain::elements)
///   reach the first `usize::MAX` elements;
/// - [`index_of`](FiniteDomain::index_of) fails with
///   [`LookupError::Overflow`] for members past that range, and
///   [`encode`](FiniteDomain::encode) fails with it for every member, since
///   the one-hot vector's length is not representable.
///
/// [`Product::try_new`] and [`Factors::try_product`] refuse to build such a
/// product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product<C> {
    components: C,
    radix: MixedRadix,
}

impl<C: Components> Product<C> {
    /// Creates the product of a tuple of base domains.
    ///
    /// # Example
    ///
    /// ```
    /// use matricity::{Domain, FiniteDomain, Product};
    ///
    /// let p = Product::new((Domain::new(0..2u8), Domain::new(['x', 'y', 'z'])));
    /// assert_eq!(p.size(), 6);
    /// assert_eq!(p.decode(4usize), Some((1, 'y')));
    /// ```
    #[must_use]
    pub fn new(components: C) -> Self {
        let radix = MixedRadix::new(components.radices());
        Self { components, radix }
    }

    /// Creates the product, or `None` if it would have more than
    /// `usize::MAX` elements.
    #[must_use]
    pub fn try_new(components: C) -> Option<Self> {
        let product = Self::new(components);
        product.radix.size().is_some().then_some(product)
    }

    /// Number of components.
    #[inline]
    #[must_use]
    pub const fn arity(&self) -> usize {
        C::ARITY
    }

    /// The mixed-radix number system indexing this product.
    #[inline]
    #[must_use]
    pub fn radix(&self) -> &MixedRadix {
        &self.radix
    }
}

impl<C> Product<C> {
    /// The component tuple.
    #[inline]
    #[must_use]
    pub const fn components(&self) -> &C {
        &self.components
    }
}

impl<C: Components> FiniteDomain for Product<C> {
    type Element = C::Element;

    #[inline]
    fn size(&self) -> usize {
        self.radix.size().unwrap_or(usize::MAX)
    }

    #[inline]
    fn checked_size(&self) -> Option<usize> {
        self.radix.size()
    }

    fn index_of(&self, value: &C::Element) -> Result<usize, LookupError> {
        let digits = self.components.digits(value)?;
        self.radix
            .combine(&digits[..C::ARITY])
            .ok_or(LookupError::Overflow)
    }

    fn element_at(&self, index: usize) -> Option<C::Element> {
        let mut digits = [0; MAX_ARITY];
        if !self.radix.split_into(index, &mut digits[..C::ARITY]) {
            return None;
        }
        self.components.assemble(&digits)
    }
}

impl<'a, C: Components> IntoIterator for &'a Product<C> {
    type Item = C::Element;
    type IntoIter = super::Elements<'a, Product<C>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements()
    }
}

#[cfg(feature = "serde")]
impl<C: serde::Serialize> serde::Serialize for Product<C> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.components, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, C> serde::Deserialize<'de> for Product<C>
where
    C: Components + serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <C as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::new)
    }
}

impl<T, R> Mul<R> for Domain<T>
where
    T: Member,
    R: Factors,
    (Domain<T>,): Concat<R::Factors>,
    Joined<Domain<T>, R>: Components,
{
    type Output = Product<Joined<Domain<T>, R>>;

    #[inline]
    fn mul(self, rhs: R) -> Self::Output {
        self.product(&rhs)
    }
}

impl<T, R> Mul<&R> for &Domain<T>
where
    T: Member,
    R: Factors,
    (Domain<T>,): Concat<R::Factors>,
    Joined<Domain<T>, R>: Components,
{
    type Output = Product<Joined<Domain<T>, R>>;

    #[inline]
    fn mul(self, rhs: &R) -> Self::Output {
        self.product(rhs)
    }
}

impl<C, R> Mul<R> for Product<C>
where
    C: Components + Concat<R::Factors>,
    R: Factors,
    Joined<Product<C>, R>: Components,
{
    type Output = Product<Joined<Product<C>, R>>;

    #[inline]
    fn mul(self, rhs: R) -> Self::Output {
        Product::new(self.components.concat(rhs.factors()))
    }
}

impl<C, R> Mul<&R> for &Product<C>
where
    C: Components + Concat<R::Factors>,
    R: Factors,
    Joined<Product<C>, R>: Components,
{
    type Output = Product<Joined<Product<C>, R>>;

    #[inline]
    fn mul(self, rhs: &R) -> Self::Output {
        self.product(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_enumeration() {
        let a = Domain::new(['a', 'b']);
        let b = Domain::new(0..2u8);
        let c = &a * &b;
        let all: Vec<(char, u8)> = c.elements().collect();
        assert_eq!(all, vec![('a', 0), ('a', 1), ('b', 0), ('b', 1)]);
        assert_eq!(c.size(), 4);
        assert_eq!(c.arity(), 2);
    }

    #[test]
    fn test_encode_mixed_radix() {
        let a = Domain::new(['a', 'b', 'c']);
        let b = Domain::new(0..4u8);
        let c = a * b;
        let v = c.encode(&('b', 2)).unwrap();
        assert_eq!(v.index(), 6);
        assert_eq!(v.size(), 12);
        let dense: Vec<u64> = v.iter().collect();
        assert_eq!(dense, vec![0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_decode_onehot() {
        let a = Domain::new(['a', 'b', 'c']);
        let b = Domain::new(0..4u8);
        let c = &a * &b;
        let v = c.encode(&('c', 3)).unwrap();
        assert_eq!(c.decode(v), Some(('c', 3)));
        assert_eq!(c.decode_dense(v.iter()), Some(('c', 3)));
    }

    #[test]
    fn test_encode_reports_component() {
        let a = Domain::new(['a', 'b']);
        let b = Domain::new(0..2u8);
        let c = &a * &b;
        assert_eq!(c.encode(&('z', 0)), Err(LookupError::in_component(0)));
        assert_eq!(c.encode(&('a', 9)), Err(LookupError::in_component(1)));
    }

    #[test]
    fn test_associativity() {
        let a = Domain::new(["x", "y"]);
        let b = Domain::new(0..3i32);
        let c = Domain::new([true, false]);

        let left = (&a * &b) * c.clone();
        let right = a.clone() * (&b * &c);
        assert_eq!(left.size(), right.size());
        for i in 0..left.size() {
            assert_eq!(left.decode(i), right.decode(i));
        }
    }

    #[test]
    fn test_product_of_products() {
        let bit = Domain::new([0u8, 1]);
        let pair = &bit * &bit;
        let quad = &pair * &pair;
        assert_eq!(quad.arity(), 4);
        assert_eq!(quad.size(), 16);
        assert_eq!(quad.decode(0b1011usize), Some((1, 0, 1, 1)));
    }

    #[test]
    fn test_operands_untouched() {
        let a = Domain::new([1, 2, 3]);
        let b = Domain::new([4, 5]);
        let _ = a.product(&b);
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn test_empty_component() {
        let a = Domain::new([1, 2]);
        let b: Domain<i32> = Domain::new([]);
        let c = &a * &b;
        assert_eq!(c.size(), 0);
        assert_eq!(c.elements().count(), 0);
        assert_eq!(c.decode(0usize), None);
    }

    #[test]
    fn test_roundtrip_six() {
        let d = Domain::new(0..2u8);
        let p = &(&(&d * &d) * &(&d * &d)) * &(&d * &d);
        assert_eq!(p.arity(), 6);
        for i in 0..p.size() {
            let v = p.decode(i).unwrap();
            assert_eq!(p.index_of(&v), Ok(i));
        }
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_size_past_usize() {
        let wide = Domain::new(0..=u16::MAX);
        let quad = wide.product(&wide).product(&wide).product(&wide);
        assert_eq!(quad.checked_size(), None);
        assert_eq!(quad.size(), usize::MAX);
        assert!(!FiniteDomain::is_empty(&quad));

        assert_eq!(quad.decode(0usize), Some((0, 0, 0, 0)));
        assert_eq!(quad.decode(usize::MAX), Some((u16::MAX, u16::MAX, u16::MAX, u16::MAX)));
        let first: Vec<(u16, u16, u16, u16)> = quad.elements().take(2).collect();
        assert_eq!(first, vec![(0, 0, 0, 0), (0, 0, 0, 1)]);

        assert_eq!(quad.index_of(&(0, 0, 1, 2)), Ok(0x1_0002));
        assert_eq!(quad.encode(&(0, 0, 1, 2)), Err(LookupError::Overflow));
    }

    #[test]
    fn test_index_past_usize() {
        let wide = Domain::new(0..=u16::MAX);
        let five = wide.product(&wide).product(&wide).product(&wide).product(&wide);
        assert_eq!(five.index_of(&(0, 0, 0, 0, 9)), Ok(9));
        assert_eq!(five.index_of(&(1, 0, 0, 0, 0)), Err(LookupError::Overflow));
        assert_eq!(five.index_of(&(1, 0, 0, 0, 7)), Err(LookupError::Overflow));
    }

    #[test]
    fn test_try_product_limit() {
        let wide = Domain::new(0..=u16::MAX);
        let quad = &(&wide * &wide) * &(&wide * &wide);
        assert!(quad.try_product(&wide).is_none());
        assert!(Product::try_new(quad.components().clone()).is_none());

        let small = Domain::new(0..3u8);
        let pair = small.try_product(&small).unwrap();
        assert_eq!(pair.checked_size(), Some(9));
        assert_eq!(pair.radix().radices(), &[3, 3]);
    }
}
