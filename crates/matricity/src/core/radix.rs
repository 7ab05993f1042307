//! Mixed-radix positional arithmetic.
//!
//! A composite domain with component sizes `[r0, r1, ..., rk]` numbers its
//! tuples like a positional number system where place `i` has radix `ri` and
//! the last place varies fastest:
//!
//! ```text
//! index = d0·(r1·r2·…·rk) + d1·(r2·…·rk) + … + dk
//! ```
//!
//! The number of representable indices can exceed `usize::MAX`. All
//! arithmetic is checked: such a system still splits every `usize` index and
//! combines every digit sequence whose index fits.

/// Radices of a mixed-radix number system, most significant first.
///
/// # Example
///
/// ```
/// use matricity::radix::MixedRadix;
///
/// let r = MixedRadix::new(vec![3, 4]);
/// assert_eq!(r.size(), Some(12));
/// assert_eq!(r.combine(&[1, 2]), Some(6));
/// assert_eq!(r.split(6), Some(vec![1, 2]));
/// assert_eq!(r.split(12), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MixedRadix {
    radices: Vec<usize>,
    size: Option<usize>,
}

impl MixedRadix {
    /// Creates a number system from its radices, most significant first.
    #[must_use]
    pub fn new(radices: Vec<usize>) -> Self {
        let size = radices
            .iter()
            .try_fold(1usize, |size, &radix| size.checked_mul(radix));
        Self { radices, size }
    }

    /// The radices, most significant first.
    #[inline]
    #[must_use]
    pub fn radices(&self) -> &[usize] {
        &self.radices
    }

    /// Number of representable indices: the product of all radices, or
    /// `None` if it exceeds `usize::MAX`.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Option<usize> {
        self.size
    }

    /// Combines per-place digits into a single index.
    ///
    /// Scans from the least significant place, accumulating
    /// `digit · place_value` and growing the place value by each radix.
    /// Returns `None` if `digits` does not have one entry per radix, if a
    /// digit is not below its radix, or if the index exceeds `usize::MAX`.
    #[must_use]
    pub fn combine(&self, digits: &[usize]) -> Option<usize> {
        if digits.len() != self.radices.len() {
            return None;
        }
        let mut index = 0usize;
        let mut place = Some(1usize);
        for (&digit, &radix) in digits.iter().zip(&self.radices).rev() {
            if digit >= radix {
                return None;
            }
            if digit > 0 {
                index = index.checked_add(place?.checked_mul(digit)?)?;
            }
            place = place.and_then(|place| place.checked_mul(radix));
        }
        Some(index)
    }

    /// Splits an index into per-place digits.
    ///
    /// Inverse of [`combine`](Self::combine). Returns `None` if `index` is
    /// not below [`size`](Self::size).
    #[must_use]
    pub fn split(&self, index: usize) -> Option<Vec<usize>> {
        let mut digits = vec![0; self.radices.len()];
        self.split_into(index, &mut digits).then_some(digits)
    }

    /// Writes the digits of `index` into `digits`, one per radix.
    ///
    /// Returns `false`, leaving `digits` unspecified, if `index` is out of
    /// range or `digits` has the wrong length.
    pub fn split_into(&self, mut index: usize, digits: &mut [usize]) -> bool {
        if digits.len() != self.radices.len() {
            return false;
        }
        for (digit, &radix) in digits.iter_mut().zip(&self.radices).rev() {
            if radix == 0 {
                return false;
            }
            *digit = index % radix;
            index /= radix;
        }
        index == 0
    }
}
