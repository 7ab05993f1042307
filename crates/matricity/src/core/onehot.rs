//! One-hot unit vectors.
//!
//! A one-hot vector of length `size` has a single entry equal to `1` at
//! `index` and `0` everywhere else, so the pair `(index, size)` identifies it
//! completely. The dense form is never stored; [`OneHot::iter`] generates it
//! on demand.

use core::iter::FusedIterator;

/// A unit vector over a basis of `size` elements.
///
/// # Invariant
///
/// `index < size`. [`OneHot::new`] checks this in debug builds only;
/// [`OneHot::try_new`] checks it always.
///
/// # Example
///
/// ```
/// use matricity::OneHot;
///
/// let v = OneHot::new(7, 16);
/// assert_eq!(v.index(), 7);
/// assert_eq!(usize::from(v), 7);
///
/// let dense: Vec<u64> = v.iter().collect();
/// assert_eq!(dense.len(), 16);
/// assert_eq!(dense.iter().sum::<u64>(), 1);
/// assert_eq!(dense[7], 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OneHot {
    index: usize,
    size: usize,
}

impl OneHot {
    /// Creates the unit vector with its `1` at `index` in a basis of `size`.
    ///
    /// Callers must ensure `index < size`.
    #[inline]
    #[must_use]
    pub const fn new(index: usize, size: usize) -> Self {
        debug_assert!(index < size, "one-hot index out of range");
        Self { index, size }
    }

    /// Creates the unit vector, or `None` if `index >= size`.
    ///
    /// # Example
    ///
    /// ```
    /// use matricity::OneHot;
    ///
    /// assert!(OneHot::try_new(3, 4).is_some());
    /// assert!(OneHot::try_new(4, 4).is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn try_new(index: usize, size: usize) -> Option<Self> {
        if index < size {
            Some(Self { index, size })
        } else {
            None
        }
    }

    /// Recovers a unit vector from its dense form.
    ///
    /// Returns `None` unless exactly one entry is `1` and every other entry
    /// is `0`.
    ///
    /// # Example
    ///
    /// ```
    /// use matricity::OneHot;
    ///
    /// assert_eq!(OneHot::from_dense([0, 0, 1, 0]), Some(OneHot::new(2, 4)));
    /// assert_eq!(OneHot::from_dense([0, 1, 1, 0]), None);
    /// assert_eq!(OneHot::from_dense([0, 0, 0, 0]), None);
    /// assert_eq!(OneHot::from_dense([0, 2, 0, 0]), None);
    /// ```
    #[must_use]
    pub fn from_dense<I>(entries: I) -> Option<Self>
    where
        I: IntoIterator<Item = u64>,
    {
        let mut found = None;
        let mut size = 0;
        for (position, entry) in entries.into_iter().enumerate() {
            match entry {
                0 => {}
                1 if found.is_none() => found = Some(position),
                _ => return None,
            }
            size = position + 1;
        }
        found.map(|index| Self { index, size })
    }

    /// Position of the `1` entry.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Length of the vector.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Dot product with a dense vector.
    ///
    /// Selects the entry of `vector` at this vector's index; entries past the
    /// end of `vector` count as `0`.
    ///
    /// # Example
    ///
    /// ```
    /// use matricity::OneHot;
    ///
    /// assert_eq!(OneHot::new(1, 3).dot(&[4, 5, 6]), 5);
    /// assert_eq!(OneHot::new(2, 3).dot(&[4, 5]), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn dot(&self, vector: &[u64]) -> u64 {
        vector.get(self.index).copied().unwrap_or(0)
    }

    /// Iterates the dense entries: `1` at the index, `0` elsewhere.
    ///
    /// Each call starts a fresh traversal.
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> Dense {
        Dense {
            index: self.index,
            front: 0,
            back: self.size,
        }
    }
}

impl From<OneHot> for usize {
    #[inline]
    fn from(v: OneHot) -> Self {
        v.index
    }
}

impl From<&OneHot> for usize {
    #[inline]
    fn from(v: &OneHot) -> Self {
        v.index
    }
}

impl IntoIterator for OneHot {
    type Item = u64;
    type IntoIter = Dense;

    #[inline]
    fn into_iter(self) -> Dense {
        self.iter()
    }
}

impl IntoIterator for &OneHot {
    type Item = u64;
    type IntoIter = Dense;

    #[inline]
    fn into_iter(self) -> Dense {
        self.iter()
    }
}

/// Lazy dense form of a [`OneHot`].
#[derive(Debug, Clone)]
pub struct Dense {
    index: usize,
    front: usize,
    back: usize,
}

impl Dense {
    #[inline]
    fn entry(&self, position: usize) -> u64 {
        u64::from(position == self.index)
    }
}

impl Iterator for Dense {
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

impl DoubleEndedIterator for Dense {
    #[inline]
    fn next_back(&mut self) -> Option<u64> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.entry(self.back))
    }
}

impl ExactSizeIterator for Dense {}

impl FusedIterator for Dense {}
