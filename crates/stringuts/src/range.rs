//! Closed intervals over strideable bounds, indexed by a sum type with an
//! explicit past-end sentinel.
//!
//! A closed range is never empty: a zero-width range still contains exactly
//! one element (`lower == upper`). Its index is therefore
//! `InRange(bound) | PastEnd` — a tagged variant, never a magic value — so
//! invalid-index contract checks stay exhaustive.

use crate::error::InvertedRangeError;

/// A type whose values can be stepped forward and backward by one, and
/// measured against each other.
///
/// Stepping or measuring outside the type's own range is a contract
/// violation and panics.
pub trait Stride: Copy + Ord {
    /// The next value. Panics on overflow.
    #[must_use]
    fn successor(self) -> Self;

    /// The previous value. Panics on underflow.
    #[must_use]
    fn predecessor(self) -> Self;

    /// The value `n` steps away (negative steps backward). Panics when the
    /// result does not fit the type.
    #[must_use]
    fn advanced_by(self, n: isize) -> Self;

    /// Number of steps from `self` to `other`; negative when `other` is
    /// below `self`.
    #[must_use]
    fn distance_to(self, other: Self) -> isize;
}

macro_rules! impl_stride_for_int {
    ($($ty:ty),* $(,)?) => {$(
        impl Stride for $ty {
            #[inline]
            fn successor(self) -> Self {
                self.checked_add(1).expect("stride successor overflow")
            }

            #[inline]
            fn predecessor(self) -> Self {
                self.checked_sub(1).expect("stride predecessor underflow")
            }

            #[inline]
            #[allow(clippy::cast_lossless)]
            fn advanced_by(self, n: isize) -> Self {
                let target = self as i128 + n as i128;
                <$ty>::try_from(target).expect("stride advance out of range")
            }

            #[inline]
            #[allow(clippy::cast_lossless)]
            fn distance_to(self, other: Self) -> isize {
                isize::try_from(other as i128 - self as i128)
                    .expect("stride distance out of range")
            }
        }
    )*};
}

impl_stride_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// A position within (or one past) a [`ClosedRange`].
///
/// `PastEnd` compares greater than every `InRange` value and equal only to
/// another `PastEnd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ClosedRangeIndex<B> {
    /// A position at a contained bound value.
    InRange(B),
    /// The position one past the upper bound.
    PastEnd,
}

impl<B: Copy> ClosedRangeIndex<B> {
    /// The bound value at this position. Dereferencing the past-end
    /// sentinel is a contract violation.
    #[must_use]
    pub fn value(self) -> B {
        match self {
            ClosedRangeIndex::InRange(b) => b,
            ClosedRangeIndex::PastEnd => panic!("dereferenced the past-end index"),
        }
    }

    /// The bound value, or `None` at the past-end sentinel.
    #[must_use]
    pub fn in_range(self) -> Option<B> {
        match self {
            ClosedRangeIndex::InRange(b) => Some(b),
            ClosedRangeIndex::PastEnd => None,
        }
    }
}

/// An immutable interval containing both of its bounds.
///
/// # Examples
///
/// ```
/// use stringuts::ClosedRange;
///
/// let range = ClosedRange::new(0, 5);
/// assert_eq!(range.count(), 6);
/// assert!(range.contains(5));
/// assert!(!range.contains(6));
/// assert_eq!(range.iter().collect::<Vec<_>>(), [0, 1, 2, 3, 4, 5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClosedRange<B> {
    lower: B,
    upper: B,
}

impl<B: Stride> ClosedRange<B> {
    /// Creates `lower...upper`. Contract: `lower <= upper` — inverted
    /// bounds panic, they are never silently normalized (a closed range
    /// cannot be empty). See [`ClosedRange::try_new`] for the fallible
    /// form.
    #[must_use]
    pub fn new(lower: B, upper: B) -> Self {
        assert!(
            lower <= upper,
            "closed range requires lower bound <= upper bound"
        );
        ClosedRange { lower, upper }
    }

    /// Creates `lower...upper`, rejecting inverted bounds.
    ///
    /// # Errors
    ///
    /// Returns [`InvertedRangeError`] when `lower > upper`.
    pub fn try_new(lower: B, upper: B) -> Result<Self, InvertedRangeError> {
        if lower <= upper {
            Ok(ClosedRange { lower, upper })
        } else {
            Err(InvertedRangeError)
        }
    }

    /// The smallest contained value.
    #[must_use]
    pub fn lower_bound(&self) -> B {
        self.lower
    }

    /// The largest contained value.
    #[must_use]
    pub fn upper_bound(&self) -> B {
        self.upper
    }

    /// `true` when `element` lies between the bounds, inclusive.
    #[must_use]
    pub fn contains(&self, element: B) -> bool {
        element >= self.lower && element <= self.upper
    }

    /// Number of contained values; at least 1.
    #[must_use]
    pub fn count(&self) -> usize {
        usize::try_from(self.lower.distance_to(self.upper) + 1).expect("non-negative by invariant")
    }

    /// The position of the first element.
    #[must_use]
    pub fn start_index(&self) -> ClosedRangeIndex<B> {
        ClosedRangeIndex::InRange(self.lower)
    }

    /// The past-the-end position.
    #[must_use]
    pub fn end_index(&self) -> ClosedRangeIndex<B> {
        ClosedRangeIndex::PastEnd
    }

    /// The element at `i`. Contract: `i` is not the past-end sentinel.
    #[must_use]
    pub fn element(&self, i: ClosedRangeIndex<B>) -> B {
        i.value()
    }

    /// The position after `i`.
    ///
    /// Stepping from the upper bound yields the past-end sentinel; stepping
    /// from the sentinel itself is a contract violation.
    #[must_use]
    pub fn index_after(&self, i: ClosedRangeIndex<B>) -> ClosedRangeIndex<B> {
        match i {
            ClosedRangeIndex::InRange(x) if x == self.upper => ClosedRangeIndex::PastEnd,
            ClosedRangeIndex::InRange(x) => ClosedRangeIndex::InRange(x.successor()),
            ClosedRangeIndex::PastEnd => panic!("cannot advance the past-end index"),
        }
    }

    /// The position before `i`.
    ///
    /// Stepping back from the past-end sentinel yields the upper bound;
    /// stepping back from the lower bound is a contract violation.
    #[must_use]
    pub fn index_before(&self, i: ClosedRangeIndex<B>) -> ClosedRangeIndex<B> {
        match i {
            ClosedRangeIndex::InRange(x) => {
                assert!(x > self.lower, "cannot step before the start index");
                ClosedRangeIndex::InRange(x.predecessor())
            }
            ClosedRangeIndex::PastEnd => ClosedRangeIndex::InRange(self.upper),
        }
    }

    /// The position `n` steps from `i` (negative steps backward).
    ///
    /// Landing exactly one past the upper bound yields the past-end
    /// sentinel; overshooting any further, or undershooting the lower
    /// bound, is a contract violation.
    #[must_use]
    pub fn index_offset_by(&self, i: ClosedRangeIndex<B>, n: isize) -> ClosedRangeIndex<B> {
        match i {
            ClosedRangeIndex::InRange(x) => {
                if n >= 0 {
                    let to_upper = x.distance_to(self.upper);
                    if n <= to_upper {
                        ClosedRangeIndex::InRange(x.advanced_by(n))
                    } else if n == to_upper + 1 {
                        ClosedRangeIndex::PastEnd
                    } else {
                        panic!("index offset past the end of the range")
                    }
                } else {
                    assert!(
                        n >= x.distance_to(self.lower),
                        "index offset before the start of the range"
                    );
                    ClosedRangeIndex::InRange(x.advanced_by(n))
                }
            }
            ClosedRangeIndex::PastEnd if n == 0 => ClosedRangeIndex::PastEnd,
            ClosedRangeIndex::PastEnd if n < 0 => {
                self.index_offset_by(ClosedRangeIndex::InRange(self.upper), n + 1)
            }
            ClosedRangeIndex::PastEnd => panic!("cannot advance the past-end index"),
        }
    }

    /// Number of steps from `from` to `to`; negative when `to` precedes
    /// `from`.
    #[must_use]
    pub fn distance(&self, from: ClosedRangeIndex<B>, to: ClosedRangeIndex<B>) -> isize {
        use ClosedRangeIndex::{InRange, PastEnd};
        match (from, to) {
            (InRange(x), InRange(y)) => x.distance_to(y),
            (InRange(x), PastEnd) => 1 + x.distance_to(self.upper),
            (PastEnd, InRange(y)) => self.upper.distance_to(y) - 1,
            (PastEnd, PastEnd) => 0,
        }
    }

    /// Restricts this range to `limits`.
    ///
    /// When the ranges are disjoint, the result collapses to a single-point
    /// range at the nearer boundary of `limits`.
    #[must_use]
    pub fn clamped(&self, limits: &ClosedRange<B>) -> ClosedRange<B> {
        let lower = if limits.lower > self.lower {
            limits.lower
        } else if self.lower > limits.upper {
            limits.upper
        } else {
            self.lower
        };
        let upper = if limits.upper < self.upper {
            limits.upper
        } else if self.upper < limits.lower {
            limits.lower
        } else {
            self.upper
        };
        ClosedRange { lower, upper }
    }

    /// Iterates the contained values in order.
    #[must_use]
    pub fn iter(&self) -> ClosedRangeIter<B> {
        ClosedRangeIter {
            next: Some(self.lower),
            upper: self.upper,
        }
    }
}

impl<B: Stride> IntoIterator for ClosedRange<B> {
    type Item = B;
    type IntoIter = ClosedRangeIter<B>;

    fn into_iter(self) -> ClosedRangeIter<B> {
        self.iter()
    }
}

impl<B: Stride> IntoIterator for &ClosedRange<B> {
    type Item = B;
    type IntoIter = ClosedRangeIter<B>;

    fn into_iter(self) -> ClosedRangeIter<B> {
        self.iter()
    }
}

/// Iterator over the values of a [`ClosedRange`].
#[derive(Debug, Clone)]
pub struct ClosedRangeIter<B> {
    next: Option<B>,
    upper: B,
}

impl<B: Stride> Iterator for ClosedRangeIter<B> {
    type Item = B;

    fn next(&mut self) -> Option<B> {
        let current = self.next?;
        self.next = if current == self.upper {
            None
        } else {
            Some(current.successor())
        };
        Some(current)
    }
}
