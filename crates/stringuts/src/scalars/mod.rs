//! Unicode-scalar view: a bidirectional, index-addressable sequence of
//! scalars over a [`StringGuts`] value.
//!
//! Why this exists
//! - The guts expose two very different access shapes: contiguous UTF-8
//!   bytes on the fast path, and 16-bit code units decoded one at a time on
//!   the foreign path. The view hides that dichotomy behind one index
//!   algebra: every stepping and element-access operation first splits on
//!   [`StringGuts::is_fast_utf8`] and then runs the matching codec.
//!
//! Indices
//! - A [`ScalarIndex`] is a plain offset into the guts' code-unit space
//!   (bytes when fast, 16-bit units when foreign). `start_index()` is offset
//!   0 and `end_index()` is offset `count()` — in code units, not scalars.
//! - Well-defined access requires the offset to fall on a scalar boundary:
//!   never inside a multi-byte UTF-8 sequence, never on the trailing half of
//!   a surrogate pair. [`UnicodeScalarView::is_on_scalar_boundary`] checks
//!   this; [`UnicodeScalarView::index_at_offset`] turns a raw offset into an
//!   index only when it aligns.
//!
//! Contracts
//! - Stepping past `end_index()` or before `start_index()`, and element
//!   access at `end_index()`, are contract violations and panic. Misaligned
//!   *construction* is not: it yields `None`, a valid "no correspondence"
//!   outcome.

#[cfg(test)]
mod tests;

use crate::{
    Scalar,
    guts::{Repr, StringGuts},
    utf8, utf16,
};

/// A position in a scalar view, counted in code units of the underlying
/// representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScalarIndex {
    offset: usize,
}

impl ScalarIndex {
    /// The raw code-unit offset this index encodes.
    #[inline]
    #[must_use]
    pub const fn offset(self) -> usize {
        self.offset
    }
}

/// A bidirectional sequence of [`Scalar`]s over one [`StringGuts`] value.
///
/// The view owns its guts value; copy-on-write happens at the guts level,
/// so cloning the view is as cheap as cloning the guts.
///
/// # Examples
///
/// ```
/// use stringuts::StringGuts;
///
/// let view = StringGuts::from_str("aé😀z").unicode_scalars();
/// let scalars: Vec<char> = view.iter().map(|s| s.to_char().unwrap()).collect();
/// assert_eq!(scalars, ['a', 'é', '😀', 'z']);
/// ```
#[derive(Debug, Clone)]
pub struct UnicodeScalarView {
    guts: StringGuts,
}

impl UnicodeScalarView {
    /// Wraps a guts value.
    #[must_use]
    pub fn new(guts: StringGuts) -> Self {
        UnicodeScalarView { guts }
    }

    /// The wrapped guts value.
    #[must_use]
    pub fn as_guts(&self) -> &StringGuts {
        &self.guts
    }

    /// Unwraps the view.
    #[must_use]
    pub fn into_guts(self) -> StringGuts {
        self.guts
    }

    /// The position of the first scalar; equals `end_index()` when empty.
    #[must_use]
    pub fn start_index(&self) -> ScalarIndex {
        ScalarIndex { offset: 0 }
    }

    /// The past-the-end position: offset `count()` in code units.
    #[must_use]
    pub fn end_index(&self) -> ScalarIndex {
        ScalarIndex {
            offset: self.guts.count(),
        }
    }

    /// `true` when the view contains no scalars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guts.is_empty()
    }

    /// The position after `i`. Contract: `i != end_index()`.
    #[must_use]
    pub fn index_after(&self, i: ScalarIndex) -> ScalarIndex {
        assert!(i.offset < self.guts.count(), "cannot advance the end index");
        let width = if self.guts.is_fast_utf8() {
            self.guts
                .with_fast_utf8(|bytes| utf8::scalar_len(bytes[i.offset]))
        } else {
            self.foreign().decode_at(i.offset).1
        };
        ScalarIndex {
            offset: i.offset + width,
        }
    }

    /// The position before `i`. Contract: `i != start_index()`.
    #[must_use]
    pub fn index_before(&self, i: ScalarIndex) -> ScalarIndex {
        assert!(i.offset > 0, "cannot step before the start index");
        assert!(i.offset <= self.guts.count(), "index out of bounds");
        let offset = if self.guts.is_fast_utf8() {
            self.guts.with_fast_utf8(|bytes| {
                // Back over at most three continuation bytes to the lead,
                // so the total width never exceeds four.
                let mut j = i.offset - 1;
                while utf8::is_continuation(bytes[j]) {
                    j -= 1;
                }
                debug_assert!(i.offset - j <= 4);
                j
            })
        } else {
            let f = self.foreign();
            let unit = f.code_unit(i.offset - 1);
            if utf16::is_trailing_surrogate(unit)
                && i.offset >= 2
                && utf16::is_leading_surrogate(f.code_unit(i.offset - 2))
            {
                i.offset - 2
            } else {
                i.offset - 1
            }
        };
        ScalarIndex { offset }
    }

    /// The scalar starting at `i`. Contract: `i` is a scalar boundary and
    /// `i != end_index()`.
    #[must_use]
    pub fn scalar_at(&self, i: ScalarIndex) -> Scalar {
        assert!(
            i.offset < self.guts.count(),
            "cannot read the element at the end index"
        );
        if self.guts.is_fast_utf8() {
            self.guts.with_fast_utf8(|bytes| {
                let len = utf8::scalar_len(bytes[i.offset]);
                utf8::decode_scalar(&bytes[i.offset..i.offset + len])
            })
        } else {
            self.foreign().decode_at(i.offset).0
        }
    }

    /// `true` when `i` falls on a scalar boundary: not inside a multi-byte
    /// UTF-8 sequence and not on the trailing half of a surrogate pair.
    /// `start_index()` and `end_index()` are always boundaries.
    #[must_use]
    pub fn is_on_scalar_boundary(&self, i: ScalarIndex) -> bool {
        let count = self.guts.count();
        if i.offset == 0 || i.offset == count {
            return true;
        }
        if i.offset > count {
            return false;
        }
        if self.guts.is_fast_utf8() {
            self.guts
                .with_fast_utf8(|bytes| !utf8::is_continuation(bytes[i.offset]))
        } else {
            let f = self.foreign();
            !(utf16::is_trailing_surrogate(f.code_unit(i.offset))
                && utf16::is_leading_surrogate(f.code_unit(i.offset - 1)))
        }
    }

    /// Converts a raw code-unit offset into an index, or `None` when the
    /// offset does not land on a scalar boundary.
    ///
    /// Misalignment is an expected outcome (e.g. an offset derived from a
    /// sibling view), not an error.
    #[must_use]
    pub fn index_at_offset(&self, offset: usize) -> Option<ScalarIndex> {
        let candidate = ScalarIndex { offset };
        if offset <= self.guts.count() && self.is_on_scalar_boundary(candidate) {
            Some(candidate)
        } else {
            None
        }
    }

    /// Iterates the scalars front to back; reversible via
    /// [`DoubleEndedIterator`].
    #[must_use]
    pub fn iter(&self) -> Scalars<'_> {
        Scalars {
            view: self,
            front: self.start_index(),
            back: self.end_index(),
        }
    }

    /// Appends the contents of `other`, delegating to
    /// [`StringGuts::append`]. Indices previously derived from this view
    /// other than `start_index()` are invalidated.
    pub fn append(&mut self, other: &UnicodeScalarView) {
        self.guts.append(&other.guts);
    }

    /// Appends one scalar, delegating to [`StringGuts::push_scalar`].
    pub fn push(&mut self, scalar: Scalar) {
        self.guts.push_scalar(scalar);
    }

    /// Delegates to [`StringGuts::reserve`].
    pub fn reserve(&mut self, capacity: usize) {
        self.guts.reserve(capacity);
    }

    /// Replacing an arbitrary subrange is not supported by this view; it is
    /// the responsibility of an external collaborator. Always panics.
    pub fn replace_subrange(&mut self, _range: core::ops::Range<ScalarIndex>, _with: &Self) {
        unimplemented!("replace_subrange is not supported by the Unicode scalar view")
    }

    fn foreign(&self) -> &crate::guts::ForeignBuf {
        match &self.guts.repr {
            Repr::Foreign(f) => f,
            Repr::Small(_) | Repr::Native(_) => {
                unreachable!("foreign path taken on a fast representation")
            }
        }
    }
}

impl<'a> IntoIterator for &'a UnicodeScalarView {
    type Item = Scalar;
    type IntoIter = Scalars<'a>;

    fn into_iter(self) -> Scalars<'a> {
        self.iter()
    }
}

/// Double-ended iterator over a view's scalars.
#[derive(Debug, Clone)]
pub struct Scalars<'a> {
    view: &'a UnicodeScalarView,
    front: ScalarIndex,
    back: ScalarIndex,
}

impl Iterator for Scalars<'_> {
    type Item = Scalar;

    fn next(&mut self) -> Option<Scalar> {
        if self.front == self.back {
            return None;
        }
        let scalar = self.view.scalar_at(self.front);
        self.front = self.view.index_after(self.front);
        Some(scalar)
    }
}

impl DoubleEndedIterator for Scalars<'_> {
    fn next_back(&mut self) -> Option<Scalar> {
        if self.front == self.back {
            return None;
        }
        self.back = self.view.index_before(self.back);
        Some(self.view.scalar_at(self.back))
    }
}
