//! Foreign (externally-owned) storage, addressed as 16-bit code units.

use alloc::{rc::Rc, vec::Vec};

use crate::{Scalar, utf16};

/// An externally-owned string source exposing 16-bit code units.
///
/// The core never assumes a foreign source holds valid UTF-16 — unpaired
/// surrogates are decoded defensively as lone scalars. A source that can
/// also expose its full extent as contiguous UTF-8 bytes returns them from
/// [`ForeignSource::fast_utf8`], which promotes it onto the fast path.
pub trait ForeignSource {
    /// Number of 16-bit code units.
    fn code_unit_count(&self) -> usize;

    /// The code unit at `index`. Contract: `index < code_unit_count()`.
    fn code_unit(&self, index: usize) -> u16;

    /// Contiguous UTF-8 bytes for the full extent, when the source can
    /// provide them without transcoding. Default: unavailable.
    fn fast_utf8(&self) -> Option<&[u8]> {
        None
    }
}

/// The simplest foreign source: an owned buffer of 16-bit code units.
///
/// Useful for interoperating with UTF-16-shaped data and as the reference
/// implementation of [`ForeignSource`] in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utf16Buffer(pub Vec<u16>);

impl ForeignSource for Utf16Buffer {
    fn code_unit_count(&self) -> usize {
        self.0.len()
    }

    fn code_unit(&self, index: usize) -> u16 {
        self.0[index]
    }
}

/// A guts payload wrapping a shared foreign source.
#[derive(Clone)]
pub(crate) struct ForeignBuf {
    source: Rc<dyn ForeignSource>,
}

impl ForeignBuf {
    pub(crate) fn new(source: Rc<dyn ForeignSource>) -> Self {
        ForeignBuf { source }
    }

    #[inline]
    pub(crate) fn fast_utf8(&self) -> Option<&[u8]> {
        self.source.fast_utf8()
    }

    /// Count in the representation's chosen encoding: UTF-8 bytes when the
    /// source exposes a fast view, UTF-16 code units otherwise.
    #[inline]
    pub(crate) fn count(&self) -> usize {
        match self.source.fast_utf8() {
            Some(view) => view.len(),
            None => self.source.code_unit_count(),
        }
    }

    #[inline]
    pub(crate) fn code_unit_count(&self) -> usize {
        self.source.code_unit_count()
    }

    #[inline]
    pub(crate) fn code_unit(&self, index: usize) -> u16 {
        self.source.code_unit(index)
    }

    /// Decodes the scalar starting at code-unit `offset`, returning it with
    /// the number of code units consumed (1 or 2).
    ///
    /// Defensive: a leading surrogate pairs with the following unit only if
    /// that unit exists and is a trailing surrogate; anything else decodes
    /// as a lone scalar of width 1.
    pub(crate) fn decode_at(&self, offset: usize) -> (Scalar, usize) {
        let unit = self.code_unit(offset);
        if utf16::is_leading_surrogate(unit) && offset + 1 < self.code_unit_count() {
            let next = self.code_unit(offset + 1);
            if utf16::is_trailing_surrogate(next) {
                return (utf16::decode_surrogate_pair(unit, next), 2);
            }
        }
        (Scalar::new_unchecked(u32::from(unit)), 1)
    }

    /// Iterates the source as scalars, pairing surrogates defensively.
    pub(crate) fn scalars(&self) -> ForeignScalars<'_> {
        ForeignScalars {
            buf: self,
            offset: 0,
        }
    }

    /// Total UTF-8 byte length of the materialized contents. O(n).
    pub(crate) fn utf8_len(&self) -> usize {
        match self.fast_utf8() {
            Some(view) => view.len(),
            None => self.scalars().map(Scalar::len_utf8).sum(),
        }
    }
}

pub(crate) struct ForeignScalars<'a> {
    buf: &'a ForeignBuf,
    offset: usize,
}

impl Iterator for ForeignScalars<'_> {
    type Item = Scalar;

    fn next(&mut self) -> Option<Scalar> {
        if self.offset >= self.buf.code_unit_count() {
            return None;
        }
        let (scalar, width) = self.buf.decode_at(self.offset);
        self.offset += width;
        Some(scalar)
    }
}
