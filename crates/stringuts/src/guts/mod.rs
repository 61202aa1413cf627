//! The string representation ("guts"): a tagged union over inline, native,
//! and foreign storage.
//!
//! Why a tagged union
//! - The fast-path check ([`StringGuts::is_fast_utf8`]) must be a single tag
//!   comparison, not a virtual call. Every hot operation first splits on
//!   fast vs. foreign and only then touches bytes or code units.
//!
//! Representations
//! - **Small**: up to [`SMALL_CAP`] bytes inline, no allocation.
//! - **Native**: a heap buffer behind a reference-counted handle,
//!   copy-on-write. In-place mutation requires exclusive ownership
//!   (`strong_count == 1`); shared bytes are never written.
//! - **Foreign**: an externally-owned source of 16-bit code units, not
//!   guaranteed to be UTF-8 or even valid UTF-16, accessed one unit at a
//!   time — unless it volunteers a contiguous UTF-8 view, which promotes it
//!   onto the fast path.
//!
//! Invariants
//! - `count` is the number of code units in the chosen encoding: bytes for
//!   fast representations, 16-bit units for slow foreign ones.
//! - `is_known_ascii` may be conservatively `false`, never wrongly `true`.
//! - Small and native bytes are intended to be valid UTF-8; the checked
//!   constructors enforce it, the trusting ones inherit the caller's
//!   contract.

mod foreign;
mod native;
mod small;

use alloc::{rc::Rc, vec::Vec};
use core::fmt;

use bstr::BStr;

pub use foreign::{ForeignSource, Utf16Buffer};
pub use small::SMALL_CAP;

pub(crate) use foreign::ForeignBuf;
pub(crate) use native::NativeBuf;
pub(crate) use small::SmallBuf;

use crate::{Scalar, error::Utf8Error, scalars::UnicodeScalarView, utf8};

/// A compact, polymorphic string representation.
///
/// Copying is cheap: inline bytes are memcpy'd, heap and foreign storage
/// share a reference-counted handle. Mutation (`reserve`, `grow`, `append`)
/// transitions or reallocates storage rather than writing shared bytes in
/// place.
///
/// # Examples
///
/// ```
/// use stringuts::StringGuts;
///
/// let mut guts = StringGuts::from_str("a");
/// assert!(guts.is_fast_utf8() && !guts.has_native_storage());
///
/// guts.append(&StringGuts::from_str("é😀z"));
/// assert_eq!(guts.utf8_len(), 1 + 2 + 4 + 1);
/// ```
#[derive(Clone)]
pub struct StringGuts {
    pub(crate) repr: Repr,
}

#[derive(Clone)]
pub(crate) enum Repr {
    Small(SmallBuf),
    Native(NativeBuf),
    Foreign(ForeignBuf),
}

// Two-word payload plus tag on 64-bit targets.
#[cfg(all(debug_assertions, target_pointer_width = "64"))]
const _: () = assert!(core::mem::size_of::<StringGuts>() <= 24);

impl StringGuts {
    /// An empty string in the inline representation.
    #[must_use]
    pub const fn new() -> Self {
        StringGuts {
            repr: Repr::Small(SmallBuf::empty()),
        }
    }

    /// Builds from a string slice: inline when it fits [`SMALL_CAP`], native
    /// otherwise.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        let bytes = s.as_bytes();
        let repr = match SmallBuf::try_from_bytes(bytes) {
            Some(small) => Repr::Small(small),
            None => Repr::Native(NativeBuf::from_bytes(bytes)),
        };
        StringGuts { repr }
    }

    /// Builds from owned bytes after validating them as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`Utf8Error`] when `bytes` is not valid UTF-8 (including
    /// overlong encodings and surrogate-range scalars); the buffer is
    /// dropped in that case.
    pub fn from_utf8(bytes: Vec<u8>) -> Result<Self, Utf8Error> {
        utf8::validate(&bytes)?;
        let repr = match SmallBuf::try_from_bytes(&bytes) {
            Some(small) => Repr::Small(small),
            None => Repr::Native(NativeBuf::from_vec(bytes)),
        };
        Ok(StringGuts { repr })
    }

    /// Wraps a foreign source without copying or validating it.
    #[must_use]
    pub fn from_foreign(source: Rc<dyn ForeignSource>) -> Self {
        StringGuts {
            repr: Repr::Foreign(ForeignBuf::new(source)),
        }
    }

    /// Number of code units in the chosen encoding: bytes for fast
    /// representations, 16-bit units for slow foreign ones.
    #[must_use]
    pub fn count(&self) -> usize {
        match &self.repr {
            Repr::Small(s) => s.len(),
            Repr::Native(n) => n.len(),
            Repr::Foreign(f) => f.count(),
        }
    }

    /// `true` when `count() == 0`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// `true` only if every code unit is ASCII. Conservative: may be `false`
    /// for all-ASCII foreign content.
    #[must_use]
    pub fn is_known_ascii(&self) -> bool {
        match &self.repr {
            Repr::Small(s) => s.is_known_ascii(),
            Repr::Native(n) => n.is_known_ascii(),
            Repr::Foreign(_) => false,
        }
    }

    /// `true` when the contents live in a natively-owned heap buffer.
    #[must_use]
    pub fn has_native_storage(&self) -> bool {
        matches!(self.repr, Repr::Native(_))
    }

    /// `true` when contiguous, directly-addressable UTF-8 bytes are
    /// available for the full extent.
    #[must_use]
    pub fn is_fast_utf8(&self) -> bool {
        match &self.repr {
            Repr::Small(_) | Repr::Native(_) => true,
            Repr::Foreign(f) => f.fast_utf8().is_some(),
        }
    }

    /// The negation of [`StringGuts::is_fast_utf8`]; selects the slow
    /// per-code-unit path.
    #[must_use]
    pub fn is_foreign(&self) -> bool {
        !self.is_fast_utf8()
    }

    /// Runs `action` over the contiguous UTF-8 bytes.
    ///
    /// The slice is valid only for the duration of the call; the borrow
    /// keeps the underlying buffer alive and immutable for exactly that
    /// scope. Contract: `is_fast_utf8()` — panics on a slow foreign
    /// representation (see [`StringGuts::with_utf8_if_available`]).
    pub fn with_fast_utf8<R>(&self, action: impl FnOnce(&[u8]) -> R) -> R {
        match &self.repr {
            Repr::Small(s) => action(s.as_bytes()),
            Repr::Native(n) => action(n.as_bytes()),
            Repr::Foreign(f) => match f.fast_utf8() {
                Some(view) => action(view),
                None => panic!("with_fast_utf8 requires a contiguous UTF-8 representation"),
            },
        }
    }

    /// Like [`StringGuts::with_fast_utf8`], but returns `None` instead of
    /// panicking when no contiguous UTF-8 view exists.
    pub fn with_utf8_if_available<R>(&self, action: impl FnOnce(&[u8]) -> R) -> Option<R> {
        if self.is_fast_utf8() {
            Some(self.with_fast_utf8(action))
        } else {
            None
        }
    }

    /// Runs `action` over a NUL-terminated copy of the contents.
    ///
    /// Fast representations are copied in bulk; slow foreign ones are
    /// materialized through the per-code-unit transcode path first.
    pub fn with_c_string<R>(&self, action: impl FnOnce(&[u8]) -> R) -> R {
        let mut bytes = Vec::with_capacity(self.utf8_len() + 1);
        match self.with_utf8_if_available(|view| bytes.extend_from_slice(view)) {
            Some(()) => {}
            None => {
                let Repr::Foreign(f) = &self.repr else {
                    unreachable!()
                };
                let mut tmp = [0u8; 4];
                for scalar in f.scalars() {
                    bytes.extend_from_slice(utf8::encode_scalar(scalar, &mut tmp));
                }
            }
        }
        bytes.push(0);
        action(&bytes)
    }

    /// Total UTF-8 byte length of the contents. O(1) on the fast path,
    /// O(n) for slow foreign sources.
    #[must_use]
    pub fn utf8_len(&self) -> usize {
        match &self.repr {
            Repr::Small(s) => s.len(),
            Repr::Native(n) => n.len(),
            Repr::Foreign(f) => f.utf8_len(),
        }
    }

    /// Ensures room for `capacity` bytes of UTF-8.
    ///
    /// No-op when the current representation already provides it: inline
    /// capacity for small strings, spare capacity on a uniquely-owned
    /// native buffer. Anything else transitions through
    /// [`StringGuts::grow`].
    pub fn reserve(&mut self, capacity: usize) {
        let sufficient = match &self.repr {
            Repr::Small(_) => capacity <= SMALL_CAP,
            Repr::Native(n) => n.is_unique() && n.capacity() >= capacity,
            Repr::Foreign(_) => false,
        };
        if !sufficient {
            self.grow(capacity);
        }
    }

    /// Reallocates into a uniquely-owned native buffer with capacity for at
    /// least `capacity` bytes.
    ///
    /// Fast-path bytes are copied directly. Slow foreign sources are
    /// materialized through the per-unit decode path — the one place that
    /// cost is paid, so the fast path carries no overhead.
    pub fn grow(&mut self, capacity: usize) {
        let total = self.utf8_len();
        let capacity = capacity.max(total);
        let bytes = match &mut self.repr {
            Repr::Native(n) => {
                n.make_unique_with_capacity(capacity);
                return;
            }
            Repr::Small(s) => {
                let mut bytes = Vec::with_capacity(capacity);
                bytes.extend_from_slice(s.as_bytes());
                bytes
            }
            Repr::Foreign(f) => {
                let mut bytes = Vec::with_capacity(capacity);
                match f.fast_utf8() {
                    Some(view) => bytes.extend_from_slice(view),
                    None => {
                        let mut tmp = [0u8; 4];
                        for scalar in f.scalars() {
                            bytes.extend_from_slice(utf8::encode_scalar(scalar, &mut tmp));
                        }
                    }
                }
                bytes
            }
        };
        self.repr = Repr::Native(NativeBuf::from_vec(bytes));
    }

    /// Concatenates `other` onto `self`.
    ///
    /// In order: (a) when neither side has native storage and the combined
    /// UTF-8 length fits [`SMALL_CAP`], pack both into a fresh inline
    /// representation; (b) otherwise ensure a uniquely-owned native buffer
    /// sized to the exact combined length; (c) append `other`'s bytes in
    /// bulk when it is fast, per code unit when it is foreign.
    pub fn append(&mut self, other: &StringGuts) {
        let total = self.utf8_len() + other.utf8_len();

        if !self.has_native_storage() && !other.has_native_storage() && total <= SMALL_CAP {
            let mut packed = SmallBuf::empty();
            Self::pack_into_small(self, &mut packed);
            Self::pack_into_small(other, &mut packed);
            self.repr = Repr::Small(packed);
            return;
        }

        match &self.repr {
            Repr::Native(n) if n.is_unique() && n.capacity() >= total => {}
            _ => self.grow(total),
        }
        let Repr::Native(native) = &mut self.repr else {
            unreachable!()
        };

        if other.is_fast_utf8() {
            other.with_fast_utf8(|bytes| native.push_bytes(bytes));
        } else {
            let Repr::Foreign(f) = &other.repr else {
                unreachable!()
            };
            let mut tmp = [0u8; 4];
            for scalar in f.scalars() {
                native.push_bytes(utf8::encode_scalar(scalar, &mut tmp));
            }
        }
    }

    /// Appends a single scalar, staying inline while it fits.
    pub fn push_scalar(&mut self, scalar: Scalar) {
        let mut tmp = [0u8; 4];
        let total = self.utf8_len() + scalar.len_utf8();

        if let Repr::Small(small) = &mut self.repr {
            if total <= SMALL_CAP {
                small.push_bytes(utf8::encode_scalar(scalar, &mut tmp));
                return;
            }
        }

        match &self.repr {
            Repr::Native(n) if n.is_unique() && n.capacity() >= total => {}
            _ => self.grow(total),
        }
        let Repr::Native(native) = &mut self.repr else {
            unreachable!()
        };
        native.push_bytes(utf8::encode_scalar(scalar, &mut tmp));
    }

    /// Copies the full UTF-8 contents into `dest`.
    ///
    /// Returns the byte count written, or `None` when the encoded length
    /// exceeds `dest` — the fast path checks capacity before writing
    /// anything, the foreign path stops at exhaustion (leaving `dest`
    /// contents unspecified) rather than overrunning.
    pub fn copy_utf8(&self, dest: &mut [u8]) -> Option<usize> {
        if let Some(result) = self.with_utf8_if_available(|bytes| {
            if bytes.len() > dest.len() {
                None
            } else {
                dest[..bytes.len()].copy_from_slice(bytes);
                Some(bytes.len())
            }
        }) {
            return result;
        }

        let Repr::Foreign(f) = &self.repr else {
            unreachable!()
        };
        let mut pos = 0;
        let mut tmp = [0u8; 4];
        for scalar in f.scalars() {
            let encoded = utf8::encode_scalar(scalar, &mut tmp);
            if pos + encoded.len() > dest.len() {
                return None;
            }
            dest[pos..pos + encoded.len()].copy_from_slice(encoded);
            pos += encoded.len();
        }
        Some(pos)
    }

    /// Wraps this value in its Unicode-scalar view.
    #[must_use]
    pub fn unicode_scalars(self) -> UnicodeScalarView {
        UnicodeScalarView::new(self)
    }

    fn pack_into_small(guts: &StringGuts, packed: &mut SmallBuf) {
        match guts.with_utf8_if_available(|bytes| packed.push_bytes(bytes)) {
            Some(()) => {}
            None => {
                let Repr::Foreign(f) = &guts.repr else {
                    unreachable!()
                };
                let mut tmp = [0u8; 4];
                for scalar in f.scalars() {
                    packed.push_bytes(utf8::encode_scalar(scalar, &mut tmp));
                }
            }
        }
    }
}

impl Default for StringGuts {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for StringGuts {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl fmt::Debug for StringGuts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Small(s) => write!(f, "Small({:?})", BStr::new(s.as_bytes())),
            Repr::Native(n) => write!(f, "Native({:?})", BStr::new(n.as_bytes())),
            Repr::Foreign(fb) => match fb.fast_utf8() {
                Some(view) => write!(f, "Foreign({:?})", BStr::new(view)),
                None => f
                    .debug_struct("Foreign")
                    .field("code_units", &fb.code_unit_count())
                    .finish(),
            },
        }
    }
}
