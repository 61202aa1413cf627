use core::fmt;

/// A single Unicode code point, `U+0000` through `U+10FFFF`.
///
/// Unlike [`char`], a `Scalar` may hold a surrogate code point
/// (`U+D800..=U+DFFF`). The foreign path decodes one 16-bit code unit at a
/// time from sources that are not guaranteed to be valid UTF-16, so a lone
/// surrogate must be representable as an element of the scalar view.
/// [`Scalar::to_char`] returns `None` exactly for those values.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Scalar(u32);

impl Scalar {
    /// The highest code point, `U+10FFFF`.
    pub const MAX: Scalar = Scalar(0x0010_FFFF);

    /// Creates a scalar, returning `None` when `value` exceeds
    /// [`Scalar::MAX`].
    #[inline]
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        if value <= Self::MAX.0 {
            Some(Scalar(value))
        } else {
            None
        }
    }

    /// Creates a scalar without the range check.
    ///
    /// Contract: `value <= 0x10FFFF`. Used by the trusting decode paths,
    /// where the caller has already vouched for the input.
    #[inline]
    pub(crate) fn new_unchecked(value: u32) -> Self {
        debug_assert!(value <= Self::MAX.0, "scalar out of range: {value:#x}");
        Scalar(value)
    }

    /// The numeric code point value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Converts to [`char`]; `None` for surrogate code points.
    #[inline]
    #[must_use]
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }

    /// `true` when the scalar is in the ASCII range.
    #[inline]
    #[must_use]
    pub const fn is_ascii(self) -> bool {
        self.0 < 0x80
    }

    /// `true` when the scalar is a surrogate code point.
    #[inline]
    #[must_use]
    pub const fn is_surrogate(self) -> bool {
        self.0 >= 0xD800 && self.0 <= 0xDFFF
    }

    /// Number of bytes in this scalar's UTF-8 encoding (1 through 4).
    ///
    /// Surrogates report 3, matching the three-byte pattern the slow path
    /// uses when it must materialize ill-formed foreign content.
    #[inline]
    #[must_use]
    pub const fn len_utf8(self) -> usize {
        match self.0 {
            0..0x80 => 1,
            0x80..0x800 => 2,
            0x800..0x1_0000 => 3,
            _ => 4,
        }
    }

    /// Number of 16-bit code units in this scalar's UTF-16 encoding.
    #[inline]
    #[must_use]
    pub const fn len_utf16(self) -> usize {
        if self.0 < 0x1_0000 { 1 } else { 2 }
    }
}

impl From<char> for Scalar {
    #[inline]
    fn from(ch: char) -> Self {
        Scalar(ch as u32)
    }
}

/// Formats as `U+` followed by four to six hex digits, e.g. `U+1F600`.
impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}
