//! Surrogate-pair codec for the foreign (16-bit code unit) path.

use crate::Scalar;

/// First code unit of the leading-surrogate range.
pub const LEAD_SURROGATE_MIN: u16 = 0xD800;
/// First code unit of the trailing-surrogate range.
pub const TRAIL_SURROGATE_MIN: u16 = 0xDC00;

/// `true` for code units in `0xD800..=0xDBFF`.
#[inline]
#[must_use]
pub const fn is_leading_surrogate(unit: u16) -> bool {
    unit & 0xFC00 == 0xD800
}

/// `true` for code units in `0xDC00..=0xDFFF`.
#[inline]
#[must_use]
pub const fn is_trailing_surrogate(unit: u16) -> bool {
    unit & 0xFC00 == 0xDC00
}

/// `true` for any surrogate code unit.
#[inline]
#[must_use]
pub const fn is_surrogate(unit: u16) -> bool {
    unit & 0xF800 == 0xD800
}

/// Reconstructs the scalar encoded by a surrogate pair.
///
/// Each unit contributes ten payload bits; the composed value is offset past
/// the Basic Multilingual Plane. The result is always in
/// `0x10000..=0x10FFFF`. Contract: `lead` is a leading surrogate and `trail`
/// a trailing surrogate.
#[inline]
#[must_use]
pub fn decode_surrogate_pair(lead: u16, trail: u16) -> Scalar {
    debug_assert!(
        is_leading_surrogate(lead),
        "not a leading surrogate: {lead:#06x}"
    );
    debug_assert!(
        is_trailing_surrogate(trail),
        "not a trailing surrogate: {trail:#06x}"
    );
    let high = u32::from(lead - LEAD_SURROGATE_MIN);
    let low = u32::from(trail - TRAIL_SURROGATE_MIN);
    Scalar::new_unchecked((high << 10 | low) + 0x1_0000)
}
